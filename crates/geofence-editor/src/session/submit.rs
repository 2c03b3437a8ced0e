//! Submission gating and payload construction.

use thiserror::Error;
use uuid::Uuid;

use geofence_core::{GeofenceDraft, ShapeError};

use super::EditorSession;

/// Why a submission was rejected. Rejections are no-ops: no external
/// call is made and the session is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The name field is empty or whitespace-only.
    #[error("name is required")]
    MissingName,

    /// Editing an existing geofence with nothing changed.
    #[error("no changes to save")]
    NoChanges,

    /// Creating a geofence with neither a point nor a boundary.
    #[error("a location or boundary is required")]
    MissingLocation,

    /// The drawn boundary is not complete enough to persist.
    #[error(transparent)]
    IncompleteShape(#[from] ShapeError),
}

/// A validated submission, ready to hand to the persistence collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Create a new geofence.
    Create(GeofenceDraft),
    /// Update an existing geofence.
    Update {
        /// Id of the geofence being updated.
        id: Uuid,
        /// The updated fields.
        draft: GeofenceDraft,
    },
}

impl EditorSession {
    /// Validates the session and builds the create/update payload.
    ///
    /// Create flow: either a drawn boundary or a bare selected point
    /// permits submission; a point-only draft carries `shape: None` and
    /// the point as its anchor. Edit flow: any detected change versus
    /// the opening snapshot permits submission.
    pub fn prepare_submit(&self) -> Result<SubmitAction, SubmitError> {
        if self.name.trim().is_empty() {
            tracing::debug!("submission rejected: empty name");
            return Err(SubmitError::MissingName);
        }
        if let Some(shape) = &self.current_shape {
            shape.validate()?;
        }

        match &self.editing {
            Some(target) => {
                if !self.is_dirty() {
                    tracing::debug!("submission rejected: no changes");
                    return Err(SubmitError::NoChanges);
                }
                Ok(SubmitAction::Update {
                    id: target.id,
                    draft: self.draft(),
                })
            }
            None => {
                if self.current_shape.is_none() && self.selected_point.is_none() {
                    tracing::debug!("submission rejected: no location");
                    return Err(SubmitError::MissingLocation);
                }
                Ok(SubmitAction::Create(self.draft()))
            }
        }
    }

    fn draft(&self) -> GeofenceDraft {
        let description = self.description.trim();
        GeofenceDraft {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            is_active: self.is_active,
            threshold_enabled: self.threshold_enabled,
            threshold_distance_meters: self.threshold_distance_meters,
            team_id: self.team_id,
            shape: self.current_shape.clone(),
            anchor: if self.current_shape.is_some() {
                None
            } else {
                self.selected_point
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EditorEvent;
    use geofence_core::{Coordinate, Shape};

    #[test]
    fn create_requires_a_name() {
        let mut session = EditorSession::new();
        session.apply(EditorEvent::MarkerDragged(Coordinate::new(40.0, -74.0)));
        assert_eq!(session.prepare_submit(), Err(SubmitError::MissingName));

        session.apply(EditorEvent::NameChanged("   ".to_string()));
        assert_eq!(session.prepare_submit(), Err(SubmitError::MissingName));
    }

    #[test]
    fn create_requires_a_point_or_shape() {
        let mut session = EditorSession::new();
        session.apply(EditorEvent::NameChanged("Depot".to_string()));
        assert_eq!(session.prepare_submit(), Err(SubmitError::MissingLocation));
    }

    #[test]
    fn point_only_create_yields_an_anchored_draft() {
        let mut session = EditorSession::new();
        session.apply(EditorEvent::NameChanged("Depot".to_string()));
        session.apply(EditorEvent::MarkerDragged(Coordinate::new(40.0, -74.0)));

        let Ok(SubmitAction::Create(draft)) = session.prepare_submit() else {
            panic!("expected create action");
        };
        assert_eq!(draft.shape, None);
        assert_eq!(draft.anchor, Some(Coordinate::new(40.0, -74.0)));
        assert_eq!(draft.name, "Depot");
    }

    #[test]
    fn incomplete_shape_blocks_submission() {
        let mut session = EditorSession::new();
        session.apply(EditorEvent::NameChanged("Depot".to_string()));
        session.apply(EditorEvent::ShapeDrawn(Shape::Polygon {
            ring: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
        }));

        assert_eq!(
            session.prepare_submit(),
            Err(SubmitError::IncompleteShape(
                ShapeError::PolygonRingTooShort { actual: 2 }
            ))
        );
    }

    #[test]
    fn shape_create_carries_no_anchor() {
        let mut session = EditorSession::new();
        session.apply(EditorEvent::NameChanged("Depot".to_string()));
        session.apply(EditorEvent::ShapeDrawn(Shape::Circle {
            center: Coordinate::new(40.0, -74.0),
            radius_meters: 50.0,
        }));

        let Ok(SubmitAction::Create(draft)) = session.prepare_submit() else {
            panic!("expected create action");
        };
        assert!(draft.shape.is_some());
        assert_eq!(draft.anchor, None);
    }
}
