//! Editor session state for interactive geofence shape editing.
//!
//! One [`EditorSession`] owns the single canonical shape under edit and
//! keeps three interactive inputs consistent with it: freehand draw/edit
//! events, a draggable position marker, and manual latitude/longitude
//! text fields. All mutations are synchronous reactions to discrete
//! events; there is no shared state between sessions.
//!
//! This module is split into submodules:
//! - `events`: the event enum and per-event transition methods
//! - `dirty`: change detection versus the opening snapshot
//! - `submit`: submission gating and the persistence payload

mod dirty;
mod events;
mod submit;

pub use events::EditorEvent;
pub use submit::{SubmitAction, SubmitError};

use uuid::Uuid;

use geofence_core::{Coordinate, Geofence, Shape};

/// Coordinate comparison tolerance in degrees, absorbing float noise
/// from drag and text-parse round-trips.
pub(crate) const COORD_EPSILON_DEGREES: f64 = 1e-6;

/// Classification of the session's editing progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No shape and no selected point yet.
    Empty,
    /// A bare coordinate exists but no boundary has been drawn.
    PointSelected,
    /// A complete boundary exists.
    ShapeDrawn,
}

/// The fields captured when an existing geofence opens for editing,
/// used solely to compute the dirty flag.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) is_active: bool,
    pub(crate) threshold_enabled: bool,
    pub(crate) threshold_distance_meters: Option<f64>,
    pub(crate) team_id: Option<Uuid>,
    pub(crate) shape: Option<Shape>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EditTarget {
    pub(crate) id: Uuid,
    pub(crate) snapshot: Snapshot,
}

/// Transient editing state for one open geofence editor.
///
/// Created when the editor opens and discarded when it closes; on submit
/// it yields a [`geofence_core::GeofenceDraft`] for the persistence
/// collaborator and is then discarded as well.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) is_active: bool,
    pub(crate) threshold_enabled: bool,
    pub(crate) threshold_distance_meters: Option<f64>,
    pub(crate) team_id: Option<Uuid>,
    pub(crate) current_shape: Option<Shape>,
    pub(crate) selected_point: Option<Coordinate>,
    pub(crate) latitude_input: String,
    pub(crate) longitude_input: String,
    pub(crate) radius_input: String,
    pub(crate) editing: Option<EditTarget>,
}

impl EditorSession {
    /// Opens an empty session for creating a new geofence.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_active: true,
            threshold_enabled: false,
            threshold_distance_meters: None,
            team_id: None,
            current_shape: None,
            selected_point: None,
            latitude_input: String::new(),
            longitude_input: String::new(),
            radius_input: String::new(),
            editing: None,
        }
    }

    /// Opens a session for editing an existing geofence, capturing the
    /// snapshot the dirty flag compares against.
    pub fn for_geofence(fence: &Geofence) -> Self {
        let mut session = Self::new();
        session.name = fence.name.clone();
        session.description = fence.description.clone().unwrap_or_default();
        session.is_active = fence.is_active;
        session.threshold_enabled = fence.threshold_enabled.unwrap_or(false);
        session.threshold_distance_meters = fence.threshold_distance_meters;
        session.team_id = fence.team_id;
        session.install_shape(fence.shape.clone());

        session.editing = Some(EditTarget {
            id: fence.id,
            snapshot: Snapshot {
                name: session.name.clone(),
                description: session.description.clone(),
                is_active: session.is_active,
                threshold_enabled: session.threshold_enabled,
                threshold_distance_meters: session.threshold_distance_meters,
                team_id: session.team_id,
                shape: Some(fence.shape.clone()),
            },
        });
        session
    }

    /// The session's editing progress.
    ///
    /// A selected point is still tracked while a shape exists (kept as
    /// the shape's representative point), but the shape takes precedence
    /// for classification.
    pub fn state(&self) -> EditorState {
        if self.current_shape.is_some() {
            EditorState::ShapeDrawn
        } else if self.selected_point.is_some() {
            EditorState::PointSelected
        } else {
            EditorState::Empty
        }
    }

    /// The canonical shape under edit, if any.
    pub fn current_shape(&self) -> Option<&Shape> {
        self.current_shape.as_ref()
    }

    /// The last manually-set or dragged point.
    pub fn selected_point(&self) -> Option<Coordinate> {
        self.selected_point
    }

    /// Current name field value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current description field value.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current active-flag value.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Text shown in the latitude field, including held invalid input.
    pub fn latitude_input(&self) -> &str {
        &self.latitude_input
    }

    /// Text shown in the longitude field, including held invalid input.
    pub fn longitude_input(&self) -> &str {
        &self.longitude_input
    }

    /// Text shown in the radius field, including held invalid input.
    pub fn radius_input(&self) -> &str {
        &self.radius_input
    }

    /// Whether this session edits an existing geofence.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
