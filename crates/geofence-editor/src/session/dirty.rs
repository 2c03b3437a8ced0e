//! Change detection versus the opening snapshot.

use geofence_core::Shape;

use super::{EditorSession, COORD_EPSILON_DEGREES};

/// Radius/threshold comparison tolerance in meters.
const METERS_EPSILON: f64 = 1e-6;

impl EditorSession {
    /// Whether the session differs from its last-saved state, gating the
    /// save action.
    ///
    /// When editing, every mutable field is compared against the opening
    /// snapshot; coordinates within ~1e-6 degrees count as unchanged to
    /// tolerate drag/parse round-trip noise, and a shape-variant change
    /// is always dirty. When creating, the session is dirty as soon as a
    /// name, description, point, or shape exists.
    pub fn is_dirty(&self) -> bool {
        let Some(target) = &self.editing else {
            return !self.name.is_empty()
                || !self.description.is_empty()
                || self.selected_point.is_some()
                || self.current_shape.is_some();
        };

        let snapshot = &target.snapshot;
        self.name != snapshot.name
            || self.description != snapshot.description
            || self.is_active != snapshot.is_active
            || self.threshold_enabled != snapshot.threshold_enabled
            || !option_meters_eq(
                self.threshold_distance_meters,
                snapshot.threshold_distance_meters,
            )
            || self.team_id != snapshot.team_id
            || !option_shapes_eq(self.current_shape.as_ref(), snapshot.shape.as_ref())
    }
}

fn option_meters_eq(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => (a - b).abs() <= METERS_EPSILON,
        (None, None) => true,
        _ => false,
    }
}

fn option_shapes_eq(a: Option<&Shape>, b: Option<&Shape>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => shapes_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn shapes_eq(a: &Shape, b: &Shape) -> bool {
    // A variant change is always a change.
    if a.kind() != b.kind() {
        return false;
    }
    match (a, b) {
        (
            Shape::Circle {
                center: ca,
                radius_meters: ra,
            },
            Shape::Circle {
                center: cb,
                radius_meters: rb,
            },
        ) => ca.approx_eq(*cb, COORD_EPSILON_DEGREES) && (ra - rb).abs() <= METERS_EPSILON,
        (Shape::Polygon { ring: a }, Shape::Polygon { ring: b })
        | (Shape::Rectangle { ring: a }, Shape::Rectangle { ring: b }) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(pa, pb)| pa.approx_eq(*pb, COORD_EPSILON_DEGREES))
        }
        _ => false,
    }
}
