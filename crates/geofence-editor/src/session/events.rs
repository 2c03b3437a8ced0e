//! Editor events and their transition rules.
//!
//! Every interaction with the editor arrives as one [`EditorEvent`] and
//! is applied synchronously. Invalid input (out-of-range coordinates,
//! unparsable text) is held in the text fields without mutating the
//! selected point or the shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use geofence_core::{Coordinate, Shape};

use super::EditorSession;

/// A discrete interaction with the editor. Events are plain data so a
/// caller can log or replay an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Freehand creation of a new boundary; replaces any previous shape.
    ShapeDrawn(Shape),
    /// Freehand drag of an existing boundary's vertices/radius handle;
    /// the recomputed shape replaces the current one.
    ShapeEdited(Shape),
    /// Deletion of the drawn boundary. The selected point survives.
    ShapeDeleted,
    /// Direct drag of the representative-point marker.
    MarkerDragged(Coordinate),
    /// Manual edit of the latitude/longitude text fields.
    CoordinatesTyped {
        /// Raw latitude field text.
        latitude: String,
        /// Raw longitude field text.
        longitude: String,
    },
    /// Manual edit of the circle radius text field.
    RadiusTyped(String),
    /// Name field change.
    NameChanged(String),
    /// Description field change.
    DescriptionChanged(String),
    /// Active-flag toggle.
    ActiveChanged(bool),
    /// Proximity-threshold change.
    ThresholdChanged {
        /// Whether alerting is enabled.
        enabled: bool,
        /// Alert distance in meters.
        distance_meters: Option<f64>,
    },
    /// Team assignment change.
    TeamChanged(Option<Uuid>),
}

impl EditorSession {
    /// Applies one event to the session.
    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::ShapeDrawn(shape) | EditorEvent::ShapeEdited(shape) => {
                self.install_shape(shape);
            }
            EditorEvent::ShapeDeleted => self.delete_shape(),
            EditorEvent::MarkerDragged(point) => self.drag_marker(point),
            EditorEvent::CoordinatesTyped {
                latitude,
                longitude,
            } => self.type_coordinates(latitude, longitude),
            EditorEvent::RadiusTyped(text) => self.type_radius(text),
            EditorEvent::NameChanged(value) => self.name = value,
            EditorEvent::DescriptionChanged(value) => self.description = value,
            EditorEvent::ActiveChanged(value) => self.is_active = value,
            EditorEvent::ThresholdChanged {
                enabled,
                distance_meters,
            } => {
                self.threshold_enabled = enabled;
                self.threshold_distance_meters = distance_meters;
            }
            EditorEvent::TeamChanged(team_id) => self.team_id = team_id,
        }
    }

    /// Installs a drawn or edited shape as the single tracked boundary
    /// and synchronizes the marker and text fields from it.
    pub(crate) fn install_shape(&mut self, shape: Shape) {
        if let Some(point) = shape.representative_point() {
            self.selected_point = Some(point);
            self.sync_coordinate_inputs(point);
        }
        if let Shape::Circle { radius_meters, .. } = &shape {
            self.radius_input = format_number(*radius_meters);
        } else {
            self.radius_input.clear();
        }
        self.current_shape = Some(shape);
    }

    fn delete_shape(&mut self) {
        self.current_shape = None;
        self.radius_input.clear();
    }

    /// Moves the representative point to `point`: a circle follows with
    /// its center, a rectangle translates rigidly, and a polygon has its
    /// first vertex replaced.
    fn drag_marker(&mut self, point: Coordinate) {
        match &mut self.current_shape {
            Some(Shape::Circle { center, .. }) => *center = point,
            Some(shape @ Shape::Rectangle { .. }) => {
                if let Some(origin) = shape.representative_point() {
                    shape.translate(
                        point.latitude - origin.latitude,
                        point.longitude - origin.longitude,
                    );
                }
            }
            Some(Shape::Polygon { ring }) => {
                if let Some(first) = ring.first_mut() {
                    *first = point;
                }
            }
            None => {}
        }
        self.selected_point = Some(point);
        self.sync_coordinate_inputs(point);
    }

    /// Accepts a manual coordinate edit only when both fields parse as
    /// finite in-range numbers; accepted edits behave like a marker
    /// drag. Invalid input stays visible in the fields but changes
    /// nothing else.
    fn type_coordinates(&mut self, latitude: String, longitude: String) {
        let parsed = match (
            latitude.trim().parse::<f64>(),
            longitude.trim().parse::<f64>(),
        ) {
            (Ok(lat), Ok(lon)) => {
                let point = Coordinate::new(lat, lon);
                point.is_valid().then_some(point)
            }
            _ => None,
        };

        self.latitude_input = latitude;
        self.longitude_input = longitude;

        match parsed {
            Some(point) => self.drag_marker(point),
            None => {
                tracing::debug!(
                    latitude = %self.latitude_input,
                    longitude = %self.longitude_input,
                    "holding invalid coordinate input"
                );
            }
        }
    }

    /// Accepts a radius edit only while a circle is tracked and the text
    /// parses as a finite positive number. The center is untouched.
    fn type_radius(&mut self, text: String) {
        let parsed = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && *r > 0.0);

        self.radius_input = text;

        match (&mut self.current_shape, parsed) {
            (Some(Shape::Circle { radius_meters, .. }), Some(radius)) => {
                *radius_meters = radius;
            }
            _ => {
                tracing::debug!(radius = %self.radius_input, "holding invalid radius input");
            }
        }
    }

    fn sync_coordinate_inputs(&mut self, point: Coordinate) {
        self.latitude_input = format_number(point.latitude);
        self.longitude_input = format_number(point.longitude);
    }
}

/// Text-field rendering of a numeric value; trims trailing zeros so a
/// round-trip through parse stays stable.
fn format_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
