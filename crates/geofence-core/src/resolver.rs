//! Nearest-geofence resolution.
//!
//! Given a live position and the caller's active geofences, classifies
//! membership and selects the single nearest geofence with a stable,
//! documented tie-break.

use uuid::Uuid;

use crate::geo::{circle_contains, haversine_distance_meters, point_in_polygon};
use crate::model::{Coordinate, Geofence, Shape};
use crate::units::format_distance;

/// The outcome of a nearest-geofence resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestResult {
    /// Id of the selected geofence.
    pub geofence_id: Uuid,
    /// Name of the selected geofence, carried for display.
    pub name: String,
    /// Distance to the geofence in meters. Zero when inside. Approximate
    /// for non-circular shapes when outside (distance to the shape's
    /// representative point, not to its true boundary).
    pub distance_meters: f64,
    /// Whether the position lies inside the geofence boundary.
    pub is_inside: bool,
}

impl NearestResult {
    /// Display-ready status line. The inside case shows no numeric
    /// distance; a non-finite distance reads as unknown.
    pub fn summary(&self) -> String {
        if self.is_inside {
            format!("Inside {}", self.name)
        } else if self.distance_meters.is_finite() {
            format!("{} from {}", format_distance(self.distance_meters), self.name)
        } else {
            format!("Distance to {} unknown", self.name)
        }
    }
}

/// Selects the nearest active geofence to `position`.
///
/// Returns `None` when no geofence is active — a normal outcome, not a
/// failure. Candidates are scanned in input order and replaced only on a
/// strictly smaller distance, so ties keep the earliest candidate.
///
/// Distance per shape:
/// - circle: 0 when inside, otherwise haversine distance to the center
///   minus the radius (distance to the boundary);
/// - polygon/rectangle with a usable ring: 0 when inside, otherwise the
///   haversine distance to the representative point (approximate);
/// - malformed shapes: never inside, distance to the representative
///   point, or infinite when the ring is empty.
///
/// A position with non-finite components yields NaN distances. NaN never
/// displaces an earlier finite candidate (strict `<` is false), but a NaN
/// result can survive as the sole candidate; callers must treat a
/// non-finite distance as unknown rather than nearest.
pub fn resolve_nearest(position: Coordinate, geofences: &[Geofence]) -> Option<NearestResult> {
    let mut best: Option<NearestResult> = None;

    for fence in geofences.iter().filter(|g| g.is_active) {
        let (is_inside, distance_meters) = classify(position, &fence.shape);

        let replaces = match &best {
            None => true,
            Some(current) => distance_meters < current.distance_meters,
        };
        if replaces {
            best = Some(NearestResult {
                geofence_id: fence.id,
                name: fence.name.clone(),
                distance_meters,
                is_inside,
            });
        }
    }

    if let Some(result) = &best {
        tracing::debug!(
            geofence_id = %result.geofence_id,
            distance_meters = result.distance_meters,
            is_inside = result.is_inside,
            "resolved nearest geofence"
        );
    }
    best
}

/// Membership and distance for one candidate shape.
fn classify(position: Coordinate, shape: &Shape) -> (bool, f64) {
    match shape {
        Shape::Circle {
            center,
            radius_meters,
        } => {
            if circle_contains(position, *center, *radius_meters) {
                (true, 0.0)
            } else {
                (
                    false,
                    haversine_distance_meters(position, *center) - radius_meters,
                )
            }
        }
        Shape::Polygon { ring } | Shape::Rectangle { ring } if ring.len() >= 3 => {
            if point_in_polygon(position, ring) {
                (true, 0.0)
            } else {
                (false, haversine_distance_meters(position, ring[0]))
            }
        }
        _ => {
            let distance = match shape.representative_point() {
                Some(point) => haversine_distance_meters(position, point),
                None => f64::INFINITY,
            };
            (false, distance)
        }
    }
}
