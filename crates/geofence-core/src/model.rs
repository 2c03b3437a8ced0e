//! Geofence data model: coordinates, boundary shapes, and the persisted
//! geofence entity.
//!
//! Every editable boundary normalizes into exactly one [`Shape`] variant
//! before it is stored or persisted; there is no other in-memory shape
//! representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ShapeError;

/// A latitude/longitude pair in degrees. Copied by value everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate. Inputs are not validated; use
    /// [`Coordinate::is_valid`] where the range matters.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and within the valid degree range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Component-wise comparison within `epsilon_degrees`, tolerating
    /// floating-point round-trip noise from drag and parse operations.
    pub fn approx_eq(&self, other: Coordinate, epsilon_degrees: f64) -> bool {
        (self.latitude - other.latitude).abs() <= epsilon_degrees
            && (self.longitude - other.longitude).abs() <= epsilon_degrees
    }
}

/// Discriminant of a [`Shape`], used for display and change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Circular boundary
    Circle,
    /// Free-form polygon boundary
    Polygon,
    /// Axis-aligned rectangle boundary
    Rectangle,
}

/// A geofence boundary.
///
/// Polygon rings are stored as drawn and are not required to repeat the
/// first point at the end; consumers treat them as implicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// A center point with a radius in meters.
    Circle {
        /// Center of the circle.
        center: Coordinate,
        /// Radius in meters, must be > 0 to be complete.
        radius_meters: f64,
    },
    /// An ordered vertex ring, at least 3 points when complete.
    Polygon {
        /// The vertex ring.
        ring: Vec<Coordinate>,
    },
    /// An axis-aligned box stored as a 4- or 5-point ring.
    ///
    /// The canonical construction is `[SW, NW, NE, SE, SW]` so consumers
    /// can read `ring[0]` and `ring[2]` as the SW/NE corners directly.
    Rectangle {
        /// The corner ring.
        ring: Vec<Coordinate>,
    },
}

impl Shape {
    /// Builds the canonical closed 5-point rectangle ring from two
    /// opposite corners.
    pub fn rectangle_from_corners(sw: Coordinate, ne: Coordinate) -> Self {
        Shape::Rectangle {
            ring: vec![
                sw,
                Coordinate::new(ne.latitude, sw.longitude),
                ne,
                Coordinate::new(sw.latitude, ne.longitude),
                sw,
            ],
        }
    }

    /// The discriminant of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// The single coordinate standing in for this shape when full
    /// containment or distance math is not applicable: the circle center,
    /// or the first ring vertex. `None` only for an empty ring.
    pub fn representative_point(&self) -> Option<Coordinate> {
        match self {
            Shape::Circle { center, .. } => Some(*center),
            Shape::Polygon { ring } | Shape::Rectangle { ring } => ring.first().copied(),
        }
    }

    /// Validates completeness. A complete shape may be persisted;
    /// containment math accepts incomplete shapes and degrades instead.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Circle { radius_meters, .. } => {
                if *radius_meters > 0.0 {
                    Ok(())
                } else {
                    Err(ShapeError::NonPositiveRadius {
                        radius_meters: *radius_meters,
                    })
                }
            }
            Shape::Polygon { ring } => {
                if ring.len() >= 3 {
                    Ok(())
                } else {
                    Err(ShapeError::PolygonRingTooShort { actual: ring.len() })
                }
            }
            Shape::Rectangle { ring } => {
                if ring.len() >= 4 {
                    Ok(())
                } else {
                    Err(ShapeError::RectangleRingTooShort { actual: ring.len() })
                }
            }
        }
    }

    /// Whether [`Shape::validate`] succeeds.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// South-west corner of a canonical rectangle ring (`ring[0]`).
    pub fn sw_corner(&self) -> Option<Coordinate> {
        match self {
            Shape::Rectangle { ring } => ring.first().copied(),
            _ => None,
        }
    }

    /// North-east corner of a canonical rectangle ring (`ring[2]`).
    pub fn ne_corner(&self) -> Option<Coordinate> {
        match self {
            Shape::Rectangle { ring } => ring.get(2).copied(),
            _ => None,
        }
    }

    /// Shifts every coordinate of the shape by the same delta, preserving
    /// its dimensions. Used to move a rectangle as a rigid body.
    pub fn translate(&mut self, delta_lat: f64, delta_lon: f64) {
        match self {
            Shape::Circle { center, .. } => {
                center.latitude += delta_lat;
                center.longitude += delta_lon;
            }
            Shape::Polygon { ring } | Shape::Rectangle { ring } => {
                for c in ring.iter_mut() {
                    c.latitude += delta_lat;
                    c.longitude += delta_lon;
                }
            }
        }
    }
}

/// The persisted geofence entity.
///
/// Owned by the external persistence collaborator; the core consumes it
/// for nearest-resolution and produces [`GeofenceDraft`] payloads from the
/// editor. Timestamps are opaque to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    /// Unique geofence id.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Optional owning team within the tenant.
    pub team_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The boundary.
    pub shape: Shape,
    /// Inactive geofences are ignored by nearest-resolution.
    pub is_active: bool,
    /// Whether proximity alerting is enabled.
    pub threshold_enabled: Option<bool>,
    /// Alert distance in meters, meaningful only when alerting is enabled.
    pub threshold_distance_meters: Option<f64>,
    /// Creation timestamp, not interpreted by the core.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, not interpreted by the core.
    pub updated_at: DateTime<Utc>,
}

impl Geofence {
    /// See [`Shape::representative_point`].
    pub fn representative_point(&self) -> Option<Coordinate> {
        self.shape.representative_point()
    }

    /// Effective proximity-alert distance: set only when alerting is
    /// enabled and a distance is configured.
    pub fn threshold_distance(&self) -> Option<f64> {
        if self.threshold_enabled == Some(true) {
            self.threshold_distance_meters
        } else {
            None
        }
    }
}

/// The create/update payload handed to the persistence collaborator on
/// editor submission.
///
/// A point-only submission (create flow with a selected location but no
/// drawn boundary) carries `shape: None` and `anchor: Some(point)`; how a
/// boundary-less point is stored is the collaborator's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceDraft {
    /// Display name, never empty on a valid submission.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Active flag.
    pub is_active: bool,
    /// Proximity alerting flag.
    pub threshold_enabled: bool,
    /// Alert distance in meters.
    pub threshold_distance_meters: Option<f64>,
    /// Optional owning team.
    pub team_id: Option<Uuid>,
    /// The drawn boundary, if any. Always complete when present.
    pub shape: Option<Shape>,
    /// The selected location when no boundary was drawn.
    pub anchor: Option<Coordinate>,
}
