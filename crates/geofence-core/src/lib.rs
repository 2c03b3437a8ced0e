//! # Geofence Core
//!
//! Geometry, shape model, and nearest-geofence resolution for
//! location-based attendance features.
//!
//! The crate is pure and synchronous: distance and containment math
//! ([`geo`]), the canonical boundary model ([`model`]), nearest-geofence
//! selection ([`resolver`]), display formatting ([`units`]), and the
//! traits implemented by the external sensor/persistence collaborators
//! ([`provider`]).
//!
//! Containment uses a planar approximation for polygon rings, which is
//! acceptable at geofence scale (tens of meters to a few kilometers);
//! geodesic polygon math is deliberately out of scope.

pub mod error;
pub mod geo;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod units;

pub use error::{Error, FetchError, PositionError, Result, SaveError, ShapeError};
pub use geo::{
    circle_contains, haversine_distance_meters, point_in_polygon, EARTH_RADIUS_METERS,
};
pub use model::{Coordinate, Geofence, GeofenceDraft, Shape, ShapeKind};
pub use provider::{GeofenceStore, ListScope, PositionSource};
pub use resolver::{resolve_nearest, NearestResult};
pub use units::format_distance;
