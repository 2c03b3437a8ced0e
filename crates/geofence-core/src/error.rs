//! Error handling for the geofence engine.
//!
//! Provides error types for each layer of the core:
//! - Shape errors (incomplete/malformed boundaries)
//! - Position errors (location sensor boundary)
//! - Fetch errors (geofence list boundary)
//! - Save errors (persistence boundary)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape validation error.
///
/// Raised when a boundary is not complete enough to persist. Containment
/// math never raises these; it degrades to a best-effort result instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Circle radius must be strictly positive.
    #[error("circle radius must be positive, got {radius_meters}")]
    NonPositiveRadius {
        /// The rejected radius in meters.
        radius_meters: f64,
    },

    /// Polygon ring has fewer than three vertices.
    #[error("polygon needs at least 3 points, got {actual}")]
    PolygonRingTooShort {
        /// The number of vertices supplied.
        actual: usize,
    },

    /// Rectangle ring has fewer than four corner points.
    #[error("rectangle needs at least 4 points, got {actual}")]
    RectangleRingTooShort {
        /// The number of vertices supplied.
        actual: usize,
    },
}

/// Location sensor error.
///
/// Produced by the external position source; propagated unchanged so the
/// caller can render a specific message. The core performs no retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The user denied the location permission.
    #[error("location permission denied")]
    PermissionDenied,

    /// No position fix is available.
    #[error("location unavailable")]
    Unavailable,

    /// The position request timed out.
    #[error("location request timed out")]
    Timeout,

    /// Any other sensor failure.
    #[error("location error: {message}")]
    Unknown {
        /// A message describing the failure.
        message: String,
    },
}

/// Geofence list fetch error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The geofence service could not be reached.
    #[error("geofence service unavailable: {message}")]
    Unavailable {
        /// A message describing the failure.
        message: String,
    },

    /// The service responded with data the core could not decode.
    #[error("invalid geofence response: {message}")]
    InvalidResponse {
        /// A message describing the decode failure.
        message: String,
    },
}

/// Geofence persistence error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The service rejected the payload.
    #[error("save rejected: {reason}")]
    Rejected {
        /// The reason the payload was rejected.
        reason: String,
    },

    /// The persistence service could not be reached.
    #[error("geofence service unavailable: {message}")]
    Unavailable {
        /// A message describing the failure.
        message: String,
    },
}

/// Top-level error type for the geofence engine.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Shape validation error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Location sensor error
    #[error(transparent)]
    Position(#[from] PositionError),

    /// Geofence list fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Geofence persistence error
    #[error(transparent)]
    Save(#[from] SaveError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result alias using the engine [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
