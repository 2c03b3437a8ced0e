//! Boundary traits for the external collaborators.
//!
//! The position sensor, geofence list service, and persistence sink live
//! outside this core. They are specified here as traits so the resolver
//! and editor contracts stay mockable in tests.

use uuid::Uuid;

use crate::error::{FetchError, PositionError, SaveError};
use crate::model::{Coordinate, Geofence, GeofenceDraft};

/// Tenant/team scope for a geofence list request. The core never filters
/// by scope itself, only by the active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListScope {
    /// The calling tenant.
    pub tenant_id: Uuid,
    /// Optional team restriction within the tenant.
    pub team_id: Option<Uuid>,
}

/// The live location sensor.
///
/// One outstanding request at a time; a resolution cycle issues exactly
/// one call. Timeout policy belongs to the implementor, reported as
/// [`PositionError::Timeout`].
pub trait PositionSource {
    /// Fetches the current position.
    fn current_position(&mut self) -> Result<Coordinate, PositionError>;
}

/// The geofence persistence service.
pub trait GeofenceStore {
    /// Lists the geofences visible in `scope`. Implementors apply the
    /// scope; inactive entries may still be included and are filtered by
    /// the resolver.
    fn list_geofences(&self, scope: ListScope) -> Result<Vec<Geofence>, FetchError>;

    /// Persists a new geofence from an editor submission.
    fn create_geofence(&mut self, draft: &GeofenceDraft) -> Result<Geofence, SaveError>;

    /// Updates an existing geofence from an editor submission.
    fn update_geofence(&mut self, id: Uuid, draft: &GeofenceDraft)
        -> Result<Geofence, SaveError>;
}
