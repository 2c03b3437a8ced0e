//! End-to-end nearest-geofence scenarios through the collaborator traits.

use chrono::Utc;
use uuid::Uuid;

use geofence_core::{
    resolve_nearest, Coordinate, FetchError, Geofence, GeofenceStore, ListScope, PositionError,
    PositionSource, Shape,
};

struct FixedSensor(Result<Coordinate, PositionError>);

impl PositionSource for FixedSensor {
    fn current_position(&mut self) -> Result<Coordinate, PositionError> {
        self.0.clone()
    }
}

struct MemoryStore {
    fences: Vec<Geofence>,
}

impl GeofenceStore for MemoryStore {
    fn list_geofences(&self, _scope: ListScope) -> Result<Vec<Geofence>, FetchError> {
        Ok(self.fences.clone())
    }

    fn create_geofence(
        &mut self,
        _draft: &geofence_core::GeofenceDraft,
    ) -> Result<Geofence, geofence_core::SaveError> {
        unimplemented!("not used by resolution scenarios")
    }

    fn update_geofence(
        &mut self,
        _id: Uuid,
        _draft: &geofence_core::GeofenceDraft,
    ) -> Result<Geofence, geofence_core::SaveError> {
        unimplemented!("not used by resolution scenarios")
    }
}

fn circle_fence(name: &str, lat: f64, lon: f64, radius: f64, is_active: bool) -> Geofence {
    Geofence {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        team_id: None,
        name: name.to_string(),
        description: None,
        shape: Shape::Circle {
            center: Coordinate::new(lat, lon),
            radius_meters: radius,
        },
        is_active,
        threshold_enabled: None,
        threshold_distance_meters: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn scope() -> ListScope {
    ListScope {
        tenant_id: Uuid::new_v4(),
        team_id: None,
    }
}

#[test]
fn inside_fence_reports_inside_with_no_distance() {
    let mut sensor = FixedSensor(Ok(Coordinate::new(40.0, -74.0)));
    let store = MemoryStore {
        fences: vec![circle_fence("Warehouse", 40.0, -74.0, 50.0, true)],
    };

    let position = sensor.current_position().unwrap();
    let fences = store.list_geofences(scope()).unwrap();
    let result = resolve_nearest(position, &fences).unwrap();

    assert!(result.is_inside);
    assert_eq!(result.distance_meters, 0.0);
    assert_eq!(result.summary(), "Inside Warehouse");
}

#[test]
fn outside_fence_reports_distance_to_edge() {
    // ~111 m from the center, 50 m radius: ~61 m from the boundary.
    let mut sensor = FixedSensor(Ok(Coordinate::new(40.0, -74.0)));
    let store = MemoryStore {
        fences: vec![circle_fence("Warehouse", 40.001, -74.0, 50.0, true)],
    };

    let position = sensor.current_position().unwrap();
    let fences = store.list_geofences(scope()).unwrap();
    let result = resolve_nearest(position, &fences).unwrap();

    assert!(!result.is_inside);
    assert_eq!(result.summary(), "61 m from Warehouse");
}

#[test]
fn all_inactive_fences_resolve_to_none() {
    let store = MemoryStore {
        fences: vec![
            circle_fence("Old site", 40.0, -74.0, 50.0, false),
            circle_fence("Closed site", 40.1, -74.0, 50.0, false),
        ],
    };

    let fences = store.list_geofences(scope()).unwrap();
    assert_eq!(resolve_nearest(Coordinate::new(40.0, -74.0), &fences), None);
}

#[test]
fn sensor_failure_skips_resolution() {
    // The caller surfaces the sensor error and never runs the resolver.
    let mut sensor = FixedSensor(Err(PositionError::Timeout));
    let err = sensor.current_position().unwrap_err();
    assert_eq!(err, PositionError::Timeout);
    assert_eq!(err.to_string(), "location request timed out");
}
