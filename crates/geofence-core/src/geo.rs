//! Geometry primitives: great-circle distance and planar containment tests.
//!
//! All functions are pure and never fail. Malformed input degrades to a
//! best-effort result (`false` or `NaN`) rather than an error, so callers
//! in display paths never have to unwind.

use crate::model::Coordinate;

/// Mean Earth radius in meters, used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Guards the ray-cast division when a polygon edge is exactly horizontal.
const RAY_CAST_EPSILON: f64 = 1e-12;

/// Great-circle distance between two coordinates in meters (haversine).
///
/// Symmetric, and zero for identical inputs. Inputs are trusted degree
/// pairs; NaN coordinates propagate as a NaN distance.
pub fn haversine_distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Even-odd ray-casting point-in-polygon test.
///
/// Treats `(longitude, latitude)` as planar `(x, y)`. This is a planar
/// approximation, acceptable at geofence scale (tens of meters to a few
/// kilometers); spherical polygon containment is out of scope. The ring is
/// treated as implicitly closed (first point need not repeat at the end).
///
/// Returns `false` for rings with fewer than three vertices.
/// Self-intersecting rings follow the even-odd rule's natural result.
pub fn point_in_polygon(point: Coordinate, ring: &[Coordinate]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let x = point.longitude;
    let y = point.latitude;

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let xi = ring[i].longitude;
        let yi = ring[i].latitude;
        let xj = ring[j].longitude;
        let yj = ring[j].latitude;

        let intersects = ((yi > y) != (yj > y))
            && x < (xj - xi) * (y - yi) / (yj - yi + RAY_CAST_EPSILON) + xi;
        if intersects {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `point` lies within `radius_meters` of `center`.
pub fn circle_contains(point: Coordinate, center: Coordinate, radius_meters: f64) -> bool {
    haversine_distance_meters(point, center) <= radius_meters
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_ring() -> Vec<Coordinate> {
        // (lon, lat) square from (0,0) to (1,1).
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 1.0),
        ]
    }

    #[test]
    fn haversine_identical_points_is_zero() {
        let p = Coordinate::new(40.0, -74.0);
        assert_eq!(haversine_distance_meters(p, p), 0.0);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        // One degree of latitude is ~111.19 km on a 6371 km sphere.
        let a = Coordinate::new(40.0, -74.0);
        let b = Coordinate::new(41.0, -74.0);
        let d = haversine_distance_meters(a, b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn haversine_nan_propagates() {
        let a = Coordinate::new(f64::NAN, 0.0);
        let b = Coordinate::new(0.0, 0.0);
        assert!(haversine_distance_meters(a, b).is_nan());
    }

    #[test]
    fn point_in_polygon_square() {
        let ring = square_ring();
        assert!(point_in_polygon(Coordinate::new(0.5, 0.5), &ring));
        assert!(!point_in_polygon(Coordinate::new(2.0, 2.0), &ring));
    }

    #[test]
    fn point_in_polygon_short_ring_is_false() {
        let ring = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
        assert!(!point_in_polygon(Coordinate::new(0.5, 0.5), &ring));
    }

    #[test]
    fn point_on_vertex_follows_even_odd_rule() {
        // Boundary behavior on a vertex is whatever the even-odd rule
        // yields; pinned here so a change is visible. Not a guarantee.
        let ring = square_ring();
        let on_vertex = point_in_polygon(Coordinate::new(0.0, 0.0), &ring);
        assert!(on_vertex);
    }

    #[test]
    fn circle_contains_matches_distance() {
        let center = Coordinate::new(40.0, -74.0);
        let near = Coordinate::new(40.0001, -74.0);
        assert!(circle_contains(near, center, 50.0));
        assert!(!circle_contains(near, center, 5.0));
    }

    proptest! {
        #[test]
        fn haversine_is_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let d_ab = haversine_distance_meters(a, b);
            let d_ba = haversine_distance_meters(b, a);
            prop_assert!((d_ab - d_ba).abs() < 1e-6);
        }

        #[test]
        fn haversine_self_distance_is_zero(
            lat in -90.0f64..90.0, lon in -180.0f64..180.0,
        ) {
            let p = Coordinate::new(lat, lon);
            prop_assert_eq!(haversine_distance_meters(p, p), 0.0);
        }

        #[test]
        fn circle_contains_equals_distance_comparison(
            lat1 in -10.0f64..10.0, lon1 in -10.0f64..10.0,
            lat2 in -10.0f64..10.0, lon2 in -10.0f64..10.0,
            radius in 1.0f64..1_000_000.0,
        ) {
            let p = Coordinate::new(lat1, lon1);
            let c = Coordinate::new(lat2, lon2);
            let expected = haversine_distance_meters(p, c) <= radius;
            prop_assert_eq!(circle_contains(p, c, radius), expected);
        }
    }
}
