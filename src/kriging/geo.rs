/// Geodesic distance and the admission gate for spatial queries.
///
/// A query point is only eligible for kriging if it lies within a configured
/// great-circle distance of at least one monitor (default 200 km). The gate
/// is a hard admission filter evaluated before any fitting, independent of
/// the variogram's own range parameter.
///
/// Note the two distance metrics in this engine are intentionally different:
/// the admission gate is geodesic kilometers, while the variogram operates
/// on planar degree-space distance (see `kriging::variogram`).

use crate::model::{MonitorObservation, QueryPoint};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default admission radius: monitors within 200 km (~125 mi) of a query
/// point make it eligible for prediction.
pub const DEFAULT_DISTANCE_THRESHOLD_KM: f64 = 200.0;

/// Great-circle (haversine) distance between two WGS84 points, in km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns `true` if `point` is within `threshold_km` of at least one
/// observation. Distance exactly equal to the threshold is admitted.
pub fn within_distance(
    point: &QueryPoint,
    observations: &[MonitorObservation],
    threshold_km: f64,
) -> bool {
    observations.iter().any(|obs| {
        haversine_km(point.latitude, point.longitude, obs.latitude, obs.longitude)
            <= threshold_km
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor_at(lon: f64, lat: f64) -> MonitorObservation {
        MonitorObservation { longitude: lon, latitude: lat, aqi: 50.0 }
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator_is_about_111_km() {
        let dist = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!(
            (dist - 111.195).abs() < 0.5,
            "1° longitude at the equator should be ~111.2 km, got {}",
            dist
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let d1 = haversine_km(36.75, -119.77, 35.36, -119.06);
        let d2 = haversine_km(35.36, -119.06, 36.75, -119.77);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_points_have_zero_distance() {
        assert_eq!(haversine_km(36.75, -119.77, 36.75, -119.77), 0.0);
    }

    #[test]
    fn test_fresno_to_bakersfield_is_within_valley_scale() {
        // Fresno (36.78, -119.77) to Bakersfield (35.36, -119.06) is roughly
        // 170 km — inside the default admission radius, as deployed.
        let dist = haversine_km(36.78, -119.77, 35.36, -119.06);
        assert!(dist > 150.0 && dist < 200.0, "expected ~170 km, got {}", dist);
    }

    #[test]
    fn test_point_near_a_monitor_is_admitted() {
        let observations = vec![monitor_at(-119.77, 36.78)];
        let nearby = QueryPoint { longitude: -119.70, latitude: 36.70 };
        assert!(within_distance(&nearby, &observations, DEFAULT_DISTANCE_THRESHOLD_KM));
    }

    #[test]
    fn test_point_far_from_every_monitor_is_rejected() {
        // Seattle is well over 1000 km from any valley monitor.
        let observations = vec![monitor_at(-119.77, 36.78), monitor_at(-119.06, 35.36)];
        let seattle = QueryPoint { longitude: -122.33, latitude: 47.61 };
        assert!(!within_distance(&seattle, &observations, DEFAULT_DISTANCE_THRESHOLD_KM));
    }

    #[test]
    fn test_single_monitor_in_range_is_sufficient() {
        // The gate requires at least one monitor in range, not all of them.
        let observations = vec![monitor_at(-119.77, 36.78), monitor_at(-100.0, 30.0)];
        let nearby = QueryPoint { longitude: -119.77, latitude: 36.90 };
        assert!(within_distance(&nearby, &observations, DEFAULT_DISTANCE_THRESHOLD_KM));
    }

    #[test]
    fn test_empty_observation_set_admits_nothing() {
        let point = QueryPoint { longitude: -119.77, latitude: 36.78 };
        assert!(!within_distance(&point, &[], DEFAULT_DISTANCE_THRESHOLD_KM));
    }
}
