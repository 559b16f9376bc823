//! Great-circle distance between points, in kilometers.

use geo::{Distance, Geodesic, Rhumb};
use geocell_types::Point;
use serde::{Deserialize, Serialize};

/// Mean earth radius used by the Haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Distance metrics for point-to-point calculations.
///
/// - **Haversine**: spherical earth of radius [`EARTH_RADIUS_KM`]
/// - **Geodesic**: ellipsoidal distance (Karney 2013), slower but more accurate
/// - **Rhumb**: constant-bearing path length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Haversine,
    Geodesic,
    Rhumb,
}

/// Haversine distance between two points, in kilometers.
///
/// Uses exact π. Implementations that approximate π as 22/7 report about
/// 855.7 km where this returns 855.377 km.
///
/// # Examples
///
/// ```
/// use geocell::{Point, distance::distance};
///
/// let d = distance(&Point::new(50.432356, 83.873793), &Point::new(58.124521, 63.735753));
/// assert!((d - 1553.0).abs() < 0.05);
/// ```
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let lat1 = p1.latitude().to_radians();
    let lat2 = p2.latitude().to_radians();
    let d_lat = (lat2 - lat1).abs();
    let d_lng = (p2.longitude() - p1.longitude()).to_radians().abs();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Distance between two points using `metric`, in kilometers.
pub fn distance_between(p1: &Point, p2: &Point, metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Haversine => distance(p1, p2),
        DistanceMetric::Geodesic => Geodesic.distance(*p1.inner(), *p2.inner()) / 1000.0,
        DistanceMetric::Rhumb => Rhumb.distance(*p1.inner(), *p2.inner()) / 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.05;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_haversine_distance() {
        let origin = Point::new(0.0, 0.0);

        assert_close(distance(&origin, &origin), 0.0);
        assert_close(distance(&origin, &Point::new(0.0, 1.0)), 111.195);
        assert_close(distance(&origin, &Point::new(1.0, 0.0)), 111.195);
        assert_close(distance(&Point::new(0.0, 1.0), &origin), 111.195);
        assert_close(distance(&Point::new(1.0, 0.0), &origin), 111.195);
        assert_close(
            distance(
                &Point::new(50.432356, 0.873793),
                &Point::new(58.124521, 0.735753),
            ),
            855.377,
        );
        assert_close(
            distance(
                &Point::new(50.432356, 83.873793),
                &Point::new(58.124521, 63.735753),
            ),
            1552.997,
        );
    }

    #[test]
    fn test_distance_across_antimeridian() {
        let west = Point::new(0.0, 179.5);
        let east = Point::new(0.0, -179.5);
        assert_close(distance(&west, &east), 111.195);
    }

    #[test]
    fn test_metrics_agree_roughly() {
        let nyc = Point::new(40.7128, -74.0060);
        let la = Point::new(34.0522, -118.2437);

        let haversine = distance_between(&nyc, &la, DistanceMetric::Haversine);
        let geodesic = distance_between(&nyc, &la, DistanceMetric::Geodesic);
        let rhumb = distance_between(&nyc, &la, DistanceMetric::Rhumb);

        assert!(haversine > 3_900.0 && haversine < 4_000.0);
        assert!((haversine - geodesic).abs() < 10.0);
        assert!(rhumb >= haversine);
    }
}
