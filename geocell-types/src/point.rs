use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places kept in normalized coordinates.
pub const DECIMAL_PLACES: i32 = 8;
/// Latitude of the north pole.
pub const NORTH_POLE_LAT: f64 = 90.0;
/// Latitude of the south pole.
pub const SOUTH_POLE_LAT: f64 = -90.0;
/// Largest longitude magnitude.
pub const HALF_LONGITUDE: f64 = 180.0;
/// Full longitude turn.
pub const TOTAL_LONGITUDE: f64 = 360.0;

/// Error type for point construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    #[error("coordinates must be finite, got ({latitude}, {longitude})")]
    NonFinite { latitude: f64, longitude: f64 },

    #[cfg(feature = "geojson")]
    #[error("GeoJSON serialization error: {0}")]
    GeoJson(String),
}

/// An immutable geo-location point with normalized latitude and longitude.
///
/// Construction always normalizes:
///
/// - latitude is saturated into `[-90, 90]`
/// - longitude is wrapped into `(-180, 180]`, and forced to `0` at either pole
/// - both are rounded half-up to 8 decimal places
///
/// Internally this wraps a `geo::Point` with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```
/// use geocell_types::point::Point;
///
/// let p = Point::new(-45.1234567851, -35.8765432138);
/// assert_eq!(p.latitude(), -45.12345679);
/// assert_eq!(p.longitude(), -35.87654321);
///
/// // -180 and 180 denote the same meridian; the normalized form is 180.
/// assert_eq!(Point::new(0.0, -180.0).longitude(), 180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatLng", into = "LatLng")]
pub struct Point {
    inner: geo::Point<f64>,
}

/// Wire form of a point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Create a normalized point from latitude and longitude in degrees.
    ///
    /// Inputs must be finite. A NaN latitude saturates to the south pole, so
    /// use [`Point::try_new`] for coordinates that have not been checked.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let latitude = if latitude > 0.0 {
            latitude.min(NORTH_POLE_LAT)
        } else {
            latitude.max(SOUTH_POLE_LAT)
        };
        let latitude = round_half_up(latitude, DECIMAL_PLACES);

        let longitude = if latitude.abs() == NORTH_POLE_LAT {
            0.0
        } else {
            wrap_longitude(longitude)
        };
        // Rounding can land a wrapped longitude back on -180.
        let longitude = match round_half_up(longitude, DECIMAL_PLACES) {
            lng if lng <= -HALF_LONGITUDE => HALF_LONGITUDE,
            lng => lng,
        };

        Self {
            inner: geo::Point::new(longitude, latitude),
        }
    }

    /// Like [`Point::new`], but rejects NaN and infinite coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell_types::point::Point;
    ///
    /// assert!(Point::try_new(f64::NAN, 10.0).is_err());
    /// assert!(Point::try_new(10.0, 20.0).is_ok());
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, PointError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(PointError::NonFinite {
                latitude,
                longitude,
            });
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Latitude in degrees, within `[-90, 90]`.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.inner.y()
    }

    /// Longitude in degrees, within `(-180, 180]`.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.inner.x()
    }

    /// Whether the point sits exactly on one of the poles.
    #[inline]
    pub fn is_pole(&self) -> bool {
        self.latitude().abs() == NORTH_POLE_LAT
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude(), self.longitude())
    }
}

/// Normalizes through [`Point::new`]; `x` is read as longitude, `y` as latitude.
impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<LatLng> for Point {
    fn from(raw: LatLng) -> Self {
        Self::new(raw.lat, raw.lng)
    }
}

impl From<Point> for LatLng {
    fn from(point: Point) -> Self {
        Self {
            lat: point.latitude(),
            lng: point.longitude(),
        }
    }
}

/// Wraps a longitude into `(-180, 180]`.
fn wrap_longitude(longitude: f64) -> f64 {
    // `%` keeps the sign of the dividend.
    let remainder = longitude % TOTAL_LONGITUDE;

    if remainder <= -HALF_LONGITUDE {
        remainder + TOTAL_LONGITUDE
    } else if remainder > HALF_LONGITUDE {
        remainder - TOTAL_LONGITUDE
    } else {
        remainder
    }
}

/// Rounds half-up (towards positive infinity on ties) to `places` decimals.
fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale + 0.5).floor() / scale
}
