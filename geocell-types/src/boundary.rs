use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular region identified by a lower (south-west) and an upper
/// (north-east) corner.
///
/// Both corners are normalized points. Latitudes are ordered so that the lower
/// corner is never north of the upper one. Longitudes keep the order they were
/// given in, so a boundary whose lower longitude is greater than its upper one
/// spans the antimeridian going east from the lower corner.
///
/// # Examples
///
/// ```
/// use geocell_types::{Boundary, Point};
///
/// let b = Boundary::new(&Point::new(10.0, 20.0), &Point::new(-10.0, 30.0));
/// assert_eq!(b.lower(), Point::new(-10.0, 20.0));
/// assert_eq!(b.upper(), Point::new(10.0, 30.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    lower: Point,
    upper: Point,
}

impl Boundary {
    /// Build a normalized boundary from two corner points.
    ///
    /// If either corner lies on a pole, both longitudes collapse to `0`.
    pub fn new(lower: &Point, upper: &Point) -> Self {
        let lower_lat = lower.latitude().min(upper.latitude());
        let upper_lat = lower.latitude().max(upper.latitude());

        let (lower_lng, upper_lng) = if lower.is_pole() || upper.is_pole() {
            (0.0, 0.0)
        } else {
            (lower.longitude(), upper.longitude())
        };

        Self {
            lower: Point::new(lower_lat, lower_lng),
            upper: Point::new(upper_lat, upper_lng),
        }
    }

    /// The south-west corner.
    pub fn lower(&self) -> Point {
        self.lower
    }

    /// The north-east corner.
    pub fn upper(&self) -> Point {
        self.upper
    }

    /// Whether the boundary crosses the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.lower.longitude() > self.upper.longitude()
    }

    /// Convert into a `geo::Rect`.
    ///
    /// `geo::Rect` has no notion of wrapping, so a boundary that crosses the
    /// antimeridian comes out as the complementary band between its longitudes.
    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.lower.longitude(), y: self.lower.latitude() },
            geo::coord! { x: self.upper.longitude(), y: self.upper.latitude() },
        )
    }

    /// Serialize the boundary as a GeoJSON `Polygon` geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "geojson")]
    /// # {
    /// use geocell_types::{Boundary, Point};
    ///
    /// let b = Boundary::new(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0));
    /// let json = b.to_geojson().unwrap();
    /// assert!(json.contains("Polygon"));
    /// # }
    /// ```
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, crate::point::PointError> {
        use geojson::{Geometry, Value};

        let (south, west) = (self.lower.latitude(), self.lower.longitude());
        let (north, east) = (self.upper.latitude(), self.upper.longitude());

        let ring = vec![
            vec![west, south],
            vec![east, south],
            vec![east, north],
            vec![west, north],
            vec![west, south],
        ];

        let geom = Geometry::new(Value::Polygon(vec![ring]));
        serde_json::to_string(&geom).map_err(|e| {
            crate::point::PointError::GeoJson(format!("Failed to serialize boundary: {}", e))
        })
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.lower, self.upper)
    }
}
