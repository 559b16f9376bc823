//! Point <-> geohash conversion by interleaved binary subdivision.
//!
//! Bit `i` of a hash halves the current rectangle along longitude when `i` is
//! even and along latitude when `i` is odd, starting from the whole globe.
//! A `1` keeps the upper half, a `0` the lower half.

use crate::base32::{self, BITS_PER_CHAR};
use crate::error::Result;
use crate::hash::{Hash, MAX_HASH_BITS};
use geocell_types::Point;
use geocell_types::point::{HALF_LONGITUDE, NORTH_POLE_LAT, SOUTH_POLE_LAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    #[inline]
    fn of_bit(index: usize) -> Self {
        if index % 2 == 0 {
            Axis::Longitude
        } else {
            Axis::Latitude
        }
    }
}

/// The rectangle being subdivided while walking hash bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cell {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Cell {
    const WORLD: Cell = Cell {
        min_lat: SOUTH_POLE_LAT,
        max_lat: NORTH_POLE_LAT,
        min_lng: -HALF_LONGITUDE,
        max_lng: HALF_LONGITUDE,
    };

    fn range_mut(&mut self, axis: Axis) -> (&mut f64, &mut f64) {
        match axis {
            Axis::Longitude => (&mut self.min_lng, &mut self.max_lng),
            Axis::Latitude => (&mut self.min_lat, &mut self.max_lat),
        }
    }

    /// Halve along `axis` towards the side holding `coordinate`; returns the bit.
    #[inline]
    fn split(&mut self, axis: Axis, coordinate: f64) -> bool {
        let (min, max) = self.range_mut(axis);
        let mid = (*min + *max) / 2.0;

        if coordinate > mid {
            *min = mid;
            true
        } else {
            *max = mid;
            false
        }
    }

    /// Halve along `axis`, keeping the half selected by `bit`.
    #[inline]
    fn narrow(&mut self, axis: Axis, bit: bool) {
        let (min, max) = self.range_mut(axis);
        let mid = (*min + *max) / 2.0;

        if bit {
            *min = mid;
        } else {
            *max = mid;
        }
    }

    /// The cell denoted by the top `size` bits of a left-justified word.
    pub(crate) fn from_bits(bits: u64, size: u8) -> Self {
        let mut cell = Cell::WORLD;
        for i in 0..usize::from(size.min(MAX_HASH_BITS)) {
            cell.narrow(Axis::of_bit(i), (bits >> (63 - i)) & 1 == 1);
        }
        cell
    }

    /// The cell denoted by Base32 text; `Ok(None)` for empty text.
    fn from_text(text: &str) -> Result<Option<Self>> {
        if text.is_empty() {
            return Ok(None);
        }

        let mut cell = Cell::WORLD;
        let mut index = 0;

        for (position, c) in text.chars().enumerate() {
            let value = base32::lookup(c, position)?;

            for shift in (0..BITS_PER_CHAR).rev() {
                cell.narrow(Axis::of_bit(index), (value >> shift) & 1 == 1);
                index += 1;
            }
        }

        Ok(Some(cell))
    }

    pub(crate) fn center(&self) -> Point {
        Point::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub(crate) fn to_rect(self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.min_lng, y: self.min_lat },
            geo::coord! { x: self.max_lng, y: self.max_lat },
        )
    }
}

/// Encode a point into a hash of `precision` bits.
///
/// `precision` saturates at [`MAX_HASH_BITS`]. A coordinate exactly on a
/// bisection line falls into the lower half.
///
/// # Examples
///
/// ```
/// use geocell::{Point, codec::encode};
///
/// let hash = encode(&Point::new(45.12345678, 35.87654321), 60);
/// assert_eq!(hash.text(), "ub188qkx0n18");
///
/// let hash = encode(&Point::new(48.6667, -4.334), 30);
/// assert_eq!(hash.text(), "gbsuv7");
/// ```
pub fn encode(point: &Point, precision: u8) -> Hash {
    let precision = precision.min(MAX_HASH_BITS);

    let mut cell = Cell::WORLD;
    let mut acc = 0u64;

    for i in 0..usize::from(precision) {
        let axis = Axis::of_bit(i);
        let coordinate = match axis {
            Axis::Longitude => point.longitude(),
            Axis::Latitude => point.latitude(),
        };
        acc = (acc << 1) | u64::from(cell.split(axis, coordinate));
    }

    let bits = acc.checked_shl(u32::from(64 - precision)).unwrap_or(0);
    Hash::new(bits, precision)
}

/// Encode an optional point; an absent point has no hash.
pub fn hash_of(point: Option<&Point>, precision: u8) -> Option<Hash> {
    point.map(|p| encode(p, precision))
}

/// Decode Base32 text into the midpoint of the cell it denotes.
///
/// The midpoint is representative of the whole cell, not the point that was
/// originally encoded. Text of any length is accepted.
///
/// # Errors
///
/// [`crate::GeocellError::InvalidHashCharacter`] if any character is outside
/// the alphabet.
///
/// # Examples
///
/// ```
/// use geocell::codec::decode;
///
/// let p = decode("ub188qkx0")?.unwrap();
/// assert!((p.latitude() - 45.123446).abs() < 1e-6);
/// assert!((p.longitude() - 35.876563).abs() < 1e-6);
///
/// assert!(decode("")?.is_none());
/// assert!(decode("a").is_err());
/// # Ok::<(), geocell::GeocellError>(())
/// ```
pub fn decode(text: &str) -> Result<Option<Point>> {
    Ok(Cell::from_text(text)?.map(|cell| cell.center()))
}

/// Decode Base32 text into the rectangle it denotes (x = longitude, y = latitude).
pub fn decode_bounds(text: &str) -> Result<Option<geo::Rect<f64>>> {
    Ok(Cell::from_text(text)?.map(Cell::to_rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeocellError;

    #[test]
    fn test_encode_known_points() {
        let cases = [
            ((45.12345678, 35.87654321), 60, "ub188qkx0n18"),
            ((48.6667, -4.334), 30, "gbsuv7"),
            ((0.0, 33.22315), 45, "kxzxupbrg"),
            ((0.0, 23.0), 5, "k"),
            ((0.0, 179.999979), 45, "rzzzzzzzz"),
            ((90.0, 33.220017), 45, "gzzzzzzzz"),
        ];

        for ((lat, lng), precision, expected) in cases {
            let hash = encode(&Point::new(lat, lng), precision);
            assert_eq!(hash.text(), expected, "({}, {}) @ {}", lat, lng, precision);
            assert_eq!(hash.size(), precision);
        }
    }

    #[test]
    fn test_encode_zero_precision() {
        let hash = encode(&Point::new(45.0, 45.0), 0);
        assert_eq!(hash.bits(), 0);
        assert_eq!(hash.value(), 0);
        assert_eq!(hash.text(), "");
    }

    #[test]
    fn test_encode_clamps_precision() {
        let p = Point::new(45.12345678, 35.87654321);
        assert_eq!(encode(&p, 64), encode(&p, 60));
        assert_eq!(encode(&p, 255).size(), 60);
    }

    #[test]
    fn test_encode_partial_group() {
        let p = Point::new(45.12345678, 35.87654321);
        let hash = encode(&p, 7);
        assert_eq!(hash.text(), "u");
        assert_eq!(hash.value(), 0b1101001);
    }

    #[test]
    fn test_hash_of_absent_point() {
        assert_eq!(hash_of(None, 16), None);
        assert_eq!(
            hash_of(Some(&Point::new(0.0, 23.0)), 5).unwrap().text(),
            "k"
        );
    }

    #[test]
    fn test_decode_known_hashes() {
        let cases = [
            ("ub188qkx0", 45.123446, 35.876563),
            ("ub188qkx3", 45.123489, 35.876606),
            ("ub188qkwc", 45.123403, 35.876606),
        ];

        for (text, lat, lng) in cases {
            let p = decode(text).unwrap().unwrap();
            assert!((p.latitude() - lat).abs() < 1e-6, "{}", text);
            assert!((p.longitude() - lng).abs() < 1e-6, "{}", text);
        }
    }

    #[test]
    fn test_decode_absent_and_invalid() {
        assert_eq!(decode("").unwrap(), None);
        assert_eq!(
            decode("a"),
            Err(GeocellError::InvalidHashCharacter {
                character: 'a',
                position: 0
            })
        );
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("UB188QKX0").unwrap(), decode("ub188qkx0").unwrap());
    }

    #[test]
    fn test_decode_bounds_contains_encoded_point() {
        let p = Point::new(48.6667, -4.334);
        let rect = decode_bounds(encode(&p, 30).text()).unwrap().unwrap();
        assert!(rect.min().x < p.longitude() && p.longitude() <= rect.max().x);
        assert!(rect.min().y < p.latitude() && p.latitude() <= rect.max().y);
    }

    #[test]
    fn test_cell_from_bits_matches_text() {
        let hash = encode(&Point::new(-33.8688, 151.2093), 40);
        assert_eq!(
            Some(Cell::from_bits(hash.bits(), hash.size()).to_rect()),
            decode_bounds(hash.text()).unwrap()
        );
    }
}
