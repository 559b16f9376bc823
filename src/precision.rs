//! Choosing a hash precision for a search radius.

use crate::distance::EARTH_RADIUS_KM;

/// The largest precision [`needed_precision`] reports; a hash holds at most
/// [`crate::MAX_HASH_BITS`], so anything above that is clamped on encode.
pub const MAX_NEEDED_PRECISION: u8 = 64;

/// The number of hash bits needed to resolve `radius_km`.
///
/// Each pair of bits halves the cell along both axes. Starting from half the
/// earth radius, the scale is halved once per bit pair for as long as it is
/// still at least `radius_km`, so the result is always even and never
/// increases as the radius grows. It saturates at [`MAX_NEEDED_PRECISION`],
/// which is also what a zero or negative radius yields; NaN yields `0`.
///
/// # Examples
///
/// ```
/// use geocell::precision::needed_precision;
///
/// assert_eq!(needed_precision(1.0), 24);
/// assert_eq!(needed_precision(10_000.0), 0);
/// ```
pub fn needed_precision(radius_km: f64) -> u8 {
    let mut scale = EARTH_RADIUS_KM / 2.0;
    let mut bits = 0u8;

    while scale >= radius_km && bits < MAX_NEEDED_PRECISION {
        scale /= 2.0;
        bits += 2;
    }

    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needed_precision_halving_radius() {
        let mut radius = EARTH_RADIUS_KM;

        for expected in (0..=64).step_by(2) {
            assert_eq!(needed_precision(radius), expected, "radius {}", radius);
            radius /= 2.0;
        }
    }

    #[test]
    fn test_needed_precision_saturates() {
        assert_eq!(needed_precision(EARTH_RADIUS_KM / 2f64.powi(40)), 64);
        assert_eq!(needed_precision(0.0), 64);
        assert_eq!(needed_precision(-1.0), 64);
        assert_eq!(needed_precision(f64::NAN), 0);
        assert_eq!(needed_precision(f64::INFINITY), 0);
    }

    #[test]
    fn test_needed_precision_is_monotonic() {
        let mut previous = u8::MAX;
        let mut radius = 0.0001;

        while radius < 20_000.0 {
            let bits = needed_precision(radius);
            assert!(bits <= previous);
            assert_eq!(bits % 2, 0);
            previous = bits;
            radius *= 1.7;
        }
    }
}
