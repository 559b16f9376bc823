//! The geohash value: left-justified bits, their count, and the Base32 text.

use crate::base32::{self, BITS_PER_CHAR, MAX_TEXT_LEN};
use crate::codec::Cell;
use crate::error::{GeocellError, Result};
use crate::neighbour::{self, Direction};
use geocell_types::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// The maximum number of bits a hash carries.
pub const MAX_HASH_BITS: u8 = 60;

/// 5-bit character values of a hash text.
pub(crate) type Digits = SmallVec<[u8; MAX_TEXT_LEN]>;

/// An immutable geohash.
///
/// A hash is built once from a 64-bit word and a bit count (`size`, at most
/// [`MAX_HASH_BITS`]). The top `size` bits of the word hold the interleaved
/// subdivision choices, longitude first. From those the hash derives:
///
/// - `value`: the same bits right-justified
/// - `text`: one Base32 character per complete 5-bit group
///
/// A `size` that is not a multiple of five still counts in `bits` and `value`,
/// but its trailing partial group does not appear in `text`.
///
/// # Examples
///
/// ```
/// use geocell::Hash;
///
/// let hash = Hash::new(0xaf777bbb00000000, 32);
/// assert_eq!(hash.size(), 32);
/// assert_eq!(hash.value(), 0xaf777bbb);
/// assert_eq!(hash.text(), "pxvrrf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawHash", into = "RawHash")]
pub struct Hash {
    bits: u64,
    size: u8,
    value: u64,
    text: String,
}

/// Wire form of a hash; everything else is derived on read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawHash {
    bits: u64,
    size: u8,
}

impl Hash {
    /// Build a hash from left-justified bits. `size` saturates at [`MAX_HASH_BITS`].
    pub fn new(bits: u64, size: u8) -> Self {
        let size = size.min(MAX_HASH_BITS);
        let value = bits.checked_shr(u32::from(64 - size)).unwrap_or(0);

        Self {
            bits,
            size,
            value,
            text: base32::text_from_bits(bits, size),
        }
    }

    /// Parse a Base32 geohash text.
    ///
    /// Returns `Ok(None)` for empty text. Upper-case characters are accepted.
    ///
    /// # Errors
    ///
    /// [`GeocellError::InvalidHashCharacter`] for a character outside the
    /// alphabet, [`GeocellError::HashTooLong`] beyond 12 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::Hash;
    ///
    /// let hash = Hash::from_text("pxvrrf")?.unwrap();
    /// assert_eq!(hash, Hash::new(0xaf777bb800000000, 30));
    ///
    /// assert!(Hash::from_text("")?.is_none());
    /// assert!(Hash::from_text("pxa").is_err());
    /// # Ok::<(), geocell::GeocellError>(())
    /// ```
    pub fn from_text(text: &str) -> Result<Option<Self>> {
        Ok(base32::bits_from_text(text)?.map(|(bits, size)| Self::new(bits, size)))
    }

    /// The bits right-justified in a `u64`.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The bits left-justified in a `u64`, starting at the most significant bit.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The number of meaningful bits in [`Hash::bits`].
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The Base32 text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the hash is too short to produce any text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The rectangle denoted by all `size` bits, as a `geo::Rect`
    /// (x = longitude, y = latitude).
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::Hash;
    ///
    /// let rect = Hash::from_text("s")?.unwrap().bounds();
    /// assert_eq!(rect.min().x, 0.0);
    /// assert_eq!(rect.max().x, 45.0);
    /// assert_eq!(rect.min().y, 0.0);
    /// assert_eq!(rect.max().y, 45.0);
    /// # Ok::<(), geocell::GeocellError>(())
    /// ```
    pub fn bounds(&self) -> geo::Rect<f64> {
        Cell::from_bits(self.bits, self.size).to_rect()
    }

    /// The midpoint of [`Hash::bounds`], normalized.
    pub fn center(&self) -> Point {
        Cell::from_bits(self.bits, self.size).center()
    }

    /// The adjacent cell in `direction`, at the precision of the text.
    ///
    /// Returns `None` when the hash has no text.
    pub fn neighbour(&self, direction: Direction) -> Option<Self> {
        if self.is_empty() {
            return None;
        }

        let mut digits = self.digits();
        neighbour::shift(&mut digits, direction);
        Some(Self::from_digits(&digits))
    }

    /// The 5-bit values of the text characters.
    pub(crate) fn digits(&self) -> Digits {
        let chars = self.size / BITS_PER_CHAR;

        (1..=chars)
            .map(|i| ((self.bits >> (64 - i * BITS_PER_CHAR)) & 0x1f) as u8)
            .collect()
    }

    /// Build a hash from 5-bit character values; extra digits past 12 are ignored.
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        let digits = &digits[..digits.len().min(MAX_TEXT_LEN)];
        if digits.is_empty() {
            return Self::new(0, 0);
        }

        let bits = digits
            .iter()
            .fold(0u64, |acc, &d| (acc << BITS_PER_CHAR) | u64::from(d & 0x1f));
        let size = digits.len() as u8 * BITS_PER_CHAR;

        Self::new(bits << (64 - size), size)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Hash {
    type Err = GeocellError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)?
            .ok_or_else(|| GeocellError::InvalidInput("empty geohash text".to_string()))
    }
}

impl From<RawHash> for Hash {
    fn from(raw: RawHash) -> Self {
        Self::new(raw.bits, raw.size)
    }
}

impl From<Hash> for RawHash {
    fn from(hash: Hash) -> Self {
        Self {
            bits: hash.bits,
            size: hash.size,
        }
    }
}

impl AsRef<str> for Hash {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
