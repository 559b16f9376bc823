//! The geohash Base32 alphabet and conversions between 5-bit groups and text.
//!
//! The alphabet omits `a`, `i`, `l` and `o`. Its order is what makes geohash
//! text interchangeable between implementations.

use crate::error::{GeocellError, Result};

/// The geohash Base32 alphabet; a character's position is its 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by one Base32 character.
pub const BITS_PER_CHAR: u8 = 5;

/// Longest text that fits a hash (12 x 5 = 60 bits).
pub const MAX_TEXT_LEN: usize = 12;

const BIT_MASK: u64 = 0x1f;
const WORD_BITS: u8 = 64;

const REVERSE: [i8; 128] = build_reverse();

const fn build_reverse() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// The 5-bit value of a lower-case Base32 byte, usable in const tables.
pub(crate) const fn value_of(byte: u8) -> Option<u8> {
    if byte >= 128 {
        return None;
    }
    let value = REVERSE[byte as usize];
    if value < 0 { None } else { Some(value as u8) }
}

/// The 5-bit value of a Base32 character. Upper-case input is accepted.
///
/// # Examples
///
/// ```
/// use geocell::base32::index_of;
///
/// assert_eq!(index_of('0'), Some(0));
/// assert_eq!(index_of('Z'), Some(31));
/// assert_eq!(index_of('a'), None);
/// ```
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    value_of(c.to_ascii_lowercase() as u8)
}

/// The Base32 character for the low 5 bits of `value`.
#[inline]
pub fn char_at(value: u8) -> char {
    ALPHABET[usize::from(value & BIT_MASK as u8)] as char
}

/// Like [`index_of`], but reports the offending character and its position.
pub(crate) fn lookup(c: char, position: usize) -> Result<u8> {
    index_of(c).ok_or_else(|| {
        log::debug!("rejecting geohash character {:?} at position {}", c, position);
        GeocellError::InvalidHashCharacter {
            character: c,
            position,
        }
    })
}

/// Render the top `size` bits of a left-justified word as Base32 text.
///
/// Only complete 5-bit groups become characters; a trailing partial group is
/// dropped.
///
/// # Examples
///
/// ```
/// use geocell::base32::text_from_bits;
///
/// assert_eq!(text_from_bits(0xaf777bbb00000000, 32), "pxvrrf");
/// assert_eq!(text_from_bits(0xaf777bbb00000000, 4), "");
/// ```
pub fn text_from_bits(bits: u64, size: u8) -> String {
    let chars = size.min(WORD_BITS) / BITS_PER_CHAR;

    (1..=chars)
        .map(|i| {
            let shift = WORD_BITS - i * BITS_PER_CHAR;
            char_at(((bits >> shift) & BIT_MASK) as u8)
        })
        .collect()
}

/// Parse Base32 text into a left-justified word and its bit count.
///
/// Returns `Ok(None)` for empty text. Every character contributes exactly five
/// bits, so the bit count is `5 * text.len()`.
///
/// # Examples
///
/// ```
/// use geocell::base32::bits_from_text;
///
/// let (bits, size) = bits_from_text("pxvrrf").unwrap().unwrap();
/// assert_eq!(bits, 0xaf777bb800000000);
/// assert_eq!(size, 30);
/// ```
pub fn bits_from_text(text: &str) -> Result<Option<(u64, u8)>> {
    let length = text.chars().count();

    if length == 0 {
        return Ok(None);
    }

    if length > MAX_TEXT_LEN {
        return Err(GeocellError::HashTooLong {
            length,
            max: MAX_TEXT_LEN,
        });
    }

    let mut bits = 0u64;
    for (position, c) in text.chars().enumerate() {
        bits = (bits << BITS_PER_CHAR) | u64::from(lookup(c, position)?);
    }

    // length <= 12, so the shift is at least 4.
    let size = length as u8 * BITS_PER_CHAR;
    Ok(Some((bits << (WORD_BITS - size), size)))
}
