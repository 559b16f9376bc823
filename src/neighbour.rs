//! Adjacent geohash cells.
//!
//! The neighbour of a hash only differs in its last character unless that
//! character sits on the edge of its parent cell, in which case the parent
//! moves first. Which characters sit on an edge, and what they turn into,
//! depends on the direction and on whether the text length is odd or even:
//! each character carries five bits, so the axis that starts a character
//! alternates from one character to the next.
//!
//! Based on the table approach of Dave Troy's MIT licensed geohash-js.

use crate::base32;
use crate::codec;
use crate::error::Result;
use crate::hash::Hash;
use geocell_types::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// A compass direction between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Resolve a single-byte direction code (`0x01` north, `0x02` east,
    /// `0x08` south, `0x10` west). Unknown codes resolve to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::Direction;
    ///
    /// assert_eq!(Direction::from_code(0x08), Some(Direction::South));
    /// assert_eq!(Direction::from_code(128), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Direction::North),
            0x02 => Some(Direction::East),
            0x08 => Some(Direction::South),
            0x10 => Some(Direction::West),
            _ => None,
        }
    }

    /// The single-byte code of this direction.
    pub fn code(self) -> u8 {
        match self {
            Direction::North => 0x01,
            Direction::East => 0x02,
            Direction::South => 0x08,
            Direction::West => 0x10,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Lookup tables for one direction, indexed by text length parity
/// (`0` even, `1` odd).
struct DirectionTables {
    /// `transitions[parity][v]` is the value replacing a last character of value `v`.
    transitions: [[u8; 32]; 2],
    /// Bit `v` is set when a last character of value `v` lies on the parent's edge.
    borders: [u32; 2],
}

impl DirectionTables {
    /// `order[i]` is the character whose neighbour is `ALPHABET[i]`.
    const fn new(orders: [&[u8; 32]; 2], borders: [&[u8]; 2]) -> Self {
        Self {
            transitions: [transition_table(orders[0]), transition_table(orders[1])],
            borders: [border_mask(borders[0]), border_mask(borders[1])],
        }
    }
}

const fn transition_table(order: &[u8; 32]) -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut i = 0;
    while i < order.len() {
        match base32::value_of(order[i]) {
            Some(value) => table[value as usize] = i as u8,
            None => panic!("neighbour table holds a non-Base32 character"),
        }
        i += 1;
    }
    table
}

const fn border_mask(chars: &[u8]) -> u32 {
    let mut mask = 0u32;
    let mut i = 0;
    while i < chars.len() {
        match base32::value_of(chars[i]) {
            Some(value) => mask |= 1 << value,
            None => panic!("border table holds a non-Base32 character"),
        }
        i += 1;
    }
    mask
}

const EVEN_NORTH: &[u8; 32] = b"p0r21436x8zb9dcf5h7kjnmqesgutwvy";
const ODD_NORTH: &[u8; 32] = b"bc01fg45238967deuvhjyznpkmstqrwx";
const EVEN_SOUTH: &[u8; 32] = b"14365h7k9dcfesgujnmqp0r2twvyx8zb";
const ODD_SOUTH: &[u8; 32] = b"238967debc01fg45kmstqrwxuvhjyznp";

/// Indexed by [`Direction::index`]. East/west are north/south with the parities
/// swapped.
static TABLES: [DirectionTables; 4] = [
    DirectionTables::new([EVEN_NORTH, ODD_NORTH], [b"prxz", b"bcfguvyz"]),
    DirectionTables::new([ODD_NORTH, EVEN_NORTH], [b"bcfguvyz", b"prxz"]),
    DirectionTables::new([EVEN_SOUTH, ODD_SOUTH], [b"028b", b"0145hjnp"]),
    DirectionTables::new([ODD_SOUTH, EVEN_SOUTH], [b"0145hjnp", b"028b"]),
];

/// Move 5-bit character values one cell in `direction`, in place.
///
/// Recurses into the parent while the last character crosses its parent's
/// edge. A single character has no parent, so it wraps around the globe.
pub(crate) fn shift(digits: &mut [u8], direction: Direction) {
    let parity = digits.len() % 2;
    let Some((last, parent)) = digits.split_last_mut() else {
        return;
    };

    let tables = &TABLES[direction.index()];
    let value = usize::from(*last & 0x1f);

    if tables.borders[parity] & (1 << value) != 0 && !parent.is_empty() {
        shift(parent, direction);
    }

    *last = tables.transitions[parity][value];
}

/// The Base32 text of the cell adjacent to `hash` in `direction`.
///
/// Empty text yields empty text. The result is lower-case and has the same
/// length as the input.
///
/// # Errors
///
/// [`crate::GeocellError::InvalidHashCharacter`] if `hash` holds a character
/// outside the alphabet.
///
/// # Examples
///
/// ```
/// use geocell::{Direction, neighbour::neighbour};
///
/// assert_eq!(neighbour("ub188qkx0", Direction::North)?, "ub188qkx2");
/// assert_eq!(neighbour("ub188qkx0", Direction::South)?, "ub188qkwb");
/// assert_eq!(neighbour("ub188qkx0", Direction::East)?, "ub188qkx1");
/// assert_eq!(neighbour("ub188qkx0", Direction::West)?, "ub188qkrp");
/// assert_eq!(neighbour("", Direction::North)?, "");
/// # Ok::<(), geocell::GeocellError>(())
/// ```
pub fn neighbour(hash: &str, direction: Direction) -> Result<String> {
    let mut digits = hash
        .chars()
        .enumerate()
        .map(|(position, c)| base32::lookup(c, position))
        .collect::<Result<Vec<u8>>>()?;

    shift(&mut digits, direction);

    Ok(digits.into_iter().map(base32::char_at).collect())
}

/// The hash of `point` plus the neighbours on the side of the cell the point
/// leans towards.
///
/// The point is compared with the midpoint of its cell on each axis. Leaning
/// north or south adds that neighbour; leaning east or west adds that
/// neighbour; leaning both ways also adds the diagonal between them. An axis
/// on which the point sits exactly on the midpoint adds nothing. The result
/// therefore holds one to four hashes, always including the point's own,
/// and is never the full 3x3 block.
///
/// An absent point, or a precision too low to produce a Base32 character,
/// yields an empty result.
///
/// # Examples
///
/// ```
/// use geocell::{Point, neighbour::hash_and_neighbours};
///
/// let cells = hash_and_neighbours(Some(&Point::new(45.12354, 35.8766)), 40);
/// let mut texts: Vec<&str> = cells.iter().map(|h| h.text()).collect();
/// texts.sort();
/// assert_eq!(texts, ["ub188qkr", "ub188qkx", "ub188qs2", "ub188qs8"]);
/// ```
pub fn hash_and_neighbours(point: Option<&Point>, precision: u8) -> SmallVec<[Hash; 4]> {
    let mut cells = SmallVec::new();

    let Some(point) = point else {
        return cells;
    };

    let center = codec::encode(point, precision);
    if center.is_empty() {
        return cells;
    }

    // The text may carry fewer bits than the hash; lean against the text's cell.
    let middle = Hash::from_digits(&center.digits()).center();

    let vertical = lean(
        point.latitude(),
        middle.latitude(),
        Direction::North,
        Direction::South,
    );
    let horizontal = lean(
        point.longitude(),
        middle.longitude(),
        Direction::East,
        Direction::West,
    );

    if let Some(vertical) = vertical.and_then(|d| center.neighbour(d)) {
        let diagonal = horizontal.and_then(|d| vertical.neighbour(d));
        cells.push(vertical);
        cells.extend(diagonal);
    }

    cells.extend(horizontal.and_then(|d| center.neighbour(d)));
    cells.push(center);
    cells
}

fn lean(value: f64, middle: f64, above: Direction, below: Direction) -> Option<Direction> {
    match value.partial_cmp(&middle) {
        Some(Ordering::Greater) => Some(above),
        Some(Ordering::Less) => Some(below),
        _ => None,
    }
}
