//! Error types for geocell.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeocellError>;

/// Errors raised by fallible geocell operations.
///
/// Absent inputs (no point, an empty hash, zero precision) are not errors;
/// those surface as `None` or an empty collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocellError {
    /// A character outside the geohash Base32 alphabet.
    #[error("invalid geohash character {character:?} at position {position}")]
    InvalidHashCharacter { character: char, position: usize },

    /// A Base32 text carrying more bits than a hash can hold.
    #[error("geohash text of {length} characters exceeds the {max} character limit")]
    HashTooLong { length: usize, max: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<geocell_types::PointError> for GeocellError {
    fn from(err: geocell_types::PointError) -> Self {
        GeocellError::InvalidInput(err.to_string())
    }
}
