//! Geohash cells for latitude/longitude points.
//!
//! Points are bucketed into hierarchical rectangular cells by interleaved
//! binary subdivision. Each cell has a 64-bit form and a Base32 text form, can
//! be decoded back into its midpoint or bounds, and has a neighbour in each
//! compass direction.
//!
//! ```rust
//! use geocell::{Direction, Point, codec, neighbour, precision};
//!
//! let point = Point::new(45.12345678, 35.87654321);
//! let hash = codec::encode(&point, 45);
//! assert_eq!(hash.text(), "ub188qkx0");
//!
//! let north = neighbour::neighbour(hash.text(), Direction::North)?;
//! assert_eq!(north, "ub188qkx2");
//!
//! let center = codec::decode(&north)?.expect("non-empty hash");
//! assert!(center.latitude() > point.latitude());
//!
//! // Bits needed to resolve a one kilometer radius.
//! assert_eq!(precision::needed_precision(1.0), 24);
//! # Ok::<(), geocell::GeocellError>(())
//! ```

pub mod base32;
pub mod codec;
pub mod config;
pub mod distance;
pub mod error;
pub mod hash;
pub mod indexer;
pub mod neighbour;
pub mod precision;

pub use config::Config;
pub use error::{GeocellError, Result};
pub use hash::{Hash, MAX_HASH_BITS};
pub use indexer::CellIndexer;
pub use neighbour::Direction;

pub use geocell_types::{Boundary, Point};

pub use codec::{decode, decode_bounds, encode, hash_of};
pub use distance::{DistanceMetric, EARTH_RADIUS_KM, distance, distance_between};
pub use neighbour::{hash_and_neighbours, neighbour};
pub use precision::needed_precision;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{CellIndexer, Config, GeocellError, Result};

    pub use crate::{Boundary, Direction, Hash, Point};

    pub use crate::codec::{decode, encode};

    pub use crate::neighbour::{hash_and_neighbours, neighbour};

    pub use crate::precision::needed_precision;

    pub use crate::distance::{DistanceMetric, distance};
}
