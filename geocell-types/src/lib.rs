//! # geocell-types
//!
//! Value types shared by the geocell geohash toolkit.
//!
//! - **Point**: an immutable, normalized latitude/longitude pair
//! - **Boundary**: a two-corner container of normalized points
//!
//! Both are built on top of the `geo` crate's primitives and are serializable
//! with Serde.
//!
//! ## Examples
//!
//! ```rust
//! use geocell_types::point::Point;
//!
//! // Out-of-range values are folded back into the valid domain.
//! let p = Point::new(130.0, 200.0);
//! assert_eq!(p.latitude(), 90.0);
//! assert_eq!(p.longitude(), 0.0);
//! ```

pub mod boundary;
pub mod point;

pub use boundary::Boundary;
pub use point::{Point, PointError};
