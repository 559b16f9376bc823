//! A configured front end for producing cells.
//!
//! [`CellIndexer`] pins a precision and distance metric from a [`Config`] so
//! callers building their own spatial index can bucket points consistently.

use crate::codec;
use crate::config::Config;
use crate::distance::{DistanceMetric, distance_between};
use crate::error::{GeocellError, Result};
use crate::hash::Hash;
use crate::neighbour::hash_and_neighbours;
use geocell_types::Point;
use smallvec::SmallVec;

/// Produces cell identifiers at a fixed precision.
///
/// # Examples
///
/// ```rust
/// use geocell::{CellIndexer, Config, Point};
///
/// let indexer = CellIndexer::new(Config::default().with_precision(40))?;
/// let point = Point::new(45.12354, 35.8766);
///
/// assert_eq!(indexer.cell(&point).text(), "ub188qkx");
/// assert_eq!(indexer.cells_near(&point).len(), 4);
/// # Ok::<(), geocell::GeocellError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CellIndexer {
    precision: u8,
    metric: DistanceMetric,
}

impl CellIndexer {
    /// Build an indexer from a configuration, validating it first.
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(GeocellError::Config)?;

        let precision = config.effective_precision();
        log::trace!(
            "cell indexer at {} bits ({} characters), {:?} distances",
            precision,
            precision / crate::base32::BITS_PER_CHAR,
            config.distance_metric
        );

        Ok(Self {
            precision,
            metric: config.distance_metric,
        })
    }

    /// The precision, in bits, of every cell this indexer produces.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// The cell holding `point`.
    pub fn cell(&self, point: &Point) -> Hash {
        codec::encode(point, self.precision)
    }

    /// The cell holding `point` plus the neighbours it leans towards.
    ///
    /// See [`hash_and_neighbours`] for which cells are included.
    pub fn cells_near(&self, point: &Point) -> SmallVec<[Hash; 4]> {
        hash_and_neighbours(Some(point), self.precision)
    }

    /// Distance between two points in kilometers, using the configured metric.
    pub fn distance(&self, p1: &Point, p2: &Point) -> f64 {
        distance_between(p1, p2, self.metric)
    }
}

impl Default for CellIndexer {
    fn default() -> Self {
        let config = Config::default();
        Self {
            precision: config.effective_precision(),
            metric: config.distance_metric,
        }
    }
}
