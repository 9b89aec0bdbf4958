//! Error types raised while planning or running a collection.
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::PlacesSourceError;

/// Errors raised by [`SearchGrid::plan`](crate::SearchGrid::plan) and
/// [`PlaceCollector::collect`](crate::PlaceCollector::collect).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectError {
    /// The search centre is not a valid WGS84 position.
    #[error("search centre ({latitude}, {longitude}) is not a valid position")]
    InvalidCenter {
        /// Requested latitude.
        latitude: f64,
        /// Requested longitude.
        longitude: f64,
    },
    /// A radius is not a finite, positive distance.
    #[error("{field} must be a finite positive distance, got {value}")]
    InvalidRadius {
        /// Name of the offending setting.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Covering the area would take more searches than allowed.
    #[error("covering the area needs {tiles} searches, more than the limit of {limit}")]
    TooManyTiles {
        /// Searches the plan would need.
        tiles: usize,
        /// Upper bound on searches per plan.
        limit: usize,
    },
    /// The places provider failed for one tile.
    #[error("search {tile} failed: {source}")]
    Source {
        /// Index of the tile within the grid.
        tile: usize,
        /// Error reported by the source.
        #[source]
        source: PlacesSourceError,
    },
}
