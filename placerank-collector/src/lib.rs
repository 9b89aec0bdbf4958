//! Gather places around a point from a places provider.
//!
//! Nearby-search endpoints cap how many results one query returns, so a
//! wide area is covered by many small, overlapping searches:
//! - [`SearchGrid::plan`] lays out concentric rings of search tiles around
//!   a centre.
//! - [`PlacesSource`] is the narrow seam to the provider: one tile in, the
//!   places it found out. No network implementation ships here.
//! - [`PlaceCollector`] walks the grid, keeps the first sighting of every
//!   place identifier, and orders the result by raw rating.
//!
//! # Examples
//!
//! ```
//! use placerank_collector::{PlaceCollector, PlacesSource, PlacesSourceError, SearchGrid, SearchTile};
//! use placerank_core::{LatLng, PlaceRecord};
//!
//! struct OnePlace;
//!
//! impl PlacesSource for OnePlace {
//!     fn search_nearby(&self, _tile: &SearchTile) -> Result<Vec<PlaceRecord>, PlacesSourceError> {
//!         Ok(vec![PlaceRecord::new("Diner", Some(4.2), 31).with_place_id("diner")])
//!     }
//! }
//!
//! let grid = SearchGrid::plan(LatLng::new(38.8784, -104.767914), 1.0, 500.0)?;
//! assert_eq!(grid.len(), 9);
//! let places = PlaceCollector::new(OnePlace).collect(&grid)?;
//! assert_eq!(places.len(), 1);
//! # Ok::<(), placerank_collector::CollectError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod collector;
mod error;
mod grid;
mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use collector::{PlaceCollector, order_by_raw_rating};
pub use error::CollectError;
pub use grid::{DEFAULT_TILE_RADIUS_M, MAX_TILES, SearchGrid, SearchTile};
pub use source::{PlacesSource, PlacesSourceError};
