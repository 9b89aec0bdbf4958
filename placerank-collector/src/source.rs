//! The seam between the collector and a places provider.

use placerank_core::PlaceRecord;
use thiserror::Error;

use crate::SearchTile;

/// Answer nearby-place searches for one tile at a time.
///
/// Implementations translate a [`SearchTile`] into a provider query and the
/// response into [`PlaceRecord`]s. They should fill
/// [`PlaceRecord::place_id`] because the collector deduplicates on it and
/// skips records without one.
///
/// # Examples
///
/// ```rust
/// use placerank_collector::{PlacesSource, PlacesSourceError, SearchTile};
/// use placerank_core::{LatLng, PlaceRecord};
///
/// struct Offline;
///
/// impl PlacesSource for Offline {
///     fn search_nearby(&self, tile: &SearchTile) -> Result<Vec<PlaceRecord>, PlacesSourceError> {
///         Err(PlacesSourceError::Network {
///             message: format!("no route to provider for ring {}", tile.ring),
///         })
///     }
/// }
///
/// let tile = SearchTile::new(0, LatLng::new(0.0, 0.0), 500.0);
/// assert!(Offline.search_nearby(&tile).is_err());
/// ```
pub trait PlacesSource {
    /// Return the places the provider reports inside `tile`.
    ///
    /// # Errors
    /// Returns [`PlacesSourceError`] when the provider cannot be reached or
    /// its answer cannot be understood.
    fn search_nearby(&self, tile: &SearchTile) -> Result<Vec<PlaceRecord>, PlacesSourceError>;
}

impl<S: PlacesSource + ?Sized> PlacesSource for &S {
    fn search_nearby(&self, tile: &SearchTile) -> Result<Vec<PlaceRecord>, PlacesSourceError> {
        (**self).search_nearby(tile)
    }
}

/// Failures a [`PlacesSource`] reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacesSourceError {
    /// The provider did not answer in time.
    #[error("places request timed out after {timeout_secs}s")]
    Timeout {
        /// Timeout that elapsed.
        timeout_secs: u64,
    },
    /// The provider answered with an error status.
    #[error("places request failed with status {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Provider's explanation.
        message: String,
    },
    /// The provider could not be reached.
    #[error("places request failed: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },
    /// The provider's answer could not be decoded.
    #[error("failed to parse places response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}
