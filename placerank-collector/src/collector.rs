//! Walk a search grid and merge the places each tile returns.

use std::cmp::Ordering;
use std::collections::HashSet;

use log::{debug, info, warn};
use placerank_core::PlaceRecord;

use crate::{CollectError, PlacesSource, SearchGrid};

/// Collects unique places from a [`PlacesSource`] across a [`SearchGrid`].
#[derive(Debug, Clone)]
pub struct PlaceCollector<S> {
    source: S,
}

impl<S: PlacesSource> PlaceCollector<S> {
    /// Wrap a places source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrow the wrapped source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Release the wrapped source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Search every tile of `grid` in order and return the unique places.
    ///
    /// The first sighting of a `place_id` wins; later sightings in
    /// overlapping tiles are discarded. Records without a `place_id` cannot
    /// be deduplicated and are skipped. The result is ordered by raw rating
    /// (see [`order_by_raw_rating`]) as a convenience for inspection; the
    /// ranker reorders by confidence anyway.
    ///
    /// # Errors
    /// Returns [`CollectError::Source`] for the first tile whose search
    /// fails. Places gathered before the failure are discarded.
    pub fn collect(&self, grid: &SearchGrid) -> Result<Vec<PlaceRecord>, CollectError> {
        let total = grid.len();
        info!("searching {total} tiles across {} rings", grid.rings());

        let mut seen = HashSet::new();
        let mut places = Vec::new();
        for (index, tile) in grid.tiles().iter().enumerate() {
            let found = self
                .source
                .search_nearby(tile)
                .map_err(|source| CollectError::Source {
                    tile: index,
                    source,
                })?;
            info!(
                "processing {} places from tile {}/{total}",
                found.len(),
                index + 1
            );
            absorb(&mut seen, &mut places, found);
        }

        info!("found {} unique places", places.len());
        order_by_raw_rating(&mut places);
        Ok(places)
    }
}

fn absorb(seen: &mut HashSet<String>, places: &mut Vec<PlaceRecord>, found: Vec<PlaceRecord>) {
    for place in found {
        let Some(id) = place.place_id.as_deref() else {
            warn!("skipping place '{}' without a place id", place.name);
            continue;
        };
        if seen.insert(id.to_owned()) {
            places.push(place);
        } else {
            debug!("skipping duplicate place '{id}'");
        }
    }
}

/// Sort places by rating, then review count, both descending.
///
/// Missing ratings count as `0.0`. The sort is stable, so equal places keep
/// their discovery order.
///
/// # Examples
/// ```
/// use placerank_collector::order_by_raw_rating;
/// use placerank_core::PlaceRecord;
///
/// let mut places = vec![
///     PlaceRecord::new("New", None, 0),
///     PlaceRecord::new("Busy", Some(4.4), 900),
///     PlaceRecord::new("Quiet", Some(4.4), 12),
/// ];
/// order_by_raw_rating(&mut places);
/// let names: Vec<_> = places.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Busy", "Quiet", "New"]);
/// ```
pub fn order_by_raw_rating(places: &mut [PlaceRecord]) {
    places.sort_by(|a, b| compare_raw(b, a));
}

fn compare_raw(a: &PlaceRecord, b: &PlaceRecord) -> Ordering {
    a.rating
        .unwrap_or(0.0)
        .total_cmp(&b.rating.unwrap_or(0.0))
        .then_with(|| a.rating_count.cmp(&b.rating_count))
}
