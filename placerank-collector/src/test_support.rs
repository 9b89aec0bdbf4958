//! Test helpers for driving the collector without a network provider.
#![forbid(unsafe_code)]

use std::cell::RefCell;

use placerank_core::PlaceRecord;

use crate::{PlacesSource, PlacesSourceError, SearchTile};

/// Scripted response for one search.
pub type ScriptedResponse = Result<Vec<PlaceRecord>, PlacesSourceError>;

/// [`PlacesSource`] that replays canned responses in call order.
///
/// The n-th search receives the n-th response; searches past the end of the
/// script find nothing. Every searched tile is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPlacesSource {
    responses: Vec<ScriptedResponse>,
    searched: RefCell<Vec<SearchTile>>,
}

impl ScriptedPlacesSource {
    /// Create a source that answers searches with `responses` in order.
    #[must_use]
    pub const fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            responses,
            searched: RefCell::new(Vec::new()),
        }
    }

    /// Tiles searched so far, in call order.
    #[must_use]
    pub fn searched(&self) -> Vec<SearchTile> {
        self.searched.borrow().clone()
    }
}

impl PlacesSource for ScriptedPlacesSource {
    fn search_nearby(&self, tile: &SearchTile) -> Result<Vec<PlaceRecord>, PlacesSourceError> {
        let mut searched = self.searched.borrow_mut();
        let call = searched.len();
        searched.push(*tile);
        self.responses
            .get(call)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
