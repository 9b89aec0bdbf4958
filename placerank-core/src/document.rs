//! The intermediate file shared by the collect and rank stages.

use serde::{Deserialize, Serialize};

use crate::PlaceRecord;

/// A list of places plus, once ranked, how the order was produced.
///
/// The places live under `restaurants`, the key the collection stage has
/// always written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacesDocument {
    /// Places in file order.
    #[serde(rename = "restaurants", alias = "places", default)]
    pub places: Vec<PlaceRecord>,
    /// Present once the document has been ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RankingMetadata>,
}

impl PlacesDocument {
    /// Wrap unranked places.
    #[must_use]
    pub const fn new(places: Vec<PlaceRecord>) -> Self {
        Self {
            places,
            metadata: None,
        }
    }
}

/// Summary of a ranking pass written alongside the ranked places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMetadata {
    /// Name of the scoring method.
    pub ranking_method: String,
    /// Confidence level the scores were computed at.
    pub confidence_level: f64,
    /// Places read before ranking.
    pub total_restaurants: usize,
    /// Places written after ranking.
    pub ranked_restaurants: usize,
    /// Places left out because they had no reviews.
    pub dropped_zero_reviews: usize,
    /// Plain-language reading of the confidence level.
    pub ranking_interpretation: String,
}
