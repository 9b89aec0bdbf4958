//! Facade crate for ranking rated places by confidence.
//!
//! This crate re-exports the shared record types and the ranker, and exposes
//! the search-grid collector behind the `collector` feature.

#![forbid(unsafe_code)]

pub use placerank_core::{
    Confidence, LatLng, PlaceRecord, PlaceScorer, PlacesDocument, RankingMetadata, ScoreError,
    ZeroReviewPolicy,
};

pub use placerank_scorer::{
    RankError, RankOptions, Ranking, WilsonScorer, compute_score, rank, rank_with,
    ranking_interpretation,
};

#[cfg(feature = "collector")]
pub use placerank_collector::{
    CollectError, PlaceCollector, PlacesSource, PlacesSourceError, SearchGrid, SearchTile,
};
