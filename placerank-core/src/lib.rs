//! Core domain types for the placerank workspace.
//!
//! The crate defines the shape of a place as it travels between the
//! collection and ranking stages, the validated knobs that steer ranking,
//! and the [`PlaceScorer`] seam that scoring strategies implement. It
//! performs no I/O; callers decide where records come from and where the
//! ranked output goes.

#![forbid(unsafe_code)]

pub mod confidence;
pub mod document;
mod error;
pub mod place;
mod scorer;

pub use confidence::{Confidence, ZeroReviewPolicy};
pub use document::{PlacesDocument, RankingMetadata};
pub use error::ScoreError;
pub use place::{LatLng, PlaceRecord};
pub use scorer::PlaceScorer;
