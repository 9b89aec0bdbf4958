//! Score places by the strength of their ratings.
//!
//! The [`PlaceScorer`] trait turns a [`PlaceRecord`](crate::PlaceRecord) into
//! a single comparable number. Ranking code is written against the trait so
//! alternative scoring strategies can share the same ordering rules.

use crate::{PlaceRecord, ScoreError};

/// Calculate a ranking score for a place.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent batches. Unlike a best-effort relevance score, this one
/// is fallible: malformed records are reported rather than silently scored.
///
/// Implementations must:
/// - Return `0.0` for places without reviews.
/// - Produce finite scores within `0.0..=1.0`.
///
/// Use [`PlaceScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use placerank_core::{PlaceRecord, PlaceScorer, ScoreError};
///
/// struct RawRating;
///
/// impl PlaceScorer for RawRating {
///     fn score(&self, place: &PlaceRecord) -> Result<f64, ScoreError> {
///         if !place.has_reviews() {
///             return Ok(0.0);
///         }
///         let rating = place.rating.ok_or(ScoreError::MissingRating {
///             count: place.rating_count,
///         })?;
///         Ok(Self::sanitise((rating - 1.0) / 4.0))
///     }
/// }
///
/// let place = PlaceRecord::new("Cafe", Some(5.0), 10);
/// assert_eq!(RawRating.score(&place), Ok(1.0));
/// ```
pub trait PlaceScorer: Send + Sync {
    /// Return a score for `place`.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when the record cannot be scored.
    fn score(&self, place: &PlaceRecord) -> Result<f64, ScoreError>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
