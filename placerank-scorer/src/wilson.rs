//! Lower bound of the Wilson score interval for star ratings.
//!
//! A star rating is read as the share of positive outcomes among
//! `rating_count` trials: one star maps to a proportion of `0.0`, five stars
//! to `1.0`. The lower end of the Wilson interval around that proportion
//! grows towards the raw proportion as evidence accumulates, so a handful of
//! perfect reviews ranks below hundreds of very good ones.

use placerank_core::{Confidence, PlaceRecord, PlaceScorer, ScoreError};

use crate::quantile::two_tailed_z;

/// Lowest rating on the star scale.
pub const MIN_STARS: f64 = 1.0;
/// Highest rating on the star scale.
pub const MAX_STARS: f64 = 5.0;

/// Score a rating backed by `rating_count` reviews at `confidence`.
///
/// Returns `0.0` when there are no reviews, otherwise the lower Wilson bound
/// clamped to `0.0..=1.0`.
///
/// # Errors
/// - [`ScoreError::InvalidConfidence`] unless `0 < confidence < 1`. This is
///   checked first, even for places without reviews.
/// - [`ScoreError::NegativeRatingCount`] when `rating_count < 0`.
/// - [`ScoreError::RatingOutOfRange`] when reviews exist and `rating` is not
///   within `1.0..=5.0`.
///
/// # Examples
/// ```
/// use placerank_scorer::compute_score;
///
/// let few = compute_score(5.0, 3, 0.95)?;
/// let many = compute_score(4.5, 500, 0.95)?;
/// assert!(many > few);
/// assert_eq!(compute_score(4.0, 0, 0.95)?, 0.0);
/// # Ok::<(), placerank_core::ScoreError>(())
/// ```
pub fn compute_score(rating: f64, rating_count: i64, confidence: f64) -> Result<f64, ScoreError> {
    let level = Confidence::new(confidence)?;
    lower_bound(rating, rating_count, two_tailed_z(level))
}

/// [`PlaceScorer`] backed by the Wilson lower bound.
///
/// The critical value is derived once on construction, so scoring a batch
/// never revisits the normal quantile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonScorer {
    confidence: Confidence,
    z: f64,
}

impl WilsonScorer {
    /// Build a scorer for the given confidence level.
    #[must_use]
    pub fn new(confidence: Confidence) -> Self {
        Self {
            confidence,
            z: two_tailed_z(confidence),
        }
    }

    /// Confidence level this scorer applies.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Two-tailed critical value for [`WilsonScorer::confidence`].
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Score a bare rating and review count.
    ///
    /// # Errors
    /// Same as [`compute_score`], minus the confidence check.
    pub fn score_rating(&self, rating: f64, rating_count: i64) -> Result<f64, ScoreError> {
        lower_bound(rating, rating_count, self.z)
    }
}

impl Default for WilsonScorer {
    fn default() -> Self {
        Self::new(Confidence::default())
    }
}

impl PlaceScorer for WilsonScorer {
    fn score(&self, place: &PlaceRecord) -> Result<f64, ScoreError> {
        match place.rating_count {
            count if count < 0 => Err(ScoreError::NegativeRatingCount { count }),
            0 => Ok(0.0),
            count => {
                let rating = place.rating.ok_or(ScoreError::MissingRating { count })?;
                self.score_rating(rating, count)
            }
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the Wilson interval is defined over real-valued counts"
)]
fn lower_bound(rating: f64, rating_count: i64, z: f64) -> Result<f64, ScoreError> {
    if rating_count < 0 {
        return Err(ScoreError::NegativeRatingCount {
            count: rating_count,
        });
    }
    if rating_count == 0 {
        return Ok(0.0);
    }
    if !(MIN_STARS..=MAX_STARS).contains(&rating) {
        return Err(ScoreError::RatingOutOfRange { rating });
    }

    let n = rating_count as f64;
    let p_hat = (rating - MIN_STARS) / (MAX_STARS - MIN_STARS);
    let z_squared = z * z;

    let denominator = 1.0 + z_squared / n;
    let centre = p_hat + z_squared / (2.0 * n);
    let margin = z * (p_hat * (1.0 - p_hat) / n + z_squared / (4.0 * n * n)).sqrt();

    Ok(((centre - margin) / denominator).clamp(0.0, 1.0))
}
