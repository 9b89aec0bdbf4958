//! Errors raised when scoring inputs fall outside their domain.

use thiserror::Error;

/// Invalid-argument conditions detected before any score is computed.
///
/// Zero reviews are not an error: they are the defined zero-evidence case
/// and score `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreError {
    /// The confidence level is not strictly between 0 and 1.
    #[error("confidence level {value} must lie strictly between 0 and 1")]
    InvalidConfidence {
        /// Rejected confidence level.
        value: f64,
    },
    /// A probability handed to the normal quantile is outside (0, 1).
    #[error("probability {value} must lie strictly between 0 and 1")]
    InvalidProbability {
        /// Rejected probability.
        value: f64,
    },
    /// The number of ratings is negative.
    #[error("rating count {count} must not be negative")]
    NegativeRatingCount {
        /// Rejected count.
        count: i64,
    },
    /// A reviewed place reports a rating outside the 1 to 5 star scale.
    #[error("rating {rating} is outside the 1-5 star scale")]
    RatingOutOfRange {
        /// Rejected rating.
        rating: f64,
    },
    /// A place claims reviews but carries no rating.
    #[error("{count} ratings reported without an average rating")]
    MissingRating {
        /// Number of ratings claimed.
        count: i64,
    },
}
