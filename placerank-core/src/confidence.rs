//! Validated ranking knobs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// Confidence level of the score interval, strictly inside `(0, 1)`.
///
/// Higher levels widen the interval and penalise places with few reviews
/// more heavily.
///
/// # Examples
/// ```
/// use placerank_core::Confidence;
///
/// let level = Confidence::new(0.99)?;
/// assert_eq!(level.get(), 0.99);
/// assert_eq!(Confidence::default().get(), 0.95);
/// assert!(Confidence::new(1.0).is_err());
/// # Ok::<(), placerank_core::ScoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Level used when callers express no preference.
    pub const DEFAULT: Self = Self(0.95);

    /// Validate and wrap a confidence level.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidConfidence`] unless `value` is finite and
    /// strictly between 0 and 1.
    pub fn new(value: f64) -> Result<Self, ScoreError> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ScoreError::InvalidConfidence { value })
        }
    }

    /// Return the raw level.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the ranker does with places that have no reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroReviewPolicy {
    /// Keep them with a score of `0.0`, after every reviewed place.
    #[default]
    Retain,
    /// Leave them out of the ranked output.
    Drop,
}

impl ZeroReviewPolicy {
    /// Map a `drop_zero_reviews` flag onto a policy.
    #[must_use]
    pub const fn from_drop_flag(drop_zero_reviews: bool) -> Self {
        if drop_zero_reviews {
            Self::Drop
        } else {
            Self::Retain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5)]
    #[case(0.95)]
    #[case(0.999)]
    #[case(f64::MIN_POSITIVE)]
    fn accepts_open_unit_interval(#[case] value: f64) {
        let level = Confidence::new(value).expect("valid confidence");
        assert_eq!(level.get(), value);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.2)]
    #[case(1.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_values_outside_open_interval(#[case] value: f64) {
        let err = Confidence::new(value).expect_err("invalid confidence");
        assert!(matches!(err, ScoreError::InvalidConfidence { .. }));
    }

    #[rstest]
    fn deserialises_through_validation() {
        let ok: Confidence = serde_json::from_str("0.9").expect("decode confidence");
        assert_eq!(ok.get(), 0.9);
        assert!(serde_json::from_str::<Confidence>("1.2").is_err());
    }

    #[rstest]
    #[case(true, ZeroReviewPolicy::Drop)]
    #[case(false, ZeroReviewPolicy::Retain)]
    fn maps_drop_flag(#[case] flag: bool, #[case] expected: ZeroReviewPolicy) {
        assert_eq!(ZeroReviewPolicy::from_drop_flag(flag), expected);
    }
}
