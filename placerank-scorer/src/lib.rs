//! Confidence-interval ranking for rated places.
//!
//! The crate turns a star rating and the number of reviews behind it into a
//! single score: the lower bound of the Wilson score interval at a chosen
//! confidence level. Ranking by that bound rewards places whose ratings are
//! backed by plenty of evidence:
//! - [`compute_score`] scores one rating/count pair.
//! - [`WilsonScorer`] implements [`PlaceScorer`](placerank_core::PlaceScorer)
//!   with the critical value computed once per batch.
//! - [`rank`] scores a batch and orders it best first, honouring the
//!   configured [`ZeroReviewPolicy`](placerank_core::ZeroReviewPolicy).
//!
//! Everything here is pure and synchronous; no state is shared between
//! calls.
//!
//! # Examples
//!
//! ```
//! use placerank_core::{PlaceRecord, ZeroReviewPolicy};
//! use placerank_scorer::{RankOptions, rank};
//!
//! let places = vec![
//!     PlaceRecord::new("No reviews yet", None, 0),
//!     PlaceRecord::new("Corner bistro", Some(4.8), 120),
//! ];
//! let options = RankOptions::new(0.99)?.with_zero_reviews(ZeroReviewPolicy::Drop);
//! let ranking = rank(&places, &options).expect("valid places");
//! assert_eq!(ranking.places().len(), 1);
//! assert_eq!(ranking.metadata().dropped_zero_reviews, 1);
//! # Ok::<(), placerank_core::ScoreError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod quantile;
mod rank;
mod wilson;

pub use error::RankError;
pub use quantile::{standard_normal_quantile, two_tailed_z};
pub use rank::{RANKING_METHOD, RankOptions, Ranking, rank, rank_with, ranking_interpretation};
pub use wilson::{MAX_STARS, MIN_STARS, WilsonScorer, compute_score};
