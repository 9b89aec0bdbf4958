//! Error types raised while ranking a batch of places.
#![forbid(unsafe_code)]

use placerank_core::ScoreError;
use thiserror::Error;

/// Errors raised by [`rank`](crate::rank) and [`rank_with`](crate::rank_with).
///
/// Ranking is all-or-nothing: the first bad record aborts the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// A record could not be scored.
    #[error("place #{index} ({name:?}) cannot be ranked: {source}")]
    InvalidRecord {
        /// Position of the record in the input.
        index: usize,
        /// Display name of the record.
        name: String,
        /// Why scoring failed.
        #[source]
        source: ScoreError,
    },
}
