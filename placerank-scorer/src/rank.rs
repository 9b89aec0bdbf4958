//! Order places by their confidence score.

use std::cmp::Ordering;

use log::{debug, info};
use placerank_core::{
    Confidence, PlaceRecord, PlaceScorer, PlacesDocument, RankingMetadata, ScoreError,
    ZeroReviewPolicy,
};

use crate::{RankError, WilsonScorer};

/// Name recorded in [`RankingMetadata::ranking_method`].
pub const RANKING_METHOD: &str = "Wilson Score Interval";

/// Knobs for [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RankOptions {
    /// Confidence level of the score interval.
    pub confidence: Confidence,
    /// Whether places without reviews stay in the output.
    pub zero_reviews: ZeroReviewPolicy,
}

impl RankOptions {
    /// Options for a raw confidence level, retaining zero-review places.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidConfidence`] unless `0 < confidence < 1`.
    pub fn new(confidence: f64) -> Result<Self, ScoreError> {
        Ok(Self {
            confidence: Confidence::new(confidence)?,
            zero_reviews: ZeroReviewPolicy::default(),
        })
    }

    /// Replace the zero-review policy.
    #[must_use]
    pub const fn with_zero_reviews(mut self, policy: ZeroReviewPolicy) -> Self {
        self.zero_reviews = policy;
        self
    }
}

/// Ranked places plus a summary of the pass that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    places: Vec<PlaceRecord>,
    metadata: RankingMetadata,
}

impl Ranking {
    /// Places in ranked order, each carrying its score.
    #[must_use]
    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    /// Summary of the ranking pass.
    #[must_use]
    pub const fn metadata(&self) -> &RankingMetadata {
        &self.metadata
    }

    /// Consume the ranking and return the ordered places.
    #[must_use]
    pub fn into_places(self) -> Vec<PlaceRecord> {
        self.places
    }

    /// Consume the ranking into a document ready to be written out.
    #[must_use]
    pub fn into_document(self) -> PlacesDocument {
        PlacesDocument {
            places: self.places,
            metadata: Some(self.metadata),
        }
    }
}

/// Score `records` with a [`WilsonScorer`] and order them best first.
///
/// The input is left untouched; the result holds scored copies. Places with
/// more evidence behind the same rating rank higher, places without reviews
/// come last (or are dropped, per [`RankOptions::zero_reviews`]), and equal
/// scores keep their input order.
///
/// # Errors
/// Returns [`RankError::InvalidRecord`] for the first record that cannot be
/// scored; nothing is ranked in that case.
///
/// # Examples
/// ```
/// use placerank_core::PlaceRecord;
/// use placerank_scorer::{RankOptions, rank};
///
/// let places = vec![
///     PlaceRecord::new("New spot", Some(5.0), 3),
///     PlaceRecord::new("Institution", Some(4.5), 500),
/// ];
/// let ranking = rank(&places, &RankOptions::default())?;
/// assert_eq!(ranking.places()[0].name, "Institution");
/// # Ok::<(), placerank_scorer::RankError>(())
/// ```
pub fn rank(records: &[PlaceRecord], options: &RankOptions) -> Result<Ranking, RankError> {
    let scorer = WilsonScorer::new(options.confidence);
    let places = rank_with(records, &scorer, options.zero_reviews)?;
    let metadata = ranking_metadata(options.confidence, records.len(), places.len());
    debug!(
        "ranked {} of {} places at confidence {} (z = {})",
        places.len(),
        records.len(),
        options.confidence,
        scorer.z()
    );
    Ok(Ranking { places, metadata })
}

/// Order `records` by any [`PlaceScorer`].
///
/// Sorting is stable and places without reviews always follow reviewed
/// ones, even when a reviewed place scores `0.0`.
///
/// # Errors
/// Returns [`RankError::InvalidRecord`] for the first record the scorer
/// rejects.
pub fn rank_with<S>(
    records: &[PlaceRecord],
    scorer: &S,
    policy: ZeroReviewPolicy,
) -> Result<Vec<PlaceRecord>, RankError>
where
    S: PlaceScorer + ?Sized,
{
    let mut scored = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let score = scorer
            .score(record)
            .map_err(|source| RankError::InvalidRecord {
                index,
                name: record.name.clone(),
                source,
            })?;
        if policy == ZeroReviewPolicy::Drop && !record.has_reviews() {
            continue;
        }
        scored.push((record.has_reviews(), score, record));
    }

    let dropped = records.len().saturating_sub(scored.len());
    if dropped > 0 {
        info!("dropped {dropped} places without reviews");
    }

    scored.sort_by(|(left_reviewed, left, _), (right_reviewed, right, _)| {
        right_reviewed
            .cmp(left_reviewed)
            .then_with(|| right.partial_cmp(left).unwrap_or(Ordering::Equal))
    });
    Ok(scored
        .into_iter()
        .map(|(_, score, record)| record.scored(score))
        .collect())
}

/// Describe how a confidence level trades rating against review count.
#[must_use]
pub fn ranking_interpretation(confidence: Confidence) -> &'static str {
    match confidence.get() {
        level if level >= 0.99 => {
            "Conservative ranking: Strongly favors established places with many ratings"
        }
        level if level >= 0.95 => {
            "Balanced ranking: Moderate balance between ratings and rating count"
        }
        level if level >= 0.90 => {
            "Aggressive ranking: Gives more weight to places with high ratings but fewer reviews"
        }
        _ => "Very aggressive ranking: Strongly favors high ratings regardless of review count",
    }
}

fn ranking_metadata(confidence: Confidence, total: usize, ranked: usize) -> RankingMetadata {
    RankingMetadata {
        ranking_method: RANKING_METHOD.to_owned(),
        confidence_level: confidence.get(),
        total_restaurants: total,
        ranked_restaurants: ranked,
        dropped_zero_reviews: total.saturating_sub(ranked),
        ranking_interpretation: ranking_interpretation(confidence).to_owned(),
    }
}
