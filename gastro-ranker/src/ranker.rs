//! Select and project the best restaurant candidates.
#![forbid(unsafe_code)]

use std::cmp::Reverse;

use gastro_core::{
    RankedResult, RankedReview, RestaurantRecord, Review, Scorer, UNKNOWN_PRICE_LEVEL,
};
use log::debug;

use crate::{ReviewVolumeScorer, format_hours, normalise_scores, round_score};

/// Number of results returned when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 3;

/// Maximum number of reviews carried into each result.
pub const REVIEWS_PER_RESULT: usize = 2;

/// Ranks restaurant records with a pluggable [`Scorer`].
///
/// # Examples
/// ```
/// use gastro_core::RestaurantRecord;
/// use gastro_ranker::{DEFAULT_TOP_N, Ranker};
///
/// let ranker: Ranker = Ranker::default();
/// assert_eq!(ranker.top_n(), DEFAULT_TOP_N);
///
/// let records = [RestaurantRecord::named("Solo").with_rating(3.5).with_review_count(12)];
/// let top = ranker.rank(&records);
/// assert_eq!(top.len(), 1);
/// assert!((top[0].score - 10.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker<S = ReviewVolumeScorer> {
    scorer: S,
    top_n: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(ReviewVolumeScorer, DEFAULT_TOP_N)
    }
}

/// A scoreable record paired with its input position.
#[derive(Debug)]
struct ScoredCandidate<'a> {
    index: usize,
    score: f64,
    record: &'a RestaurantRecord,
}

impl<S: Scorer> Ranker<S> {
    /// Build a ranker keeping at most `top_n` results.
    #[must_use]
    pub const fn new(scorer: S, top_n: usize) -> Self {
        Self { scorer, top_n }
    }

    /// Change how many results are kept.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Number of results kept.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank `records` and project the best into [`RankedResult`] values.
    ///
    /// Records the scorer cannot rate are skipped. The output is ordered by
    /// descending normalised score; equal scores keep their input order.
    #[must_use]
    pub fn rank(&self, records: &[RestaurantRecord]) -> Vec<RankedResult> {
        let mut candidates = self.score_candidates(records);
        let dropped = records.len().saturating_sub(candidates.len());
        if dropped > 0 {
            debug!("skipped {dropped} of {} unscoreable restaurant records", records.len());
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        let raw: Vec<f64> = candidates.iter().map(|candidate| candidate.score).collect();
        for (candidate, normalised) in candidates.iter_mut().zip(normalise_scores(&raw)) {
            candidate.score = normalised;
        }
        candidates.sort_by(|left, right| {
            right
                .score
                .total_cmp(&left.score)
                .then_with(|| left.index.cmp(&right.index))
        });

        candidates
            .into_iter()
            .take(self.top_n)
            .map(|candidate| project(candidate.record, candidate.score))
            .collect()
    }

    fn score_candidates<'a>(&self, records: &'a [RestaurantRecord]) -> Vec<ScoredCandidate<'a>> {
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                S::sanitise(self.scorer.raw_score(record)).map(|score| ScoredCandidate {
                    index,
                    score,
                    record,
                })
            })
            .collect()
    }
}

/// Rank `records` with the default scorer and keep the best `n`.
///
/// Returns an empty list when no record carries both a rating and a rating
/// count.
#[must_use]
pub fn rank_top_n(records: &[RestaurantRecord], n: usize) -> Vec<RankedResult> {
    Ranker::new(ReviewVolumeScorer, n).rank(records)
}

/// Project a record into the output shape, applying every default in one
/// place.
fn project(record: &RestaurantRecord, score: f64) -> RankedResult {
    RankedResult {
        name: record.name.clone(),
        address: record.address.clone(),
        phone_number: record.phone_number.clone(),
        wheelchair_accessible_entrance: record.wheelchair_accessible_entrance.unwrap_or(false),
        takeout: record.takeout.unwrap_or(false),
        price_level: record
            .price_level
            .and_then(|level| i8::try_from(level).ok())
            .unwrap_or(UNKNOWN_PRICE_LEVEL),
        delivery: record.delivery.unwrap_or(false),
        reservable: record.reservable.unwrap_or(false),
        website: record.website.clone(),
        score: round_score(score),
        opening_hours: format_hours(record.weekday_text()),
        reviews: latest_reviews(record.reviews()),
    }
}

/// Newest reviews first; reviews without a timestamp count as time `0`.
pub(crate) fn latest_reviews(reviews: &[Review]) -> Vec<RankedReview> {
    let mut ordered: Vec<&Review> = reviews.iter().collect();
    ordered.sort_by_key(|review| Reverse(review.recency()));
    ordered
        .into_iter()
        .take(REVIEWS_PER_RESULT)
        .map(RankedReview::from)
        .collect()
}
