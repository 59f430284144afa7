//! Ranking utilities for restaurant candidates.
//!
//! The crate provides two cooperating capabilities:
//! - **Score ranking** rates each [`RestaurantRecord`] by
//!   `rating * log10(user_ratings_total + 1)`, min-max normalises the scores
//!   of every scoreable record into `0.0..=10.0`, and keeps the best `n`
//!   projected into [`RankedResult`](gastro_core::RankedResult) values.
//! - **Opening hours formatting** rewrites the free-text weekday lines of
//!   each selected record into `- Day: HH:MM AM - HH:MM PM`, falling back to
//!   a cosmetic clean-up when a line does not follow that shape.
//!
//! Neither step performs I/O or fails: unscoreable records are skipped and
//! unparseable hours are kept verbatim. [`write_top_list_file`] persists a
//! ranked list as JSON for downstream report and map rendering.
//!
//! # Examples
//!
//! ```
//! use gastro_core::RestaurantRecord;
//! use gastro_ranker::rank_top_n;
//!
//! let records = vec![
//!     RestaurantRecord::named("A").with_rating(5.0).with_review_count(100),
//!     RestaurantRecord::named("B").with_rating(4.0).with_review_count(400),
//!     RestaurantRecord::named("C").with_rating(3.0).with_review_count(900),
//!     RestaurantRecord::named("D").with_review_count(10),
//! ];
//!
//! let top = rank_top_n(&records, 2);
//! let names: Vec<_> = top.iter().filter_map(|r| r.name.as_deref()).collect();
//! assert_eq!(names, ["B", "A"]);
//! assert!((top[0].score - 10.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use gastro_core::{RestaurantRecord, Scorer};
use log::debug;

mod error;
pub mod hours;
mod output;
mod ranker;

pub use error::TopListError;
pub use hours::{format_hours, format_line};
pub use output::{top_list_file_name, top_list_path, write_top_list_file};
pub use ranker::{DEFAULT_TOP_N, Ranker, REVIEWS_PER_RESULT, rank_top_n};

/// Upper bound of the normalised score range.
pub const MAX_SCORE: f64 = 10.0;

/// Score a restaurant from its average rating and number of ratings.
///
/// Returns `None` when either signal is absent. Review volume is damped
/// logarithmically, so a record with no ratings at all scores exactly `0.0`
/// whatever its average.
///
/// # Examples
/// ```
/// use gastro_ranker::compute_score;
///
/// let score = compute_score(Some(4.5), Some(99)).unwrap();
/// assert!((score - 9.0).abs() < 1e-9);
/// assert_eq!(compute_score(Some(4.5), Some(0)), Some(0.0));
/// assert_eq!(compute_score(None, Some(10)), None);
/// assert_eq!(compute_score(Some(5.0), None), None);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "scoring weights a float rating by the log of a review count"
)]
#[must_use]
pub fn compute_score(rating: Option<f64>, num_reviews: Option<u64>) -> Option<f64> {
    let (Some(stars), Some(count)) = (rating, num_reviews) else {
        return None;
    };
    Some(stars * (count as f64 + 1.0).log10())
}

/// Default [`Scorer`]: popularity-weighted rating via [`compute_score`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewVolumeScorer;

impl Scorer for ReviewVolumeScorer {
    fn raw_score(&self, record: &RestaurantRecord) -> Option<f64> {
        compute_score(record.rating, record.user_ratings_total)
    }
}

/// Rescale raw scores linearly so the lowest maps to `0.0` and the highest
/// to [`MAX_SCORE`]. When every score is equal each one maps to
/// [`MAX_SCORE`].
#[expect(
    clippy::float_arithmetic,
    reason = "min-max normalisation divides by the raw score spread"
)]
pub(crate) fn normalise_scores(raw: &[f64]) -> Vec<f64> {
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    if spread <= 0.0 {
        if !raw.is_empty() {
            debug!(
                "all {} candidates share raw score {max}; assigning {MAX_SCORE}",
                raw.len()
            );
        }
        return vec![MAX_SCORE; raw.len()];
    }
    raw.iter()
        .map(|value| (MAX_SCORE * (value - min) / spread).clamp(0.0, MAX_SCORE))
        .collect()
}

/// Round a normalised score to two decimal places.
///
/// Rounds the exact decimal value of `score`, ties to even, so `0.625`
/// becomes `0.62` and `2.675` (stored just below) becomes `2.67`. Scaling by
/// 100 first would manufacture ties that the stored value does not have.
pub(crate) fn round_score(score: f64) -> f64 {
    format!("{score:.2}").parse().unwrap_or(score)
}
