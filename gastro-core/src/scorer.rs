//! Score restaurant records before ranking.
//!
//! The `Scorer` trait assigns a raw popularity score to a
//! [`RestaurantRecord`](crate::RestaurantRecord). Raw scores are later
//! min-max normalised across the candidate set, so implementations only need
//! to agree on ordering, not on a range.

use crate::RestaurantRecord;

/// Calculate a raw score for a restaurant record.
///
/// Higher scores rank first. Implementations must be thread-safe (`Send` +
/// `Sync`) so a ranker can be shared across threads. Return `None` when the
/// record lacks the signals needed to score it; such records are excluded
/// from ranking rather than treated as failures.
///
/// Use [`Scorer::sanitise`] to drop values that cannot be normalised.
///
/// # Examples
///
/// ```rust
/// use gastro_core::{RestaurantRecord, Scorer};
///
/// struct RatingOnly;
///
/// impl Scorer for RatingOnly {
///     fn raw_score(&self, record: &RestaurantRecord) -> Option<f64> {
///         record.rating
///     }
/// }
///
/// let record = RestaurantRecord::named("Bar").with_rating(4.0);
/// assert_eq!(RatingOnly.raw_score(&record), Some(4.0));
/// assert_eq!(RatingOnly.raw_score(&RestaurantRecord::default()), None);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the raw score for `record`, or `None` when it is unscoreable.
    fn raw_score(&self, record: &RestaurantRecord) -> Option<f64>;

    /// Keep only finite, non-negative scores.
    fn sanitise(score: Option<f64>) -> Option<f64>
    where
        Self: Sized,
    {
        score.filter(|value| value.is_finite() && *value >= 0.0)
    }
}
