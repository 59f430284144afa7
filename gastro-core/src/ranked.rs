//! Output shape for ranked restaurants.

use serde::{Deserialize, Serialize};

use crate::Review;

/// Price level reported when the record carried none.
pub const UNKNOWN_PRICE_LEVEL: i8 = -1;

/// Minimal projection of a selected restaurant.
///
/// Consumers render it into reports, feed it to text generation, and plot it
/// on maps, so every field has a concrete value except the free-text ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Display name.
    pub name: Option<String>,
    /// Human-readable postal address.
    pub address: Option<String>,
    /// Phone number in local format.
    pub phone_number: Option<String>,
    /// Whether the entrance is wheelchair accessible.
    pub wheelchair_accessible_entrance: bool,
    /// Whether the restaurant offers takeout.
    pub takeout: bool,
    /// Price level `0..=4`, or [`UNKNOWN_PRICE_LEVEL`].
    pub price_level: i8,
    /// Whether the restaurant delivers.
    pub delivery: bool,
    /// Whether the restaurant accepts reservations.
    pub reservable: bool,
    /// Restaurant website.
    pub website: Option<String>,
    /// Normalised score in `0.0..=10.0`, rounded to two decimals.
    pub score: f64,
    /// Canonical opening hours lines.
    pub opening_hours: Vec<String>,
    /// Up to two of the most recent reviews, newest first.
    pub reviews: Vec<RankedReview>,
}

impl RankedResult {
    /// Best label for locating the restaurant: the address, else the name.
    ///
    /// # Examples
    /// ```
    /// use gastro_core::RankedResult;
    ///
    /// let result: RankedResult = serde_json::from_str(
    ///     r#"{"name":"El Pimpi","address":null,"phone_number":null,
    ///         "wheelchair_accessible_entrance":false,"takeout":false,
    ///         "price_level":-1,"delivery":false,"reservable":false,
    ///         "website":null,"score":10.0,"opening_hours":[],"reviews":[]}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(result.location_label(), Some("El Pimpi"));
    /// ```
    pub fn location_label(&self) -> Option<&str> {
        let usable = |label: &&str| !label.trim().is_empty();
        self.address
            .as_deref()
            .filter(usable)
            .or_else(|| self.name.as_deref().filter(usable))
    }
}

/// A review carried through to the ranked output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReview {
    /// Reviewer display name.
    pub author_name: Option<String>,
    /// Star rating given by the reviewer.
    pub rating: Option<f64>,
    /// Free-text body.
    pub text: Option<String>,
    /// Epoch seconds of the review.
    pub time: Option<i64>,
}

impl From<&Review> for RankedReview {
    fn from(review: &Review) -> Self {
        Self {
            author_name: review.author_name.clone(),
            rating: review.rating,
            text: review.text.clone(),
            time: review.time,
        }
    }
}
