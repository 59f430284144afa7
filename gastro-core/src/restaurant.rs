//! Restaurant records as returned by a places details lookup.
//!
//! Field presence is never guaranteed by the upstream API, so every attribute
//! is optional. Defaults are applied once, when a record is projected into a
//! [`RankedResult`](crate::RankedResult).

use serde::{Deserialize, Serialize};

/// A restaurant candidate supplied by an external places lookup.
///
/// The serde field names follow the places details payload, so a details
/// response can be deserialized directly. Unknown keys are ignored.
///
/// # Examples
/// ```
/// use gastro_core::RestaurantRecord;
///
/// let record = RestaurantRecord::named("El Pimpi")
///     .with_rating(4.5)
///     .with_review_count(99);
///
/// assert_eq!(record.name.as_deref(), Some("El Pimpi"));
/// assert_eq!(record.user_ratings_total, Some(99));
/// assert!(record.reviews.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable postal address.
    #[serde(
        default,
        rename = "formatted_address",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    /// Phone number in local format.
    #[serde(
        default,
        rename = "formatted_phone_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    /// Restaurant website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Average rating, expected in `0.0..=5.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of user ratings behind [`Self::rating`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u64>,
    /// Individual reviews in upstream order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    /// Regular weekly opening hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    /// Opening hours for the current week, including exceptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_opening_hours: Option<OpeningHours>,
    /// Price level from `0` (free) to `4` (very expensive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Whether the entrance is wheelchair accessible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheelchair_accessible_entrance: Option<bool>,
    /// Whether the restaurant delivers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<bool>,
    /// Whether the restaurant offers indoor or outdoor seating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dine_in: Option<bool>,
    /// Whether the restaurant offers takeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takeout: Option<bool>,
    /// Whether the restaurant accepts reservations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,
}

impl RestaurantRecord {
    /// Construct a record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the average rating while returning `self` for chaining.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the number of user ratings while returning `self` for chaining.
    pub fn with_review_count(mut self, total: u64) -> Self {
        self.user_ratings_total = Some(total);
        self
    }

    /// Set the formatted address while returning `self` for chaining.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Append a review while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use gastro_core::{RestaurantRecord, Review};
    ///
    /// let record = RestaurantRecord::named("La Tranca")
    ///     .with_review(Review::new("Ana", 5.0, "Great tapas", 200))
    ///     .with_review(Review::new("Luis", 4.0, "Busy", 100));
    /// assert_eq!(record.reviews.map(|r| r.len()), Some(2));
    /// ```
    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.get_or_insert_with(Vec::new).push(review);
        self
    }

    /// Replace the weekly opening hours text while returning `self`.
    pub fn with_weekday_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opening_hours = Some(OpeningHours::from_weekday_text(lines));
        self
    }

    /// Weekday text lines, or an empty slice when no hours were supplied.
    pub fn weekday_text(&self) -> &[String] {
        self.opening_hours
            .as_ref()
            .map(|hours| hours.weekday_text.as_slice())
            .unwrap_or_default()
    }

    /// Reviews, or an empty slice when none were supplied.
    pub fn reviews(&self) -> &[Review] {
        self.reviews.as_deref().unwrap_or_default()
    }
}

/// A single user review attached to a restaurant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer display name.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Star rating given by the reviewer.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Free-text body.
    #[serde(default)]
    pub text: Option<String>,
    /// Epoch seconds used to order reviews by recency.
    #[serde(default)]
    pub time: Option<i64>,
}

impl Review {
    /// Construct a review with every field present.
    pub fn new(author: impl Into<String>, rating: f64, text: impl Into<String>, time: i64) -> Self {
        Self {
            author_name: Some(author.into()),
            rating: Some(rating),
            text: Some(text.into()),
            time: Some(time),
        }
    }

    /// Ordering key for recency; reviews without a timestamp sort last.
    pub fn recency(&self) -> i64 {
        self.time.unwrap_or(0)
    }
}

/// Opening hours block of a places details payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Whether the place was open when the payload was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    /// Free-text hours, one line per weekday.
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

impl OpeningHours {
    /// Build opening hours from weekday text lines.
    pub fn from_weekday_text<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open_now: None,
            weekday_text: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn details_payload_maps_renamed_fields() {
        let payload = r#"{
            "name": "El Pimpi",
            "formatted_address": "Calle Granada, 62, Malaga",
            "formatted_phone_number": "952 22 54 03",
            "rating": 4.4,
            "user_ratings_total": 21000,
            "opening_hours": {"open_now": true, "weekday_text": ["Monday: 12:00 PM – 12:00 AM"]},
            "place_id": "ignored",
            "price_level": 2,
            "takeout": true
        }"#;

        let record: RestaurantRecord = serde_json::from_str(payload).expect("decode record");

        assert_eq!(record.address.as_deref(), Some("Calle Granada, 62, Malaga"));
        assert_eq!(record.phone_number.as_deref(), Some("952 22 54 03"));
        assert_eq!(record.user_ratings_total, Some(21_000));
        assert_eq!(record.weekday_text().len(), 1);
        assert_eq!(record.price_level, Some(2));
        assert_eq!(record.takeout, Some(true));
        assert!(record.delivery.is_none());
    }

    #[rstest]
    fn null_fields_are_absent() {
        let record: RestaurantRecord =
            serde_json::from_str(r#"{"name": "Bar", "rating": null, "website": null}"#)
                .expect("decode record");
        assert!(record.rating.is_none());
        assert!(record.website.is_none());
        assert!(record.weekday_text().is_empty());
        assert!(record.reviews().is_empty());
    }

    #[rstest]
    fn negative_review_count_is_rejected() {
        let result =
            serde_json::from_str::<RestaurantRecord>(r#"{"name": "Bar", "user_ratings_total": -3}"#);
        assert!(result.is_err());
    }

    #[rstest]
    fn missing_time_sorts_as_zero() {
        let review = Review {
            time: None,
            ..Review::default()
        };
        assert_eq!(review.recency(), 0);
    }
}
