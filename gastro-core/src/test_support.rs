//! Test-only record builders shared by unit, property, and behaviour tests.

use crate::{RestaurantRecord, Review};

/// Review timestamps attached by [`sample_record`], in upstream order.
pub const SAMPLE_REVIEW_TIMES: [i64; 3] = [100, 200, 50];

/// Build a fully populated record with the given rating and review count.
///
/// The record carries three reviews timed [`SAMPLE_REVIEW_TIMES`], a single
/// Saturday opening hours line, price level `2`, and takeout plus wheelchair
/// access enabled.
pub fn sample_record(name: &str, rating: Option<f64>, total: Option<u64>) -> RestaurantRecord {
    let reviews = SAMPLE_REVIEW_TIMES
        .iter()
        .zip(0_u8..)
        .map(|(&time, index)| {
            Review::new(
                format!("User{index}"),
                f64::from(5 - index),
                format!("Comment{index}"),
                time,
            )
        })
        .collect();
    RestaurantRecord {
        address: Some(format!("{name} Addr")),
        phone_number: Some("N/A".to_owned()),
        rating,
        user_ratings_total: total,
        reviews: Some(reviews),
        price_level: Some(2),
        wheelchair_accessible_entrance: Some(true),
        delivery: Some(false),
        takeout: Some(true),
        reservable: Some(false),
        ..RestaurantRecord::named(name).with_weekday_text(["Sat: 12:00PM–03:00PM"])
    }
}

/// Build a record holding only the scoring signals.
pub fn scored_record(name: &str, rating: f64, total: u64) -> RestaurantRecord {
    RestaurantRecord::named(name)
        .with_rating(rating)
        .with_review_count(total)
}
