//! Facade crate for the gastronomic route planner.
//!
//! This crate re-exports the restaurant domain types together with the
//! ranking, opening hours, and top list helpers, so applications depend on a
//! single crate.
//!
//! # Examples
//! ```
//! use gastro_route::{DirectionsLink, RestaurantRecord, rank_top_n};
//!
//! let records = [
//!     RestaurantRecord::named("El Pimpi")
//!         .with_rating(4.4)
//!         .with_review_count(21_000)
//!         .with_address("Calle Granada 62")
//!         .with_weekday_text(["Monday: 12:00PM\u{2013}12:00AM"]),
//!     RestaurantRecord::named("Unrated"),
//! ];
//!
//! let top = rank_top_n(&records, 3);
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].opening_hours, ["- Monday: 12:00 PM - 12:00 AM"]);
//!
//! let link = DirectionsLink::from_ranked("Calle Larios", &top);
//! assert_eq!(link.stops(), ["Calle Granada 62".to_owned()]);
//! ```

#![forbid(unsafe_code)]

pub use gastro_core::{
    DIRECTIONS_BASE_URL, DirectionsLink, OpeningHours, RankedResult, RankedReview,
    RestaurantRecord, Review, Scorer, TravelMode, TravelModeParseError, UNKNOWN_PRICE_LEVEL,
};

pub use gastro_ranker::{
    DEFAULT_TOP_N, MAX_SCORE, REVIEWS_PER_RESULT, Ranker, ReviewVolumeScorer, TopListError,
    compute_score, format_hours, format_line, rank_top_n, top_list_file_name, top_list_path,
    write_top_list_file,
};

#[cfg(feature = "test-support")]
pub use gastro_core::test_support;
