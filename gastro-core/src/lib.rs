//! Core domain types for the gastronomic route planner.
//!
//! Restaurant records arrive from an external places lookup with no field
//! guaranteed, so [`RestaurantRecord`] models every attribute as optional.
//! Ranking turns them into [`RankedResult`] values with concrete defaults.
//! The [`Scorer`] trait is the seam between the two, and
//! [`DirectionsLink`] turns a ranked list into a shareable round trip.

pub mod ranked;
pub mod restaurant;
pub mod route;
pub mod scorer;
pub mod travel_mode;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use ranked::{RankedResult, RankedReview, UNKNOWN_PRICE_LEVEL};
pub use restaurant::{OpeningHours, RestaurantRecord, Review};
pub use route::{DIRECTIONS_BASE_URL, DirectionsLink};
pub use scorer::Scorer;
pub use travel_mode::{TravelMode, TravelModeParseError};
