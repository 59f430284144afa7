//! Shareable directions links through ranked restaurants.
//!
//! The link starts at an origin address, visits each stop in order, and
//! returns to the origin, so it can be opened directly in a maps client.

use url::form_urlencoded;

use crate::{RankedResult, TravelMode};

/// Base URL of the maps directions endpoint.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir";

/// A round trip from an origin through ordered stops.
///
/// # Examples
/// ```
/// use gastro_core::{DirectionsLink, TravelMode};
///
/// let link = DirectionsLink::new("Calle Larios, Malaga")
///     .with_stop("Calle Granada 62, Malaga")
///     .with_mode(TravelMode::Walking);
///
/// assert_eq!(
///     link.to_url(),
///     "https://www.google.com/maps/dir/Calle+Larios%2C+Malaga/\
///      Calle+Granada+62%2C+Malaga/Calle+Larios%2C+Malaga/?travelmode=walking"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsLink {
    origin: String,
    stops: Vec<String>,
    mode: TravelMode,
}

impl DirectionsLink {
    /// Start a walking round trip at `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            stops: Vec::new(),
            mode: TravelMode::default(),
        }
    }

    /// Build a round trip visiting each ranked result in order.
    ///
    /// Results are located by address, falling back to their name. Results
    /// with neither are skipped.
    pub fn from_ranked<'a, I>(origin: impl Into<String>, results: I) -> Self
    where
        I: IntoIterator<Item = &'a RankedResult>,
    {
        let mut link = Self::new(origin);
        for label in results.into_iter().filter_map(RankedResult::location_label) {
            link.push_stop(label);
        }
        link
    }

    /// Append a stop.
    pub fn push_stop(&mut self, stop: impl Into<String>) {
        self.stops.push(stop.into());
    }

    /// Append a stop while returning `self` for chaining.
    #[must_use]
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.push_stop(stop);
        self
    }

    /// Set the travel mode while returning `self` for chaining.
    #[must_use]
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Stops between the two visits to the origin.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Every location on the trip, origin first and last.
    pub fn waypoints(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.origin.as_str())
            .chain(self.stops.iter().map(String::as_str))
            .chain(std::iter::once(self.origin.as_str()))
    }

    /// Render the directions URL.
    pub fn to_url(&self) -> String {
        let mut url = String::from(DIRECTIONS_BASE_URL);
        for waypoint in self.waypoints() {
            url.push('/');
            url.extend(form_urlencoded::byte_serialize(waypoint.as_bytes()));
        }
        url.push_str("/?travelmode=");
        url.push_str(self.mode.as_str());
        url
    }
}

impl std::fmt::Display for DirectionsLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trip_returns_to_origin() {
        let link = DirectionsLink::new("Plaza Mayor");
        assert_eq!(
            link.to_url(),
            "https://www.google.com/maps/dir/Plaza+Mayor/Plaza+Mayor/?travelmode=walking"
        );
    }

    #[test]
    fn non_ascii_is_percent_encoded() {
        let link = DirectionsLink::new("Málaga").with_mode(TravelMode::Driving);
        let url = link.to_url();
        assert!(url.contains("/M%C3%A1laga/"));
        assert!(url.ends_with("?travelmode=driving"));
    }

    #[test]
    fn waypoints_wrap_stops_with_origin() {
        let link = DirectionsLink::new("A").with_stop("B").with_stop("C");
        let waypoints: Vec<&str> = link.waypoints().collect();
        assert_eq!(waypoints, ["A", "B", "C", "A"]);
    }
}
