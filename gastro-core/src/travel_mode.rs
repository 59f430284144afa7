//! Travel modes understood by the directions link builder.
//!
//! # Examples
//! ```
//! use gastro_core::TravelMode;
//!
//! assert_eq!(TravelMode::Walking.as_str(), "walking");
//! assert_eq!(TravelMode::Driving.to_string(), "driving");
//! ```

use thiserror::Error;

/// How the visitor moves between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TravelMode {
    /// On foot.
    #[default]
    Walking,
    /// By car.
    Driving,
    /// By bicycle.
    Bicycling,
    /// By public transport.
    Transit,
}

/// Error returned when parsing an unknown travel mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{0}' (expected walking, driving, bicycling or transit)")]
pub struct TravelModeParseError(pub String);

impl TravelMode {
    /// Return the mode as the lowercase value used in directions URLs.
    ///
    /// # Examples
    /// ```
    /// use gastro_core::TravelMode;
    ///
    /// assert_eq!(TravelMode::Transit.as_str(), "transit");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = TravelModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" => Ok(Self::Walking),
            "driving" => Ok(Self::Driving),
            "bicycling" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            _ => Err(TravelModeParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TravelMode::Bicycling.to_string(), TravelMode::Bicycling.as_str());
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(TravelMode::from_str("Driving"), Ok(TravelMode::Driving));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = TravelMode::from_str("teleport").unwrap_err();
        assert!(err.to_string().contains("unknown travel mode"));
    }
}
