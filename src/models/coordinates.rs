//! Geographic coordinates.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees. No range validation is performed;
/// values outside [-90, 90] / [-180, 180] pass through unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Space-separated `"lat lon"` form used by the settings store.
    pub fn to_settings_string(&self) -> String {
        format!("{} {}", self.latitude, self.longitude)
    }

    /// Parse the `"lat lon"` settings form.
    pub fn from_settings_string(value: &str) -> Result<Self> {
        let mut tokens = value.split_whitespace();
        let latitude = tokens
            .next()
            .ok_or_else(|| anyhow!("empty location string"))?;
        let longitude = tokens
            .next()
            .ok_or_else(|| anyhow!("location string '{value}' is missing a longitude"))?;
        if tokens.next().is_some() {
            return Err(anyhow!("location string '{value}' has trailing tokens"));
        }

        Ok(Self {
            latitude: latitude
                .parse()
                .with_context(|| format!("invalid latitude '{latitude}'"))?,
            longitude: longitude
                .parse()
                .with_context(|| format!("invalid longitude '{longitude}'"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_string_round_trip() {
        let coords = Coordinates::new(48.8566, 2.3522);
        let parsed = Coordinates::from_settings_string(&coords.to_settings_string()).unwrap();
        assert_eq!(parsed, coords);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(Coordinates::from_settings_string("").is_err());
        assert!(Coordinates::from_settings_string("48.8566").is_err());
        assert!(Coordinates::from_settings_string("48.8566 2.3522 7").is_err());
        assert!(Coordinates::from_settings_string("north south").is_err());
    }
}
