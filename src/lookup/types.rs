use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::error::LookupError;

/// Public address of the caller as reported by the address service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NetworkAddress(String);

impl NetworkAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geolocation services disagree on whether these are JSON numbers or
/// numeric strings ("37.33940"); both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    #[serde(deserialize_with = "number_or_string")]
    pub latitude: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub longitude: f64,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Coordinates {
    /// Reject values outside the geographic range (NaN included).
    pub fn validate(self) -> Result<Self, LookupError> {
        if (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude) {
            Ok(self)
        } else {
            Err(LookupError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// A predicted overhead pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PassWindow {
    /// Unix epoch seconds
    pub risetime: i64,
    /// Seconds
    pub duration: u64,
}

/// Passes in the order the upstream service returned them
pub type PassTimeResult = Vec<PassWindow>;

#[derive(Debug, Deserialize)]
pub(super) struct AddressResponse {
    pub ip: NetworkAddress,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeoResponse {
    pub data: Coordinates,
}

#[derive(Debug, Deserialize)]
pub(super) struct PassResponse {
    pub response: PassTimeResult,
}
