use super::client::HttpClient;
use super::error::LookupError;
use super::types::{Coordinates, PassResponse, PassTimeResult};

/// Looks up upcoming ISS passes over a location.
///
/// The service's default pass count and horizon apply; the response order is kept.
pub struct PassTimeResolver {
    client: HttpClient,
    endpoint: String,
}

impl PassTimeResolver {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub async fn resolve(&self, coords: &Coordinates) -> Result<PassTimeResult, LookupError> {
        let url = format!(
            "{}/iss-pass.json?lat={}&lon={}",
            self.endpoint.trim_end_matches('/'),
            coords.latitude,
            coords.longitude
        );
        let response: PassResponse = self.client.get_json(&url).await?;
        Ok(response.response)
    }
}
