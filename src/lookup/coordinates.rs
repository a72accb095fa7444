use reqwest::Url;

use super::client::HttpClient;
use super::error::LookupError;
use super::types::{Coordinates, GeoResponse, NetworkAddress};

/// Looks up approximate coordinates for a network address.
///
/// Values are returned as reported; range checks happen in the orchestrator.
pub struct CoordinateResolver {
    client: HttpClient,
    endpoint: String,
}

impl CoordinateResolver {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub async fn resolve(&self, address: &NetworkAddress) -> Result<Coordinates, LookupError> {
        let url = self.url_for(address)?;
        let response: GeoResponse = self.client.get_json(url.as_str()).await?;
        Ok(response.data)
    }

    /// Endpoint with the address appended as a single escaped path segment.
    fn url_for(&self, address: &NetworkAddress) -> Result<Url, LookupError> {
        let invalid = || LookupError::InvalidEndpoint(self.endpoint.clone());
        let mut url = Url::parse(&self.endpoint).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(address.as_str());
        Ok(url)
    }
}
