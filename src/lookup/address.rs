use super::client::HttpClient;
use super::error::LookupError;
use super::types::{AddressResponse, NetworkAddress};

/// Looks up the caller's public address.
pub struct AddressResolver {
    client: HttpClient,
    endpoint: String,
}

impl AddressResolver {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub async fn resolve(&self) -> Result<NetworkAddress, LookupError> {
        let url = format!("{}?format=json", self.endpoint);
        let response: AddressResponse = self.client.get_json(&url).await?;
        Ok(response.ip)
    }
}
