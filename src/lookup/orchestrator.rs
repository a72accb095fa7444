use super::address::AddressResolver;
use super::client::HttpClient;
use super::coordinates::CoordinateResolver;
use super::error::{PipelineError, Stage};
use super::passes::PassTimeResolver;
use super::types::{Coordinates, NetworkAddress, PassTimeResult};
use crate::config::Config;

/// Chains address -> coordinates -> pass times for the caller's location.
///
/// Stages run strictly in order and the first failure ends the run; later
/// stages are never contacted.
pub struct Orchestrator {
    address: AddressResolver,
    coordinates: CoordinateResolver,
    passes: PassTimeResolver,
}

impl Orchestrator {
    pub fn new(
        address: AddressResolver,
        coordinates: CoordinateResolver,
        passes: PassTimeResolver,
    ) -> Self {
        Self {
            address,
            coordinates,
            passes,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = HttpClient::new(&config.http)?;
        let endpoints = &config.endpoints;
        Ok(Self::new(
            AddressResolver::new(client.clone(), endpoints.address.as_str()),
            CoordinateResolver::new(client.clone(), endpoints.coordinates.as_str()),
            PassTimeResolver::new(client, endpoints.passes.as_str()),
        ))
    }

    pub async fn next_passes(&self) -> Result<PassTimeResult, PipelineError> {
        let result = self.run().await;
        if let Err(e) = &result {
            log::warn!("Pass lookup stopped at {} stage: {}", e.stage, e.source);
        }
        result
    }

    async fn run(&self) -> Result<PassTimeResult, PipelineError> {
        let address = self.my_address().await?;
        let coords = self.coordinates_for(Some(address)).await?;
        self.passes_over(coords).await
    }

    /// First stage on its own.
    pub async fn my_address(&self) -> Result<NetworkAddress, PipelineError> {
        let address = self
            .address
            .resolve()
            .await
            .map_err(Stage::Address.failed())?;
        log::debug!("Resolved address {}", address);
        Ok(address)
    }

    /// Coordinates for `address`, looking up our own address first when none is given.
    /// Values are returned unvalidated.
    pub async fn coordinates_for(
        &self,
        address: Option<NetworkAddress>,
    ) -> Result<Coordinates, PipelineError> {
        let address = match address {
            Some(address) => address,
            None => self.my_address().await?,
        };
        let coords = self
            .coordinates
            .resolve(&address)
            .await
            .map_err(Stage::Coordinates.failed())?;
        log::debug!(
            "Resolved coordinates {}, {}",
            coords.latitude,
            coords.longitude
        );
        Ok(coords)
    }

    /// Out-of-range coordinates fail at the coordinate stage without a request.
    pub async fn passes_over(&self, coords: Coordinates) -> Result<PassTimeResult, PipelineError> {
        let coords = coords.validate().map_err(Stage::Coordinates.failed())?;
        let passes = self
            .passes
            .resolve(&coords)
            .await
            .map_err(Stage::PassTimes.failed())?;
        log::debug!("Resolved {} passes", passes.len());
        Ok(passes)
    }
}
