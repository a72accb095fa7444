use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status code {status} from remote service. Response: {body}")]
    RemoteService { status: StatusCode, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Step of the lookup pipeline that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Stage {
    #[strum(serialize = "address")]
    Address,
    #[strum(serialize = "coordinate")]
    Coordinates,
    #[strum(serialize = "pass-time")]
    PassTimes,
}

#[derive(Debug, Error)]
#[error("{stage} lookup failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    pub source: LookupError,
}

impl Stage {
    pub(crate) fn failed(self) -> impl FnOnce(LookupError) -> PipelineError {
        move |source| PipelineError {
            stage: self,
            source,
        }
    }
}
