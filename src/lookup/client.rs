use serde::de::DeserializeOwned;

use super::error::LookupError;
use crate::config::HttpConfig;

/// Thin wrapper over a shared reqwest client that issues one GET and decodes JSON.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// A malformed URL surfaces as a transport error from reqwest.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        log::debug!("GET {}", url);

        let response = self.inner.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::debug!("GET {} returned {}", url, status);
            return Err(LookupError::RemoteService { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
