use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Base URLs of the three lookup services
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_coordinates")]
    pub coordinates: String,
    #[serde(default = "default_passes")]
    pub passes: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            coordinates: default_coordinates(),
            passes: default_passes(),
        }
    }
}

fn default_address() -> String {
    "https://api.ipify.org".to_string()
}

fn default_coordinates() -> String {
    "https://ipvigilante.com".to_string()
}

fn default_passes() -> String {
    "http://api.open-notify.org".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout, e.g. "30s". Unset leaves the client default.
    #[serde(default, deserialize_with = "deserialize_timeout")]
    pub timeout: Option<Duration>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Honour HTTP(S)_PROXY from the environment
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
            system_proxy: default_system_proxy(),
        }
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_system_proxy() -> bool {
    true
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom))
        .transpose()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
