use std::time::Duration;

use serde::Deserialize;
use service_health_configuration::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
use thiserror::Error;
use url::Url;

/// It parses the configuration from a JSON format.
///
/// ```json
/// { "base_url": "http://127.0.0.1:3000", "poll_interval_ms": 30000, "timeout_ms": 5000 }
/// ```
///
/// # Errors
///
/// Will return an error if the configuration is not valid.
pub fn parse_from_json(json: &str) -> Result<Configuration, ConfigurationError> {
    let plain_config: PlainConfiguration =
        serde_json::from_str(json).map_err(|e| ConfigurationError::JsonParseError { err: e.to_string() })?;

    Configuration::try_from(plain_config)
}

/// DTO for the configuration to deserialize configuration.
///
/// Configuration does not need to be valid.
#[derive(Deserialize, Debug)]
struct PlainConfiguration {
    pub base_url: String,
    pub poll_interval_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Origin of the service. The endpoint paths are absolute, so any path
    /// in this URL is replaced.
    pub base_url: Url,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Configuration {
    /// The default cadence and timeout for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Will return an error if the URL is not a valid `http` or `https` URL.
    pub fn from_url(base_url: &str) -> Result<Self, ConfigurationError> {
        Configuration::try_from(PlainConfiguration {
            base_url: base_url.to_owned(),
            poll_interval_ms: None,
            timeout_ms: None,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("JSON parse error: {err}")]
    JsonParseError { err: String },

    #[error("Invalid URL: {err}")]
    InvalidUrl { err: url::ParseError },

    #[error("Unsupported URL scheme: {scheme}, expected http or https")]
    UnsupportedScheme { scheme: String },

    #[error("The poll interval can't be zero")]
    ZeroPollInterval,

    #[error("The timeout can't be zero")]
    ZeroTimeout,
}

impl TryFrom<PlainConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(plain_config: PlainConfiguration) -> Result<Self, Self::Error> {
        let base_url = plain_config
            .base_url
            .parse::<Url>()
            .map_err(|err| ConfigurationError::InvalidUrl { err })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigurationError::UnsupportedScheme {
                scheme: base_url.scheme().to_owned(),
            });
        }

        let poll_interval = match plain_config.poll_interval_ms {
            Some(0) => return Err(ConfigurationError::ZeroPollInterval),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_POLL_INTERVAL,
        };

        let timeout = match plain_config.timeout_ms {
            Some(0) => return Err(ConfigurationError::ZeroTimeout),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Configuration {
            base_url,
            poll_interval,
            timeout,
        })
    }
}
