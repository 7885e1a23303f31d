//! Configuration data structures for [service-health](https://docs.rs/service-health).
//!
//! The configuration is loaded once at startup into an immutable
//! [`Configuration`] and passed explicitly to the components that need it.
//!
//! The current version for configuration is [`v1`].
//!
//! Sources, from lowest to highest priority:
//!
//! 1. Default values.
//! 2. The TOML file at `SERVICE_HEALTH_CONFIG_TOML_PATH` (or the default path).
//!    A missing file is not an error.
//! 3. The TOML content of `SERVICE_HEALTH_CONFIG_TOML`.
//! 4. Prefixed variables, for example `SERVICE_HEALTH_HTTP_SERVER__PORT=8080`.
//! 5. The plain variables `PORT`, `HOST`, `SERVICE_NAME`, `SERVICE_VERSION`
//!    and `MONITORED_SERVICE_URL`.
//!
//! `HOST` is an IP address. Host names are not resolved.
pub mod v1;
pub mod validator;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::validator::SemanticValidationError;

/// Default timeout for a single dashboard check.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default delay between the start of two dashboard cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30_000);

// Environment variables

/// The whole `service-health.toml` file content. It has priority over the
/// config file.
pub const ENV_VAR_CONFIG_TOML: &str = "SERVICE_HEALTH_CONFIG_TOML";

/// The `service-health.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "SERVICE_HEALTH_CONFIG_TOML_PATH";

/// Prefix for variables overriding a single option. Sections are separated
/// with a double underscore: `SERVICE_HEALTH_LOGGING__THRESHOLD=debug`.
pub const ENV_VAR_PREFIX: &str = "SERVICE_HEALTH_";

pub const ENV_VAR_PORT: &str = "PORT";
pub const ENV_VAR_HOST: &str = "HOST";
pub const ENV_VAR_SERVICE_NAME: &str = "SERVICE_NAME";
pub const ENV_VAR_SERVICE_VERSION: &str = "SERVICE_VERSION";
pub const ENV_VAR_MONITORED_SERVICE_URL: &str = "MONITORED_SERVICE_URL";

pub type Configuration = v1::Configuration;
pub type Dashboard = v1::dashboard::Dashboard;
pub type HttpServer = v1::http_server::HttpServer;
pub type Logging = v1::logging::Logging;
pub type Service = v1::service::Service;
pub type Threshold = v1::logging::Threshold;
pub type TraceStyle = v1::logging::TraceStyle;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Reads where the configuration comes from.
    ///
    /// The TOML file path is taken from `SERVICE_HEALTH_CONFIG_TOML_PATH`
    /// when set, otherwise `default_config_toml_path` is used.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = env::var(ENV_VAR_CONFIG_TOML).ok();

        let config_toml_path = env::var(ENV_VAR_CONFIG_TOML_PATH).unwrap_or(default_config_toml_path);

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A value could not be parsed or has the wrong type.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: DynError },

    /// The values are well formed but do not make sense together.
    #[error("Invalid configuration: {source}")]
    Invalid { source: SemanticValidationError },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Arc::new(err) }
    }
}

impl From<SemanticValidationError> for Error {
    fn from(err: SemanticValidationError) -> Self {
        Self::Invalid { source: err }
    }
}
