//! Version `1` for [service-health](https://docs.rs/service-health)
//! configuration data structures.
//!
//! This is the default configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "full"
//!
//! [http_server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [service]
//! name = "service-health"
//! version = "1.0.0"
//!
//! [dashboard]
//! public_dir = "./share/default/public"
//! ```
//!
//! The optional top-level `monitored_service_url` is accepted but the health
//! logic does not use it.
pub mod dashboard;
pub mod http_server;
pub mod logging;
pub mod service;

use std::env;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

use self::dashboard::Dashboard;
use self::http_server::HttpServer;
use self::logging::Logging;
use self::service::Service;
use crate::validator::{SemanticValidationError, Validator};
use crate::{
    Error, Info, ENV_VAR_HOST, ENV_VAR_MONITORED_SERVICE_URL, ENV_VAR_PORT, ENV_VAR_PREFIX, ENV_VAR_SERVICE_NAME,
    ENV_VAR_SERVICE_VERSION,
};

/// Plain variables taken verbatim as strings, with the option they set.
///
/// They are not parsed by the `Env` provider so `SERVICE_VERSION=2.0` stays
/// the string `"2.0"` instead of becoming a float.
const PLAIN_STRING_ENV_VARS: [(&str, &str); 3] = [
    (ENV_VAR_SERVICE_NAME, "service.name"),
    (ENV_VAR_SERVICE_VERSION, "service.version"),
    (ENV_VAR_MONITORED_SERVICE_URL, "monitored_service_url"),
];

/// Core configuration for the service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// URL of a downstream service.
    ///
    /// Declared for a future readiness check against a dependency. It's
    /// validated and logged at startup but nothing consumes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitored_service_url: Option<Url>,

    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// The HTTP server serving the health endpoints and the dashboard.
    #[serde(default)]
    pub http_server: HttpServer,

    /// Name and version reported by the general health endpoint.
    #[serde(default)]
    pub service: Service,

    /// Static dashboard assets.
    #[serde(default)]
    pub dashboard: Dashboard,
}

impl Configuration {
    /// Loads the configuration from the configuration file and the
    /// environment. See the [crate documentation](crate) for the priority of
    /// each source.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a value can't be parsed or if the resulting
    /// configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let mut figment = Figment::new().merge(Toml::file(&info.config_toml_path));

        if let Some(config_toml) = &info.config_toml {
            figment = figment.merge(Toml::string(config_toml));
        }

        figment = figment
            .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
            .merge(Env::raw().only(&[ENV_VAR_PORT]).map(|_| "http_server.port".into()))
            .merge(Env::raw().only(&[ENV_VAR_HOST]).map(|_| "http_server.host".into()));

        for (var, key) in PLAIN_STRING_ENV_VARS {
            if let Ok(value) = env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from a TOML file only, ignoring the
    /// environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file content is not a valid configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let config: Configuration = Figment::new().merge(Toml::file(path)).extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if it can't be converted to TOML, which only happens if a
    /// field can't be represented in TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.service.name.trim().is_empty() {
            return Err(SemanticValidationError::EmptyServiceName);
        }

        if self.service.version.trim().is_empty() {
            return Err(SemanticValidationError::EmptyServiceVersion);
        }

        if let Some(url) = &self.monitored_service_url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(SemanticValidationError::UnsupportedMonitoredServiceScheme {
                    scheme: url.scheme().to_owned(),
                });
            }
        }

        Ok(())
    }
}
