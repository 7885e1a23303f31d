//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `SERVICE_HEALTH_` except the
//! plain ones (`PORT`, `HOST`, `SERVICE_NAME`, `SERVICE_VERSION` and
//! `MONITORED_SERVICE_URL`).
use service_health_configuration::{Configuration, Error, Info};

/// The default `service-health.toml` file location.
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/service-health.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `service-health.toml`. The location can be
///    changed with `SERVICE_HEALTH_CONFIG_TOML_PATH`.
/// 2. Environment variable: `SERVICE_HEALTH_CONFIG_TOML`. The variable
///    contains the same contents as the `service-health.toml` file.
///
/// Environment variable has priority over the config file. A missing file is
/// not an error: every option has a default.
///
/// # Errors
///
/// Will return `Err` if a value is malformed or the configuration is not
/// valid.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_owned());

    Configuration::load(&info)
}
