//! Setup for the main application.
//!
//! The [`setup`] function loads the configuration, initializes the logging
//! and builds the health [`Reporter`] shared by every request handler.
use std::sync::Arc;

use service_health_clock::static_time;
use service_health_configuration::Configuration;
use tracing::{debug, info, warn};

use super::Error;
use crate::bootstrap;
use crate::servers::health::Reporter;
use crate::servers::logging::SERVICE_HEALTH_LOG_TARGET;
use crate::servers::registar::Registar;

/// It loads the configuration and builds the application services.
///
/// # Errors
///
/// Will return `Err` if the configuration can't be loaded.
pub fn setup() -> Result<(Arc<Configuration>, Arc<Reporter>), Error> {
    initialize_static();

    let configuration = Arc::new(bootstrap::config::initialize_configuration()?);

    initialize_logging(&configuration);

    info!(target: SERVICE_HEALTH_LOG_TARGET, "Configuration loaded for {} {}", configuration.service.name, configuration.service.version);

    if let Some(url) = &configuration.monitored_service_url {
        warn!(target: SERVICE_HEALTH_LOG_TARGET, %url, "the monitored service url is set but no check uses it");
    }

    let reporter = Arc::new(reporter(&configuration));

    Ok((configuration, reporter))
}

/// Builds the health reporter for the configured service.
///
/// No dependency checks are registered: every endpoint reports `ok` while
/// the process runs.
#[must_use]
pub fn reporter(configuration: &Configuration) -> Reporter {
    let registar = Registar::default();
    let registry = registar.into_registry();

    debug!(target: SERVICE_HEALTH_LOG_TARGET, %registry, "building the health reporter");

    Reporter::new(configuration.service.clone(), registry)
}

/// It initializes the application static values.
pub fn initialize_static() {
    // Set the time of the app start
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// It initializes the application logging.
pub fn initialize_logging(configuration: &Configuration) {
    bootstrap::logging::setup(configuration);
}
