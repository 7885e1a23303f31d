//! Service health application.
//!
//! The application is a container for a single job: the HTTP server serving
//! the health endpoints and the dashboard assets.
//!
//! Jobs executed always:
//!
//! - HTTP server
use std::sync::Arc;

use service_health_configuration::Configuration;

use crate::bootstrap::jobs::http_server;
use crate::bootstrap::Error;
use crate::servers::health::Reporter;
use crate::servers::http::server::RunningHttpServer;

/// Starts the application jobs.
///
/// # Errors
///
/// Will return `Err` if the HTTP server can't be started.
pub async fn start(config: &Configuration, reporter: Arc<Reporter>) -> Result<RunningHttpServer, Error> {
    let server = http_server::start_job(config, reporter).await?;

    Ok(server)
}
