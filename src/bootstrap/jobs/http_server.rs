//! HTTP server job starter.
//!
//! The [`http_server::start_job`](crate::bootstrap::jobs::http_server::start_job)
//! function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" binds the socket and sends a [`Started`](super::Started)
//! message back to the main application before serving.
//!
//! Refer to the [configuration documentation](https://docs.rs/service-health-configuration)
//! for the server configuration options.
use std::sync::Arc;

use service_health_configuration::Configuration;
use tracing::instrument;

use crate::servers::health::Reporter;
use crate::servers::http::server::{HttpServer, Launcher, RunningHttpServer};
use crate::servers::http::Error;

/// It starts a new HTTP server with the provided configuration.
///
/// It returns once the server is listening. The server stops when the
/// returned controller is stopped or dropped, or when the process receives a
/// termination signal.
///
/// # Errors
///
/// Will return `Err` if the server can't bind to the configured socket.
#[instrument(skip(config, reporter))]
pub async fn start_job(config: &Configuration, reporter: Arc<Reporter>) -> Result<RunningHttpServer, Error> {
    let launcher = Launcher::new(
        config.http_server.bind_address(),
        reporter,
        config.dashboard.public_dir.clone(),
    );

    HttpServer::new(launcher).start().await
}
