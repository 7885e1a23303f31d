//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! There is only one job: the HTTP server serving the health endpoints and
//! the dashboard assets.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;

use thiserror::Error;

/// Errors that prevent the application from starting.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to load the configuration: {source}")]
    Configuration {
        #[from]
        source: service_health_configuration::Error,
    },

    #[error("Unable to start the HTTP server: {source}")]
    HttpServer {
        #[from]
        source: crate::servers::http::Error,
    },
}
