//! HTTP server.
//!
//! A single listener serves the health endpoints and, for every other path,
//! the static dashboard assets:
//!
//! - `GET /health`
//! - `GET /health/live`
//! - `GET /health/ready`
//! - `GET /*`: files under the configured public directory.
pub mod routes;
pub mod server;

use std::net::SocketAddr;
use std::panic::Location;

use thiserror::Error;

use crate::servers::registar::DynError;
use crate::servers::signals::Halted;

/// Errors starting or stopping the HTTP server.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to bind to socket: {addr}, with error: {err}, {location}")]
    UnableToBindToSocket {
        addr: SocketAddr,
        err: DynError,
        location: &'static Location<'static>,
    },

    #[error("Failed to get the local address: {err}, {location}")]
    UnableToGetLocalAddress {
        err: DynError,
        location: &'static Location<'static>,
    },

    #[error("Failed to serve: {err}")]
    UnableToServe { err: DynError },

    #[error("Failed to send halting message: {err:?}")]
    UnableToSendHaltingMessage { err: Halted },

    #[error("The server task failed: {err}")]
    TaskFailed { err: DynError },
}
