//! Application jobs launchers.
//!
//! The main application setup has only two main stages:
//!
//! 1. Setup the domain layer: the health reporter.
//! 2. Launch the application services as concurrent jobs.
pub mod http_server;

/// This is the message that the "launcher" spawned task sends to the main
/// application process to notify the service was successfully started.
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}
