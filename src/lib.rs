//! **Service Health** is a minimal HTTP service that reports its own health
//! and a dashboard that shows it.
//!
//! - [Endpoints](#endpoints)
//! - [Configuration](#configuration)
//! - [Dashboard](#dashboard)
//!
//! # Endpoints
//!
//! The server answers three `GET` requests with a JSON body:
//!
//! ```text
//! $ curl http://127.0.0.1:3000/health
//! {"status":"ok","timestamp":"2024-05-02T09:41:07.123Z","service":"service-health","version":"1.0.0"}
//!
//! $ curl http://127.0.0.1:3000/health/live
//! {"status":"ok","message":"Service is alive"}
//!
//! $ curl http://127.0.0.1:3000/health/ready
//! {"status":"ok","message":"Service is ready"}
//! ```
//!
//! Any other path is looked up in the public directory, `./share/default/public`
//! by default, so the browser dashboard is available at `/`.
//!
//! Refer to the [`servers::health`] module for the report formats.
//!
//! # Configuration
//!
//! The configuration is loaded from `./share/default/config/service-health.toml`
//! and the environment. Every option has a default, so the file is optional:
//!
//! ```text
//! PORT=8080 SERVICE_NAME=payments cargo run
//! ```
//!
//! Refer to the [configuration crate](https://docs.rs/service-health-configuration)
//! for all the options.
//!
//! # Dashboard
//!
//! The `health_dashboard` binary polls the three endpoints of a running
//! server every 30 seconds and renders them as a task list in the terminal:
//!
//! ```text
//! cargo run --bin health_dashboard -- --url http://127.0.0.1:3000
//! ```
//!
//! Refer to the [`console::clients::dashboard`] module.
use service_health_clock::clock;

pub mod app;
pub mod bootstrap;
pub mod console;
pub mod servers;

/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
