//! Primitive types for [service-health](https://docs.rs/service-health).
//!
//! These structures are shared by the health reporter (the HTTP server),
//! the status dashboard client, and the supporting packages.
use std::time::Duration;

pub mod endpoint;
pub mod status;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;
