//! Time related functions and types.
//!
//! The service never reads the system time directly. It asks a clock, so that
//! tests can replace the working clock with a stopped one and get
//! deterministic timestamps.
//!
//! Clocks use the type `DurationSinceUnixEpoch`, a `std::time::Duration`
//! since the Unix Epoch:
//!
//! ```text
//! Universal time: 2024-05-02 09:41:07 UTC
//! Timestamp:      1714642867
//! ISO 8601:       2024-05-02T09:41:07.000Z
//! ```
//!
//! Every crate using the clock declares its own `CurrentClock` alias:
//!
//! ```text
//! #[cfg(not(test))]
//! pub(crate) type CurrentClock = clock::Working;
//!
//! #[cfg(test)]
//! pub(crate) type CurrentClock = clock::Stopped;
//! ```
pub mod clock;
pub mod conv;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
