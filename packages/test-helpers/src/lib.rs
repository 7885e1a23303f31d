//! Helpers for the service-health tests.
pub mod configuration;
pub mod public;
pub mod random;
