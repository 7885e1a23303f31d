//! Servers. Services that can be started and stopped.
pub mod health;
pub mod http;
pub mod logging;
pub mod registar;
pub mod signals;
