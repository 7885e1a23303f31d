//! Console clients.
pub mod dashboard;
