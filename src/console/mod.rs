//! Console apps.
pub mod clients;
