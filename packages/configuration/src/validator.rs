//! Trait to validate semantic errors.
//!
//! Deserialization already rejects malformed values. These are the errors
//! that only show once the whole configuration is known.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticValidationError {
    #[error("The service name can not be empty.")]
    EmptyServiceName,

    #[error("The service version can not be empty.")]
    EmptyServiceVersion,

    #[error("The monitored service URL must use http or https, got: {scheme}")]
    UnsupportedMonitoredServiceScheme { scheme: String },
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
