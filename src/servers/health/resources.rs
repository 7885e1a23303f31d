use serde::{Deserialize, Serialize};
use service_health_primitives::status::Status;

/// Message of a healthy liveness probe.
pub const ALIVE_MESSAGE: &str = "Service is alive";

/// Message of a healthy readiness probe.
pub const READY_MESSAGE: &str = "Service is ready";

/// Body of `GET /health`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct GeneralReport {
    pub status: Status,
    /// ISO 8601, UTC, millisecond precision.
    pub timestamp: String,
    pub service: String,
    pub version: String,
    /// Only present when a registered check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `GET /health/live` and `GET /health/ready`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    pub status: Status,
    pub message: String,
}

impl ProbeReport {
    #[must_use]
    pub fn ok(message: &str) -> ProbeReport {
        Self {
            status: Status::Ok,
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn error(message: String) -> ProbeReport {
        Self {
            status: Status::Error,
            message,
        }
    }
}
