//! The fixed set of health endpoints.
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of the general health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Path of the liveness probe.
pub const LIVE_PATH: &str = "/health/live";

/// Path of the readiness probe.
pub const READY_PATH: &str = "/health/ready";

/// One of the three health endpoints exposed by the service.
///
/// The dashboard shows one task list item per endpoint, in the order given
/// by [`EndpointId::ALL`].
#[derive(Hash, Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EndpointId {
    #[display("health")]
    Health,
    #[display("live")]
    Live,
    #[display("ready")]
    Ready,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown health endpoint: {0}")]
pub struct UnknownEndpoint(pub String);

impl EndpointId {
    pub const ALL: [EndpointId; 3] = [EndpointId::Health, EndpointId::Live, EndpointId::Ready];

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            EndpointId::Health => HEALTH_PATH,
            EndpointId::Live => LIVE_PATH,
            EndpointId::Ready => READY_PATH,
        }
    }

    /// Short description shown as the task list hint.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            EndpointId::Health => "General health monitoring",
            EndpointId::Live => "Liveness probe",
            EndpointId::Ready => "Readiness probe",
        }
    }
}

impl FromStr for EndpointId {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" | HEALTH_PATH => Ok(EndpointId::Health),
            "live" | LIVE_PATH => Ok(EndpointId::Live),
            "ready" | READY_PATH => Ok(EndpointId::Ready),
            other => Err(UnknownEndpoint(other.to_owned())),
        }
    }
}
