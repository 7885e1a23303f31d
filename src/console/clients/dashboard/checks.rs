//! Checks against the health endpoints of a running service.
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt as _;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use service_health_clock::clock::Time;
use service_health_primitives::endpoint::EndpointId;
use service_health_primitives::DurationSinceUnixEpoch;
use thiserror::Error;
use url::Url;

use crate::CurrentClock;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to Build a Http Client: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },

    #[error("Invalid endpoint URL: {err}")]
    InvalidUrl { err: url::ParseError },

    #[error("Failed to get a response: {err}")]
    Transport { err: Arc<reqwest::Error> },

    #[error("No response after {} ms", .timeout.as_millis())]
    Timeout { timeout: Duration },

    #[error("HTTP {code}")]
    UnsuccessfulStatus { code: StatusCode },

    #[error("Invalid JSON payload: {err}")]
    InvalidPayload { err: Arc<serde_json::Error> },

    #[error("Unexpected status \"{status}\"{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    UnexpectedStatus {
        code: StatusCode,
        status: String,
        message: Option<String>,
    },

    #[error("The check was cancelled by a newer cycle")]
    Cancelled,
}

impl Error {
    /// The HTTP status of the response, if there was one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::UnsuccessfulStatus { code } | Error::UnexpectedStatus { code, .. } => Some(code.as_u16()),
            _ => None,
        }
    }
}

/// A successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    pub status_code: u16,
    /// The probe message, or the reported timestamp for the general endpoint.
    pub message: String,
}

/// The outcome of one check in one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckResult {
    pub endpoint_id: EndpointId,
    /// Absent on transport failures and timeouts.
    pub status_code: Option<u16>,
    pub ok: bool,
    pub message: String,
    pub timestamp_observed: DurationSinceUnixEpoch,
    pub latency: Duration,
}

impl HealthCheckResult {
    #[must_use]
    pub fn new(endpoint_id: EndpointId, outcome: Result<Success, Error>, latency: Duration) -> Self {
        let timestamp_observed = CurrentClock::now();

        match outcome {
            Ok(success) => Self {
                endpoint_id,
                status_code: Some(success.status_code),
                ok: true,
                message: success.message,
                timestamp_observed,
                latency,
            },
            Err(err) => Self {
                endpoint_id,
                status_code: err.status_code(),
                ok: false,
                message: err.to_string(),
                timestamp_observed,
                latency,
            },
        }
    }
}

/// Performs the check of one endpoint.
///
/// The returned future is spawned, so it can't borrow the checker.
#[cfg_attr(test, mockall::automock)]
pub trait Checker: Send + Sync {
    fn check(&self, endpoint: EndpointId) -> BoxFuture<'static, Result<Success, Error>>;
}

/// Checks the endpoints over HTTP.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: HttpClient,
    base_url: Url,
    timeout: Duration,
}

impl HttpChecker {
    /// # Errors
    ///
    /// Will return an error if the HTTP client can't be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }
}

impl Checker for HttpChecker {
    fn check(&self, endpoint: EndpointId) -> BoxFuture<'static, Result<Success, Error>> {
        let client = self.client.clone();
        let url = self.base_url.join(endpoint.path());
        let timeout = self.timeout;

        async move {
            let url = url.map_err(|err| Error::InvalidUrl { err })?;

            tracing::debug!(%endpoint, %url, "checking");

            let response = client.get(url).send().await.map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout { timeout }
                } else {
                    Error::Transport { err: e.into() }
                }
            })?;

            let code = response.status();

            let body = response.bytes().await.map_err(|e| Error::Transport { err: e.into() })?;

            evaluate(endpoint, code, &body)
        }
        .boxed()
    }
}

#[derive(Deserialize)]
struct Payload {
    status: String,
    message: Option<String>,
    timestamp: Option<String>,
}

/// Classifies a response.
///
/// A check succeeds on a `2xx` with a JSON body whose `status` is `"ok"`.
///
/// # Errors
///
/// Will return an error for any other response.
pub fn evaluate(endpoint: EndpointId, code: StatusCode, body: &[u8]) -> Result<Success, Error> {
    if !code.is_success() {
        return Err(Error::UnsuccessfulStatus { code });
    }

    let payload: Payload = serde_json::from_slice(body).map_err(|e| Error::InvalidPayload { err: e.into() })?;

    if payload.status != "ok" {
        return Err(Error::UnexpectedStatus {
            code,
            status: payload.status,
            message: payload.message,
        });
    }

    let message = match endpoint {
        EndpointId::Health => payload.timestamp,
        EndpointId::Live | EndpointId::Ready => payload.message,
    }
    .unwrap_or_else(|| payload.status.clone());

    Ok(Success {
        status_code: code.as_u16(),
        message,
    })
}
