//! Registar. Registers dependency checks for the health endpoints.
//!
//! The health endpoints report `ok` unconditionally unless a check is
//! registered for them. A check is a named factory producing a future; the
//! future is built and spawned on every request to the endpoint.
//!
//! ```text
//! let mut registar = Registar::default();
//!
//! registar.register(EndpointId::Ready, "database", HealthCheckFactory::new(|| {
//!     async { ping_database().await }.boxed()
//! }));
//!
//! let registry = registar.into_registry();
//! ```
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use derive_more::{Constructor, Display, From};
use futures::future::BoxFuture;
use futures::FutureExt as _;
use service_health_primitives::endpoint::EndpointId;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, warn};

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// A [`HealthCheckFuture`] performs a health check when spawned.
pub type HealthCheckFuture<'a> = BoxFuture<'a, HealthCheckResult>;

pub type HealthCheckBuilder = Arc<dyn Fn() -> HealthCheckFuture<'static> + Send + Sync>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Failed Check: for {name}, {msg}")]
    UnableToPerformSuccessfulHealthCheck { name: String, msg: String },

    #[error("Check Aborted: for {name}, {msg}")]
    CheckAborted { name: String, msg: String },
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Success {
    #[display("Success: {name}, {msg}")]
    AllGood { name: String, msg: String },
}

#[derive(Clone, Debug, From)]
pub struct HealthCheckResult(Result<Success, Error>);

impl HealthCheckResult {
    #[must_use]
    pub fn into_inner(self) -> Result<Success, Error> {
        self.0
    }
}

/// Builds the check futures of one registration.
#[derive(Clone, Constructor)]
pub struct HealthCheckFactory {
    builder: HealthCheckBuilder,
}

impl HealthCheckFactory {
    /// Wraps a closure building a check future.
    pub fn from_fn<F>(builder: F) -> Self
    where
        F: Fn() -> HealthCheckFuture<'static> + Send + Sync + 'static,
    {
        Self::new(Arc::new(builder))
    }

    fn make(&self) -> HealthCheckFuture<'static> {
        (self.builder)()
    }
}

impl std::fmt::Debug for HealthCheckFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HealthCheckFactory")
    }
}

/// A named check bound to one endpoint.
#[derive(Debug, Clone, Constructor)]
pub struct Registration {
    endpoint: EndpointId,
    name: String,
    check_factory: HealthCheckFactory,
}

impl Registration {
    /// Creates the check task future.
    ///
    /// Note: this future is not spawned yet.
    #[must_use]
    pub fn check_task(&self) -> HealthCheckFuture<'static> {
        self.check_factory.make()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    match panic.downcast_ref::<&str>() {
        Some(msg) => format!("panicked: {msg}"),
        None => match panic.downcast_ref::<String>() {
            Some(msg) => format!("panicked: {msg}"),
            None => "panicked".to_owned(),
        },
    }
}

/// The frozen set of registrations, shared by all request handlers.
#[derive(Debug, Default)]
pub struct Registry {
    registrations: Vec<Registration>,
}

impl Registry {
    /// Runs every check registered for `endpoint` concurrently.
    ///
    /// Returns the failure descriptions, sorted. An empty vector means the
    /// endpoint is healthy.
    pub async fn run_checks(&self, endpoint: EndpointId) -> Vec<String> {
        let mut checks = JoinSet::new();

        for registration in self.registrations.iter().filter(|r| r.endpoint == endpoint) {
            let name = registration.name.clone();
            let task = registration.check_task();

            checks.spawn(async move {
                let result = AssertUnwindSafe(task)
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|panic| {
                        HealthCheckResult::from(Err(Error::CheckAborted {
                            name: name.clone(),
                            msg: panic_message(panic.as_ref()),
                        }))
                    });

                (name, result)
            });
        }

        let mut failures = Vec::default();

        while let Some(joined) = checks.join_next().await {
            let error = match joined {
                Ok((name, result)) => match result.into_inner() {
                    Ok(success) => {
                        debug!(%endpoint, check = %name, "{success}");
                        continue;
                    }
                    Err(error) => error,
                },
                // Panics are caught inside the task, so only a cancelled
                // runtime ends up here.
                Err(err) => Error::CheckAborted {
                    name: "unknown".to_owned(),
                    msg: err.to_string(),
                },
            };

            warn!(%endpoint, "{error}");
            failures.push(error.to_string());
        }

        failures.sort();
        failures
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    fn names(&self) -> Vec<String> {
        self.registrations
            .iter()
            .map(|r| format!("{}:{}", r.endpoint, r.name))
            .collect()
    }
}

impl std::fmt::Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "checks: {:?}", self.names())
    }
}

/// The [`Registar`] collects registrations while the application is being
/// built, then hands over an immutable [`Registry`].
#[derive(Debug, Default)]
pub struct Registar {
    registry: Registry,
}

impl Registar {
    pub fn register(&mut self, endpoint: EndpointId, name: &str, check_factory: HealthCheckFactory) {
        self.registry
            .registrations
            .push(Registration::new(endpoint, name.to_owned(), check_factory));
    }

    #[must_use]
    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt as _;
    use service_health_primitives::endpoint::EndpointId;

    use super::{Error, HealthCheckFactory, HealthCheckResult, Registar, Success};

    fn passing(name: &'static str) -> HealthCheckFactory {
        HealthCheckFactory::from_fn(move || {
            async move {
                HealthCheckResult::from(Ok(Success::AllGood {
                    name: name.to_owned(),
                    msg: "reachable".to_owned(),
                }))
            }
            .boxed()
        })
    }

    fn failing(name: &'static str) -> HealthCheckFactory {
        HealthCheckFactory::from_fn(move || {
            async move {
                HealthCheckResult::from(Err(Error::UnableToPerformSuccessfulHealthCheck {
                    name: name.to_owned(),
                    msg: "unreachable".to_owned(),
                }))
            }
            .boxed()
        })
    }

    async fn poisoned() -> HealthCheckResult {
        panic!("connection pool poisoned")
    }

    #[tokio::test]
    async fn it_should_report_no_failures_when_nothing_is_registered() {
        let registry = Registar::default().into_registry();

        assert!(registry.is_empty());
        assert!(registry.run_checks(EndpointId::Ready).await.is_empty());
    }

    #[tokio::test]
    async fn it_should_only_run_the_checks_of_the_requested_endpoint() {
        let mut registar = Registar::default();
        registar.register(EndpointId::Ready, "database", failing("database"));
        registar.register(EndpointId::Live, "heartbeat", passing("heartbeat"));

        let registry = registar.into_registry();

        assert!(registry.run_checks(EndpointId::Live).await.is_empty());
        assert_eq!(
            registry.run_checks(EndpointId::Ready).await,
            vec!["Failed Check: for database, unreachable".to_owned()]
        );
        assert!(registry.run_checks(EndpointId::Health).await.is_empty());
    }

    #[tokio::test]
    async fn a_panicking_check_should_be_reported_with_its_name() {
        let mut registar = Registar::default();
        registar.register(
            EndpointId::Ready,
            "cache",
            HealthCheckFactory::from_fn(|| poisoned().boxed()),
        );
        registar.register(EndpointId::Ready, "database", passing("database"));

        let failures = registar.into_registry().run_checks(EndpointId::Ready).await;

        assert_eq!(
            failures,
            vec!["Check Aborted: for cache, panicked: connection pool poisoned".to_owned()]
        );
    }

    #[tokio::test]
    async fn it_should_collect_every_failure_in_a_stable_order() {
        let mut registar = Registar::default();
        registar.register(EndpointId::Ready, "queue", failing("queue"));
        registar.register(EndpointId::Ready, "cache", failing("cache"));
        registar.register(EndpointId::Ready, "database", passing("database"));

        let failures = registar.into_registry().run_checks(EndpointId::Ready).await;

        assert_eq!(
            failures,
            vec![
                "Failed Check: for cache, unreachable".to_owned(),
                "Failed Check: for queue, unreachable".to_owned()
            ]
        );
    }
}
