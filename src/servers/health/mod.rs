//! The health reporter.
//!
//! It answers three queries about the process:
//!
//! Endpoint | Healthy response
//! ---|---
//! `GET /health` | `{"status":"ok","timestamp":"2024-05-02T09:41:07.123Z","service":"service-health","version":"1.0.0"}`
//! `GET /health/live` | `{"status":"ok","message":"Service is alive"}`
//! `GET /health/ready` | `{"status":"ok","message":"Service is ready"}`
//!
//! The reporter does not look at any dependency by itself. Checks can be
//! registered per endpoint through the [`Registar`](crate::servers::registar::Registar);
//! when one of them fails the endpoint answers `503 Service Unavailable` with
//! `"status":"error"` and the failure descriptions in `message`.
pub mod handlers;
pub mod resources;
pub mod responses;

use service_health_clock::clock::Time;
use service_health_clock::conv::convert_from_timestamp_to_iso_8601;
use service_health_configuration::Service;
use service_health_primitives::endpoint::EndpointId;
use service_health_primitives::status::Status;

use self::resources::{GeneralReport, ProbeReport, ALIVE_MESSAGE, READY_MESSAGE};
use crate::servers::registar::Registry;
use crate::CurrentClock;

/// Builds the health reports. Shared by all request handlers.
#[derive(Debug)]
pub struct Reporter {
    service: Service,
    registry: Registry,
}

impl Reporter {
    #[must_use]
    pub fn new(service: Service, registry: Registry) -> Self {
        Self { service, registry }
    }

    /// The general health report: service identity and the current time.
    pub async fn general_health(&self) -> GeneralReport {
        let failures = self.registry.run_checks(EndpointId::Health).await;

        let (status, message) = if failures.is_empty() {
            (Status::Ok, None)
        } else {
            (Status::Error, Some(failures.join("; ")))
        };

        GeneralReport {
            status,
            timestamp: convert_from_timestamp_to_iso_8601(CurrentClock::now()),
            service: self.service.name.clone(),
            version: self.service.version.clone(),
            message,
        }
    }

    /// The process is running and able to respond.
    pub async fn liveness(&self) -> ProbeReport {
        self.probe(EndpointId::Live, ALIVE_MESSAGE).await
    }

    /// The process is able to serve real work.
    pub async fn readiness(&self) -> ProbeReport {
        self.probe(EndpointId::Ready, READY_MESSAGE).await
    }

    async fn probe(&self, endpoint: EndpointId, healthy_message: &str) -> ProbeReport {
        let failures = self.registry.run_checks(endpoint).await;

        if failures.is_empty() {
            ProbeReport::ok(healthy_message)
        } else {
            ProbeReport::error(failures.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::FutureExt as _;
    use service_health_clock::clock;
    use service_health_configuration::Service;
    use service_health_primitives::endpoint::EndpointId;
    use service_health_primitives::status::Status;

    use super::Reporter;
    use crate::servers::registar::{Error, HealthCheckFactory, HealthCheckResult, Registar, Registry};

    fn service() -> Service {
        Service {
            name: "payments".to_owned(),
            version: "2.3.1".to_owned(),
        }
    }

    fn failing_check() -> HealthCheckFactory {
        HealthCheckFactory::from_fn(|| {
            async {
                HealthCheckResult::from(Err(Error::UnableToPerformSuccessfulHealthCheck {
                    name: "database".to_owned(),
                    msg: "connection refused".to_owned(),
                }))
            }
            .boxed()
        })
    }

    #[tokio::test]
    async fn general_health_should_report_the_configured_service_and_the_current_time() {
        clock::Stopped::set(Duration::from_millis(1_714_642_867_123));

        let reporter = Reporter::new(service(), Registry::default());

        let report = reporter.general_health().await;

        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.service, "payments");
        assert_eq!(report.version, "2.3.1");
        assert_eq!(report.timestamp, "2024-05-02T09:41:07.123Z");
        assert_eq!(report.message, None);
    }

    #[tokio::test]
    async fn liveness_should_be_ok_with_the_alive_message() {
        let reporter = Reporter::new(service(), Registry::default());

        let report = reporter.liveness().await;

        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.message, "Service is alive");
    }

    #[tokio::test]
    async fn readiness_should_be_ok_with_the_ready_message() {
        let reporter = Reporter::new(service(), Registry::default());

        let report = reporter.readiness().await;

        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.message, "Service is ready");
    }

    #[tokio::test]
    async fn every_call_should_return_the_same_report() {
        let reporter = Reporter::new(service(), Registry::default());

        let first = (reporter.general_health().await, reporter.liveness().await, reporter.readiness().await);

        for _ in 0..5 {
            let next = (reporter.general_health().await, reporter.liveness().await, reporter.readiness().await);
            assert_eq!(next, first);
        }
    }

    #[tokio::test]
    async fn readiness_should_be_an_error_when_a_registered_check_fails() {
        let mut registar = Registar::default();
        registar.register(EndpointId::Ready, "database", failing_check());

        let reporter = Reporter::new(service(), registar.into_registry());

        let readiness = reporter.readiness().await;

        assert_eq!(readiness.status, Status::Error);
        assert_eq!(readiness.message, "Failed Check: for database, connection refused");

        // Other endpoints are not affected.
        assert_eq!(reporter.liveness().await.status, Status::Ok);
        assert_eq!(reporter.general_health().await.status, Status::Ok);
    }

    #[tokio::test]
    async fn general_health_should_be_an_error_when_a_registered_check_fails() {
        let mut registar = Registar::default();
        registar.register(EndpointId::Health, "database", failing_check());

        let reporter = Reporter::new(service(), registar.into_registry());

        let report = reporter.general_health().await;

        assert_eq!(report.status, Status::Error);
        assert_eq!(report.service, "payments");
        assert_eq!(
            report.message,
            Some("Failed Check: for database, connection refused".to_owned())
        );
    }
}
