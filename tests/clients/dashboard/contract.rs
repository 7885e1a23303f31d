use std::sync::Arc;
use std::time::Duration;

use service_health::console::clients::dashboard::board::TaskStatus;
use service_health::console::clients::dashboard::checks::{Checker as _, Error, HttpChecker};
use service_health::console::clients::dashboard::config::Configuration;
use service_health::console::clients::dashboard::logger::Logger;
use service_health::console::clients::dashboard::poller::Poller;
use service_health::console::clients::dashboard::render::Format;
use service_health_clock::conv::convert_from_iso_8601_to_timestamp;
use service_health_primitives::endpoint::EndpointId;
use service_health_test_helpers::configuration;
use tokio::net::TcpListener;
use url::Url;

use super::fake_service::FakeService;
use crate::servers::http::environment::Started;

fn poller(base_url: &str) -> Poller<Logger> {
    let config = Configuration::from_url(base_url).expect("it should be a valid URL");

    let checker = HttpChecker::new(config.base_url.clone(), config.timeout).expect("it should build the HTTP client");

    Poller::new(&config, Arc::new(checker), Logger::new(), Format::Text)
}

#[tokio::test]
async fn every_task_should_be_completed_for_a_healthy_service() {
    let env = Started::new(&Arc::new(configuration::ephemeral())).await;

    let mut poller = poller(&env.base_url());

    let board = poller.run_once().await;

    assert!(board.all_completed());

    let health = board.item(EndpointId::Health).latest.clone().unwrap();
    assert_eq!(health.status_code, Some(200));
    assert!(convert_from_iso_8601_to_timestamp(&health.message).is_ok());

    let live = board.item(EndpointId::Live).latest.clone().unwrap();
    assert_eq!(live.message, "Service is alive");

    let ready = board.item(EndpointId::Ready).latest.clone().unwrap();
    assert_eq!(ready.message, "Service is ready");

    let output = poller.printer().log();
    assert_eq!(output.matches("Completed").count(), 3);

    env.stop().await;
}

#[tokio::test]
async fn a_failing_endpoint_should_be_shown_as_an_error_with_a_description() {
    let service = FakeService::failing().await;

    let mut poller = poller(&service.base_url());

    let board = poller.run_once().await;

    let health = board.item(EndpointId::Health);
    assert_eq!(health.status, TaskStatus::Error);
    assert_eq!(health.latest.as_ref().unwrap().status_code, Some(500));
    assert_eq!(health.latest.as_ref().unwrap().message, "HTTP 500 Internal Server Error");

    let ready = board.item(EndpointId::Ready);
    assert_eq!(ready.status, TaskStatus::Error);
    assert!(ready.latest.as_ref().unwrap().message.starts_with("Invalid JSON payload"));

    assert_eq!(board.item(EndpointId::Live).status, TaskStatus::Completed);
    assert!(!board.all_completed());
}

#[tokio::test]
async fn an_unreachable_service_should_make_every_task_an_error() {
    // Take a free port and release it so nothing listens on it.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let mut poller = poller(&format!("http://{addr}"));

    let board = poller.run_once().await;

    for item in board.items() {
        assert_eq!(item.status, TaskStatus::Error);

        let result = item.latest.as_ref().unwrap();
        assert_eq!(result.status_code, None);
        assert!(!result.message.is_empty());
        assert!(result.latency < Duration::from_secs(5));
    }
}

#[tokio::test]
async fn a_service_that_never_answers_should_time_out() {
    // Accepts the connection and then stays silent.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let silent = tokio::spawn(async move {
        let mut open = Vec::new();
        loop {
            let (socket, _) = listener.accept().await.unwrap();
            open.push(socket);
        }
    });

    let url = Url::parse(&format!("http://{addr}/health/live")).unwrap();
    let checker = HttpChecker::new(url, Duration::from_millis(200)).unwrap();

    let outcome = checker.check(EndpointId::Live).await;

    assert!(matches!(outcome, Err(Error::Timeout { .. })));

    silent.abort();
}
