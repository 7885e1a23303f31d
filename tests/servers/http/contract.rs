mod health {
    use std::sync::Arc;

    use service_health::servers::health::resources::{GeneralReport, ProbeReport};
    use service_health_clock::conv::convert_from_iso_8601_to_timestamp;
    use service_health_primitives::status::Status;
    use service_health_test_helpers::configuration;
    use tracing::level_filters::LevelFilter;

    use crate::common::logging::{tracing_stderr_init, INIT};
    use crate::servers::http::client::Client;
    use crate::servers::http::environment::Started;

    #[tokio::test]
    async fn the_general_endpoint_should_report_the_configured_service() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral_with_service("payments", "2.3.1"))).await;

        let response = Client::new(env.bind_address()).get("/health").await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

        let report = response.json::<GeneralReport>().await.unwrap();

        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.service, "payments");
        assert_eq!(report.version, "2.3.1");
        assert_eq!(report.message, None);
        assert!(convert_from_iso_8601_to_timestamp(&report.timestamp).is_ok());
        assert!(report.timestamp.ends_with('Z'));

        env.stop().await;
    }

    #[tokio::test]
    async fn the_liveness_probe_should_report_that_the_service_is_alive() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let response = Client::new(env.bind_address()).get("/health/live").await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
        assert_eq!(
            response.json::<ProbeReport>().await.unwrap(),
            ProbeReport::ok("Service is alive")
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn the_readiness_probe_should_report_that_the_service_is_ready() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let response = Client::new(env.bind_address()).get("/health/ready").await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
        assert_eq!(
            response.json::<ProbeReport>().await.unwrap(),
            ProbeReport::ok("Service is ready")
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn the_probes_should_return_the_same_response_on_every_call() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;
        let client = Client::new(env.bind_address());

        for path in ["/health/live", "/health/ready"] {
            let first = client.get(path).await.text().await.unwrap();

            for _ in 0..5 {
                assert_eq!(client.get(path).await.text().await.unwrap(), first);
            }
        }

        for _ in 0..5 {
            let report = client.get("/health").await.json::<GeneralReport>().await.unwrap();

            assert_eq!(report.status, Status::Ok);
            assert_eq!(report.service, "service-health");
        }

        env.stop().await;
    }

    #[tokio::test]
    async fn every_response_should_carry_a_request_id() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let response = Client::new(env.bind_address()).get("/health/live").await;

        assert!(response.headers().contains_key("x-request-id"));

        env.stop().await;
    }
}

mod dashboard_assets {
    use std::sync::Arc;

    use camino::Utf8PathBuf;
    use service_health_test_helpers::{configuration, public};
    use tracing::level_filters::LevelFilter;

    use crate::common::logging::{tracing_stderr_init, INIT};
    use crate::servers::http::client::Client;
    use crate::servers::http::environment::Started;

    #[tokio::test]
    async fn the_root_path_should_serve_the_dashboard_index() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let response = Client::new(env.bind_address()).get("/").await;

        assert_eq!(response.status(), 200);
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(response.text().await.unwrap(), public::INDEX_HTML);

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_serve_any_file_in_the_public_directory() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let response = Client::new(env.bind_address()).get("/styles.css").await;

        assert_eq!(response.status(), 200);
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/css"));
        assert_eq!(response.text().await.unwrap(), public::STYLES_CSS);

        env.stop().await;
    }

    #[tokio::test]
    async fn a_directory_without_the_trailing_slash_should_be_redirected() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;
        let client = Client::new(env.bind_address());

        let response = client.get("/docs").await;

        assert!(response.status().is_redirection());
        assert_eq!(response.headers().get("location").unwrap(), "/docs/");

        let response = client.get("/docs/").await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), public::DOCS_INDEX_HTML);

        env.stop().await;
    }

    #[tokio::test]
    async fn an_unknown_path_should_not_be_found() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let response = Client::new(env.bind_address()).get("/metrics").await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn the_default_public_directory_should_contain_the_task_list_dashboard() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::OFF);
        });

        let config = configuration::ephemeral_with_public_dir(Utf8PathBuf::from("./share/default/public"));

        let env = Started::new(&Arc::new(config)).await;

        let index = Client::new(env.bind_address()).get("/").await.text().await.unwrap();

        assert!(index.contains("govuk-task-list"));
        assert!(index.contains("General health monitoring"));
        assert!(index.contains("Liveness probe"));
        assert!(index.contains("Readiness probe"));
        assert!(index.contains("runHealthChecks"));
        assert!(index.contains("30000"));
        assert!(index.contains("govuk-task-list__status-description"));

        let styles = Client::new(env.bind_address()).get("/styles.css").await.text().await.unwrap();

        assert!(styles.contains("govuk-task-list__status--completed"));
        assert!(styles.contains("govuk-task-list__status--error"));
        assert!(styles.contains("govuk-task-list__status-description"));

        env.stop().await;
    }
}

mod lifecycle {
    use std::sync::Arc;

    use service_health_test_helpers::configuration;

    use crate::servers::http::client::Client;
    use crate::servers::http::environment::Started;

    #[tokio::test]
    async fn a_stopped_server_should_be_able_to_start_again() {
        let env = Started::new(&Arc::new(configuration::ephemeral())).await;

        let env = env.stop().await.start().await;

        let response = Client::new(env.bind_address()).get("/health/live").await;

        assert_eq!(response.status(), 200);

        env.stop().await;
    }
}
