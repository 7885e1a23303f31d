//! A stand-in for the health service with scripted answers.
use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::task::JoinHandle;

pub struct FakeService {
    pub addr: SocketAddr,
    task: JoinHandle<()>,
}

impl FakeService {
    /// Serves the general endpoint with `500 Internal Server Error`, a
    /// readiness probe that is not JSON and a healthy liveness probe.
    pub async fn failing() -> Self {
        let router = Router::new()
            .route("/health", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route(
                "/health/live",
                get(|| async { Json(json!({"status": "ok", "message": "Service is alive"})) }),
            )
            .route("/health/ready", get(|| async { "ready, probably" }));

        Self::serve(router).await
    }

    async fn serve(router: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind to an ephemeral port");

        let addr = listener.local_addr().expect("it should have a local address");

        let task = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("it should serve");
        });

        Self { addr, task }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.task.abort();
    }
}
