use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;

use super::{responses, Reporter};

/// `GET /health`
pub(crate) async fn general_health_handler(State(reporter): State<Arc<Reporter>>) -> Response {
    responses::general(reporter.general_health().await)
}

/// `GET /health/live`
pub(crate) async fn liveness_handler(State(reporter): State<Arc<Reporter>>) -> Response {
    responses::probe(reporter.liveness().await)
}

/// `GET /health/ready`
pub(crate) async fn readiness_handler(State(reporter): State<Arc<Reporter>>) -> Response {
    responses::probe(reporter.readiness().await)
}
