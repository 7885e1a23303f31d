use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, HeaderName, Request};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use camino::Utf8Path;
use service_health_primitives::endpoint::{HEALTH_PATH, LIVE_PATH, READY_PATH};
use tower_http::compression::CompressionLayer;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{instrument, Level, Span};

use crate::servers::health::handlers::{general_health_handler, liveness_handler, readiness_handler};
use crate::servers::health::Reporter;
use crate::servers::logging::SERVICE_HEALTH_LOG_TARGET;

fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get("x-request-id")
        .map(|v| v.to_str().unwrap_or_default())
        .unwrap_or_default()
}

/// The health routes plus a file server for any other path.
///
/// Directory requests get their `index.html`. A directory requested without
/// the trailing slash is redirected to the slash form. Missing files are
/// `404 Not Found`.
#[instrument(skip(reporter))]
pub fn router(reporter: Arc<Reporter>, public_dir: &Utf8Path, addr: SocketAddr) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(general_health_handler))
        .route(LIVE_PATH, get(liveness_handler))
        .route(READY_PATH, get(readiness_handler))
        .with_state(reporter)
        .fallback_service(ServeDir::new(public_dir))
        .layer(CompressionLayer::new())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(move |request: &Request<axum::body::Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request_id(request.headers());

                    tracing::info!(
                        target: SERVICE_HEALTH_LOG_TARGET,
                        socket_addr = %addr, method = %method, uri = %uri, request_id = %request_id, "request");
                })
                .on_response(move |response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = request_id(response.headers());
                    let latency_ms = latency.as_millis();

                    tracing::info!(
                        target: SERVICE_HEALTH_LOG_TARGET,
                        socket_addr = %addr, latency = %latency_ms, status = %status_code, request_id = %request_id, "response");
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
