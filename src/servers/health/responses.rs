use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service_health_primitives::status::Status;

use super::resources::{GeneralReport, ProbeReport};

fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::Error => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn general(report: GeneralReport) -> Response {
    (status_code(report.status), Json(report)).into_response()
}

pub fn probe(report: ProbeReport) -> Response {
    (status_code(report.status), Json(report)).into_response()
}
