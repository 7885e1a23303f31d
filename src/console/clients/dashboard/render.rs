//! Renders the status board.
//!
//! Text output, one task per endpoint:
//!
//! ```text
//! Service Health: http://127.0.0.1:3000/
//!
//! /health               General health monitoring    Completed
//!     2024-05-02T09:41:07.123Z (200, 3 ms)
//! /health/live          Liveness probe               Completed
//!     Service is alive (200, 1 ms)
//! /health/ready         Readiness probe              Error
//!     HTTP 500 Internal Server Error (500, 2 ms)
//! ```
use clap::ValueEnum;
use serde_json::{json, Value};
use service_health_clock::conv::convert_from_timestamp_to_iso_8601;
use url::Url;

use super::board::{StatusBoard, TaskItem};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[must_use]
pub fn render(board: &StatusBoard, base_url: &Url, format: Format) -> String {
    match format {
        Format::Text => render_text(board, base_url),
        Format::Json => to_json(board, base_url).to_string(),
    }
}

fn render_text(board: &StatusBoard, base_url: &Url) -> String {
    let mut output = format!("Service Health: {base_url}\n\n");

    for item in board.items() {
        output.push_str(&format!(
            "{:<21} {:<28} {}\n",
            item.endpoint_id.path(),
            item.endpoint_id.hint(),
            item.status
        ));

        if let Some(result) = &item.latest {
            let code = result.status_code.map_or_else(|| "-".to_owned(), |code| code.to_string());

            output.push_str(&format!("    {} ({code}, {} ms)\n", result.message, result.latency.as_millis()));
        }
    }

    output
}

fn item_to_json(item: &TaskItem) -> Value {
    let latest = item.latest.as_ref().map(|result| {
        json!({
            "status_code": result.status_code,
            "ok": result.ok,
            "message": result.message,
            "timestamp_observed": convert_from_timestamp_to_iso_8601(result.timestamp_observed),
            "latency_ms": u64::try_from(result.latency.as_millis()).unwrap_or(u64::MAX),
        })
    });

    json!({
        "endpoint": item.endpoint_id.path(),
        "hint": item.endpoint_id.hint(),
        "status": item.status,
        "latest": latest,
    })
}

/// The board as a JSON document.
#[must_use]
pub fn to_json(board: &StatusBoard, base_url: &Url) -> Value {
    json!({
        "base_url": base_url.as_str(),
        "all_completed": board.all_completed(),
        "items": board.items().iter().map(item_to_json).collect::<Vec<_>>(),
    })
}
