//! Program to show the health of a running service as a task list.
//!
//! ```text
//! cargo run --bin health_dashboard -- --url "http://127.0.0.1:3000"
//! ```
use std::process::ExitCode;

use service_health::console::clients::dashboard::app;

#[tokio::main]
async fn main() -> ExitCode {
    match app::run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
