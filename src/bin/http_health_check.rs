//! Minimal `curl` or `wget` to be used for container health checks.
//!
//! It exits with `0` when the endpoint answers a `2xx` with `"status":"ok"`
//! within the default check timeout.
//!
//! ```text
//! cargo run --bin http_health_check http://127.0.0.1:3000/health/live
//! ```
use std::{env, process};

use service_health::console::clients::dashboard::checks::{Checker as _, HttpChecker};
use service_health_configuration::DEFAULT_TIMEOUT;
use service_health_primitives::endpoint::EndpointId;
use url::Url;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage:   cargo run --bin http_health_check <HEALTH_URL>");
        eprintln!("Example: cargo run --bin http_health_check http://127.0.0.1:3000/health/ready");
        process::exit(1);
    }

    let url = match Url::parse(&args[1]) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("ERROR: invalid URL: {err}");
            process::exit(1);
        }
    };

    let endpoint = match url.path().parse::<EndpointId>() {
        Ok(endpoint) => endpoint,
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(1);
        }
    };

    let checker = match HttpChecker::new(url, DEFAULT_TIMEOUT) {
        Ok(checker) => checker,
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(1);
        }
    };

    println!("Health check ...");

    match checker.check(endpoint).await {
        Ok(success) => {
            println!("STATUS: {} {}", success.status_code, success.message);
            process::exit(0);
        }
        Err(err) => {
            println!("ERROR: {err}");
            process::exit(1);
        }
    }
}
