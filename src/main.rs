use std::process::ExitCode;

use service_health::servers::http::Error;
use service_health::servers::logging::SERVICE_HEALTH_LOG_TARGET;
use service_health::{app, bootstrap};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let (config, reporter) = match bootstrap::app::setup() {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let server = match app::start(&config, reporter).await {
        Ok(server) => server,
        Err(err) => {
            error!(target: SERVICE_HEALTH_LOG_TARGET, "{err}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Server running on http://{}", server.state.binding);

    // The server stops by itself on `ctrl_c` or `SIGTERM`.
    let result = server
        .state
        .task
        .await
        .map_err(|err| Error::TaskFailed {
            err: std::sync::Arc::new(err),
        })
        .and_then(|result| result);

    match result {
        Ok(_launcher) => {
            info!(target: SERVICE_HEALTH_LOG_TARGET, "Service health successfully shutdown");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(target: SERVICE_HEALTH_LOG_TARGET, "{err}");
            ExitCode::FAILURE
        }
    }
}
