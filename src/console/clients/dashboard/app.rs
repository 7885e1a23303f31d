//! Program to show the health of a running service.
//!
//! Run providing the service URL:
//!
//! ```text
//! cargo run --bin health_dashboard -- --url "http://127.0.0.1:3000"
//! ```
//!
//! Run providing a config file path:
//!
//! ```text
//! cargo run --bin health_dashboard -- --config-path "./share/default/config/health_dashboard.json"
//! SERVICE_HEALTH_DASHBOARD_CONFIG_PATH="./share/default/config/health_dashboard.json" cargo run --bin health_dashboard
//! ```
//!
//! Run providing the configuration:
//!
//! ```text
//! SERVICE_HEALTH_DASHBOARD_CONFIG=$(cat "./share/default/config/health_dashboard.json") cargo run --bin health_dashboard
//! ```
//!
//! With `--once` it runs a single cycle and exits with `0` only when every
//! task is `Completed`. With `--format json` the board is printed as JSON.
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::Level;

use super::checks::HttpChecker;
use super::config::{parse_from_json, Configuration};
use super::console::Console;
use super::poller::Poller;
use super::render::Format;
use crate::servers::signals::global_shutdown_signal;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON configuration file.
    #[clap(short, long, env = "SERVICE_HEALTH_DASHBOARD_CONFIG_PATH")]
    config_path: Option<PathBuf>,

    /// Direct configuration content in JSON.
    #[clap(env = "SERVICE_HEALTH_DASHBOARD_CONFIG", hide_env_values = true)]
    config_content: Option<String>,

    /// Base URL of the service. It has priority over the configuration.
    #[clap(short, long)]
    url: Option<String>,

    /// Run a single cycle and exit.
    #[clap(long)]
    once: bool,

    #[clap(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// # Errors
///
/// Will return an error if the configuration was not provided or is not
/// valid.
pub async fn run() -> Result<ExitCode> {
    let () = tracing_subscriber::fmt()
        .compact()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let format = args.format;
    let once = args.once;

    let config = setup_config(args)?;

    let checker = HttpChecker::new(config.base_url.clone(), config.timeout).context("can't build the HTTP client")?;

    let mut poller = Poller::new(&config, Arc::new(checker), Console::new(), format);

    if once {
        let board = poller.run_once().await;

        return Ok(if board.all_completed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let shutdown = CancellationToken::new();

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            global_shutdown_signal().await;
            shutdown.cancel();
        }
    });

    poller.run(shutdown).await;

    Ok(ExitCode::SUCCESS)
}

fn setup_config(args: Args) -> Result<Configuration> {
    // An explicit URL wins.
    if let Some(url) = args.url {
        Configuration::from_url(&url).context("invalid service URL")
    }
    // then a config supplied directly...
    else if let Some(config) = args.config_content {
        parse_from_json(&config).context("invalid config format")
    }
    // or we load it from a file...
    else if let Some(path) = args.config_path {
        let file_content = std::fs::read_to_string(path.clone()).with_context(|| format!("can't read config file {path:?}"))?;
        parse_from_json(&file_content).context("invalid config format")
    }
    // but we cannot run without any config...
    else {
        Err(anyhow::anyhow!("no configuration provided"))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{setup_config, Args};

    #[test]
    fn the_url_flag_should_have_priority_over_the_configuration() {
        let args = Args::try_parse_from([
            "health_dashboard",
            "--url",
            "http://10.0.0.1:3000",
            r#"{ "base_url": "http://127.0.0.1:3000" }"#,
        ])
        .unwrap();

        let config = setup_config(args).unwrap();

        assert_eq!(config.base_url.as_str(), "http://10.0.0.1:3000/");
    }

    #[test]
    fn it_should_fail_without_any_configuration() {
        let args = Args {
            config_path: None,
            config_content: None,
            url: None,
            once: false,
            format: super::Format::Text,
        };

        assert!(setup_config(args).is_err());
    }
}
