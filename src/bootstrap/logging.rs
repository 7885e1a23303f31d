//! Setup for the application logging.
//!
//! It redirects the log info to the standard output with the threshold
//! defined in the configuration.
//!
//! - `Off`
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
//!
//! Refer to the [configuration crate documentation](https://docs.rs/service-health-configuration)
//! to know how to change log settings.
use std::sync::Once;

use service_health_configuration::{Configuration, Threshold, TraceStyle};
use tracing::info;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// It redirects the log info to the standard output with the threshold defined in the configuration.
pub fn setup(cfg: &Configuration) {
    let tracing_level = map_to_tracing_level_filter(cfg.logging.threshold);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stdout_init(tracing_level, cfg.logging.style);
    });
}

fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stdout_init(filter: LevelFilter, style: TraceStyle) {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_ansi(true);

    let () = match style {
        TraceStyle::Full => builder.init(),
        TraceStyle::Pretty => builder.pretty().with_file(true).init(),
        TraceStyle::Compact => builder.compact().init(),
        TraceStyle::Json => builder.json().init(),
    };

    info!("Logging initialized with the {style} style");
}
