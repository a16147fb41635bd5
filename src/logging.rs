//! Registry logging
//!
//! Each process writes one log file, `{log_dir}/{log_file}.<period>`, rotated
//! per `rotation` (`hourly`, `daily`, anything else never). Text mode also
//! echoes to stdout. JSON mode writes the file only, for log shippers.
//!
//! The default filter is the configured level plus `tower_http=info`, which
//! gives one span per HTTP request. `RUST_LOG` replaces it entirely.
//!
//! An unusable `log_dir` is a startup error, not a panic.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

fn rotation(config: &AppConfig) -> Rotation {
    match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

fn file_appender(config: &AppConfig) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(rotation(config))
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)
        .with_context(|| format!("Cannot open log directory {}", config.log_dir))
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process, or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<WorkerGuard> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(config)?);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", config.log_level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(file_writer).with_ansi(false))
            .with(fmt::layer().with_ansi(true))
            .try_init()?;
    }

    Ok(guard)
}
