//! File logging.
//!
//! The terminal belongs to the page, so all log output goes to a file through
//! a non-blocking writer. `SDF_LOG` overrides the configured filter.

use std::{
    fs::{self, OpenOptions},
    path::Path,
};

use color_eyre::eyre::{Result, WrapErr};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive, e.g. `sdf_effects=debug`.
pub const LOG_ENV: &str = "SDF_LOG";

/// Build the filter from `SDF_LOG`, falling back to `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
///
/// The returned guard flushes pending lines when dropped; keep it alive for
/// the whole run.
pub fn init(path: &Path, level: &str) -> Result<WorkerGuard> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter(level))
        .with(file_layer)
        .try_init()
        .wrap_err("failed to install the log subscriber")?;

    Ok(guard)
}
