use crate::{AppError, AppResult, config::LoggingConfig};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "meeting-desk.log";

/// Build the filter from `RUST_LOG`, falling back to the configured directives.
#[track_caller]
pub(crate) fn env_filter(config: &LoggingConfig) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.filter).map_err(|e| AppError::ConfigError {
        reason: format!("Invalid logging.filter {:?}: {}", config.filter, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Install the global subscriber writing to a daily rolling file in `log_dir`.
///
/// Stdout belongs to the terminal UI, so nothing is logged there. The
/// returned guard flushes buffered lines on drop and must outlive the app.
#[track_caller]
pub(crate) fn init(config: &LoggingConfig, log_dir: &Path) -> AppResult<WorkerGuard> {
    let filter = env_filter(config)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::ConfigError {
            reason: format!("Failed to install tracing subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(guard)
}
