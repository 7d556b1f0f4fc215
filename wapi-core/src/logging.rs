//! Structured logging setup using the `tracing` ecosystem.
//!
//! The SDK itself only emits `tracing` events; applications embedding it
//! call one of these initializers once at startup.

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// File name prefix of the daily-rotated log.
const LOG_FILE_NAME: &str = "wapi2.log";

/// Errors raised while installing the global subscriber.
#[derive(Error, Debug)]
pub enum LogInitError {
    /// The log directory could not be created.
    #[error("failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed, so the file layer would
    /// never receive events.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: WorkerGuard,
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber with console and daily-rotated
/// file output.
///
/// Fails if the directory cannot be created or if another global
/// subscriber was installed first.
///
/// # Arguments
/// * `level` - Log level or filter directive, e.g. "info" or "wapi_api=debug"
/// * `log_dir` - Directory for log files
/// * `json_output` - If true, use JSON format for file output
pub fn init_logging(
    level: &str,
    log_dir: &Path,
    json_output: bool,
) -> Result<LogGuard, LogInitError> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_NAME));

    // Exactly one of the two file layers is present.
    let (json_layer, plain_layer) = if json_output {
        (Some(file_layer(writer).json()), None)
    } else {
        (None, Some(file_layer(writer).with_ansi(false)))
    };

    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt::layer().with_target(true).compact())
        .with(json_layer)
        .with(plain_layer)
        .try_init()?;

    tracing::info!(level = %level, dir = %log_dir.display(), "logging initialized");

    Ok(LogGuard { _guard: guard })
}

type FileLayer<S> = fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, NonBlocking>;

fn file_layer<S>(writer: NonBlocking) -> FileLayer<S> {
    fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
}

/// Initialize logging from a `LoggingConfig`.
pub fn init_from_config(config: &LoggingConfig, log_dir: &Path) -> Result<LogGuard, LogInitError> {
    init_logging(&config.level, log_dir, config.json_output)
}

/// Initialize a minimal console-only logger for tests or simple tools.
/// Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt::layer().with_target(true).compact())
        .try_init();
}
