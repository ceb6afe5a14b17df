use crate::error::{Result, SorterError};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "imgsort.log";

/// Directory the log file is written to
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("imgsort"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Installs the global subscriber writing to `imgsort.log`.
///
/// The terminal belongs to the TUI, so nothing is logged to stdout or stderr.
/// `RUST_LOG` takes priority over `log_level`. Keep the returned guard alive
/// for the whole run so buffered lines get flushed.
pub fn init_tracing(log_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| SorterError::Logging(format!("Failed to initialize tracing: {}", e)))?;

    Ok(guard)
}
