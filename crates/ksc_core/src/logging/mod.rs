//! Logging infrastructure for Kitchen Salt Calc.
//!
//! Storage and query-parsing failures are never surfaced to the user; this
//! is where they end up instead. Integrates with the `tracing` ecosystem:
//! stderr output always, plus an optional non-blocking log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

/// Initialize global tracing subscriber for application-wide logging.
///
/// Respects the RUST_LOG environment variable, falling back to the provided
/// default level. Outputs to stderr. Should be called once at startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = env_filter(default_level);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

/// Initialize tracing with an additional log file in `logs_dir`.
///
/// The file layer is non-blocking; the returned guard must be kept alive
/// for the process lifetime or buffered lines are lost. Falls back to
/// stderr-only (returning `None`) when the logs directory cannot be
/// created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    let filter = env_filter(default_level);

    match std::fs::create_dir_all(logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(logs_dir, "kitchen-salt-calc.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_thread_ids(false))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_thread_ids(false))
                .with(filter)
                .init();
            tracing::warn!(
                "failed to create logs directory {}: {}; logging to stderr only",
                logs_dir.display(),
                e
            );
            None
        }
    }
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)))
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}
