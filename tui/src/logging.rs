//! Logging initialization and configuration for oneclick.

use anyhow::{Context as _, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Initialize tracing subscriber with console and optional file output.
///
/// # Log Levels
///
/// By default only WARN and ERROR level logs are emitted. To customize the
/// log level, set the `RUST_LOG` environment variable:
///
/// ```sh
/// # Show configuration lookups
/// RUST_LOG=debug oneclick --no-wait
///
/// # Trace a single module
/// RUST_LOG=oneclick_core::source=trace oneclick
/// ```
///
/// # Arguments
///
/// * `log_dir` - Directory for daily-rotated log files, if file logging is wanted
///
/// # Returns
///
/// The file writer guard. It must be held until exit so buffered lines
/// are flushed.
///
/// # Errors
///
/// Returns an error if:
/// - Log directory cannot be created
/// - Subscriber cannot be set as global default
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let (writer, guard) = non_blocking(rolling::daily(dir, "oneclick.log"));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        },
        None => (None, None),
    };

    // stdout is reserved for the greeting
    let subscriber = Registry::default()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(fmt::format().compact()),
        )
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}
