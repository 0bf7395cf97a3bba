//! Tracing setup: human-readable console output plus daily-rotated log files,
//! each with its own level filter.

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};


/// Installs the global tracing subscriber.
///
/// The returned guard flushes the log file writer when dropped,
/// so it must be held until the server shuts down.
pub fn initialize_tracing<P>(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: P,
    log_file_name_prefix: &str,
) -> Result<WorkerGuard>
where
    P: AsRef<Path>,
{
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(console_level_filter);

    let rolling_file_appender =
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix);
    let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(rolling_file_appender);

    let log_file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_file_writer)
        .with_filter(log_file_level_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(log_file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install global tracing subscriber.")?;

    Ok(guard)
}
