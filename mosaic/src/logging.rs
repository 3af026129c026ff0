//! Logging setup for the mosaic binary.
//!
//! - Writes to a single log file (cleared at session start)
//! - Optionally mirrors to stdout
//! - Filter from `RUST_LOG`, otherwise `info` (or `debug` when requested)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "mosaic.log";

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `log_path` - Log file path; its directory is created and the file truncated
/// * `stdout` - Also print events to stdout
/// * `debug` - Default to `debug` level when `RUST_LOG` is unset
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_path: &Path, stdout: bool, debug: bool) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = prepare_log_file(log_path)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE);

    let stdout_layer = stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .compact()
    });

    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and truncate the log file.
///
/// Returns the directory and file name the appender should write to.
fn prepare_log_file(log_path: &Path) -> Result<(PathBuf, PathBuf), io::Error> {
    let log_dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let log_file = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    fs::create_dir_all(&log_dir)?;
    fs::write(log_dir.join(&log_file), "")?;

    Ok((log_dir, log_file))
}
