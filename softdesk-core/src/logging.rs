//! Logging setup for softdesk.
//!
//! Built on the `tracing` ecosystem: a console layer (text or JSON) plus an
//! optional daily-rolling file layer driven by [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Minimal `stderr` logging honouring `RUST_LOG`, defaulting to `info`.
///
/// Meant for tests and for early startup before the configuration is loaded.
/// Does nothing if a global subscriber is already installed.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Builds the file layer and returns it together with the guard that flushes it.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            utils::fs::ensure_dir_exists(parent)?;
            parent
        }
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("softdesk.log"));

    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(non_blocking_writer).with_ansi(false).boxed(),
        _ => fmt::layer().with_writer(non_blocking_writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}

/// Keeps the file writer alive for the lifetime of the process.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

fn parse_level(level: &str) -> Result<Level, CoreError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid => Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            invalid
        )))),
    }
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, an already-installed subscriber is reported on stderr
/// instead of failing.
///
/// # Errors
///
/// `CoreError::Logging` for an unknown level, or when a subscriber is already
/// set and this is not a reload. File layer setup errors are propagated.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?.to_string();

    let stdout_filter = EnvFilter::new(&level);
    let stdout_layer: BoxedLayer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(&level)).boxed());
        new_file_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = new_file_guard,
        Err(e) => eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.", e),
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging re-initialization attempted; previous subscriber kept. Error: {}", e);
            Ok(())
        }
        Err(e) => Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        )))),
    }
}
