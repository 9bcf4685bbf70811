//! Diagnostic logging for the binary.
//!
//! The shell owns stdout, so log lines only ever go to the file named by
//! `[logging] file` (or `--log`). `RUST_LOG` overrides the configured level.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::filter::{LevelFilter, LevelParseError};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log level '{level}': {source}")]
    Level {
        level: String,
        #[source]
        source: LevelParseError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Install the file subscriber described by `config`.
///
/// Returns `Ok(false)` without touching the global subscriber when no log
/// file is configured.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let level = parse_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let file = open_log_file(path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        path = %path.display(),
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        "Logging started"
    );
    Ok(true)
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level.parse().map_err(|source| LoggingError::Level {
        level: level.to_string(),
        source,
    })
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_error = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)
}
