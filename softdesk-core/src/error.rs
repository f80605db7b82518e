//! Error types of the core layer.
//!
//! [`CoreError`] is what every public function in this crate returns. It wraps
//! [`ConfigError`] for anything that goes wrong between locating `config.toml`
//! and handing out a validated [`CoreConfig`](crate::config::CoreConfig), and
//! [`LoggingError`] for subscriber setup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// A directory could not be created or is shadowed by a file.
    #[error("Filesystem error at {path:?}: {message}")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A value handed in by the caller is outside its accepted range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Not TOML, or a key that is unknown or has the wrong type.
    #[error("Malformed configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("No configuration file at {locations:?}")]
    NotFound { locations: Vec<PathBuf> },

    /// The platform reports no home, config or state directory.
    #[error("No {dir_type} directory available on this platform")]
    DirectoryUnavailable { dir_type: String },
}

#[derive(Debug, Error)]
pub enum LoggingError {
    /// Unknown level, or a global subscriber is already installed.
    #[error("Cannot initialize logging: {0}")]
    InitializationFailure(String),
}
