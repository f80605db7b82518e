//! Configuration loading and validation.
//!
//! [`ConfigLoader::load`] reads `config.toml` from the user configuration
//! directory (see [`get_app_config_dir`]) and falls back to defaults when the
//! file does not exist. [`ConfigLoader::load_from_path`] reads an explicit file
//! and fails if it is missing. Both normalize and validate the result:
//!
//! - log level and format are lower-cased and checked against their allowed values,
//! - relative log file paths are resolved against the state directory,
//! - desktop dimensions, lane width and window capacity are range-checked.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs::ensure_dir_exists;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

/// Lane widths the blitter is instantiated for.
pub const SUPPORTED_LANE_WIDTHS: [u32; 3] = [1, 4, 8];

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `config.toml` from the user configuration directory, or defaults if absent.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = get_app_config_dir()?.join("config.toml");
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Loading configuration from {}", path.display());
                Self::load_from_str(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No configuration at {}, using defaults", path.display());
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
            Err(e) => Err(CoreError::Config(ConfigError::ReadError { path, source: e })),
        }
    }

    /// Loads and validates the configuration stored at `path`.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CoreError::Config(ConfigError::NotFound {
                    locations: vec![path.to_path_buf()],
                })
            } else {
                CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        })?;
        Self::load_from_str(&content)
    }

    /// Parses and validates TOML text. An empty document yields the defaults.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(validation_error(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                )))
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(validation_error(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                )))
            }
        }

        if let Some(path) = &config.logging.file_path {
            let absolute: PathBuf = if path.is_absolute() {
                path.clone()
            } else {
                get_app_state_dir()?.join(path)
            };
            if let Some(parent) = absolute.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_dir_exists(parent)?;
                }
            }
            config.logging.file_path = Some(absolute);
        }

        let desktop = &config.desktop;
        if !SUPPORTED_LANE_WIDTHS.contains(&desktop.lane_width) {
            return Err(validation_error(format!(
                "Invalid lane_width: {}. Must be one of 1, 4, 8.",
                desktop.lane_width
            )));
        }
        if desktop.screen_width == 0 || desktop.screen_height == 0 {
            return Err(validation_error(format!(
                "Screen size must be non-zero, got {}x{}.",
                desktop.screen_width, desktop.screen_height
            )));
        }
        if desktop.default_window_width == 0 || desktop.default_window_height == 0 {
            return Err(validation_error(format!(
                "Default window size must be non-zero, got {}x{}.",
                desktop.default_window_width, desktop.default_window_height
            )));
        }
        if desktop.window_capacity == 0 {
            return Err(validation_error("window_capacity must be at least 1.".to_string()));
        }

        Ok(())
    }
}

fn validation_error(message: String) -> CoreError {
    CoreError::Config(ConfigError::ValidationError(message))
}
