//! Configuration data structures.
//!
//! Populated by deserializing `config.toml`. Missing fields fall back to the
//! functions in [`super::defaults`]; unknown fields are rejected.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the logging subsystem.
///
/// ```
/// use softdesk_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let log_config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/softdesk.log"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/softdesk.log")));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths resolve against the state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Settings read by the compositor. Read-only once the desktop is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesktopConfig {
    #[serde(default = "defaults::default_screen_width")]
    pub screen_width: u32,
    #[serde(default = "defaults::default_screen_height")]
    pub screen_height: u32,
    /// When set, hovering picks the active window and raising no longer does.
    #[serde(default = "defaults::default_bool_false")]
    pub focus_follows_mouse: bool,
    #[serde(default = "defaults::default_bool_false")]
    pub dark_mode: bool,
    /// Pixels per blit step: 1, 4 or 8.
    #[serde(default = "defaults::default_lane_width")]
    pub lane_width: u32,
    /// Hard cap on simultaneously allocated window slots.
    #[serde(default = "defaults::default_window_capacity")]
    pub window_capacity: usize,
    #[serde(default = "defaults::default_window_width")]
    pub default_window_width: u32,
    #[serde(default = "defaults::default_window_height")]
    pub default_window_height: u32,
    /// Outline each window's decorated bounds.
    #[serde(default = "defaults::default_bool_false")]
    pub debug_outline: bool,
    /// Directory holding cursor and button bitmaps. Built-in sprites are used when unset.
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        defaults::default_desktop_config()
    }
}

/// Root configuration structure.
///
/// ```
/// use softdesk_core::config::CoreConfig;
///
/// let loaded: CoreConfig = toml::from_str(r#"
/// [logging]
/// level = "warn"
///
/// [desktop]
/// dark_mode = true
/// lane_width = 4
/// "#).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert!(loaded.desktop.dark_mode);
/// assert_eq!(loaded.desktop.screen_width, 1280);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_desktop_config")]
    pub desktop: DesktopConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_logging_config_default_values() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn test_desktop_config_default_values() {
        let config = DesktopConfig::default();
        assert_eq!((config.screen_width, config.screen_height), (1280, 720));
        assert!(!config.focus_follows_mouse);
        assert!(!config.dark_mode);
        assert_eq!(config.lane_width, 8);
        assert_eq!(config.window_capacity, 64);
        assert!(config.asset_dir.is_none());
    }

    #[test]
    fn test_core_config_deserialize_empty() {
        let config: CoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_desktop_config_deserialize_partial() {
        let config: DesktopConfig = toml::from_str("focus_follows_mouse = true\nwindow_capacity = 3").unwrap();
        assert!(config.focus_follows_mouse);
        assert_eq!(config.window_capacity, 3);
        assert_eq!(config.lane_width, defaults::default_lane_width());
    }

    #[test]
    fn test_core_config_deserialize_unknown_field() {
        let result = toml::from_str::<CoreConfig>("[desktop]\nwallpaper = \"x.png\"");
        assert!(result.is_err());
    }
}
