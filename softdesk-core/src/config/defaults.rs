//! Default configuration values.
//!
//! Referenced from `#[serde(default = "...")]` attributes in [`super::types`].

use super::types::{DesktopConfig, LoggingConfig};
use std::path::PathBuf;

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_desktop_config() -> DesktopConfig {
    DesktopConfig {
        screen_width: default_screen_width(),
        screen_height: default_screen_height(),
        focus_follows_mouse: default_bool_false(),
        dark_mode: default_bool_false(),
        lane_width: default_lane_width(),
        window_capacity: default_window_capacity(),
        default_window_width: default_window_width(),
        default_window_height: default_window_height(),
        debug_outline: default_bool_false(),
        asset_dir: None,
    }
}

pub(crate) fn default_screen_width() -> u32 {
    1280
}

pub(crate) fn default_screen_height() -> u32 {
    720
}

pub(crate) fn default_lane_width() -> u32 {
    8
}

pub(crate) fn default_window_capacity() -> usize {
    64
}

pub(crate) fn default_window_width() -> u32 {
    320
}

pub(crate) fn default_window_height() -> u32 {
    200
}

pub(crate) fn default_bool_false() -> bool {
    false
}
