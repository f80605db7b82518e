//! Path resolution for softdesk's per-user directories.
//!
//! Relies on `directories-next`. The application directories are derived from
//! `QUALIFIER`, `ORGANIZATION` and `APPLICATION` below.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "softdesk";
const APPLICATION: &str = "softdesk";

/// Environment variable that overrides the user configuration directory.
pub const CONFIG_DIR_ENV: &str = "SOFTDESK_CONFIG_DIR";

/// Base directory for user-specific state (`$XDG_STATE_HOME`, falling back to
/// `~/.local/state`).
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(state));
    }
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".local").join("state"))
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "state".to_string(),
            })
        })
}

/// softdesk's configuration directory, e.g. `~/.config/softdesk` on Linux.
/// [`CONFIG_DIR_ENV`] takes precedence when set.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "config".to_string(),
            })
        })
}

/// softdesk's state directory (log files live here).
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base| base.join(APPLICATION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_valid_path(res: Result<PathBuf, CoreError>, dir_type: &str) {
        match res {
            Ok(path) => {
                assert!(!path.as_os_str().is_empty(), "Path for {} is empty", dir_type);
            }
            // HOME may be unset on some CI machines.
            Err(CoreError::Config(ConfigError::DirectoryUnavailable { .. })) => {}
            Err(e) => panic!("Expected Ok or DirectoryUnavailable for {}, got {:?}", dir_type, e),
        }
    }

    #[test]
    fn test_get_app_config_dir() {
        assert_is_valid_path(get_app_config_dir(), "App Config");
    }

    #[test]
    fn test_get_app_state_dir_ends_with_application() {
        if let Ok(path) = get_app_state_dir() {
            assert!(path.ends_with(APPLICATION));
        }
    }
}
