//! Directory creation for the log and state paths.

use crate::error::CoreError;
use std::fs;
use std::io;
use std::path::Path;

/// Creates `path` and its missing parents. An existing directory is fine; an
/// existing file at `path` is a [`CoreError::Filesystem`].
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    let failure = |message: &str, source: io::Error| CoreError::Filesystem {
        message: message.to_string(),
        path: path.to_path_buf(),
        source,
    };
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(failure(
            "not a directory",
            io::Error::new(io::ErrorKind::AlreadyExists, "a file occupies the directory path"),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|e| failure("cannot create directory", e))
        }
        Err(e) => Err(failure("cannot inspect path", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directories_once() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("logs/2026/10");
        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir_exists(&nested).unwrap();
    }

    #[test]
    fn test_file_in_the_way() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("softdesk.log");
        fs::write(&file, "x").unwrap();
        let err = ensure_dir_exists(&file).unwrap_err();
        assert!(matches!(err, CoreError::Filesystem { ref message, .. } if message == "not a directory"));
    }
}
