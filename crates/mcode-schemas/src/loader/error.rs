//! Error types for profile loading
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Ways reading a profile can fail before any rule runs
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The path does not exist
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure
    #[error("Failed to read file '{}': {}", path.display(), source)]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bytes are not valid JSON
    #[error("Invalid JSON: {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoaderError {
    /// Classify an I/O error, singling out a missing file
    pub fn io_error(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::IoError {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }

    /// Classify a serde_json error; read failures surface as I/O errors
    pub fn json_error(path: &Path, error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::io_error(path, error.into())
        } else {
            Self::JsonParseError {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } => path,
            Self::IoError { path, .. } => path,
            Self::JsonParseError { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_singled_out() {
        let path = PathBuf::from("profile.json");
        let err = LoaderError::io_error(
            &path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, LoaderError::NotFound { .. }));
        assert_eq!(err.to_string(), "File not found: profile.json");
        assert_eq!(err.path(), path.as_path());

        let err = LoaderError::io_error(
            &path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoaderError::IoError { .. }));
        assert_eq!(err.to_string(), "Failed to read file 'profile.json': denied");
    }

    #[test]
    fn test_json_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoaderError::json_error(Path::new("broken.json"), source);
        assert!(matches!(err, LoaderError::JsonParseError { .. }));
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }
}
