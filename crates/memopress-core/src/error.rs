//! Publishing error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for memo publishing operations
#[derive(Debug, Error)]
pub enum PublishError {
    /// IO error reading a note or writing a memo
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Front matter serialization failed
    #[error("Front matter serialize error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// A path could not be interpreted (no basename, non-UTF-8, ...)
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Specialized Result type for publishing operations
pub type PublishResult<T> = Result<T, PublishError>;

impl PublishError {
    /// Create an invalid-path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = PublishError::Io(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_invalid_path_display() {
        let err = PublishError::invalid_path("/tmp/..");
        assert_eq!(err.to_string(), "Invalid path: /tmp/..");
    }
}
