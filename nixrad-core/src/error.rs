//! Error types for catalog and order loading.
//!
//! The engine itself never fails: rows it cannot measure are reported through
//! [`crate::validation::Diagnostics`]. These errors only cover the file
//! loaders and catalog checks.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for loader failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed JSON (-3)
    ParseError = -3,
    /// Catalog failed validation (E100)
    InvalidCatalog = 100,
}

/// Main error type for the packaging engine.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {}", errors.join("; "))]
    InvalidCatalog { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PackError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PackError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PackError::Json(_) => ErrorCode::ParseError,
            PackError::InvalidCatalog { .. } => ErrorCode::InvalidCatalog,
            PackError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Read a file as UTF-8 text, rejecting missing and blank files.
pub(crate) fn read_non_empty(path: &std::path::Path) -> Result<String> {
    if !path.exists() {
        return Err(PackError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PackError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PackError::FileNotFound {
            path: PathBuf::from("orders.json"),
        };
        assert_eq!(err.code(), ErrorCode::FileNotFound);
        assert_eq!(err.code_value(), -1);

        let err = PackError::InvalidCatalog {
            errors: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.code_value(), 100);
        assert_eq!(err.to_string(), "Invalid catalog: a; b");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_non_empty(std::path::Path::new("/nonexistent/orders.json")).unwrap_err();
        assert!(matches!(err, PackError::FileNotFound { .. }));
    }
}
