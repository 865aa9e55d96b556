//! Error handling module for the tokt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;
use toklex_scan::{ScanError, Scanner};

/// Main error type for the tokt CLI application.
#[derive(Error, Debug)]
pub enum ToktError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the scanner rejects the input.
    #[error("{path}:{line}:{column}: {source}")]
    Scan {
        /// Name of the scanned input.
        path: String,
        /// Line of the failing character (1-based).
        line: u32,
        /// Column of the failing character (1-based).
        column: u32,
        /// The scanner error.
        #[source]
        source: ScanError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToktError {
    /// Wraps a scan error with the location the failed scanner stopped at.
    ///
    /// A failed scanner never moves past the offending character, so its
    /// line and column point at the error.
    pub fn scan(path: &str, scanner: &Scanner<'_>, source: ScanError) -> Self {
        ToktError::Scan {
            path: path.to_string(),
            line: scanner.line(),
            column: scanner.column(),
            source,
        }
    }
}

/// Result type alias using ToktError.
pub type Result<T> = std::result::Result<T, ToktError>;
