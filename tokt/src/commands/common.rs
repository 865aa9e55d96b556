//! Common types and utilities for tokt commands.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToktError};

/// Name used for input read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND start "text"` line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Reads a whole input, from standard input when `path` is absent or `-`.
///
/// # Returns
/// * `Result<(String, String)>` - The input's display name and its content
pub fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                ToktError::FileOperation(format!("{}: {}", path.display(), e))
            })?;
            Ok((path.display().to_string(), content))
        },
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok((STDIN_NAME.to_string(), content))
        },
    }
}
