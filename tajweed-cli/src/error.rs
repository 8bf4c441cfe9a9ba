//! Error handling for the CLI application

use std::fmt;

/// Input-resolution errors the CLI reports by name.
///
/// Everything else (I/O, formatting, engine configuration) flows through
/// `anyhow` with context attached at the call site.
#[derive(Debug)]
pub enum CliError {
    /// A path or glob pattern matched no files
    FileNotFound(String),
    /// A glob pattern failed to parse
    InvalidPattern(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(pattern) => {
                write!(f, "No input files matched: {pattern}")
            }
            CliError::InvalidPattern(pattern) => {
                write!(f, "Invalid file pattern: {pattern}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
