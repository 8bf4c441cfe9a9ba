//! Error types for the API

use thiserror::Error;

/// Error type for API operations.
///
/// Verse analysis itself cannot fail; errors arise only from configuration,
/// rule-library validation at startup, or input acquisition (file/reader
/// I/O, invalid UTF-8).
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown script variant code
    #[error("Invalid script: {0}")]
    InvalidScript(String),

    /// Rule library failed load-time validation
    #[error("Rule library error: {0}")]
    Library(#[from] crate::rules::LibraryError),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
