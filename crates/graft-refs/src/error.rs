//! Error types for remote-listing parsing.

use thiserror::Error;

/// Errors that can occur while parsing remote-listing output.
#[derive(Debug, Error)]
pub enum RefError {
    /// The line lacks a tab-separated hash and ref path.
    #[error("malformed remote-listing line: {line:?}")]
    MalformedLine { line: String },
}

/// Convenience type alias for parsing operations.
pub type Result<T> = std::result::Result<T, RefError>;
