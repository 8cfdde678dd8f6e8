//! Error types for resolution operations.

use thiserror::Error;

/// A failure in the remote-query collaborator.
///
/// Always distinct from a successful query that matched zero lines: zero
/// matches come back as empty `Ok` text, never as an error.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listing command or connection failed.
    #[error("remote listing failed: {detail}")]
    Failed { detail: String },

    /// I/O error while reaching the collaborator.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while resolving a specifier.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A requested version range matched no tag on the remote.
    ///
    /// Definitive and never retried internally: the remote genuinely has no
    /// matching release.
    #[error("no semantic version match for {range:?} on {remote}")]
    NoMatchingVersion { range: String, remote: String },

    /// The transport reported a failure; propagated unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Convenience type alias for resolution operations.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Convenience type alias for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;
