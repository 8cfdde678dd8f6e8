//! Error types for git invocations.

use std::time::Duration;

use graft_resolve::TransportError;
use thiserror::Error;

/// Errors that can occur while running a git command.
#[derive(Debug, Error)]
pub enum GitError {
    /// The process could not be spawned or its output read.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// The command ran past the configured time limit.
    #[error("git command timed out after {limit:?}")]
    Timeout { limit: Duration },

    /// The command exited with a nonzero status.
    #[error("git exited with status {status}: {stderr}")]
    NonZeroExit { status: i32, stderr: String },

    /// The command produced output that is not valid UTF-8.
    #[error("git produced non-UTF-8 output")]
    NonUtf8Output,
}

/// Convenience type alias for git invocations.
pub type GitResult<T> = std::result::Result<T, GitError>;

impl From<GitError> for TransportError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::Io(e) => TransportError::Io(e),
            other => TransportError::Failed {
                detail: other.to_string(),
            },
        }
    }
}
