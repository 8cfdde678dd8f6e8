//! Read-only introspection of a local working copy.
//!
//! These queries never mutate the repository; checkout, cloning, and commit
//! creation belong to other tooling.

use std::path::{Path, PathBuf};

use crate::error::{GitError, GitResult};
use crate::exec::GitCli;

/// Remote name used when the caller does not name one.
pub const DEFAULT_REMOTE: &str = "origin";

/// Read-only queries against an existing local repository.
#[derive(Clone, Debug)]
pub struct LocalRepo {
    cli: GitCli,
    path: PathBuf,
}

impl LocalRepo {
    /// Attach to the working copy at `path`.
    pub fn new(cli: GitCli, path: impl Into<PathBuf>) -> Self {
        Self {
            cli,
            path: path.into(),
        }
    }

    /// Path of the working copy.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the currently checked-out branch. A detached HEAD reports the
    /// literal `HEAD`; a directory that is not a repository reports `None`.
    pub async fn current_branch(&self) -> GitResult<Option<String>> {
        self.query(&["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    /// Commit hash of HEAD, or `None` when the query fails.
    pub async fn head_sha(&self) -> GitResult<Option<String>> {
        self.query(&["rev-parse", "HEAD"]).await
    }

    /// Configured URL of `remote`, defaulting to `origin`; `None` when the
    /// remote is not configured.
    pub async fn remote_url(&self, remote: Option<&str>) -> GitResult<Option<String>> {
        let key = remote_config_key(remote);
        self.query(&["config", "--get", &key]).await
    }

    /// Run a query, mapping a nonzero exit to `None`. Spawn and I/O failures
    /// still surface as errors.
    async fn query(&self, args: &[&str]) -> GitResult<Option<String>> {
        match self.cli.run(args, Some(&self.path)).await {
            Ok(output) => Ok(non_empty(&output)),
            Err(GitError::NonZeroExit { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn remote_config_key(remote: Option<&str>) -> String {
    format!("remote.{}.url", remote.unwrap_or(DEFAULT_REMOTE))
}

/// Trimmed output, or `None` when nothing was printed.
fn non_empty(output: &str) -> Option<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
