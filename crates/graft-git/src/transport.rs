//! The `git ls-remote` transport.

use std::path::PathBuf;

use async_trait::async_trait;
use graft_resolve::{RemoteRefs, TransportResult};

use crate::exec::GitCli;

/// [`RemoteRefs`] implementation that shells out to `git ls-remote`.
///
/// `remote` may be a URL, or a remote name configured in the repository at
/// the attached working directory (`origin`).
#[derive(Clone, Debug, Default)]
pub struct GitCliRemote {
    cli: GitCli,
    workdir: Option<PathBuf>,
}

impl GitCliRemote {
    /// Create a transport over the given runner.
    pub fn new(cli: GitCli) -> Self {
        Self { cli, workdir: None }
    }

    /// Resolve remote names relative to the repository at `path`.
    pub fn with_workdir(mut self, path: impl Into<PathBuf>) -> Self {
        self.workdir = Some(path.into());
        self
    }
}

/// Argument list for one listing query. A pattern narrows the query to a
/// single ref-ish; without one, tags and heads are listed in full.
fn ls_remote_args<'a>(remote: &'a str, pattern: Option<&'a str>) -> Vec<&'a str> {
    match pattern {
        Some(pattern) => vec!["ls-remote", remote, pattern],
        None => vec!["ls-remote", "--tags", "--heads", remote],
    }
}

#[async_trait]
impl RemoteRefs for GitCliRemote {
    async fn list_refs(&self, remote: &str, pattern: Option<&str>) -> TransportResult<String> {
        let args = ls_remote_args(remote, pattern);
        let output = self.cli.run(&args, self.workdir.as_deref()).await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_query_targets_one_ref() {
        assert_eq!(
            ls_remote_args("origin", Some("v1.2.3^{}")),
            vec!["ls-remote", "origin", "v1.2.3^{}"]
        );
    }

    #[test]
    fn full_listing_covers_tags_and_heads() {
        assert_eq!(
            ls_remote_args("https://example.com/repo.git", None),
            vec!["ls-remote", "--tags", "--heads", "https://example.com/repo.git"]
        );
    }
}
