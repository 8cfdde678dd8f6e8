//! The async git command runner.

use std::path::Path;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::config::GitConfig;
use crate::error::{GitError, GitResult};

/// Runs git subcommands and captures their output.
///
/// One `GitCli` can serve any number of concurrent invocations; each call
/// spawns its own process.
#[derive(Clone, Debug, Default)]
pub struct GitCli {
    config: GitConfig,
}

impl GitCli {
    /// Create a runner with the given configuration.
    pub fn new(config: GitConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GitConfig {
        &self.config
    }

    /// Run the configured program with `args`, optionally in `cwd`, and
    /// return its stdout as UTF-8. A nonzero exit carries the trimmed stderr
    /// text in the error.
    pub async fn run(&self, args: &[&str], cwd: Option<&Path>) -> GitResult<String> {
        debug!(program = %self.config.program.display(), ?args, "running git command");

        let mut command = Command::new(&self.config.program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        command.kill_on_drop(true);

        let output = match self.config.timeout {
            Some(limit) => timeout(limit, command.output())
                .await
                .map_err(|_| GitError::Timeout { limit })??,
            None => command.output().await?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::NonZeroExit {
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::NonUtf8Output)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    // The runner is program-agnostic; tests drive it with coreutils instead
    // of git so they need no network and no repository.
    fn cli_for(program: &str) -> GitCli {
        GitCli::new(GitConfig {
            program: program.into(),
            timeout: None,
        })
    }

    #[tokio::test]
    async fn run_captures_stdout() {
        let out = cli_for("echo").run(&["hello"], None).await.unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[tokio::test]
    async fn nonzero_exit_carries_status() {
        let err = cli_for("false").run(&[], None).await.unwrap_err();
        match err {
            GitError::NonZeroExit { status, .. } => assert_eq!(status, 1),
            other => panic!("expected NonZeroExit, got: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_io_error() {
        let err = cli_for("graft-test-no-such-program")
            .run(&[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, GitError::Io(_)));
    }

    #[tokio::test]
    async fn timeout_interrupts_slow_commands() {
        let cli = GitCli::new(GitConfig {
            program: "sleep".into(),
            timeout: Some(Duration::from_millis(50)),
        });
        let err = cli.run(&["5"], None).await.unwrap_err();
        assert!(matches!(err, GitError::Timeout { .. }));
    }

    #[tokio::test]
    async fn cwd_is_respected() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().canonicalize().unwrap();
        let out = cli_for("pwd").run(&[], Some(dir.path())).await.unwrap();
        assert_eq!(out.trim(), expected.to_str().unwrap());
    }
}
