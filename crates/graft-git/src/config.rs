//! Configuration for the git command runner.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for [`GitCli`](crate::exec::GitCli).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GitConfig {
    /// Executable to invoke. A bare name is resolved through `PATH`.
    pub program: PathBuf,
    /// Wall-clock limit applied to each invocation. `None` leaves timeout
    /// policy to the caller.
    pub timeout: Option<Duration>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
            timeout: None,
        }
    }
}

impl GitConfig {
    /// Default configuration with a per-invocation time limit.
    pub fn with_timeout(limit: Duration) -> Self {
        Self {
            timeout: Some(limit),
            ..Default::default()
        }
    }
}
