//! In-memory remote for testing and ephemeral use.
//!
//! [`StaticRemote`] serves a fixed listing string through the [`RemoteRefs`]
//! trait and emulates `git ls-remote` pattern matching, including the peeled
//! `^{}` lines that accompany annotated tags.

use async_trait::async_trait;
use graft_refs::DEREF_SUFFIX;

use crate::error::{TransportError, TransportResult};
use crate::transport::RemoteRefs;

/// A [`RemoteRefs`] implementation backed by a fixed listing.
///
/// Pattern queries match a line whose full ref path equals the pattern or
/// ends with it at a `/` boundary; a pattern naming an annotated tag's base
/// path also brings along the tag's peeled `^{}` line, as `git ls-remote`
/// does.
#[derive(Clone, Debug, Default)]
pub struct StaticRemote {
    listing: String,
    fail: bool,
}

impl StaticRemote {
    /// A remote that reports `listing` verbatim for full queries.
    pub fn new(listing: impl Into<String>) -> Self {
        Self {
            listing: listing.into(),
            fail: false,
        }
    }

    /// A remote whose every query fails, for exercising transport errors.
    pub fn unreachable() -> Self {
        Self {
            listing: String::new(),
            fail: true,
        }
    }
}

fn tail_matches(path: &str, pattern: &str) -> bool {
    path == pattern || path.ends_with(&format!("/{pattern}"))
}

fn line_matches(path: &str, pattern: &str) -> bool {
    if tail_matches(path, pattern) {
        return true;
    }
    // A peeled line matches when the pattern names its base tag path.
    match path.strip_suffix(DEREF_SUFFIX) {
        Some(base) => tail_matches(base, pattern),
        None => false,
    }
}

#[async_trait]
impl RemoteRefs for StaticRemote {
    async fn list_refs(&self, remote: &str, pattern: Option<&str>) -> TransportResult<String> {
        if self.fail {
            return Err(TransportError::Failed {
                detail: format!("cannot contact {remote}"),
            });
        }
        let Some(pattern) = pattern else {
            return Ok(self.listing.clone());
        };
        let lines: Vec<&str> = self
            .listing
            .lines()
            .filter(|line| {
                line.split_once('\t')
                    .is_some_and(|(_, path)| line_matches(path.trim(), pattern))
            })
            .collect();
        Ok(lines.join("\n"))
    }
}
