//! The remote-query collaborator interface.

use async_trait::async_trait;

use crate::error::TransportResult;

/// Source of remote-listing text.
///
/// Implementations run `git ls-remote` (see `graft-git`) or emulate it (see
/// [`crate::memory::StaticRemote`]). The returned text is newline-delimited
/// `<sha><TAB><ref path>` lines. An `Err` means the query itself failed —
/// connectivity, bad remote, nonzero exit — and is distinct from `Ok` with
/// zero lines, which means the query ran and nothing matched. Timeout and
/// cancellation policy belong to the implementation.
#[async_trait]
pub trait RemoteRefs: Send + Sync {
    /// List references on `remote`, optionally narrowed to a ref-ish
    /// `pattern`. `None` asks for the full tag and branch listing.
    async fn list_refs(&self, remote: &str, pattern: Option<&str>) -> TransportResult<String>;
}
