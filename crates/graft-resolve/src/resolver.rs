//! The [`Resolver`] engine: specifier in, concrete remote state out.

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use graft_refs::{RefRecord, RefSet, DEREF_SUFFIX};

use crate::error::{ResolveError, ResolveResult};
use crate::specifier::{exact_req, parse_version, Specifier};
use crate::transport::RemoteRefs;

/// A fully resolved specifier: the commit to fetch and, when one exists, the
/// canonical ref name pointing at it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// The specifier after range narrowing: a tag name, branch name, or hash.
    pub specifier: String,
    /// The resolved commit hash.
    pub sha: String,
    /// Best human-readable ref name for `sha`, tags preferred over branches.
    pub name: Option<String>,
}

/// Resolves version specifiers against one remote through a [`RemoteRefs`]
/// transport.
///
/// Every operation builds fresh `RefSet`s from live queries; nothing is
/// cached across calls, since remote state may change between them.
pub struct Resolver<T> {
    transport: T,
}

impl<T: RemoteRefs> Resolver<T> {
    /// Create a resolver over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Narrow a specifier to the remote's best matching release tag.
    ///
    /// Version-shaped specifiers are matched against the remote's tag names:
    /// a range resolves to the tag carrying the maximum satisfying version,
    /// and an exact version resolves to the remote's canonical spelling of it
    /// (`1.2.3` finds the tag `v1.2.3`). Tag names that do not parse as
    /// versions are skipped. Anything else — a branch name, a raw hash — is
    /// returned unchanged without querying the remote.
    ///
    /// Fails with [`ResolveError::NoMatchingVersion`] when no tag satisfies a
    /// version-shaped specifier.
    pub async fn max_satisfying(&self, remote: &str, specifier: &str) -> ResolveResult<String> {
        let req = match Specifier::classify(specifier) {
            Specifier::Opaque(raw) => return Ok(raw),
            Specifier::Exact(version) => exact_req(&version),
            Specifier::Range(req) => req,
        };

        let raw = self.transport.list_refs(remote, None).await?;
        let refs = RefSet::parse(&raw);

        let mut best: Option<(Version, &str)> = None;
        for name in refs.tag_names(false) {
            let Some(version) = parse_version(name) else {
                continue;
            };
            if !req.matches(&version) {
                continue;
            }
            // First tag wins when two names carry the same version.
            match &best {
                Some((top, _)) if *top >= version => {}
                _ => best = Some((version, name)),
            }
        }

        match best {
            Some((version, name)) => {
                debug!(remote, specifier, %version, tag = name, "narrowed version specifier");
                Ok(name.to_string())
            }
            None => Err(ResolveError::NoMatchingVersion {
                range: specifier.to_string(),
                remote: remote.to_string(),
            }),
        }
    }

    /// Resolve a specifier to a concrete commit hash on `remote`.
    ///
    /// An exact-version specifier tries the annotated-tag dereferenced form
    /// (`<specifier>^{}`) first, so the result is a checkoutable commit hash
    /// rather than a tag-object hash; when the remote has no such ref, the
    /// bare form is tried next. The second query is issued only after the
    /// first reports no match. Other specifiers — branches, raw hashes —
    /// use the bare form directly.
    ///
    /// `Ok(None)` means the remote has no matching ref: a normal, reportable
    /// outcome whose escalation is left to the caller.
    pub async fn resolve_sha(
        &self,
        remote: &str,
        specifier: &str,
    ) -> ResolveResult<Option<String>> {
        if let Specifier::Exact(_) = Specifier::classify(specifier) {
            let dereferenced = format!("{specifier}{DEREF_SUFFIX}");
            if let Some(sha) = self.query_sha(remote, &dereferenced).await? {
                return Ok(Some(sha));
            }
        }
        self.query_sha(remote, specifier).await
    }

    /// Find the best human-readable ref name for a commit hash.
    ///
    /// Lists the remote's refs, keeps those whose sha starts with `sha`, and
    /// prefers tag names over branch names as the more stable label. When
    /// several tags match, the first in remote-listing order wins; that order
    /// is the remote's own and is not guaranteed stable across server
    /// implementations. `Ok(None)` when nothing references the hash — it may
    /// be an unreferenced commit.
    pub async fn resolve_name(&self, remote: &str, sha: &str) -> ResolveResult<Option<String>> {
        let raw = self.transport.list_refs(remote, None).await?;
        let refs = RefSet::parse(&raw);
        Ok(best_name(&refs, sha))
    }

    /// Chain [`max_satisfying`](Self::max_satisfying) and
    /// [`resolve_sha`](Self::resolve_sha).
    pub async fn resolve_version_then_sha(
        &self,
        remote: &str,
        specifier: &str,
    ) -> ResolveResult<Option<String>> {
        let narrowed = self.max_satisfying(remote, specifier).await?;
        self.resolve_sha(remote, &narrowed).await
    }

    /// Resolve a specifier all the way to a [`Pin`].
    ///
    /// After range narrowing, the full listing (for the name lookup) and the
    /// sha resolution are independent queries, so they are issued
    /// concurrently and joined.
    pub async fn resolve_pin(&self, remote: &str, specifier: &str) -> ResolveResult<Option<Pin>> {
        let narrowed = self.max_satisfying(remote, specifier).await?;
        let (raw, sha) = tokio::try_join!(
            async {
                self.transport
                    .list_refs(remote, None)
                    .await
                    .map_err(ResolveError::from)
            },
            self.resolve_sha(remote, &narrowed),
        )?;
        let Some(sha) = sha else {
            return Ok(None);
        };
        let refs = RefSet::parse(&raw);
        let name = best_name(&refs, &sha);
        debug!(remote, specifier = narrowed.as_str(), sha = sha.as_str(), "resolved pin");
        Ok(Some(Pin {
            specifier: narrowed,
            sha,
            name,
        }))
    }

    /// One pattern query: the target commit of the response, if any.
    async fn query_sha(&self, remote: &str, pattern: &str) -> ResolveResult<Option<String>> {
        let raw = self.transport.list_refs(remote, Some(pattern)).await?;
        let refs = RefSet::parse(&raw);
        let sha = refs.resolved_commit().map(|record| record.sha.clone());
        debug!(remote, pattern, found = sha.is_some(), "remote sha lookup");
        Ok(sha)
    }
}

/// Tag-kind match first, else the first match of any kind, in listing order.
fn best_name(refs: &RefSet, sha: &str) -> Option<String> {
    let matches: Vec<&RefRecord> = refs.matching_sha(sha).collect();
    matches
        .iter()
        .find(|record| record.is_tag())
        .or_else(|| matches.first())
        .map(|record| record.name.clone())
}
