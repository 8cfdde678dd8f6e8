//! The [`RefSet`] collection: the ordered records of one listing query.
//!
//! A `RefSet` holds everything a remote reported at a single query instant.
//! Insertion order is the order the remote reported; semantically it only
//! matters for deterministic first-match tie-breaking. A set is never mutated
//! after construction — remote state can change between calls, so every query
//! builds a fresh set.

use tracing::warn;

use crate::types::{RefKind, RefRecord};

/// An ordered, immutable sequence of reference records for a single remote at
/// a single query instant.
#[derive(Clone, Debug, Default)]
pub struct RefSet {
    records: Vec<RefRecord>,
}

impl RefSet {
    /// Parse the full raw output of one remote-listing query.
    ///
    /// Blank lines are skipped. Malformed lines are dropped with a warning
    /// and parsing continues; remote listings are not guaranteed byte-perfect
    /// across server implementations, and one bad line must not poison the
    /// rest of the listing.
    pub fn parse(raw: &str) -> Self {
        let mut records = Vec::new();
        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match RefRecord::parse(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(error = %e, "dropping unparseable remote-listing line"),
            }
        }
        Self { records }
    }

    /// All records, in listing order.
    pub fn records(&self) -> &[RefRecord] {
        &self.records
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the listing contained no parseable records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose sha starts with `prefix`, in listing order.
    ///
    /// Accepts abbreviated hashes; pass a full hash for an exact match.
    pub fn matching_sha<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a RefRecord> {
        self.records.iter().filter(move |r| r.sha.starts_with(prefix))
    }

    /// Names of all tag records, in listing order.
    ///
    /// With `include_dereferenced = false` the annotated-tag duplicates are
    /// excluded: they share the logical tag name with their plain counterpart
    /// and would double-count in version matching.
    pub fn tag_names(&self, include_dereferenced: bool) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.kind == RefKind::Tag)
            .filter(|r| include_dereferenced || !r.dereferenced)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// The record whose sha is the actual target commit of this listing.
    ///
    /// For an annotated tag the listing carries both the tag-object line and
    /// the dereferenced line; only the latter names a commit that can be
    /// checked out directly, so a dereferenced record wins when one exists.
    /// Lightweight tags, branches, and raw hashes have a single, directly
    /// usable record. Returns `None` on an empty set.
    pub fn resolved_commit(&self) -> Option<&RefRecord> {
        self.records
            .iter()
            .find(|r| r.dereferenced)
            .or_else(|| self.records.first())
    }
}
