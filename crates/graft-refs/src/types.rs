//! Core reference record types.
//!
//! One line of remote-listing output becomes one [`RefRecord`]. The
//! annotated-tag dereference marker (`^{}`) is detected and stripped here, at
//! parse time, so downstream logic never re-inspects raw ref-path strings.

use serde::{Deserialize, Serialize};

use crate::error::{RefError, Result};

/// The marker a remote listing appends to the ref path of an annotated tag's
/// pointed-to-commit line.
pub const DEREF_SUFFIX: &str = "^{}";

/// The namespace a reference lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefKind {
    /// `refs/tags/*`
    Tag,
    /// `refs/heads/*`
    Branch,
    /// Anything else (`HEAD`, `refs/pull/*`, ...). Carried through parsing
    /// but ignored by tag/branch-specific logic.
    Other,
}

/// One parsed line of remote-listing output.
///
/// For an annotated tag the remote normally reports two records with the same
/// base ref path: one plain (the tag object's sha) and one dereferenced (the
/// sha of the commit the tag points to). Lightweight tags and branches have
/// exactly one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefRecord {
    /// Full hash as reported by the remote. Hex; length is not checked, so
    /// SHA-256 repositories parse too.
    pub sha: String,
    /// Full ref path with any dereference suffix stripped,
    /// e.g. `refs/tags/v1.2.3`.
    pub ref_path: String,
    /// Last path segment of `ref_path`.
    pub name: String,
    /// Namespace of `ref_path`.
    pub kind: RefKind,
    /// True when the raw line carried the `^{}` suffix. Such a record's `sha`
    /// is the commit an annotated tag points to, not the tag object itself.
    pub dereferenced: bool,
}

impl RefRecord {
    /// Parse one `<sha><TAB><ref path>` line.
    ///
    /// # Examples
    ///
    /// ```
    /// use graft_refs::{RefKind, RefRecord};
    ///
    /// let record = RefRecord::parse("93a1b2c\trefs/tags/v1.2.3^{}").unwrap();
    /// assert_eq!(record.name, "v1.2.3");
    /// assert_eq!(record.kind, RefKind::Tag);
    /// assert!(record.dereferenced);
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches('\r');
        let (sha, raw_path) = line
            .split_once('\t')
            .ok_or_else(|| RefError::MalformedLine {
                line: line.to_string(),
            })?;
        let sha = sha.trim();
        let raw_path = raw_path.trim();
        if sha.is_empty() || raw_path.is_empty() || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RefError::MalformedLine {
                line: line.to_string(),
            });
        }

        let (ref_path, dereferenced) = match raw_path.strip_suffix(DEREF_SUFFIX) {
            Some(base) => (base, true),
            None => (raw_path, false),
        };

        let kind = if ref_path.starts_with("refs/tags/") {
            RefKind::Tag
        } else if ref_path.starts_with("refs/heads/") {
            RefKind::Branch
        } else {
            RefKind::Other
        };

        let name = ref_path.rsplit('/').next().unwrap_or(ref_path);

        Ok(Self {
            sha: sha.to_string(),
            ref_path: ref_path.to_string(),
            name: name.to_string(),
            kind,
            dereferenced,
        })
    }

    /// Returns `true` if this is a tag record.
    pub fn is_tag(&self) -> bool {
        self.kind == RefKind::Tag
    }

    /// Returns `true` if this is a branch record.
    pub fn is_branch(&self) -> bool {
        self.kind == RefKind::Branch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_branch_line() {
        let record = RefRecord::parse("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3\trefs/heads/main")
            .unwrap();
        assert_eq!(record.sha, "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
        assert_eq!(record.ref_path, "refs/heads/main");
        assert_eq!(record.name, "main");
        assert_eq!(record.kind, RefKind::Branch);
        assert!(!record.dereferenced);
    }

    #[test]
    fn parse_plain_tag_line() {
        let record = RefRecord::parse("b4d1c2e\trefs/tags/v1.0.0").unwrap();
        assert_eq!(record.name, "v1.0.0");
        assert_eq!(record.kind, RefKind::Tag);
        assert!(!record.dereferenced);
    }

    #[test]
    fn parse_dereferenced_tag_strips_suffix() {
        let record = RefRecord::parse("c0ffee1\trefs/tags/v1.0.0^{}").unwrap();
        assert_eq!(record.ref_path, "refs/tags/v1.0.0");
        assert_eq!(record.name, "v1.0.0");
        assert!(record.dereferenced);
    }

    #[test]
    fn parse_head_line_is_other_kind() {
        let record = RefRecord::parse("deadbeef\tHEAD").unwrap();
        assert_eq!(record.kind, RefKind::Other);
        assert_eq!(record.name, "HEAD");
    }

    #[test]
    fn parse_pull_ref_is_other_kind() {
        let record = RefRecord::parse("deadbeef\trefs/pull/42/head").unwrap();
        assert_eq!(record.kind, RefKind::Other);
        assert_eq!(record.name, "head");
    }

    #[test]
    fn nested_branch_name_is_last_segment() {
        let record = RefRecord::parse("deadbeef\trefs/heads/feature/auth").unwrap();
        assert_eq!(record.kind, RefKind::Branch);
        assert_eq!(record.name, "auth");
    }

    #[test]
    fn reject_line_without_tab() {
        let err = RefRecord::parse("deadbeef refs/heads/main").unwrap_err();
        assert!(matches!(err, RefError::MalformedLine { .. }));
    }

    #[test]
    fn reject_empty_fields() {
        assert!(RefRecord::parse("\trefs/heads/main").is_err());
        assert!(RefRecord::parse("deadbeef\t").is_err());
    }

    #[test]
    fn reject_non_hex_sha() {
        assert!(RefRecord::parse("not-a-sha\trefs/heads/main").is_err());
    }

    #[test]
    fn parse_tolerates_crlf() {
        let record = RefRecord::parse("deadbeef\trefs/heads/main\r").unwrap();
        assert_eq!(record.name, "main");
    }

    #[test]
    fn kind_and_name_depend_only_on_ref_path() {
        let a = RefRecord::parse("1111111\trefs/tags/v2.0.0").unwrap();
        let b = RefRecord::parse("2222222\trefs/tags/v2.0.0").unwrap();
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.name, b.name);
        assert_eq!(a.ref_path, b.ref_path);
    }
}
