//! Specifier classification.
//!
//! A caller's specifier is one of three things, decided once via the semver
//! predicates and then dispatched on explicitly — never re-tested inline at
//! call sites:
//!
//! - an exact semantic version (`1.2.3`, `v1.2.3`),
//! - a semantic-version range (`^1.0`, `>=1, <2`, `*`),
//! - an opaque commit-ish (branch name, raw hash, `HEAD`).

use graft_refs::DEREF_SUFFIX;
use semver::{Comparator, Op, Version, VersionReq};

/// A classified version specifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Specifier {
    /// An exact semantic version.
    Exact(Version),
    /// A semantic-version range.
    Range(VersionReq),
    /// Anything else: branch name, raw commit hash, `HEAD`.
    Opaque(String),
}

impl Specifier {
    /// Classify a raw specifier string.
    ///
    /// A specifier already carrying the dereference suffix is never treated
    /// as a version; it passes through as an opaque ref unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use graft_resolve::Specifier;
    ///
    /// assert!(matches!(Specifier::classify("v1.2.3"), Specifier::Exact(_)));
    /// assert!(matches!(Specifier::classify("^1.0"), Specifier::Range(_)));
    /// assert!(matches!(Specifier::classify("main"), Specifier::Opaque(_)));
    /// ```
    pub fn classify(input: &str) -> Self {
        if !input.ends_with(DEREF_SUFFIX) {
            if let Some(version) = parse_version(input) {
                return Specifier::Exact(version);
            }
        }
        if let Ok(req) = VersionReq::parse(input) {
            return Specifier::Range(req);
        }
        Specifier::Opaque(input.to_string())
    }
}

/// Parse a version string the way release tags are commonly written: an
/// optional `=`, an optional leading `v`/`V`, then a full `x.y.z` version.
pub fn parse_version(input: &str) -> Option<Version> {
    let s = input.trim();
    let s = s.strip_prefix('=').unwrap_or(s).trim_start();
    let s = s.strip_prefix(['v', 'V']).unwrap_or(s);
    Version::parse(s).ok()
}

/// A requirement matching exactly `version`, prerelease included.
///
/// Built by hand rather than through `VersionReq::parse` because a rendered
/// version may carry build metadata, which requirement syntax rejects.
pub(crate) fn exact_req(version: &Version) -> VersionReq {
    VersionReq {
        comparators: vec![Comparator {
            op: Op::Exact,
            major: version.major,
            minor: Some(version.minor),
            patch: Some(version.patch),
            pre: version.pre.clone(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_versions() {
        assert!(matches!(Specifier::classify("1.2.3"), Specifier::Exact(_)));
        assert!(matches!(Specifier::classify("v1.2.3"), Specifier::Exact(_)));
        assert!(matches!(Specifier::classify("V1.2.3"), Specifier::Exact(_)));
        assert!(matches!(Specifier::classify("=1.2.3"), Specifier::Exact(_)));
        assert!(matches!(
            Specifier::classify("1.0.0-alpha.1"),
            Specifier::Exact(_)
        ));
    }

    #[test]
    fn ranges() {
        assert!(matches!(Specifier::classify("^1.0.0"), Specifier::Range(_)));
        assert!(matches!(Specifier::classify("~2.1"), Specifier::Range(_)));
        assert!(matches!(
            Specifier::classify(">=1, <2"),
            Specifier::Range(_)
        ));
        assert!(matches!(Specifier::classify("*"), Specifier::Range(_)));
        // A partial version is a range, not an exact version.
        assert!(matches!(Specifier::classify("1.2"), Specifier::Range(_)));
    }

    #[test]
    fn opaque_refs() {
        assert!(matches!(Specifier::classify("main"), Specifier::Opaque(_)));
        assert!(matches!(Specifier::classify("HEAD"), Specifier::Opaque(_)));
        assert!(matches!(
            Specifier::classify("feature/auth"),
            Specifier::Opaque(_)
        ));
        assert!(matches!(
            Specifier::classify("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3"),
            Specifier::Opaque(_)
        ));
    }

    #[test]
    fn dereference_suffix_is_never_a_version() {
        assert!(matches!(
            Specifier::classify("v1.2.3^{}"),
            Specifier::Opaque(_)
        ));
    }

    #[test]
    fn parse_version_lenient_prefixes() {
        assert_eq!(
            parse_version("v1.2.3"),
            Some(Version::new(1, 2, 3))
        );
        assert_eq!(
            parse_version("= 1.2.3"),
            Some(Version::new(1, 2, 3))
        );
        assert_eq!(parse_version("version-2"), None);
        assert_eq!(parse_version("1.2"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn exact_req_matches_only_that_version() {
        let version = Version::new(1, 2, 3);
        let req = exact_req(&version);
        assert!(req.matches(&version));
        assert!(!req.matches(&Version::new(1, 2, 4)));
        assert!(!req.matches(&Version::new(1, 3, 0)));
    }

    #[test]
    fn exact_req_handles_prerelease() {
        let version = Version::parse("1.0.0-beta.2").unwrap();
        let req = exact_req(&version);
        assert!(req.matches(&version));
        assert!(!req.matches(&Version::new(1, 0, 0)));
    }
}
