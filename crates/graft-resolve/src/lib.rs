//! Specifier resolution for graft.
//!
//! This crate turns a human-supplied version specifier — a branch name, an
//! exact commit hash, a semantic version, or a semantic-version range — into
//! a concrete remote repository state: a commit sha and, optionally, the
//! canonical ref name pointing at it. It is the logic layer used by
//! dependency tooling that must fetch "the right commit" without a full
//! local clone.
//!
//! # Architecture
//!
//! - A [`Specifier`] is classified once, via the semver predicates, into
//!   exact version, range, or opaque commit-ish.
//! - All remote state arrives through the [`RemoteRefs`] transport as raw
//!   remote-listing text and is parsed into `graft_refs::RefSet`s.
//! - The [`Resolver`] narrows ranges against remote tags, resolves
//!   specifiers to commit hashes (trying the annotated-tag dereferenced form
//!   first for released versions), and maps hashes back to display names.
//!
//! # Modules
//!
//! - [`error`] — [`ResolveError`] and [`TransportError`]
//! - [`specifier`] — Specifier classification and version parsing
//! - [`transport`] — The [`RemoteRefs`] collaborator trait
//! - [`resolver`] — The [`Resolver`] engine and [`Pin`]
//! - [`memory`] — In-memory [`StaticRemote`] for tests

pub mod error;
pub mod memory;
pub mod resolver;
pub mod specifier;
pub mod transport;

pub use error::{ResolveError, ResolveResult, TransportError, TransportResult};
pub use memory::StaticRemote;
pub use resolver::{Pin, Resolver};
pub use specifier::{parse_version, Specifier};
pub use transport::RemoteRefs;
