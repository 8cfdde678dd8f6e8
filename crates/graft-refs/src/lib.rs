//! Remote-listing data model for graft.
//!
//! A remote-listing query (`git ls-remote`) reports one reference per line as
//! `<sha><TAB><ref path>`. This crate turns that text into structured data:
//!
//! - [`RefRecord`] — one parsed line: sha, ref path, short name, namespace,
//!   and whether the line carried the annotated-tag dereference marker.
//! - [`RefSet`] — the ordered records of one full query, with lookup by sha
//!   prefix, tag-name collection, and the annotated-tag commit rule.
//!
//! Everything here is pure and synchronous. Fetching the listing text is the
//! job of a transport (see `graft-resolve` and `graft-git`).
//!
//! # Modules
//!
//! - [`error`] — Error types for line parsing
//! - [`types`] — [`RefRecord`] and [`RefKind`]
//! - [`refset`] — The [`RefSet`] collection

pub mod error;
pub mod refset;
pub mod types;

pub use error::{RefError, Result};
pub use refset::RefSet;
pub use types::{RefKind, RefRecord, DEREF_SUFFIX};
