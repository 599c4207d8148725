//! # rcv-core — Foundational Types for Resource Container Verification
//!
//! Defines the types every other crate in the workspace depends on. It has
//! no internal crate dependencies.
//!
//! ## Key Design Principles
//!
//! 1. **Single [`ProjectType`] enum.** One definition, 14 variants,
//!    exhaustive `match` everywhere. The rule table in `rcv-manifest` is
//!    keyed by it, so no per-type knowledge can drift into ad hoc string
//!    comparisons.
//!
//! 2. **Structured issues.** A rule violation is an [`Issue`] with a kind,
//!    a severity, a field path and a message. Tests assert on kinds, the
//!    CLI prints messages.
//!
//! 3. **Errors are for operations, issues are for content.** [`RcvError`]
//!    covers failures that prevent verification; everything a manifest gets
//!    wrong is an issue.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rcv-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod books;
pub mod error;
pub mod issue;
pub mod project_type;

pub use books::{Book, Testament, BOOKS};
pub use error::RcvError;
pub use issue::{Issue, IssueKind, IssueReport, Severity};
pub use project_type::ProjectType;
