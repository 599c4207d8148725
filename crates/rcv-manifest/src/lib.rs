//! # rcv-manifest — Resource Container Manifest Verification
//!
//! Checks a Door43 resource container: its `manifest.yaml` against the
//! Dublin Core schema and the per-project-type rules, and the directory
//! tree for stray or misnamed files.
//!
//! ## Flow
//!
//! [`verify_dir`] loads the manifest ([`loader`]), walks it section by
//! section ([`manifest`], [`projects`]) and scans the tree ([`scan`]).
//! Everything is recorded in a [`ValidationContext`] and handed back as an
//! [`IssueReport`](rcv_core::IssueReport).
//!
//! The project type is resolved from `dublin_core.identifier` once, up
//! front; every type-dependent rule reads it from the [`rules`] table.
//! When the identifier is not recognized, those rules degrade to manual
//! verification notices and the type-independent checks still run.
//!
//! ## Crate Policy
//!
//! - Depends only on `rcv-core` internally.
//! - Rule violations are issues, never `Err`. `Err` is reserved for a run
//!   that cannot start (the target is not a directory).

pub mod context;
pub mod error;
pub mod fields;
pub mod loader;
pub mod manifest;
pub mod projects;
pub mod rules;
pub mod scan;
pub mod schema;
pub mod verify;

pub use context::{ValidationContext, VerifyOptions, ISSUES_FILE_NAME};
pub use error::{ManifestError, ManifestResult};
pub use fields::parse_date;
pub use rules::{resolve_project_type, rules_for, RuleBundle};
pub use scan::DirectoryScanner;
pub use verify::{verify_dir, verify_file, MANIFEST_FILE_NAME, MEDIA_FILE_NAME};
