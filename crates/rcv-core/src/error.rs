//! # Error Hierarchy
//!
//! Structured error types for resource container verification, built with
//! `thiserror`. These are operational failures that stop a run from
//! producing a report at all. Rule violations are never errors; they are
//! [`Issue`](crate::Issue)s.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum RcvError {
    /// The target path is not a directory.
    #[error("invalid directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A project type string is not in the known enumeration.
    #[error("unknown project type: \"{0}\"")]
    UnknownProjectType(String),

    /// A date override could not be parsed.
    #[error("invalid date \"{value}\" (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },
}
