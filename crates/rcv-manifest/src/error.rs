//! Manifest-specific error types.
//!
//! Structured errors for loading a manifest and setting up a verification
//! run. Load failures are turned into fatal issues by the verifier; only
//! setup failures (bad target directory) escape as `Err`.

use std::path::PathBuf;

use rcv_core::RcvError;
use thiserror::Error;

/// Errors that can occur while loading or verifying a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Foundational error (bad directory, I/O).
    #[error(transparent)]
    Core(#[from] RcvError),

    /// The manifest file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest bytes are not UTF-8.
    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding { path: PathBuf },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {}: {source}", .path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The document parsed but its top level is not a mapping.
    #[error("{}: top level of the manifest must be a mapping", .path.display())]
    NotAMapping { path: PathBuf },

    /// A file-name pattern failed to compile.
    #[error("invalid file-name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience alias.
pub type ManifestResult<T> = Result<T, ManifestError>;
