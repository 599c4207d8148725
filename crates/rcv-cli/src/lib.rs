//! # rcv-cli — Resource Container Verifier
//!
//! Provides the `rcv` command-line interface over `rcv-manifest`.
//!
//! ```bash
//! rcv path/to/hi_tn
//! rcv --format json --no-issues-file .
//! RCV_MANIFEST_DIR=path/to/hi_obs rcv -v
//! ```
//!
//! Issues go to stderr, reminders and the summary to stdout, and a
//! `manifest-issues.txt` file is written beside the manifest when anything
//! was found.

pub mod report;
pub mod validate;
