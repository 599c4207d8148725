//! # Container Verification
//!
//! Entry points that tie loading, manifest checks and the directory scan
//! together for one resource container.

use std::path::{Path, PathBuf};

use rcv_core::{IssueKind, IssueReport, ProjectType, RcvError};

use crate::context::{ValidationContext, VerifyOptions};
use crate::error::ManifestResult;
use crate::loader::{detect_bom, parse_manifest, read_manifest};
use crate::manifest::verify_manifest;
use crate::scan::DirectoryScanner;

/// Name of the manifest file at the container root.
pub const MANIFEST_FILE_NAME: &str = "manifest.yaml";

/// Name of the media file an Open Bible Stories container must carry.
pub const MEDIA_FILE_NAME: &str = "media.yaml";

/// Verify the container at `dir`.
///
/// Returns `Err` only when `dir` is not a directory. Every other problem,
/// including an unreadable manifest, is part of the returned report.
pub fn verify_dir(dir: &Path, options: &VerifyOptions) -> ManifestResult<IssueReport> {
    if !dir.is_dir() {
        return Err(RcvError::NotADirectory(dir.to_path_buf()).into());
    }
    let dir: PathBuf = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    tracing::info!(dir = %dir.display(), today = %options.today, "verifying container");

    let mut ctx = ValidationContext::new(&dir, options.today);
    let manifest_path = dir.join(MANIFEST_FILE_NAME);
    if manifest_path.is_file() {
        verify_file(&mut ctx, &manifest_path);
    } else {
        ctx.fatal(
            IssueKind::MissingFile,
            MANIFEST_FILE_NAME,
            format!("No {MANIFEST_FILE_NAME} file in: {}", dir.display()),
        );
    }

    let scanner = DirectoryScanner::new(&dir)?.exclude(options.issues_file_name.as_str());
    ctx.extend(scanner.scan());

    if ctx.project_type() == Some(ProjectType::Obs) && !dir.join(MEDIA_FILE_NAME).is_file() {
        ctx.error(
            IssueKind::MissingFile,
            MEDIA_FILE_NAME,
            format!("Missing {MEDIA_FILE_NAME} file in: {}", dir.display()),
        );
    }

    let report = ctx.into_report();
    tracing::info!(issues = report.count(), "verification finished");
    Ok(report)
}

/// Load and verify one manifest file. Load failures become a single
/// fatal issue.
pub fn verify_file(ctx: &mut ValidationContext, path: &Path) {
    let bytes = match read_manifest(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            ctx.fatal(IssueKind::Unreadable, MANIFEST_FILE_NAME, e.to_string());
            return;
        }
    };
    if let Some(bom) = detect_bom(&bytes) {
        tracing::debug!(%bom, "byte-order mark found");
        ctx.error(
            IssueKind::ByteOrderMark,
            MANIFEST_FILE_NAME,
            "manifest.yaml file has a Byte Order Mark. Remove it.",
        );
    }
    match parse_manifest(path, &bytes) {
        Ok(manifest) => verify_manifest(ctx, &manifest),
        Err(e) => ctx.fatal(IssueKind::Unreadable, MANIFEST_FILE_NAME, e.to_string()),
    }
}
