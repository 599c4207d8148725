//! # Directory Scanner
//!
//! Walks the container looking for files that probably do not belong:
//! editor leftovers and backups ("possible extraneous file") and markdown
//! files whose names carry a long digit run ("likely misnamed file").
//! Directories are judged by the same name rules as files.

use std::path::{Path, PathBuf};

use rcv_core::{Issue, IssueKind, IssueReport, Severity};
use regex::Regex;
use walkdir::WalkDir;

use crate::error::ManifestResult;

/// Name fragments that mark a file as probably extraneous.
pub const SUSPICIOUS_FRAGMENTS: &[&str] = &["temp", "tmp", "orig", "Copy", ".txt", "projects"];

const MISNAMED_MARKDOWN: &str = r"^.*\d{4,}.*\.md$";

const SKIPPED_DIRS: &[&str] = &[".git"];

/// Recursive scan of a container directory.
#[derive(Debug)]
pub struct DirectoryScanner {
    root: PathBuf,
    misnamed: Regex,
    excluded: Vec<String>,
}

impl DirectoryScanner {
    pub fn new(root: impl Into<PathBuf>) -> ManifestResult<Self> {
        Ok(Self {
            root: root.into(),
            misnamed: Regex::new(MISNAMED_MARKDOWN)?,
            excluded: Vec::new(),
        })
    }

    /// Never flag the entry at this root-relative, `/`-separated path.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    /// Scan the tree. Entries are visited in file-name order; symlinks
    /// are reported by name but not followed.
    pub fn scan(&self) -> IssueReport {
        let mut report = IssueReport::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !SKIPPED_DIRS
                    .iter()
                    .any(|skip| e.file_type().is_dir() && e.file_name() == *skip)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy();
            let short = self.short_name(entry.path());
            if self.excluded.contains(&short) {
                continue;
            }
            if let Some(issue) = self.judge(&name, &short) {
                report.push(issue);
            }
        }
        tracing::debug!(root = %self.root.display(), found = report.count(), "directory scan done");
        report
    }

    fn judge(&self, name: &str, short: &str) -> Option<Issue> {
        if SUSPICIOUS_FRAGMENTS.iter().any(|f| name.contains(f)) {
            Some(Issue::new(
                IssueKind::ExtraneousFile,
                Severity::Warning,
                short,
                format!("Possible extraneous file: {short}"),
            ))
        } else if self.misnamed.is_match(name) {
            Some(Issue::error(
                IssueKind::MisnamedFile,
                short,
                format!("Likely misnamed file: {short}"),
            ))
        } else {
            None
        }
    }

    /// Path relative to the root, `/`-separated.
    fn short_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
