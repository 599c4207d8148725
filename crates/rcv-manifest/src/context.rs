//! # Validation Context
//!
//! All per-run state lives in a [`ValidationContext`] that is threaded
//! through every validator: the manifest directory, the reference date,
//! the resolved project type and the issues found so far. Nothing is
//! global, so several manifests can be verified in one process and tests
//! need no reset logic.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rcv_core::{Issue, IssueKind, IssueReport, ProjectType, Severity};

/// Default name of the issues file written beside the manifest.
pub const ISSUES_FILE_NAME: &str = "manifest-issues.txt";

/// Options for one verification run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// The date `dublin_core.modified` must equal.
    pub today: NaiveDate,
    /// File name the directory scanner must not flag.
    pub issues_file_name: String,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
            issues_file_name: ISSUES_FILE_NAME.to_string(),
        }
    }
}

/// Per-run verification state.
#[derive(Debug)]
pub struct ValidationContext {
    manifest_dir: PathBuf,
    dir_name: String,
    today: NaiveDate,
    project_type: Option<ProjectType>,
    report: IssueReport,
}

impl ValidationContext {
    /// Create a context for the manifest in `manifest_dir`.
    pub fn new(manifest_dir: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let manifest_dir = manifest_dir.into();
        let dir_name = manifest_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            manifest_dir,
            dir_name,
            today,
            project_type: None,
            report: IssueReport::new(),
        }
    }

    /// The directory containing the manifest.
    pub fn manifest_dir(&self) -> &Path {
        &self.manifest_dir
    }

    /// Language code taken from the directory name: `en_tn` → `en`.
    pub fn language_id(&self) -> &str {
        self.dir_name
            .split_once('_')
            .map_or(self.dir_name.as_str(), |(lang, _)| lang)
    }

    /// Last `_`-delimited segment of the directory name: `en_tn` → `tn`.
    pub fn dir_suffix(&self) -> &str {
        self.dir_name
            .rsplit_once('_')
            .map_or(self.dir_name.as_str(), |(_, suffix)| suffix)
    }

    /// The reference date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The resolved project type, if the identifier was recognized.
    pub fn project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    /// Record the project type. It can be set once per run; later
    /// attempts are ignored and return `false`.
    pub fn set_project_type(&mut self, project_type: ProjectType) -> bool {
        if let Some(existing) = self.project_type {
            tracing::warn!(
                %existing,
                attempted = %project_type,
                "project type already resolved; ignoring"
            );
            return false;
        }
        tracing::info!(project_type = %project_type, "resolved project type");
        self.project_type = Some(project_type);
        true
    }

    /// Record a finding.
    pub fn push(&mut self, issue: Issue) {
        tracing::debug!(
            kind = ?issue.kind,
            severity = %issue.severity,
            field = %issue.field,
            "{}",
            issue.message
        );
        self.report.push(issue);
    }

    /// Record an [`Severity::Error`].
    pub fn error(&mut self, kind: IssueKind, field: impl Into<String>, message: impl Into<String>) {
        self.push(Issue::new(kind, Severity::Error, field, message));
    }

    /// Record a [`Severity::Warning`].
    pub fn warning(
        &mut self,
        kind: IssueKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Issue::new(kind, Severity::Warning, field, message));
    }

    /// Record a [`Severity::Notice`].
    pub fn notice(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(Issue::new(IssueKind::ManualCheck, Severity::Notice, field, message));
    }

    /// Record a [`Severity::Fatal`] finding.
    pub fn fatal(&mut self, kind: IssueKind, field: impl Into<String>, message: impl Into<String>) {
        self.push(Issue::new(kind, Severity::Fatal, field, message));
    }

    /// Append findings produced elsewhere (e.g. the directory scan).
    pub fn extend(&mut self, report: IssueReport) {
        for issue in report {
            self.push(issue);
        }
    }

    /// Findings so far.
    pub fn report(&self) -> &IssueReport {
        &self.report
    }

    /// Finish the run.
    pub fn into_report(self) -> IssueReport {
        self.report
    }
}
