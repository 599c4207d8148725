//! # Issues
//!
//! Structured records for everything a verification run finds. An
//! [`IssueReport`] accumulates them in detection order; nothing is
//! deduplicated or reordered, so one run surfaces the complete list.
//!
//! [`Severity::Notice`] entries are reminders for a human (for example
//! "verify subject manually") and do not count toward the issue total.

use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational reminder. Not counted.
    Notice,
    /// Probably wrong, needs a human look.
    Warning,
    /// A rule violation.
    Error,
    /// The manifest could not be verified at all.
    Fatal,
}

impl Severity {
    /// Whether findings of this severity count toward the issue total.
    pub fn is_counted(&self) -> bool {
        !matches!(self, Self::Notice)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

/// What kind of rule produced the finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required key is absent.
    MissingField,
    /// A key is present that the schema does not allow.
    ExtraField,
    /// A value has the wrong YAML type.
    WrongType,
    /// A value has the right type but an unacceptable content.
    InvalidValue,
    /// A date could not be parsed or the dates are inconsistent.
    InvalidDate,
    /// The version does not pair with the source version.
    InvalidVersion,
    /// A relation string is malformed or points somewhere it may not.
    InvalidRelation,
    /// The identifier does not agree with the directory name.
    DirectoryMismatch,
    /// The number of project entries is wrong for the project type.
    ProjectCount,
    /// A project entry violates its per-type rules.
    InvalidProject,
    /// A file that probably should not be in the container.
    ExtraneousFile,
    /// A markdown file whose name looks wrong.
    MisnamedFile,
    /// A required file is absent.
    MissingFile,
    /// The manifest starts with a byte-order mark.
    ByteOrderMark,
    /// The manifest could not be read or parsed.
    Unreadable,
    /// The check could not be automated for this project type.
    ManualCheck,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Rule family.
    pub kind: IssueKind,
    /// Seriousness.
    pub severity: Severity,
    /// Field path such as `dublin_core:format`, or a file path for
    /// directory findings. Empty when not applicable.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    /// Create an issue.
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`Severity::Error`] issue.
    pub fn error(kind: IssueKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Error, field, message)
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered accumulation of findings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    issues: Vec<Issue>,
}

impl IssueReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// All findings, notices included, in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Findings that count toward the issue total.
    pub fn counted(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity.is_counted())
    }

    /// Notices only.
    pub fn notices(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.severity.is_counted())
    }

    /// The running issue count.
    pub fn count(&self) -> usize {
        self.counted().count()
    }

    /// Whether nothing countable was found.
    pub fn is_clean(&self) -> bool {
        self.count() == 0
    }

    /// Whether any finding is fatal.
    pub fn has_fatal(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Fatal)
    }

    /// Number of findings of the given kind.
    pub fn count_kind(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    /// Whether any finding of the given kind exists.
    pub fn has_kind(&self, kind: IssueKind) -> bool {
        self.count_kind(kind) > 0
    }
}

impl IntoIterator for IssueReport {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
