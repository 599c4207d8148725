//! # Report Output
//!
//! Renders an [`IssueReport`] for the console (text or JSON) and writes
//! the plain-text issues file beside the manifest.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rcv_core::IssueReport;
use serde::Serialize;

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Issues on stderr, notices and the summary on stdout.
    Text,
    /// The whole report as one JSON document on stdout.
    Json,
}

/// The one-line summary printed after a run.
pub fn summary(report: &IssueReport) -> String {
    match report.count() {
        0 => "Done, no issues found.".to_string(),
        n => format!("Finished checking, found {n} issues."),
    }
}

/// Write counted issues to `err`, then notices and the summary to `out`.
pub fn render_text(
    report: &IssueReport,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    for issue in report.counted() {
        writeln!(err, "{issue}")?;
    }
    for notice in report.notices() {
        writeln!(out, "{notice}")?;
    }
    writeln!(out, "{}", summary(report))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    directory: &'a Path,
    count: usize,
    summary: String,
    #[serde(flatten)]
    report: &'a IssueReport,
}

/// Write the report as pretty-printed JSON.
pub fn render_json(dir: &Path, report: &IssueReport, out: &mut impl Write) -> io::Result<()> {
    let doc = JsonReport {
        directory: dir,
        count: report.count(),
        summary: summary(report),
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

/// Contents of the issues file: one line per counted issue.
pub fn issues_file_contents(report: &IssueReport) -> String {
    report.counted().map(|i| format!("{i}\n")).collect()
}

/// Write the issues file, or remove a stale one when the report is clean.
///
/// Returns the path written, or `None` for a clean report.
pub fn write_issues_file(
    dir: &Path,
    file_name: &str,
    report: &IssueReport,
) -> io::Result<Option<PathBuf>> {
    let path = dir.join(file_name);
    if report.is_clean() {
        return match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed stale issues file");
                Ok(None)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        };
    }
    std::fs::write(&path, issues_file_contents(report))?;
    Ok(Some(path))
}
