//! # Verify Command
//!
//! Verifies one resource container directory, prints the findings, and
//! writes `manifest-issues.txt` when there are any.
//!
//! Exit codes: 0 when clean, 1 when issues were found, 2 when the
//! manifest could not be verified at all.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rcv_core::{IssueReport, RcvError};
use rcv_manifest::{parse_date, verify_dir, VerifyOptions};

use crate::report::{render_json, render_text, write_issues_file, OutputFormat};

/// Exit code for a clean container.
pub const EXIT_CLEAN: u8 = 0;
/// Exit code when issues were found.
pub const EXIT_ISSUES: u8 = 1;
/// Exit code when verification could not run or the manifest is unreadable.
pub const EXIT_FATAL: u8 = 2;

/// Arguments for a verification run.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Resource container directory. Defaults to the current directory.
    #[arg(value_name = "DIR", env = "RCV_MANIFEST_DIR")]
    pub dir: Option<PathBuf>,

    /// Console output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not write the issues file.
    #[arg(long)]
    pub no_issues_file: bool,

    /// Date `dublin_core.modified` must equal. Defaults to today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,
}

/// Execute a verification run and return the process exit code.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let options = verify_options(args)?;
    tracing::debug!(dir = %dir.display(), today = %options.today, "starting verification");

    let report = verify_dir(&dir, &options)
        .with_context(|| format!("cannot verify {}", dir.display()))?;

    emit(args.format, &dir, &report);

    if !args.no_issues_file {
        match write_issues_file(&dir, &options.issues_file_name, &report) {
            Ok(Some(path)) => tracing::info!(path = %path.display(), "wrote issues file"),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "could not write issues file"),
        }
    }

    Ok(exit_code(&report))
}

fn verify_options(args: &ValidateArgs) -> Result<VerifyOptions> {
    let mut options = VerifyOptions::default();
    if let Some(value) = &args.today {
        options.today = parse_date(value).ok_or_else(|| RcvError::InvalidDate {
            value: value.clone(),
        })?;
    }
    Ok(options)
}

/// Print the report; console failures are logged, not fatal.
fn emit(format: OutputFormat, dir: &std::path::Path, report: &IssueReport) {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let result = match format {
        OutputFormat::Text => render_text(report, &mut out, &mut stderr.lock()),
        OutputFormat::Json => render_json(dir, report, &mut out),
    };
    if let Err(e) = result.and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "failed to write report to console");
    }
}

/// Map a report to the process exit code.
pub fn exit_code(report: &IssueReport) -> u8 {
    if report.has_fatal() {
        EXIT_FATAL
    } else if report.is_clean() {
        EXIT_CLEAN
    } else {
        EXIT_ISSUES
    }
}
