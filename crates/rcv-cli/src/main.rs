//! # rcv CLI entry point
//!
//! Parses command-line arguments, sets up logging and runs the verifier.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rcv_cli::validate::{run_validate, ValidateArgs, EXIT_FATAL};

/// Verify the manifest of a Door43 resource container.
///
/// Checks manifest.yaml against the Dublin Core schema and the rules of
/// its project type, and scans the container for stray or misnamed files.
#[derive(Parser, Debug)]
#[command(name = "rcv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    args: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "rcv starting");

    match run_validate(&cli.args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}
