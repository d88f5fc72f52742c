//! Binary crate for the `meteocli` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Human-friendly and JSON output formatting
//! - Process exit codes

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    let as_json = cmd.json;

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = output::write_error(&mut io::stderr(), as_json, &err);
            ExitCode::FAILURE
        }
    }
}
