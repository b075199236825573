//! Clasificar CLI
//!
//! Build-time generator entry point.
//!
//! # Usage
//!
//! ```bash
//! # Generate coverage tables from a registry
//! clasificar generate operators.yaml -o coverage.rs
//!
//! # Generate to stdout
//! clasificar generate operators.yaml
//!
//! # Validate a registry without emitting
//! clasificar validate operators.yaml
//!
//! # Show per-category membership counts
//! clasificar info operators.yaml
//! ```

use clap::Parser;
use clasificar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
