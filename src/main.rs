//! # AstraMig CLI
//!
//! This is the binary entry point for the `astramig` command-line tool.
//!
//! Its primary responsibilities are:
//! - Capturing command-line arguments using `clap`.
//! - Running the selected action through the `astramig` library.
//! - Printing the outcome and terminating with its exit code.
//!
//! All decisions live in the library crate; the binary only performs the
//! final I/O and process exit.

mod cli;

use std::process::ExitCode;

use anyhow::Result;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse_args();
    cli.execute()
}
