//! Savedebdiff: save a debdiff from standard input under its derived name.
//!
//! This is the main entry point for the `savedebdiff` CLI. It parses
//! arguments, reads the diff from standard input, dispatches to the save
//! workflow, and handles errors with proper exit codes.

mod changelog;
mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
mod opener;
mod patch;
mod save;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Read stdin to completion once; the workflow never touches it again.
    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Error: failed to read standard input: {}", err);
        return ExitCode::from(exit_codes::FAILURE as u8);
    }

    match commands::run(&cli, &input) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
