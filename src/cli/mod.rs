//! CLI argument parsing for savedebdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The actual workflow lives in the `commands` module; parsed arguments
//! are passed into it explicitly so the workflow stays unit-testable.

use clap::Parser;
use std::path::PathBuf;

/// Save a debdiff from standard input.
///
/// Reads a unified diff from stdin, derives the output filename from the
/// newest debian/changelog entry added by the diff, and writes the diff
/// verbatim to `<directory>/<package>_<version>.debdiff`.
#[derive(Parser, Debug)]
#[command(name = "savedebdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to save the debdiff in.
    #[arg(short, long, default_value = ".", value_name = "PATH")]
    pub directory: PathBuf,

    /// Overwrite an existing file that has different content.
    #[arg(short, long)]
    pub force: bool,

    /// Open the saved debdiff with xdg-open.
    #[arg(short, long)]
    pub open: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
