//! Error types for the savedebdiff CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for savedebdiff operations.
///
/// Every variant is fatal and maps to exit code 1; there are no transient
/// failure classes in this workflow, so nothing is ever retried.
#[derive(Error, Debug)]
pub enum DebdiffError {
    /// Nothing arrived on standard input.
    #[error("empty input on stdin (expected a debdiff)")]
    EmptyInput,

    /// The diff does not touch a debian/changelog file.
    #[error("No debian/changelog found")]
    ChangelogNotFound,

    /// The debian/changelog hunks contain no recognizable entry header.
    #[error("no changelog entry header found among added debian/changelog lines")]
    ChangelogParse,

    /// Destination exists with different content and --force was not given.
    #[error("'{}' already exists with different content. Re-run with --force to overwrite it.", .0.display())]
    Conflict(PathBuf),

    /// A filesystem or subprocess operation failed.
    #[error("{0}")]
    Io(String),
}

impl DebdiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DebdiffError::EmptyInput
            | DebdiffError::ChangelogNotFound
            | DebdiffError::ChangelogParse
            | DebdiffError::Conflict(_)
            | DebdiffError::Io(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for savedebdiff operations.
pub type Result<T> = std::result::Result<T, DebdiffError>;
