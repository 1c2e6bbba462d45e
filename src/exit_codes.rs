//! Exit code constants for the savedebdiff CLI.
//!
//! The tool has a single failure mode from the caller's perspective:
//! - 0: Success (file written, or already up to date)
//! - 1: Failure (empty input, no changelog entry, or overwrite conflict)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Fatal failure: empty input, missing or unparseable debian/changelog,
/// or an existing file with different content without --force.
pub const FAILURE: i32 = 1;
