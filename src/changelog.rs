//! Changelog entry extraction and output filename derivation.
//!
//! A debian/changelog entry starts with a header line following the
//! convention `name (version) distribution; urgency=...`, and new entries
//! are prepended. The newest entry in a debdiff is therefore the first
//! added line in the changelog hunks that matches the header pattern.

use crate::error::{DebdiffError, Result};
use crate::patch::PatchSet;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern for a changelog entry header: `name (version) ...`.
static ENTRY_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+) \((\S+)\) ").expect("Invalid entry header regex"));

/// A changelog entry header parsed from an added line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub package: String,
    pub version: String,
}

/// Parse a single line as a changelog entry header.
///
/// Returns `None` if the line does not follow the
/// `name (version) distribution; urgency=...` convention. Continuation
/// lines, bullet points, and maintainer trailers are all indented or
/// shaped differently, so they never match.
pub fn parse_entry_line(line: &str) -> Option<ChangelogEntry> {
    let captures = ENTRY_HEADER_REGEX.captures(line)?;
    Some(ChangelogEntry {
        package: captures[1].to_string(),
        version: captures[2].to_string(),
    })
}

/// Derive the output filename from a parsed debdiff.
///
/// Scans the file patches for one targeting `debian/changelog`, then scans
/// its hunks top-to-bottom for the first added line that parses as an entry
/// header. First match wins; no version comparison is attempted.
///
/// The result is `<package>_<version>.debdiff` with `/` replaced by `_`
/// (version strings may contain characters unsafe for filenames). Pure:
/// identical input always yields an identical filename.
///
/// # Errors
///
/// * `DebdiffError::ChangelogNotFound` - no patched file ends in
///   `debian/changelog`
/// * `DebdiffError::ChangelogParse` - the changelog hunks add no
///   recognizable entry header
pub fn derive_filename_from_debdiff(patch_set: &PatchSet) -> Result<String> {
    let changelog = patch_set
        .files
        .iter()
        .find(|file| file.target_path.ends_with("debian/changelog"))
        .ok_or(DebdiffError::ChangelogNotFound)?;

    let entry = changelog
        .hunks
        .iter()
        .flat_map(|hunk| hunk.added_lines())
        .find_map(parse_entry_line)
        .ok_or(DebdiffError::ChangelogParse)?;

    Ok(format!("{}_{}.debdiff", entry.package, entry.version).replace('/', "_"))
}
