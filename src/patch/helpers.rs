//! Helper functions for diff parsing.

/// Parse the target path from the remainder of a `+++ ` header line.
///
/// Handles the formats a debdiff can carry:
/// - `path/to/file\t2022-10-05 19:13:56.000000000 +0200` (diff -u timestamp)
/// - `b/path/to/file` (git-style)
/// - `/dev/null` (file deletion)
///
/// Returns `None` for deletions and malformed headers.
pub(super) fn parse_target_path(rest: &str) -> Option<String> {
    // diff -u appends a tab-separated timestamp after the path.
    let path = rest.split('\t').next().unwrap_or(rest).trim_end();
    if path == "/dev/null" {
        return None;
    }

    let path = path.strip_prefix("b/").unwrap_or(path);
    if path.is_empty() {
        None
    } else {
        Some(normalize_path(path))
    }
}

/// Parse a hunk header line.
///
/// Format: `@@ -old_start,old_len +new_start,new_len @@` with the lengths
/// optional and trailing context after the closing `@@` allowed.
///
/// Returns `(old_start, new_start)` or `None` if parsing fails.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let line = line.strip_prefix("@@ ")?;
    let range_part = &line[..line.find(" @@")?];

    let mut parts = range_part.split_whitespace();
    let old_part = parts.next()?.strip_prefix('-')?;
    let new_part = parts.next()?.strip_prefix('+')?;

    Some((parse_range_start(old_part)?, parse_range_start(new_part)?))
}

/// Parse the start line from a range specification (`start` or `start,len`).
fn parse_range_start(range: &str) -> Option<usize> {
    let start_str = match range.find(',') {
        Some(comma_pos) => &range[..comma_pos],
        None => range,
    };

    start_str.parse().ok()
}

/// Normalize a file path to use forward slashes.
///
/// Keeps the `debian/changelog` suffix check consistent regardless of the
/// platform where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
