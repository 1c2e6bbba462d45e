//! Core diff parsing logic.

use super::helpers::{parse_hunk_header, parse_target_path};
use super::model::{FilePatch, Hunk, LineKind, PatchLine, PatchSet};

/// Parse unified diff text into a `PatchSet`.
///
/// This is a single pass over the input lines. A `+++` header opens a new
/// file patch, `@@` headers open hunks, and `+`/`-`/` ` lines fill the
/// current hunk. Lines outside any recognized file patch (prologue text,
/// `diff -Nru ...` command lines, index lines) are ignored.
///
/// Parsing never fails: an empty or unrecognizable input simply yields an
/// empty patch set, and the changelog lookup reports the missing file.
pub fn parse_patch_set(text: &str) -> PatchSet {
    let mut files: Vec<FilePatch> = Vec::new();
    let mut current: Option<FilePatch> = None;

    for line in text.lines() {
        // Destination header opens a new file patch.
        // Format: "+++ path\ttimestamp" or "+++ b/path"
        if let Some(rest) = line.strip_prefix("+++ ") {
            if let Some(file) = current.take() {
                files.push(file);
            }
            current = parse_target_path(rest).map(|target_path| FilePatch {
                target_path,
                hunks: Vec::new(),
            });
            continue;
        }

        // Source header; the path we keep comes from the "+++" side.
        if line.starts_with("--- ") {
            continue;
        }

        // A "diff ..." command line separates file patches. Close the
        // current one so stray lines cannot attach to its last hunk.
        if line.starts_with("diff ") {
            if let Some(file) = current.take() {
                files.push(file);
            }
            continue;
        }

        let Some(file) = current.as_mut() else {
            continue;
        };

        // Hunk header.
        // Format: "@@ -old_start,old_len +new_start,new_len @@ context"
        if line.starts_with("@@ ") {
            if let Some((old_start, new_start)) = parse_hunk_header(line) {
                file.hunks.push(Hunk {
                    old_start,
                    new_start,
                    lines: Vec::new(),
                });
            }
            continue;
        }

        let Some(hunk) = file.hunks.last_mut() else {
            continue;
        };

        let (kind, content) = if let Some(rest) = line.strip_prefix('+') {
            (LineKind::Added, rest)
        } else if let Some(rest) = line.strip_prefix('-') {
            (LineKind::Removed, rest)
        } else if let Some(rest) = line.strip_prefix(' ') {
            (LineKind::Context, rest)
        } else if line.starts_with('\\') {
            // "\ No newline at end of file" markers carry no content.
            continue;
        } else {
            // Blank separators between file patches, or trailer text.
            continue;
        };

        hunk.lines.push(PatchLine {
            kind,
            content: content.to_string(),
        });
    }

    if let Some(file) = current.take() {
        files.push(file);
    }

    PatchSet { files }
}
