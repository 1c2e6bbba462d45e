//! Data types for parsed unified diffs.

/// Kind of a single line within a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Line introduced by the diff (`+` prefix).
    Added,
    /// Line removed by the diff (`-` prefix).
    Removed,
    /// Unchanged surrounding line (` ` prefix).
    Context,
}

/// A single line within a hunk, stored without its leading marker character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLine {
    pub kind: LineKind,
    pub content: String,
}

/// A contiguous change region within one file patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Start line in the old file (1-based, from the `@@` header).
    pub old_start: usize,
    /// Start line in the new file (1-based, from the `@@` header).
    pub new_start: usize,
    /// Lines in hunk order.
    pub lines: Vec<PatchLine>,
}

impl Hunk {
    /// Iterate over the content of added lines, in hunk order.
    pub fn added_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|line| line.kind == LineKind::Added)
            .map(|line| line.content.as_str())
    }
}

/// All changes to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatch {
    /// Path of the new file (the `+++` side), with timestamps and any
    /// git-style `b/` prefix stripped, normalized to forward slashes.
    pub target_path: String,
    /// Hunks in diff order.
    pub hunks: Vec<Hunk>,
}

/// An ordered sequence of per-file patches parsed from unified-diff text.
///
/// Immutable once parsed; constructed once per invocation and queried once
/// for the changelog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    pub files: Vec<FilePatch>,
}
