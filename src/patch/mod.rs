//! Unified diff parsing for savedebdiff.
//!
//! Parses the debdiff read from stdin into a structured `PatchSet` so the
//! changelog entry can be located among added lines. Parsing is lenient and
//! deterministic; it supports:
//! - plain `diff -u`/`diff -Nru` headers with tab-separated timestamps
//! - git-style headers (`+++ b/path`)
//! - multiple hunks per file, "\ No newline at end of file" markers
//!
//! Prologue text and unrecognized lines are skipped rather than rejected:
//! the tool only needs the added lines of the changelog patch, and real
//! debdiffs often carry `diff -Nru ...` command lines between file patches.

mod helpers;
mod model;
mod parser;


pub use model::{FilePatch, Hunk, LineKind, PatchLine, PatchSet};
pub use parser::parse_patch_set;
