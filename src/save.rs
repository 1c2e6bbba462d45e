//! Conflict-aware debdiff saving.
//!
//! The save is a small state machine over path existence and content
//! equality. No atomic-rename step is taken: the process model is one-shot
//! and single-writer, so a plain write is sufficient.

use crate::error::{DebdiffError, Result};
use std::fs;
use std::path::Path;

/// What `save_debdiff` did with the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file did not exist and was written.
    Written,
    /// The file already held identical content; nothing was written.
    Unchanged,
    /// The file held different content and was overwritten (force).
    Overwritten,
}

/// Write the debdiff to `path` unless a conflicting file is in the way.
///
/// - path absent: write the content, creating parent directories as needed
/// - path holds identical content: leave the file untouched (idempotent)
/// - path holds different content: fail unless `force`, then overwrite
///
/// # Errors
///
/// * `DebdiffError::Conflict` - existing file differs and `force` is false;
///   the existing file is guaranteed untouched
/// * `DebdiffError::Io` - the filesystem read or write failed
pub fn save_debdiff(path: &Path, content: &str, force: bool) -> Result<SaveOutcome> {
    let existing = match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            return Err(DebdiffError::Io(format!(
                "failed to read existing file '{}': {}",
                path.display(),
                err
            )));
        }
    };

    match existing {
        None => {
            write_debdiff(path, content)?;
            Ok(SaveOutcome::Written)
        }
        Some(text) if text == content => Ok(SaveOutcome::Unchanged),
        Some(_) if force => {
            write_debdiff(path, content)?;
            Ok(SaveOutcome::Overwritten)
        }
        Some(_) => Err(DebdiffError::Conflict(path.to_path_buf())),
    }
}

/// Write the content, creating the parent directory first if missing.
fn write_debdiff(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|err| {
            DebdiffError::Io(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                err
            ))
        })?;
    }

    fs::write(path, content).map_err(|err| {
        DebdiffError::Io(format!("failed to write '{}': {}", path.display(), err))
    })
}
