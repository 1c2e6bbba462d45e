//! Best-effort external file opener.
//!
//! Invoked as a final step after a successful save when `--open` is given.
//! The opener is a collaborator, not part of the core contract: the caller
//! reports its failure but does not change the exit code.

use crate::error::{DebdiffError, Result};
use std::path::Path;
use std::process::Command;

/// The desktop launcher used to open saved files.
const OPENER: &str = "xdg-open";

/// Open `path` with the desktop launcher.
pub fn open_path(path: &Path) -> Result<()> {
    spawn_opener(OPENER, path)
}

/// Run `program` with the path as its sole argument and wait for it.
fn spawn_opener(program: &str, path: &Path) -> Result<()> {
    let status = Command::new(program)
        .arg(path)
        .status()
        .map_err(|err| DebdiffError::Io(format!("failed to run {}: {}", program, err)))?;

    if !status.success() {
        return Err(DebdiffError::Io(format!(
            "{} exited with {}",
            program, status
        )));
    }

    Ok(())
}
