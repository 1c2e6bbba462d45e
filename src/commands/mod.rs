//! The save workflow for savedebdiff.
//!
//! This module ties the pieces together: empty-input check, patch parsing,
//! filename derivation, conflict-aware save, and the optional best-effort
//! open step. Configuration comes in explicitly via `Cli` so the workflow
//! stays unit-testable without ambient process state.

use crate::changelog::derive_filename_from_debdiff;
use crate::cli::Cli;
use crate::error::{DebdiffError, Result};
use crate::opener;
use crate::patch::parse_patch_set;
use crate::save::{SaveOutcome, save_debdiff};

/// Run the full save workflow on the captured stdin text.
///
/// The input is written to disk verbatim; the parsed `PatchSet` is only
/// used to derive the output filename and is discarded afterwards.
pub fn run(cli: &Cli, input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(DebdiffError::EmptyInput);
    }

    let patch_set = parse_patch_set(input);
    let filename = derive_filename_from_debdiff(&patch_set)?;
    let path = cli.directory.join(&filename);

    match save_debdiff(&path, input, cli.force)? {
        SaveOutcome::Written | SaveOutcome::Overwritten => {
            println!("Saved {}", path.display());
        }
        SaveOutcome::Unchanged => {
            println!("{} is already up to date", path.display());
        }
    }

    if cli.open {
        // Best effort: a missing or failing opener does not fail the save.
        if let Err(err) = opener::open_path(&path) {
            eprintln!("Warning: failed to open '{}': {}", path.display(), err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::LIBEVENT_DEBDIFF;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn cli_for(directory: &Path) -> Cli {
        Cli {
            directory: directory.to_path_buf(),
            force: false,
            open: false,
        }
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut entries: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries
    }

    #[test]
    fn run_saves_libevent_debdiff_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(temp_dir.path());

        run(&cli, LIBEVENT_DEBDIFF).unwrap();

        assert_eq!(
            dir_entries(temp_dir.path()),
            vec!["libevent_2.1.12-stable-5ubuntu1.debdiff"]
        );
        let saved = temp_dir.path().join("libevent_2.1.12-stable-5ubuntu1.debdiff");
        assert_eq!(fs::read_to_string(saved).unwrap(), LIBEVENT_DEBDIFF);
    }

    #[test]
    fn run_rejects_empty_input_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(temp_dir.path());

        let err = run(&cli, "").unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(dir_entries(temp_dir.path()).is_empty());
    }

    #[test]
    fn run_rejects_diff_without_changelog() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(temp_dir.path());
        let diff = "\
--- a/src/main.c\t2022-01-01
+++ b/src/main.c\t2022-01-02
@@ -1,1 +1,1 @@
-int main() { return 1; }
+int main() { return 0; }
";

        let err = run(&cli, diff).unwrap_err();

        assert_eq!(err.to_string(), "No debian/changelog found");
        assert!(dir_entries(temp_dir.path()).is_empty());
    }

    #[test]
    fn run_twice_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(temp_dir.path());

        run(&cli, LIBEVENT_DEBDIFF).unwrap();
        run(&cli, LIBEVENT_DEBDIFF).unwrap();

        assert_eq!(
            dir_entries(temp_dir.path()),
            vec!["libevent_2.1.12-stable-5ubuntu1.debdiff"]
        );
    }

    #[test]
    fn run_reports_conflict_and_preserves_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(temp_dir.path());
        let existing = temp_dir.path().join("libevent_2.1.12-stable-5ubuntu1.debdiff");
        fs::write(&existing, "an unrelated debdiff\n").unwrap();

        let err = run(&cli, LIBEVENT_DEBDIFF).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(err.to_string().contains("--force"));
        assert_eq!(
            fs::read_to_string(&existing).unwrap(),
            "an unrelated debdiff\n"
        );
    }

    #[test]
    fn run_with_force_overwrites_conflicting_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut cli = cli_for(temp_dir.path());
        cli.force = true;
        let existing = temp_dir.path().join("libevent_2.1.12-stable-5ubuntu1.debdiff");
        fs::write(&existing, "an unrelated debdiff\n").unwrap();

        run(&cli, LIBEVENT_DEBDIFF).unwrap();

        assert_eq!(fs::read_to_string(&existing).unwrap(), LIBEVENT_DEBDIFF);
    }
}
