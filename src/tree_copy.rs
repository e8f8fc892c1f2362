//! Recursive tree copying
//!
//! Copies every regular file under a source folder into a destination,
//! preserving the source-relative structure. The copy is an additive
//! merge: existing files at the destination are overwritten when a
//! relative path collides, but nothing at the destination is ever
//! deleted.
//!
//! The walk is a portable filesystem recursion (walkdir + `fs::copy`),
//! never a shell-out to a system copy utility, so behavior is identical
//! across platforms and fully testable.
//!
//! A single file's copy failure (permissions, I/O) is logged and counted;
//! it does not abort the remaining files.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{Error, Result};
use crate::output::Logger;

/// Per-file counters for copying one source folder
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyOutcome {
    /// Files copied successfully
    pub files_copied: usize,
    /// Files that failed to copy
    pub files_failed: usize,
}

impl CopyOutcome {
    /// Whether every file in the source folder copied cleanly
    pub fn is_clean(&self) -> bool {
        self.files_failed == 0
    }
}

/// Copies all regular files under `source` into `destination`
///
/// The destination (with parents) is created if absent. Each file lands
/// at `destination` joined with its path relative to `source`,
/// overwriting whatever was there.
///
/// # Errors
///
/// Only a failure to create the destination root is fatal; per-file
/// failures are logged, counted in the outcome, and skipped.
pub fn copy_tree(source: &Path, destination: &Path, logger: &Logger) -> Result<CopyOutcome> {
    fs::create_dir_all(destination).map_err(|e| Error::io(destination, e))?;

    let mut outcome = CopyOutcome::default();
    for entry in WalkDir::new(source) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                logger.error(&format!("Error walking {}: {e}", source.display()));
                outcome.files_failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        match copy_file(entry.path(), source, destination) {
            Ok(target) => {
                outcome.files_copied += 1;
                logger.verbose(&format!("Copied: {}", target.display()));
            }
            Err(e) => {
                outcome.files_failed += 1;
                logger.error(&format!("Error copying {}: {e}", entry.path().display()));
            }
        }
    }

    Ok(outcome)
}

/// Copies one file to its destination-relative location
fn copy_file(
    file: &Path,
    source_root: &Path,
    destination: &Path,
) -> Result<std::path::PathBuf> {
    // Walk entries always live under the root, so strip_prefix cannot fail
    let relative = file.strip_prefix(source_root).unwrap_or(file);
    let target = destination.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::copy(file, &target).map_err(|e| Error::io(file, e))?;
    Ok(target)
}
