//! Batch execution of one operation across a folder set
//!
//! The executor resolves the folder input, dispatches the selected
//! operation to every resolved folder exactly once, tallies per-folder
//! successes and failures, and reduces the tally to a process exit code.
//!
//! One folder's failure never aborts the batch: the full folder set is
//! always covered and the aggregate report reflects every folder. (The
//! historical behavior of returning on the first non-zero result made
//! partial application order-dependent and was dropped.) Fail-fast
//! sequencing exists one level up, between the steps of an `apply`
//! configuration.

use std::path::{Path, PathBuf};

use crate::command_run::run_in_dir;
use crate::constants::MSG_NO_FOLDERS;
use crate::errors::Result;
use crate::folder_set::{FolderInput, FolderSet};
use crate::output::Logger;
use crate::text_replace::{PatternReplacer, ReplaceStats};
use crate::tree_copy::copy_tree;

/// The per-folder action a batch applies
#[derive(Debug, Clone)]
pub enum Operation {
    /// Run a shell command in each folder
    Run { command: String },
    /// Replace a text pattern in files under each folder
    Replace {
        old_pattern: String,
        new_pattern: String,
        rename_dirs: bool,
        ignore_pattern: Option<String>,
    },
    /// Copy each folder's files into a destination folder
    Copy { destination: PathBuf },
}

/// Success/failure counters for one batch
///
/// Counters only ever increase while a batch runs; the exit code is read
/// once at the end.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    /// Records one folder's outcome
    pub fn record(&mut self, success: bool) {
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Total folders attempted
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// 0 iff no folder failed and at least one was attempted
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 && self.succeeded > 0 {
            0
        } else {
            1
        }
    }
}

/// Runs one [`Operation`] across a resolved folder set
pub struct BatchExecutor<'a> {
    logger: &'a Logger,
}

impl<'a> BatchExecutor<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Resolves the folder input and applies the operation to every folder
    ///
    /// Returns the aggregate exit code: 0 iff every folder succeeded and
    /// at least one folder was resolved. An empty folder set is itself a
    /// failure ("no folders specified").
    ///
    /// # Errors
    ///
    /// Configuration errors from folder resolution and invalid regular
    /// expressions are fatal; per-folder failures are tallied instead.
    pub fn execute(&self, operation: &Operation, input: &FolderInput) -> Result<i32> {
        let folders = FolderSet::resolve(input, self.logger)?;
        if folders.is_empty() {
            self.logger.error(MSG_NO_FOLDERS);
            return Ok(1);
        }

        match operation {
            Operation::Run { command } => Ok(self.run_command(command, &folders)),
            Operation::Replace {
                old_pattern,
                new_pattern,
                rename_dirs,
                ignore_pattern,
            } => {
                let replacer = PatternReplacer::new(
                    old_pattern,
                    new_pattern,
                    *rename_dirs,
                    ignore_pattern.as_deref(),
                )?;
                Ok(self.replace(&replacer, &folders))
            }
            Operation::Copy { destination } => Ok(self.copy(destination, &folders)),
        }
    }

    fn run_command(&self, command: &str, folders: &FolderSet) -> i32 {
        let mut tally = Tally::default();
        for folder in folders.iter() {
            match run_in_dir(command, folder, self.logger) {
                Ok(0) => tally.record(true),
                Ok(code) => {
                    self.logger.error(&format!(
                        "Command failed in {} (exit code {code})",
                        folder.display()
                    ));
                    tally.record(false);
                }
                Err(e) => {
                    self.logger
                        .error(&format!("{e} (in {})", folder.display()));
                    tally.record(false);
                }
            }
        }
        self.report(&tally);
        tally.exit_code()
    }

    fn replace(&self, replacer: &PatternReplacer, folders: &FolderSet) -> i32 {
        let mut tally = Tally::default();
        let mut stats = ReplaceStats::default();
        for folder in folders.iter() {
            self.logger
                .verbose(&format!("Processing files in: {}", folder.display()));
            stats.absorb(replacer.apply(folder, self.logger));
            // A tree with zero matching files is a no-op, not a failure
            tally.record(true);
        }
        self.logger.success(&format!(
            "{} files processed, {} modified, {} folders renamed",
            stats.files_processed, stats.files_modified, stats.dirs_renamed
        ));
        tally.exit_code()
    }

    fn copy(&self, destination: &Path, folders: &FolderSet) -> i32 {
        let mut tally = Tally::default();
        for folder in folders.iter() {
            self.logger
                .verbose(&format!("Copying from: {}", folder.display()));
            match copy_tree(folder, destination, self.logger) {
                Ok(outcome) if outcome.is_clean() => tally.record(true),
                Ok(outcome) => {
                    self.logger.error(&format!(
                        "{} file(s) failed to copy from {}",
                        outcome.files_failed,
                        folder.display()
                    ));
                    tally.record(false);
                }
                Err(e) => {
                    self.logger.error(&format!("{e}"));
                    tally.record(false);
                }
            }
        }
        self.report(&tally);
        tally.exit_code()
    }

    fn report(&self, tally: &Tally) {
        if tally.failed == 0 {
            self.logger.success(&format!(
                "All {} folder(s) processed successfully",
                tally.total()
            ));
        } else {
            self.logger.error(&format!(
                "{} of {} folder(s) failed",
                tally.failed,
                tally.total()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_exit_code_requires_at_least_one_attempt() {
        let tally = Tally::default();
        assert_eq!(tally.exit_code(), 1);
    }

    #[test]
    fn tally_exit_code_is_zero_only_without_failures() {
        let mut tally = Tally::default();
        tally.record(true);
        assert_eq!(tally.exit_code(), 0);
        tally.record(false);
        assert_eq!(tally.exit_code(), 1);
        assert_eq!(tally.total(), 2);
    }
}
