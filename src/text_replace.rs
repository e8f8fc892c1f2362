//! Pattern replacement across a directory tree
//!
//! This module rewrites file contents by regular expression and can
//! optionally rename matching directory names, walking one folder tree
//! at a time.
//!
//! # Algorithm
//!
//! The walk happens in two passes:
//!
//! 1. **File pass**: every regular file whose full path does not match
//!    the ignore pattern is read as text, run through a global
//!    `replace_all`, and written back only when the content actually
//!    changed (unchanged files keep their mtime).
//! 2. **Directory pass** (only with renaming enabled): runs after the
//!    file pass, depth-first with contents before their parent, so a
//!    rename never invalidates a still-pending descendant path. Only the
//!    directory's base name is matched and rewritten; the rename is a
//!    sibling-relative move. The tree root itself is never renamed.
//!
//! # Failure Isolation
//!
//! A file that cannot be read (for example binary content that is not
//! valid UTF-8) or written, and a rename whose target name collides with
//! an existing sibling, each fail individually: the error is logged and
//! the walk continues with the next entry.
//!
//! # Ignore Semantics
//!
//! The ignore pattern is tested with contains-a-match semantics against
//! the full path string, not just the file name.

use std::fs;
use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use crate::errors::{Error, Result};
use crate::output::Logger;

/// Counters for one replace invocation
///
/// All counters are monotonically non-decreasing while a tree is being
/// processed. A file whose content contains no match is counted as
/// processed but not modified.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceStats {
    /// Files read and matched against the pattern
    pub files_processed: usize,
    /// Files whose content changed and was written back
    pub files_modified: usize,
    /// Directories renamed during the directory pass
    pub dirs_renamed: usize,
}

impl ReplaceStats {
    /// Folds another tree's counters into this one
    pub fn absorb(&mut self, other: ReplaceStats) {
        self.files_processed += other.files_processed;
        self.files_modified += other.files_modified;
        self.dirs_renamed += other.dirs_renamed;
    }
}

/// A compiled replace operation, immutable for the whole invocation
///
/// The search pattern and optional ignore pattern are compiled once at
/// construction and reused for every folder in the batch. The
/// replacement string may reference capture groups (`$1`, `${name}`).
pub struct PatternReplacer {
    pattern: Regex,
    replacement: String,
    rename_dirs: bool,
    ignore: Option<Regex>,
}

impl PatternReplacer {
    /// Compiles the patterns for a replace operation
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the search or ignore pattern is not
    /// a valid regular expression.
    pub fn new(
        old_pattern: &str,
        replacement: &str,
        rename_dirs: bool,
        ignore_pattern: Option<&str>,
    ) -> Result<Self> {
        let pattern = compile(old_pattern)?;
        let ignore = ignore_pattern.map(compile).transpose()?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
            rename_dirs,
            ignore,
        })
    }

    /// Applies the replacement to every file (and directory name) under `root`
    ///
    /// Failures on individual entries are logged and skipped; the walk
    /// always covers the whole tree. A tree with zero regular files is a
    /// no-op, not a failure.
    pub fn apply(&self, root: &Path, logger: &Logger) -> ReplaceStats {
        let mut stats = ReplaceStats::default();

        self.rewrite_files(root, logger, &mut stats);
        if self.rename_dirs {
            self.rename_directories(root, logger, &mut stats);
        }

        stats
    }

    fn is_ignored(&self, path: &Path) -> bool {
        match &self.ignore {
            Some(ignore) => ignore.is_match(&path.to_string_lossy()),
            None => false,
        }
    }

    fn rewrite_files(&self, root: &Path, logger: &Logger, stats: &mut ReplaceStats) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    logger.error(&format!("Error walking {}: {e}", root.display()));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if self.is_ignored(path) {
                logger.verbose(&format!("Skipping ignored file: {}", path.display()));
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    logger.error(&format!("Error reading {}: {e}", path.display()));
                    continue;
                }
            };
            stats.files_processed += 1;

            let rewritten = self.pattern.replace_all(&content, self.replacement.as_str());
            if rewritten != content {
                if let Err(e) = fs::write(path, rewritten.as_bytes()) {
                    logger.error(&format!("Error writing {}: {e}", path.display()));
                    continue;
                }
                stats.files_modified += 1;
                logger.verbose(&format!("Updated: {}", path.display()));
            }
        }
    }

    /// Directory pass, deepest entries first so parent renames come last
    fn rename_directories(&self, root: &Path, logger: &Logger, stats: &mut ReplaceStats) {
        for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    logger.error(&format!("Error walking {}: {e}", root.display()));
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();
            if self.is_ignored(path) {
                logger.verbose(&format!("Skipping ignored folder: {}", path.display()));
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let new_name = self.pattern.replace_all(&name, self.replacement.as_str());
            if new_name == name {
                continue;
            }

            let new_path = match path.parent() {
                Some(parent) => parent.join(new_name.as_ref()),
                None => continue,
            };
            if new_path.exists() {
                logger.error(&format!(
                    "Cannot rename {}: {} already exists",
                    path.display(),
                    new_path.display()
                ));
                continue;
            }
            match fs::rename(path, &new_path) {
                Ok(()) => {
                    stats.dirs_renamed += 1;
                    logger.verbose(&format!(
                        "Renamed folder: {} -> {}",
                        path.display(),
                        new_path.display()
                    ));
                }
                Err(e) => {
                    logger.error(&format!("Error renaming {}: {e}", path.display()));
                }
            }
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
