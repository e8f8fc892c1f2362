//! Folder set resolution
//!
//! Every batch operation starts from a [`FolderInput`]: either a plain
//! text file listing one folder per line, or folder paths given inline.
//! The two modes are mutually exclusive; supplying both (or neither) is a
//! configuration error, reported identically whether the input came from
//! the command line or from an `apply` step.
//!
//! Resolution filters out entries that do not exist or are not
//! directories. This is deliberate policy, not an error: a list file is
//! typically shared across machines and branches, and missing entries are
//! skipped with a verbose-gated note instead of failing the batch.
//!
//! # List File Format
//!
//! Plain text, one path per line. Leading and trailing whitespace is
//! trimmed and blank lines are ignored. File order is preserved.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{MSG_EXCLUSIVE_INPUTS, MSG_NO_INPUT};
use crate::errors::{Error, Result};
use crate::output::Logger;

/// Raw folder input, before resolution
///
/// Carries exactly what the user supplied: an optional list-file path and
/// an optional set of inline paths. Validation happens in
/// [`FolderSet::resolve`], not at construction.
#[derive(Debug, Clone, Default)]
pub struct FolderInput {
    /// Path to a file containing one folder path per line
    pub list_file: Option<PathBuf>,
    /// Folder paths given directly
    pub paths: Vec<PathBuf>,
}

impl FolderInput {
    /// Builds an input from inline paths only
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            list_file: None,
            paths,
        }
    }
}

/// The resolved, validated, ordered list of target directories
///
/// Immutable once built: operations iterate it but never change it.
#[derive(Debug)]
pub struct FolderSet {
    folders: Vec<PathBuf>,
}

impl FolderSet {
    /// Resolves a raw input into a concrete folder set
    ///
    /// Exactly one of the two input modes must be populated. Entries that
    /// do not exist or are not directories are dropped, with a note at
    /// verbose level for each skip. Order is preserved from the source.
    ///
    /// # Errors
    ///
    /// - Both or neither input mode supplied → [`Error::Configuration`]
    /// - The list file cannot be read → [`Error::Io`] (fatal: unlike a
    ///   single bad entry, an unreadable list means the whole batch has
    ///   no defined target set)
    pub fn resolve(input: &FolderInput, logger: &Logger) -> Result<Self> {
        let candidates = match (&input.list_file, input.paths.is_empty()) {
            (Some(_), false) => {
                return Err(Error::Configuration(MSG_EXCLUSIVE_INPUTS.to_string()));
            }
            (None, true) => {
                return Err(Error::Configuration(MSG_NO_INPUT.to_string()));
            }
            (Some(list_file), true) => read_list_file(list_file)?,
            (None, false) => input.paths.clone(),
        };

        let mut folders = Vec::with_capacity(candidates.len());
        for path in candidates {
            if path.is_dir() {
                folders.push(path);
            } else {
                logger.verbose(&format!(
                    "Skipping {} (not an existing directory)",
                    path.display()
                ));
            }
        }

        Ok(Self { folders })
    }

    /// Iterates the resolved folders in order
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.folders.iter()
    }

    /// Number of resolved folders
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether resolution produced no usable folders
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// Reads a folder list file: one path per line, trimmed, blanks skipped
fn read_list_file(path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_inputs_is_a_configuration_error() {
        let input = FolderInput {
            list_file: Some(PathBuf::from("folders.txt")),
            paths: vec![PathBuf::from(".")],
        };
        let err = FolderSet::resolve(&input, &Logger::new(false)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn neither_input_is_a_configuration_error() {
        let err = FolderSet::resolve(&FolderInput::default(), &Logger::new(false)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
