//! Apply configuration loading
//!
//! An `apply` run is driven by a YAML file containing an ordered list of
//! steps. Each step names an operation type and its parameters, plus the
//! folder paths it targets.
//!
//! # File Format
//!
//! ```yaml
//! commands:
//!   - type: replace
//!     oldPattern: "old-name"
//!     newPattern: "new-name"
//!     replaceFolderNames: true
//!     ignorePattern: "\\.git"
//!     inputPaths:
//!       - ./service-a
//!       - ./service-b
//!   - type: run
//!     command: "cargo fmt"
//!     inputPaths:
//!       - ./service-a
//!   - type: copy
//!     destination: ./merged
//!     inputPaths:
//!       - ./service-a
//!       - ./service-b
//! ```
//!
//! The `type` field is kept as a plain string and matched at dispatch
//! time, not parse time: an unknown type only fails the step that uses
//! it, after earlier steps have already run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Error, Result};

/// Top-level apply configuration
#[derive(Debug, Deserialize, Default)]
pub struct ApplyConfig {
    /// Ordered list of steps to execute
    #[serde(default)]
    pub commands: Vec<StepConfig>,
}

/// One step of an apply configuration
///
/// Fields are a union over the three operation types; which ones are
/// required depends on `kind` and is validated when the step is turned
/// into an operation.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    /// Operation type: `run`, `replace`, or `copy` (case-insensitive)
    #[serde(rename = "type")]
    pub kind: String,

    /// Shell command to execute (run)
    #[serde(default)]
    pub command: Option<String>,

    /// Destination folder (copy)
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Pattern to search for (replace)
    #[serde(default)]
    pub old_pattern: Option<String>,

    /// Replacement text (replace)
    #[serde(default)]
    pub new_pattern: Option<String>,

    /// Also rename matching folder names (replace)
    #[serde(default)]
    pub replace_folder_names: bool,

    /// Skip paths matching this pattern (replace)
    #[serde(default)]
    pub ignore_pattern: Option<String>,

    /// Target folders, shared by all operation types
    #[serde(default)]
    pub input_paths: Vec<PathBuf>,
}

impl ApplyConfig {
    /// Loads and parses an apply configuration file
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::ConfigParse`] if it is not valid YAML for this schema
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }
}
