//! Error types for dirbatch
//!
//! This module defines the crate-wide error enum. The split follows how
//! failures are handled at runtime:
//!
//! - `Configuration` errors are fatal to the current operation and are
//!   surfaced immediately (contradictory inputs, unknown step types,
//!   empty step lists).
//! - `Io` errors carry the affected path. They are only fatal when the
//!   top-level folder list or configuration file cannot be read; failures
//!   on individual files during a batch are logged and tallied instead.
//! - `Interrupted` marks a subprocess wait that was aborted before the
//!   child exited; the affected folder counts as failed.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all dirbatch operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or contradictory input specification
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An I/O failure with the path it occurred on
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The apply configuration file could not be parsed
    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// A search or ignore pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A blocked subprocess wait was interrupted before the child exited
    #[error("Interrupted while waiting for a subprocess")]
    Interrupted,
}

impl Error {
    /// Attaches a path to a raw I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
