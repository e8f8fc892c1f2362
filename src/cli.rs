//! Command-line interface definitions
//!
//! Argument parsing stops here: subcommands are turned into the core
//! [`Operation`](crate::batch::Operation) and
//! [`FolderInput`](crate::folder_set::FolderInput) values in `main`, and
//! everything below the CLI works on those. Mutual exclusivity of the
//! folder inputs is enforced by the resolver rather than by clap, so the
//! CLI and the `apply` path report the same configuration errors.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::folder_set::FolderInput;

/// Apply bulk operations across many directories at once
#[derive(Parser)]
#[command(name = "dirbatch", version)]
#[command(about = "Run commands, replace text, and copy files across multiple directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Folder-input flags shared by all per-folder subcommands
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// File containing folder paths, one per line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Folder paths given inline
    #[arg(short = 'i', long = "input", value_name = "PATH", num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl TargetArgs {
    /// Raw folder input for the resolver
    pub fn folder_input(&self) -> FolderInput {
        FolderInput {
            list_file: self.file.clone(),
            paths: self.input.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a shell command in every target folder
    Run {
        /// Command to execute (quoted if it contains spaces)
        command: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Replace a text pattern in files under every target folder
    Replace {
        /// Pattern to search for (regular expression)
        old_pattern: String,

        /// Replacement text (may reference capture groups with $1)
        new_pattern: String,

        /// Rename matching folder names as well
        #[arg(short = 'n', long = "names")]
        rename_folders: bool,

        /// Skip paths matching this regular expression
        #[arg(long = "ignore", value_name = "PATTERN")]
        ignore: Option<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Copy every target folder's files into a destination folder
    Copy {
        /// Destination folder (created if absent)
        destination: PathBuf,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Apply a series of steps from a YAML configuration file
    Apply {
        /// Configuration file path
        config: PathBuf,

        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}
