//! dirbatch - Bulk operations across many directories
//!
//! dirbatch applies one operation to a whole set of target directories
//! in a single invocation: running a shell command in each, replacing a
//! text pattern (and optionally folder names) under each, or copying
//! each tree into a destination. A YAML file of ordered steps can drive
//! several operations in sequence.
//!
//! # Features
//!
//! - **Folder sets**: targets come from inline paths or a plain-text
//!   list file, one path per line
//! - **Run**: execute a shell command with each folder as the working
//!   directory
//! - **Replace**: regex content replacement with optional directory
//!   renaming and an ignore filter
//! - **Copy**: additive tree merge into a destination folder
//! - **Apply**: ordered steps from a YAML file, fail-fast across steps
//! - **Aggregate reporting**: every folder is attempted, failures are
//!   tallied, and the exit code reflects the whole batch
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`cli`] - Command-line argument definitions
//! - [`folder_set`] - Folder input resolution and validation
//! - [`batch`] - Per-operation execution across a folder set
//! - [`command_run`] - Shell command execution in a working directory
//! - [`text_replace`] - Pattern replacement across a tree
//! - [`tree_copy`] - Recursive tree copying
//! - [`apply`] - Step sequencing from a configuration file
//! - [`config`] - YAML configuration structures
//! - [`output`] - Verbosity-aware terminal output
//! - [`errors`] - Crate-wide error types
//!
//! # Usage Example
//!
//! ```no_run
//! use dirbatch::batch::{BatchExecutor, Operation};
//! use dirbatch::folder_set::FolderInput;
//! use dirbatch::output::Logger;
//! use std::path::PathBuf;
//!
//! let logger = Logger::new(false);
//! let executor = BatchExecutor::new(&logger);
//! let input = FolderInput::from_paths(vec![PathBuf::from("./service-a")]);
//! let code = executor
//!     .execute(&Operation::Run { command: "git status".into() }, &input)
//!     .expect("configuration is valid");
//! ```

pub mod apply;
pub mod batch;
pub mod cli;
pub mod command_run;
pub mod config;
pub mod constants;
pub mod errors;
pub mod folder_set;
pub mod output;
pub mod text_replace;
pub mod tree_copy;
