//! Terminal output for batch operations
//!
//! This module provides the [`Logger`] value that every component receives
//! at construction. Verbosity is plain configuration threaded through the
//! call tree rather than ambient global state, which keeps the core logic
//! testable and makes it obvious which lines are gated.
//!
//! # Conventions
//!
//! - Errors are always printed, to stderr, with a red `✗`.
//! - Per-file and per-folder progress lines are verbose-gated.
//! - Aggregate summaries are always printed, with a green `✓` on success.

use colored::*;

/// A verbosity-aware sink for terminal output
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Creates a logger with the given verbosity
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Returns whether verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a progress line, only when verbose output is enabled
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{message}");
        }
    }

    /// Prints an informational line unconditionally
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Prints a success summary with a green checkmark
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error line to stderr with a red X mark
    ///
    /// Errors are never gated on verbosity.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
