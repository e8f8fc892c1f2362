//! Constants used throughout the application
//!
//! This module centralizes user-facing message strings so that the CLI
//! path and the `apply` path report identical errors for identical
//! situations.

// Folder resolution
pub const MSG_EXCLUSIVE_INPUTS: &str =
    "A folder list file and inline folder paths are mutually exclusive";
pub const MSG_NO_INPUT: &str =
    "No folder input specified (provide a list file with -f or inline paths with -i)";
pub const MSG_NO_FOLDERS: &str = "No folders specified";

// Apply configuration
pub const MSG_NO_COMMANDS: &str = "No commands found in configuration file";
pub const MSG_UNKNOWN_TYPE: &str = "Unknown command type";
