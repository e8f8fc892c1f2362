//! Shell command execution inside target folders
//!
//! Commands are run through the platform shell (`sh -c` on Unix, `cmd /C`
//! on Windows) so that pipes, redirects, and shell builtins work as the
//! user expects. The working directory is set to the target folder.
//!
//! A non-zero exit code is not an error here: it is the signal the batch
//! executor uses for per-folder failure accounting. Only a failure to
//! spawn or wait on the child surfaces as an [`Error`].
//!
//! # Limitations
//!
//! - No timeout is enforced; a hung command blocks the batch.
//! - If the wait itself is interrupted, the operation reports
//!   [`Error::Interrupted`] but the child is not killed.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::{Error, Result};
use crate::output::Logger;

/// Runs one shell command with the working directory set to `dir`
///
/// When verbose, the child inherits stdout and stderr so its output
/// streams to the terminal as it arrives, stderr interleaved with stdout.
/// Otherwise both streams are discarded.
///
/// Returns the child's exit code. A child terminated by a signal has no
/// exit code and is reported as 1.
pub fn run_in_dir(command: &str, dir: &Path, logger: &Logger) -> Result<i32> {
    logger.verbose(&format!("Running in {}: {}", dir.display(), command));

    let mut cmd = shell_command(command);
    cmd.current_dir(dir);

    if logger.is_verbose() {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    } else {
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
    }

    let status = cmd.status().map_err(|e| match e.kind() {
        io::ErrorKind::Interrupted => Error::Interrupted,
        _ => Error::io(dir, e),
    })?;

    Ok(status.code().unwrap_or(1))
}

/// Builds the platform-shell invocation for a command string
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}
