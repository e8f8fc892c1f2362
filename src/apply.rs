//! Orchestration of configured step sequences
//!
//! `apply` reads an ordered list of steps from a YAML configuration file
//! and runs the batch executor once per step. Sequencing across steps is
//! fail-fast: later steps are assumed to depend on earlier ones, so the
//! first step whose aggregate result is non-zero stops the run and its
//! exit code becomes the process exit code. This is deliberately the
//! opposite of the per-folder behavior inside a single step, which
//! always covers the whole folder set.

use std::path::Path;

use crate::batch::{BatchExecutor, Operation};
use crate::config::{ApplyConfig, StepConfig};
use crate::constants::{MSG_NO_COMMANDS, MSG_UNKNOWN_TYPE};
use crate::errors::{Error, Result};
use crate::folder_set::FolderInput;
use crate::output::Logger;

/// Executes every step of an apply configuration, stopping at the first failure
///
/// # Errors
///
/// - The configuration file cannot be read or parsed
/// - The step list is empty
/// - A step has an unknown type or is missing a field its type requires
///   (checked when the step is reached, so earlier steps still run)
pub fn apply(config_path: &Path, logger: &Logger) -> Result<i32> {
    let config = ApplyConfig::load(config_path)?;
    if config.commands.is_empty() {
        return Err(Error::Configuration(MSG_NO_COMMANDS.to_string()));
    }

    let executor = BatchExecutor::new(logger);
    for (index, step) in config.commands.iter().enumerate() {
        logger.verbose(&format!(
            "Executing step {} of {}: {}",
            index + 1,
            config.commands.len(),
            step.kind
        ));

        let operation = operation_for(step)?;
        let input = FolderInput::from_paths(step.input_paths.clone());
        let code = executor.execute(&operation, &input)?;
        if code != 0 {
            logger.error(&format!("Step {} failed, stopping", index + 1));
            return Ok(code);
        }
    }

    Ok(0)
}

/// Maps a configuration step to a concrete operation
fn operation_for(step: &StepConfig) -> Result<Operation> {
    match step.kind.to_lowercase().as_str() {
        "run" => Ok(Operation::Run {
            command: require(step, &step.command, "command")?,
        }),
        "replace" => Ok(Operation::Replace {
            old_pattern: require(step, &step.old_pattern, "oldPattern")?,
            new_pattern: require(step, &step.new_pattern, "newPattern")?,
            rename_dirs: step.replace_folder_names,
            ignore_pattern: step.ignore_pattern.clone(),
        }),
        "copy" => Ok(Operation::Copy {
            destination: require(step, &step.destination, "destination")?,
        }),
        other => Err(Error::Configuration(format!(
            "{MSG_UNKNOWN_TYPE}: {other}"
        ))),
    }
}

fn require<T: Clone>(step: &StepConfig, field: &Option<T>, name: &str) -> Result<T> {
    field.clone().ok_or_else(|| {
        Error::Configuration(format!("'{}' step is missing required field '{name}'", step.kind))
    })
}
