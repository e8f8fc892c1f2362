//! dirbatch - Bulk operations across many directories
//!
//! This is the binary entry point. It parses the command line, threads
//! the verbosity flag into a [`Logger`], dispatches to the batch
//! executor or the apply orchestrator, and exits with the aggregate
//! code: 0 only when every folder of every executed operation succeeded.

use clap::Parser;

use dirbatch::apply::apply;
use dirbatch::batch::{BatchExecutor, Operation};
use dirbatch::cli::{Cli, Commands};
use dirbatch::errors::Result;
use dirbatch::output::Logger;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            Logger::new(false).error(&e.to_string());
            1
        }
    };
    std::process::exit(code);
}

fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Run { command, target } => {
            let logger = Logger::new(target.verbose);
            BatchExecutor::new(&logger)
                .execute(&Operation::Run { command }, &target.folder_input())
        }
        Commands::Replace {
            old_pattern,
            new_pattern,
            rename_folders,
            ignore,
            target,
        } => {
            let logger = Logger::new(target.verbose);
            BatchExecutor::new(&logger).execute(
                &Operation::Replace {
                    old_pattern,
                    new_pattern,
                    rename_dirs: rename_folders,
                    ignore_pattern: ignore,
                },
                &target.folder_input(),
            )
        }
        Commands::Copy {
            destination,
            target,
        } => {
            let logger = Logger::new(target.verbose);
            BatchExecutor::new(&logger)
                .execute(&Operation::Copy { destination }, &target.folder_input())
        }
        Commands::Apply { config, verbose } => {
            let logger = Logger::new(verbose);
            apply(&config, &logger)
        }
    }
}
