//! Command implementations for the MPC importer CLI
//!
//! This module contains the command execution logic, logging setup and
//! summary reporting for the CLI interface. Each command is implemented in
//! its own module.

pub mod import;
pub mod reset;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the MPC importer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `import`: bootstrap the user store and run a batch import
/// - `reset`: remove the per-user store copy
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Import(import_args) => import::run_import(import_args).map(|_| ()),
        Commands::Reset(reset_args) => reset::run_reset(reset_args),
    }
}
