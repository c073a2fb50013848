//! CLI module for matchgrid
//!
//! Provides command-line interface for:
//! - serve: boot the grid API server
//! - generate: one-shot resolution for a date
//! - suggest: one-shot selector+validator run for a seed

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
