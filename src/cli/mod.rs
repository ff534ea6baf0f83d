//! CLI module
//!
//! Provides the command-line interface:
//! - init: create the data directory and default configuration
//! - serve: boot the store and enter the HTTP serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
