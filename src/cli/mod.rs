//! CLI module
//!
//! Provides the `serve` command: load configuration, build the store and
//! run the HTTP server.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_store, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
