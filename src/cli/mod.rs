//! CLI module for deedbook
//!
//! Provides a command-line interface for:
//! - serve: read JSON requests line by line and answer each on stdout

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
