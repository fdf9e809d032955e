//! Command-line front end for the pipeline environment configuration.

pub mod cli;
pub mod commands;
pub mod exit_codes;
pub mod logging;

pub use cli::{Cli, Command};
pub use exit_codes::ExitCode;
