//! Argument definitions.

use clap::{Parser, Subcommand};
use ep_common::OutputFormat;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Print and check environment-specific pipeline configuration.
#[derive(Parser, Debug)]
#[command(name = "ep-config", version, about)]
pub struct Cli {
    /// Environment label: dev, staging, or prod. Anything else resolves to dev.
    #[arg(long, global = true, env = "PIPELINE_ENV", default_value = "dev")]
    pub env: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full configuration
    Show,
    /// Print a single value
    Get {
        /// Configuration key, e.g. PATH_ORDERS
        key: String,
    },
    /// List every configuration key
    Keys,
    /// Validate a JSON configuration file
    Check {
        /// Path to a JSON object of KEY: value pairs
        file: PathBuf,
    },
    /// Capture a hashed snapshot of the configuration
    Snapshot {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
