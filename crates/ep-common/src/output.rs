//! Output format selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a configuration is rendered for the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object.
    Json,
    /// `KEY=value` lines, suitable for dotenv files or `eval`.
    Env,
    /// Aligned two-column table for humans.
    #[default]
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Env => write!(f, "env"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
