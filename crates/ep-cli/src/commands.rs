//! Subcommand implementations.
//!
//! Output is written to the supplied writer; logs go through `tracing`.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use ep_common::{Error, OutputFormat, Result};
use ep_config::keys::ALL_KEYS;
use ep_config::{get_config, validate_map, ConfigSnapshot, Configuration, Environment};

use crate::cli::{Cli, Command};
use crate::exit_codes::ExitCode;

/// Run the parsed command.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode> {
    let env = resolve_environment(&cli.env);
    let config = get_config(&cli.env);
    debug!(%env, catalog = config.catalog_name(), "configuration built");

    match &cli.command {
        Command::Show => {
            render(&config, cli.format, out)?;
            Ok(ExitCode::Clean)
        }
        Command::Get { key } => {
            get(&config, key, cli.format, out)?;
            Ok(ExitCode::Clean)
        }
        Command::Keys => {
            list_keys(cli.format, out)?;
            Ok(ExitCode::Clean)
        }
        Command::Check { file } => check(file, cli.format, out),
        Command::Snapshot { output } => {
            let snapshot = ConfigSnapshot::capture(&config)?;
            match output {
                Some(path) => {
                    snapshot.write_to(path)?;
                    info!(path = %path.display(), %env, "snapshot saved");
                }
                None => writeln!(out, "{}", snapshot.to_json_pretty()?)?,
            }
            Ok(ExitCode::Clean)
        }
    }
}

/// Resolve a label, warning when it silently falls back to dev.
pub fn resolve_environment(label: &str) -> Environment {
    match Environment::recognize(label) {
        Some(env) => env,
        None => {
            let env = Environment::from_label(label);
            warn!(label, fallback = %env, "unrecognized environment label");
            env
        }
    }
}

pub fn render<W: Write>(config: &Configuration, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
        OutputFormat::Env => out.write_all(config.to_env_lines().as_bytes())?,
        OutputFormat::Table => {
            let width = config.keys().map(str::len).max().unwrap_or(0);
            for (key, value) in config.iter() {
                writeln!(out, "{key:<width$}  {value}")?;
            }
        }
    }
    Ok(())
}

fn get<W: Write>(
    config: &Configuration,
    key: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let value = config.get(key).ok_or_else(|| Error::UnknownKey {
        key: key.to_string(),
    })?;
    match format {
        OutputFormat::Json => {
            let mut single = BTreeMap::new();
            single.insert(key, value);
            writeln!(out, "{}", serde_json::to_string(&single)?)?;
        }
        OutputFormat::Env => writeln!(out, "{key}={value}")?,
        OutputFormat::Table => writeln!(out, "{value}")?,
    }
    Ok(())
}

fn list_keys<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&ALL_KEYS)?)?,
        OutputFormat::Env | OutputFormat::Table => {
            for key in ALL_KEYS {
                writeln!(out, "{key}")?;
            }
        }
    }
    Ok(())
}

fn check<W: Write>(path: &Path, format: OutputFormat, out: &mut W) -> Result<ExitCode> {
    let content = std::fs::read_to_string(path)?;
    let values: BTreeMap<String, String> = serde_json::from_str(&content)?;
    let result = validate_map(&values);

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        OutputFormat::Env | OutputFormat::Table => {
            if result.is_valid() {
                writeln!(out, "valid")?;
            }
            for err in &result.errors {
                writeln!(out, "{err}")?;
            }
        }
    }

    if result.is_valid() {
        info!(path = %path.display(), "configuration valid");
        Ok(ExitCode::Clean)
    } else {
        warn!(path = %path.display(), findings = result.errors.len(), "configuration invalid");
        Ok(ExitCode::ValidationFailed)
    }
}
