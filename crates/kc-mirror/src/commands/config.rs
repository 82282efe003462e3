//! Configuration management commands. These run without authenticating.

use crate::cli::ConfigCommand;
use crate::config::OutputFormat;
use crate::output::{info, prompt, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => set_config(config, &key, &value),
        ConfigCommand::Init => init_config(config),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    println!("base_url: {}", config.base_url);
    println!("repo_dir: {}", config.repo_dir);
    println!("output_format: {}", config.output_format);

    Ok(())
}

/// Sets a configuration value.
fn set_config(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    match key {
        "base_url" | "base" => {
            config.base_url = value.to_string();
        }
        "repo_dir" | "repo" => {
            config.repo_dir = value.to_string();
        }
        "output_format" | "output" => {
            config.output_format = parse_output_format(value)?;
        }
        _ => {
            return Err(crate::CliError::InvalidArgument(format!(
                "Unknown configuration key: {}. Known keys: base_url, repo_dir, output_format",
                key
            )));
        }
    }

    config.save()?;
    success(&format!("Set {} = {}", key, value));
    Ok(())
}

/// Initializes configuration interactively.
fn init_config(config: &mut CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info("Initializing kc-mirror configuration...");
    println!();

    let base = prompt(&format!("Server base URL [{}]: ", config.base_url))?;
    if !base.is_empty() {
        config.base_url = base;
    }

    let repo = prompt(&format!("Local repo directory [{}]: ", config.repo_dir))?;
    if !repo.is_empty() {
        config.repo_dir = repo;
    }

    let format = prompt(&format!(
        "Output format (table/json) [{}]: ",
        config.output_format
    ))?;
    if !format.is_empty() {
        config.output_format = parse_output_format(&format)?;
    }

    config.save()?;

    println!();
    success(&format!("Configuration saved to: {}", config_path.display()));
    Ok(())
}

/// Parses an output format name.
fn parse_output_format(value: &str) -> crate::CliResult<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        _ => Err(crate::CliError::InvalidArgument(format!(
            "Unknown output format: {}. Supported: table, json",
            value
        ))),
    }
}
