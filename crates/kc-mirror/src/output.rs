//! Output formatting and prompting utilities.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Outputs data in the specified format.
pub fn output<T: Tabled + serde::Serialize>(
    data: &[T],
    format: OutputFormat,
) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                info("No results found.");
            } else {
                let table = Table::new(data).with(Style::rounded()).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Prompts for confirmation.
pub fn confirm(message: &str) -> crate::CliResult<bool> {
    print!("{message} [y/N]: ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
}

/// Prompts for a line of input.
pub fn prompt(message: &str) -> crate::CliResult<String> {
    print!("{message}");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompts for password input (hidden).
pub fn prompt_password(message: &str) -> crate::CliResult<String> {
    rpassword::prompt_password(message).map_err(crate::CliError::Io)
}

/// Reads an environment variable, prompting when it is unset.
pub fn env_or_prompt(var: &str, message: &str) -> crate::CliResult<String> {
    match std::env::var(var) {
        Ok(value) => Ok(value),
        Err(_) => prompt(message),
    }
}

/// Reads an environment variable, prompting hidden when it is unset.
pub fn env_or_prompt_hidden(var: &str, message: &str) -> crate::CliResult<String> {
    match std::env::var(var) {
        Ok(value) => Ok(value),
        Err(_) => prompt_password(message),
    }
}

/// Returns the value when present, prompting otherwise.
pub fn value_or_prompt(value: Option<String>, message: &str) -> crate::CliResult<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt(message),
    }
}
