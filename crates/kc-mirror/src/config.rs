//! CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Base URL of the Keycloak server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path to the local repo directory.
    #[serde(default = "default_repo_dir")]
    pub repo_dir: String,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default server base URL.
fn default_base_url() -> String {
    "http://localhost:8080/auth".to_string()
}

/// Default repo directory.
fn default_repo_dir() -> String {
    "./repo".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            repo_dir: default_repo_dir(),
            output_format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".keycloak").join("kc-mirror.toml"))
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl std::fmt::Display for OutputFormat {
    /// Renders the name `config set` accepts.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Table => "table",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}
