//! CLI argument parsing.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// kc-mirror - Keycloak configuration mirror and drift checker.
#[derive(Debug, Parser)]
#[command(name = "kc-mirror")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the Keycloak server (overrides config).
    #[arg(short, long, env = "KEYCLOAK_BASE")]
    pub base: Option<String>,

    /// Path to the local repo directory (overrides config).
    #[arg(long)]
    pub repo: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose (debug) logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Realm management commands.
    #[command(subcommand)]
    Realm(RealmCommand),

    /// Client management commands.
    #[command(subcommand)]
    Client(ClientCommand),

    /// Compare the clients of a realm against the local repo.
    Check {
        /// Realm name.
        realm: String,

        /// Narrow the comparison to one client id.
        #[arg(long)]
        client: Option<String>,
    },

    /// Print the claims of the session's id token.
    Token,

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Realm commands.
#[derive(Debug, Subcommand)]
pub enum RealmCommand {
    /// List all realms.
    List,

    /// Create a new realm.
    Create {
        /// Realm name.
        name: String,

        /// Display name (prompted for when omitted).
        #[arg(long)]
        display_name: Option<String>,
    },

    /// Delete a realm. The local repo is not touched.
    Delete {
        /// Realm name.
        name: String,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// Client commands.
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Create a client on the server and capture it into the local repo.
    Create {
        /// Realm name.
        realm: String,

        /// Client id.
        client: String,

        /// Replace an existing record in the local repo.
        #[arg(long = "override")]
        overwrite: bool,
    },

    /// Push a client stored in the local repo back to the server.
    Restore {
        /// Realm name.
        realm: String,

        /// Client id.
        client: String,
    },

    /// Delete a client on the server. The local repo is not touched.
    Delete {
        /// Realm name.
        realm: String,

        /// Client id.
        client: String,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },

    /// Print the remote client document in canonical form.
    Dump {
        /// Realm name.
        realm: String,

        /// Client id.
        client: String,
    },

    /// Print the client secret.
    DumpSecret {
        /// Realm name.
        realm: String,

        /// Client id.
        client: String,
    },

    /// Add a redirect URI to a client (set union, idempotent).
    AddRedirect {
        /// Realm name.
        realm: String,

        /// Client id.
        client: String,

        /// Redirect URI (prompted for when omitted).
        #[arg(long)]
        url: Option<String>,
    },
}

/// Config commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Initialize configuration interactively.
    Init,
}
