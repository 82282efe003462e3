//! # kc-mirror
//!
//! Keycloak configuration mirror and drift-checking CLI.

#![forbid(unsafe_code)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use kc_mirror::{
    cli::{Cli, Command},
    commands::{self, run_check, run_client, run_config, run_realm, run_token},
    config::CliConfig,
    output::error,
    repo::RepoStore,
    CliResult,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("kc_admin_client=debug,kc_mirror=debug")
            .init();
    }

    // Load configuration
    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &mut config).await {
        error(&e.to_string());
        std::process::exit(1);
    }
}

/// Dispatches the parsed command.
async fn run(cli: Cli, config: &mut CliConfig) -> CliResult<()> {
    match cli.command {
        // Config management never authenticates.
        Command::Config(cmd) => run_config(cmd, config),
        command => {
            let base_url = cli.base.unwrap_or_else(|| config.base_url.clone());
            let repo_dir = cli.repo.unwrap_or_else(|| config.repo_dir.clone());
            let format = cli.output.unwrap_or(config.output_format);

            // One token exchange per invocation; the session travels inside
            // the client.
            let admin = commands::connect(&base_url).await?;
            let repo = RepoStore::new(repo_dir);

            match command {
                Command::Realm(cmd) => run_realm(cmd, &admin, format).await,
                Command::Client(cmd) => run_client(cmd, &admin, &repo).await,
                Command::Check { realm, client } => {
                    run_check(&admin, &repo, &realm, client.as_deref()).await
                }
                Command::Token => run_token(admin.session()),
                Command::Config(_) => unreachable!("handled before authenticating"),
            }
        }
    }
}
