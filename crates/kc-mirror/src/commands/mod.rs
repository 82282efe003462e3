//! Command implementations.

pub mod check;
pub mod client;
pub mod config;
pub mod realm;
pub mod token;

pub use check::run_check;
pub use client::run_client;
pub use config::run_config;
pub use realm::run_realm;
pub use token::run_token;

use kc_admin_client::AdminClient;

use crate::output::{env_or_prompt, env_or_prompt_hidden};

/// Resolves admin credentials from the environment, prompting for whatever
/// is unset, and performs the token exchange.
pub async fn connect(base_url: &str) -> crate::CliResult<AdminClient> {
    let username = env_or_prompt("KEYCLOAK_USER", "Keycloak user: ")?;
    let password = env_or_prompt_hidden("KEYCLOAK_PWD", "Keycloak password: ")?;
    Ok(AdminClient::connect(base_url, &username, &password).await?)
}
