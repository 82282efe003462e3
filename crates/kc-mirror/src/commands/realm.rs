//! Realm management commands.
//!
//! Realms are managed directly against the server and never mirrored
//! locally.

use kc_admin_client::{AdminClient, RealmRepresentation};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::RealmCommand;
use crate::config::OutputFormat;
use crate::output::{confirm, error, output, success, value_or_prompt};

/// Realm representation for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RealmDisplay {
    /// Realm name.
    #[tabled(rename = "Realm")]
    pub realm: String,
    /// Display name.
    #[tabled(rename = "Display Name")]
    pub display_name: String,
    /// Whether the realm is enabled.
    #[tabled(rename = "Enabled")]
    pub enabled: bool,
}

impl From<RealmRepresentation> for RealmDisplay {
    fn from(realm: RealmRepresentation) -> Self {
        Self {
            realm: realm.realm,
            display_name: realm.display_name.unwrap_or_default(),
            enabled: realm.enabled.unwrap_or(true),
        }
    }
}

/// Runs a realm command.
pub async fn run_realm(
    cmd: RealmCommand,
    admin: &AdminClient,
    format: OutputFormat,
) -> crate::CliResult<()> {
    match cmd {
        RealmCommand::List => list(admin, format).await,
        RealmCommand::Create { name, display_name } => {
            let display_name = value_or_prompt(display_name, "Display name: ")?;
            create(admin, &name, &display_name).await
        }
        RealmCommand::Delete { name, force } => {
            if !force
                && !confirm(&format!("Are you sure you want to delete realm '{}'?", name))?
            {
                error("Operation cancelled");
                return Ok(());
            }
            delete(admin, &name).await
        }
    }
}

/// Lists all realms.
pub async fn list(admin: &AdminClient, format: OutputFormat) -> crate::CliResult<()> {
    let realms: Vec<RealmDisplay> = admin
        .list_realms()
        .await?
        .into_iter()
        .map(RealmDisplay::from)
        .collect();
    output(&realms, format)
}

/// Creates a realm. The entity id is set to the realm name.
pub async fn create(admin: &AdminClient, name: &str, display_name: &str) -> crate::CliResult<()> {
    let realm = RealmRepresentation {
        id: Some(name.to_string()),
        realm: name.to_string(),
        display_name: Some(display_name.to_string()),
        enabled: None,
    };
    admin.create_realm(&realm).await?;
    success(&format!("Realm '{}' created", name));
    Ok(())
}

/// Deletes a realm. The local repo is deliberately left untouched: the
/// mirror is a historical record, not a live cache.
pub async fn delete(admin: &AdminClient, name: &str) -> crate::CliResult<()> {
    admin.delete_realm(name).await?;
    success(&format!("Realm '{}' deleted", name));
    Ok(())
}
