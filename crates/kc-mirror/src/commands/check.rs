//! The `check` command: report drift between mirror and server.
//!
//! Read-only and side-effect free; the one command that is always safe to
//! re-run.

use std::collections::BTreeMap;

use kc_admin_client::{AdminClient, ClientRecord};

use crate::error::CliError;
use crate::output::info;
use crate::reconcile::{self, DriftReport};
use crate::repo::RepoStore;

/// Runs a reconciliation pass and prints one line per client.
pub async fn run_check(
    admin: &AdminClient,
    repo: &RepoStore,
    realm: &str,
    client_filter: Option<&str>,
) -> crate::CliResult<()> {
    let report = drift_report(admin, repo, realm, client_filter).await?;
    info(&format!(
        "Clients of realm '{}' compared to local repo",
        realm
    ));
    for line in report.lines() {
        println!("{line}");
    }
    Ok(())
}

/// Builds the drift report for a realm: the full remote client set
/// (optionally narrowed to one client id) against the full local set, both
/// keyed by entity id.
pub async fn drift_report(
    admin: &AdminClient,
    repo: &RepoStore,
    realm: &str,
    client_filter: Option<&str>,
) -> crate::CliResult<DriftReport> {
    let mut remote = BTreeMap::new();
    for record in admin.list_clients(realm, client_filter).await? {
        remote.insert(entity_id(&record, "remote")?, record);
    }

    let mut local = BTreeMap::new();
    for record in repo.load_all(realm) {
        let record = record?;
        local.insert(entity_id(&record, "stored")?, record);
    }

    Ok(reconcile::compare(&local, &remote))
}

/// Extracts the key a reconciliation pass groups on: the server entity id
/// when present, the `clientId` otherwise. For records this tool manages
/// the two coincide; documents captured before the server assigned an id
/// still key on their `clientId`.
fn entity_id(record: &ClientRecord, side: &str) -> crate::CliResult<String> {
    record
        .id()
        .or_else(|| record.client_id())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::MalformedData(format!(
                "{side} client record has neither a string 'id' nor 'clientId'"
            ))
        })
}
