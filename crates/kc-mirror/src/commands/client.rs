//! Client sync operations.
//!
//! Every mutating operation that must capture server-assigned state ends
//! with a fetch-and-store: the authoritative remote document is re-read and
//! overwrites the local mirror. A crash between the remote mutation and the
//! fetch-and-store leaves the mirror stale; that inconsistency window is
//! accepted, not masked.

use kc_admin_client::{AdminClient, ClientRecord};

use crate::cli::ClientCommand;
use crate::error::CliError;
use crate::output::{confirm, error, info, success, value_or_prompt};
use crate::repo::RepoStore;

/// Runs a client command.
pub async fn run_client(
    cmd: ClientCommand,
    admin: &AdminClient,
    repo: &RepoStore,
) -> crate::CliResult<()> {
    match cmd {
        ClientCommand::Create {
            realm,
            client,
            overwrite,
        } => {
            create(admin, repo, &realm, &client, overwrite).await?;
            success(&format!("Client created: {}/{}", realm, client));
            Ok(())
        }
        ClientCommand::Restore { realm, client } => {
            restore(admin, repo, &realm, &client).await?;
            success(&format!("Client {}/{} restored from repo", realm, client));
            Ok(())
        }
        ClientCommand::Delete {
            realm,
            client,
            force,
        } => {
            if !force
                && !confirm(&format!("Are you sure you want to delete client '{}'?", client))?
            {
                error("Operation cancelled");
                return Ok(());
            }
            delete(admin, &realm, &client).await?;
            success(&format!("Client deleted: {}/{}", realm, client));
            Ok(())
        }
        ClientCommand::Dump { realm, client } => dump(admin, &realm, &client).await,
        ClientCommand::DumpSecret { realm, client } => {
            dump_secret(admin, &realm, &client).await
        }
        ClientCommand::AddRedirect { realm, client, url } => {
            let url = value_or_prompt(url, "RedirectURL: ")?;
            if add_redirect(admin, repo, &realm, &client, &url).await? {
                success(&format!(
                    "Client updated: {}/{}: redirect added: {}",
                    realm, client, url
                ));
            } else {
                info(&format!(
                    "Redirect already present on {}/{}, nothing to do",
                    realm, client
                ));
            }
            Ok(())
        }
    }
}

/// Reads the authoritative remote document and overwrites the local mirror
/// with it.
pub async fn fetch_and_store(
    admin: &AdminClient,
    repo: &RepoStore,
    realm: &str,
    client: &str,
) -> crate::CliResult<()> {
    let record = admin.get_client(realm, client).await?;
    repo.save(realm, &record)?;
    Ok(())
}

/// Creates a client on the server, then captures the stored document.
///
/// Refuses to proceed when the local repo already holds a record and
/// `overwrite` was not granted; in that case no remote call is made. The
/// mirror copy always derives from a post-creation read, never from the
/// request payload, since the server attaches defaults and generated
/// secrets.
pub async fn create(
    admin: &AdminClient,
    repo: &RepoStore,
    realm: &str,
    client: &str,
    overwrite: bool,
) -> crate::CliResult<()> {
    if repo.exists(realm, client) && !overwrite {
        return Err(CliError::Conflict(format!(
            "client '{client}' exists in local repo (pass --override to replace it)"
        )));
    }

    let payload: ClientRecord = serde_json::from_value(serde_json::json!({
        "id": client,
        "publicClient": false,
    }))?;
    admin.create_client(realm, &payload).await?;
    fetch_and_store(admin, repo, realm, client).await
}

/// Pushes the stored local document back to the server, then re-captures
/// it (the server may normalize fields).
pub async fn restore(
    admin: &AdminClient,
    repo: &RepoStore,
    realm: &str,
    client: &str,
) -> crate::CliResult<()> {
    let record = repo.load(realm, client)?;
    admin.create_client(realm, &record).await?;
    fetch_and_store(admin, repo, realm, client).await
}

/// Adds a redirect URI via set union. Returns `false` without issuing any
/// write when the URI is already present.
///
/// Only `redirectUris` is merged; every other field of the PUT is taken
/// verbatim from the last-read remote document.
pub async fn add_redirect(
    admin: &AdminClient,
    repo: &RepoStore,
    realm: &str,
    client: &str,
    url: &str,
) -> crate::CliResult<bool> {
    let mut record = admin.get_client(realm, client).await?;
    let mut uris = record.redirect_uris();
    if !uris.insert(url.to_string()) {
        return Ok(false);
    }

    record.set_redirect_uris(uris);
    admin.update_client(realm, client, &record).await?;
    fetch_and_store(admin, repo, realm, client).await?;
    Ok(true)
}

/// Deletes a client on the server. The local mirror is deliberately left
/// untouched.
pub async fn delete(admin: &AdminClient, realm: &str, client: &str) -> crate::CliResult<()> {
    admin.delete_client(realm, client).await?;
    Ok(())
}

/// Prints the remote client document in canonical form.
pub async fn dump(admin: &AdminClient, realm: &str, client: &str) -> crate::CliResult<()> {
    let record = admin.get_client(realm, client).await?;
    println!("{}", record.to_canonical_json()?);
    Ok(())
}

/// Prints the client secret.
pub async fn dump_secret(admin: &AdminClient, realm: &str, client: &str) -> crate::CliResult<()> {
    let secret = admin.get_client_secret(realm, client).await?;
    println!("Client secret {}/{}: {}", realm, client, secret.value);
    Ok(())
}
