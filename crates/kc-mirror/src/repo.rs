//! The on-disk mirror of client documents.
//!
//! Layout: one JSON document per client at `<repo>/<realm>/clients/<clientId>.json`,
//! written in canonical form (sorted keys, two-space indent, trailing
//! newline) so byte-for-byte diffs reflect only semantic changes. `save` is
//! the only mutator; documents are never auto-deleted.
//!
//! Single-writer contract: there is no locking, concurrent invocations
//! against the same realm may race on file writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kc_admin_client::ClientRecord;

use crate::error::{CliError, CliResult};

/// The local repository store.
#[derive(Debug, Clone)]
pub struct RepoStore {
    base_dir: PathBuf,
}

impl RepoStore {
    /// Creates a store rooted at `base_dir`. Directories are created lazily
    /// on the first `save`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory holding the client documents of a realm.
    fn client_dir(&self, realm: &str) -> PathBuf {
        self.base_dir.join(realm).join("clients")
    }

    /// The path of one client document.
    fn client_file(&self, realm: &str, client_id: &str) -> PathBuf {
        self.client_dir(realm).join(format!("{client_id}.json"))
    }

    /// Whether a record for `(realm, client_id)` is stored.
    pub fn exists(&self, realm: &str, client_id: &str) -> bool {
        self.client_file(realm, client_id).is_file()
    }

    /// Loads one record.
    pub fn load(&self, realm: &str, client_id: &str) -> CliResult<ClientRecord> {
        let path = self.client_file(realm, client_id);
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CliError::NotFound(format!("client '{client_id}' not in local repo ({realm})"))
            } else {
                CliError::Io(e)
            }
        })?;
        parse_record(&path, &bytes)
    }

    /// Loads every record currently stored under a realm.
    ///
    /// The directory listing is snapshotted at call time; documents are
    /// parsed lazily as the iterator advances. A missing realm directory
    /// yields an empty iterator.
    pub fn load_all(&self, realm: &str) -> impl Iterator<Item = CliResult<ClientRecord>> {
        let dir = self.client_dir(realm);
        let paths: Vec<CliResult<PathBuf>> = match fs::read_dir(&dir) {
            Ok(entries) => entries
                .map(|entry| Ok(entry?.path()))
                .filter(|path| match path {
                    Ok(p) => p.is_file(),
                    Err(_) => true,
                })
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => vec![Err(CliError::Io(e))],
        };

        paths.into_iter().map(|path| {
            let path = path?;
            let bytes = fs::read(&path)?;
            parse_record(&path, &bytes)
        })
    }

    /// Writes a record in canonical form, creating missing parent
    /// directories. Idempotent: saving the same record twice produces
    /// byte-identical files.
    pub fn save(&self, realm: &str, record: &ClientRecord) -> CliResult<PathBuf> {
        let client_id = record.client_id().ok_or_else(|| {
            CliError::MalformedData("client record has no string 'clientId'".to_string())
        })?;
        let path = self.client_file(realm, client_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut body = record.to_canonical_json()?;
        body.push('\n');
        fs::write(&path, body)?;
        Ok(path)
    }
}

/// Parses a stored document, mapping parse failures to `MalformedData`.
fn parse_record(path: &Path, bytes: &[u8]) -> CliResult<ClientRecord> {
    serde_json::from_slice(bytes)
        .map_err(|e| CliError::MalformedData(format!("{}: {e}", path.display())))
}
