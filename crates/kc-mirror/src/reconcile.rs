//! Drift classification between the local repo and the server.
//!
//! For every entity id present on either side, exactly one status is
//! derived from presence and deep equality of the two documents. The
//! four-way split matters operationally: `missing` calls for a restore,
//! `stale` for a capture, `differs` for an inspection, `equals` for
//! nothing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use kc_admin_client::ClientRecord;

/// Per-entity drift status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// Present locally, absent on the server.
    Missing,
    /// Present on the server, never captured locally.
    Stale,
    /// Present on both sides with deep-equal payloads.
    Equals,
    /// Present on both sides with diverging payloads.
    Differs,
}

impl SyncStatus {
    /// Classifies one entity from the presence of its two documents.
    /// Returns `None` only for the vacuous `(None, None)` case, which
    /// cannot arise from a key union.
    pub fn classify(local: Option<&ClientRecord>, remote: Option<&ClientRecord>) -> Option<Self> {
        match (local, remote) {
            (None, None) => None,
            (Some(_), None) => Some(Self::Missing),
            (None, Some(_)) => Some(Self::Stale),
            (Some(local), Some(remote)) => Some(if local == remote {
                Self::Equals
            } else {
                Self::Differs
            }),
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Missing => "missing",
            Self::Stale => "stale",
            Self::Equals => "equals",
            Self::Differs => "differs",
        };
        f.write_str(s)
    }
}

/// The result of one reconciliation pass: one entry per entity id, in
/// ascending lexical order. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftReport {
    entries: Vec<(String, SyncStatus)>,
}

impl DriftReport {
    /// The classified entries, ordered by id.
    pub fn entries(&self) -> &[(String, SyncStatus)] {
        &self.entries
    }

    /// Renders one `<id> : <status>` line per entry.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|(id, status)| format!("{id} : {status}"))
    }
}

/// Compares the two sides of a realm, both keyed by entity id.
pub fn compare(
    local: &BTreeMap<String, ClientRecord>,
    remote: &BTreeMap<String, ClientRecord>,
) -> DriftReport {
    let ids: BTreeSet<&String> = local.keys().chain(remote.keys()).collect();
    let entries = ids
        .into_iter()
        .filter_map(|id| {
            SyncStatus::classify(local.get(id), remote.get(id))
                .map(|status| (id.clone(), status))
        })
        .collect();
    DriftReport { entries }
}
