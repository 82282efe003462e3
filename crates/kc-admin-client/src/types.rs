//! Wire representations for admin resources.
//!
//! Client documents are open-ended: the server attaches defaults, generated
//! identifiers and protocol settings this tool never inspects. They are kept
//! as ordered maps with typed accessors for the few fields the sync logic
//! reads, so every other field round-trips untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open-ended client document as served by the admin API.
///
/// Backed by `serde_json`'s default map (`BTreeMap`), so serialization always
/// emits keys in sorted order. Equality is deep structural equality of the
/// payload, independent of the key order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientRecord(Map<String, Value>);

impl ClientRecord {
    /// The server-side entity id (`id`), if present as a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The OAuth `clientId`, if present as a string.
    pub fn client_id(&self) -> Option<&str> {
        self.0.get("clientId").and_then(Value::as_str)
    }

    /// The redirect URIs as a set; absent or non-array values yield an
    /// empty set.
    pub fn redirect_uris(&self) -> BTreeSet<String> {
        self.0
            .get("redirectUris")
            .and_then(Value::as_array)
            .map(|uris| {
                uris.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replaces the redirect URIs, leaving every other field untouched.
    pub fn set_redirect_uris(&mut self, uris: BTreeSet<String>) {
        let uris: Vec<Value> = uris.into_iter().map(Value::String).collect();
        self.0.insert("redirectUris".to_string(), Value::Array(uris));
    }

    /// Reads an arbitrary field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Serializes the record in canonical form: sorted keys, two-space
    /// indentation, no trailing newline.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A realm as served by the admin API. Realms are never mirrored locally,
/// so the representation is minimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmRepresentation {
    /// Entity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Realm name.
    pub realm: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the realm is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Client secret response.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    /// The secret value.
    pub value: String,
}
