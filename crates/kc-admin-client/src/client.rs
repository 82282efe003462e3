//! The admin API client and its typed operations.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AdminError, AdminResult};
use crate::session::AdminSession;
use crate::types::{ClientRecord, ClientSecret, RealmRepresentation};

/// Client for the Keycloak Admin REST API.
///
/// Wraps a `reqwest::Client`, the server base URL and an authorized
/// [`AdminSession`]. Calls are strictly sequential; the only deadline layer
/// is the 30-second request timeout. No call is ever retried: the first
/// non-success response aborts the running command.
#[derive(Debug)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    session: AdminSession,
}

impl AdminClient {
    /// Performs the password grant and returns an authorized client.
    pub async fn connect(base_url: &str, username: &str, password: &str) -> AdminResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let session = AdminSession::login(&http, base_url, username, password).await?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            session,
        })
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    /// The server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // === Realm operations ===

    /// Lists all realms.
    pub async fn list_realms(&self) -> AdminResult<Vec<RealmRepresentation>> {
        self.get("/admin/realms").await
    }

    /// Creates a realm.
    pub async fn create_realm(&self, realm: &RealmRepresentation) -> AdminResult<()> {
        self.post("/admin/realms", realm).await
    }

    /// Deletes a realm.
    pub async fn delete_realm(&self, realm: &str) -> AdminResult<()> {
        self.delete(&format!("/admin/realms/{}", realm)).await
    }

    // === Client operations ===

    /// Lists the clients of a realm, optionally narrowed to one `clientId`.
    pub async fn list_clients(
        &self,
        realm: &str,
        client_id: Option<&str>,
    ) -> AdminResult<Vec<ClientRecord>> {
        let mut path = format!("/admin/realms/{}/clients", realm);
        if let Some(filter) = client_id {
            path.push_str(&format!("?clientId={}", urlencoding::encode(filter)));
        }
        self.get(&path).await
    }

    /// Gets a client by its entity id.
    pub async fn get_client(&self, realm: &str, id: &str) -> AdminResult<ClientRecord> {
        self.get(&format!("/admin/realms/{}/clients/{}", realm, id))
            .await
    }

    /// Creates a client from a full document.
    pub async fn create_client(&self, realm: &str, record: &ClientRecord) -> AdminResult<()> {
        self.post(&format!("/admin/realms/{}/clients", realm), record)
            .await
    }

    /// Replaces a client document. Full-document PUT semantics: the server
    /// takes the payload verbatim, so callers must supply the complete
    /// desired document, not a delta.
    pub async fn update_client(
        &self,
        realm: &str,
        id: &str,
        record: &ClientRecord,
    ) -> AdminResult<()> {
        self.put(&format!("/admin/realms/{}/clients/{}", realm, id), record)
            .await
    }

    /// Deletes a client by its entity id.
    pub async fn delete_client(&self, realm: &str, id: &str) -> AdminResult<()> {
        self.delete(&format!("/admin/realms/{}/clients/{}", realm, id))
            .await
    }

    /// Gets the secret of a client.
    pub async fn get_client_secret(&self, realm: &str, id: &str) -> AdminResult<ClientSecret> {
        self.get(&format!(
            "/admin/realms/{}/clients/{}/client-secret",
            realm, id
        ))
        .await
    }

    // === Request plumbing ===

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AdminResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.session.access_token)
            .send()
            .await?;
        read_json(response).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> AdminResult<()> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.session.access_token)
            .json(body)
            .send()
            .await?;
        read_empty(response).await
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> AdminResult<()> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "PUT");
        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.session.access_token)
            .json(body)
            .send()
            .await?;
        read_empty(response).await
    }

    async fn delete(&self, path: &str) -> AdminResult<()> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.session.access_token)
            .send()
            .await?;
        read_empty(response).await
    }
}

/// Reads a JSON response body, mapping non-success statuses to
/// [`AdminError::Api`].
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> AdminResult<T> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        Err(api_error(status, response).await)
    }
}

/// Discards a response body, mapping non-success statuses to
/// [`AdminError::Api`].
async fn read_empty(response: reqwest::Response) -> AdminResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status, response).await)
    }
}

async fn api_error(status: reqwest::StatusCode, response: reqwest::Response) -> AdminError {
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    AdminError::Api {
        status: status.as_u16(),
        message,
    }
}
