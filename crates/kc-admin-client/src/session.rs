//! Password-grant token exchange.

use serde_json::Value;

use crate::error::{AdminError, AdminResult};

/// Path of the token endpoint, relative to the server base URL.
const TOKEN_PATH: &str = "/realms/master/protocol/openid-connect/token";

/// OAuth client used for the admin password grant.
const ADMIN_CLI_CLIENT: &str = "admin-cli";

/// An authorized admin session.
///
/// Obtained once at startup via [`AdminSession::login`] and carried inside
/// the [`AdminClient`](crate::AdminClient); every admin call attaches the
/// access token as a bearer header.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Bearer token attached to every admin call.
    pub access_token: String,
    /// Raw id token, when the server issued one (requires the `openid`
    /// scope). Kept for claim inspection only; never validated.
    pub id_token: Option<String>,
}

impl AdminSession {
    /// Performs the password grant against the master realm and returns the
    /// resulting session.
    pub async fn login(
        http: &reqwest::Client,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> AdminResult<Self> {
        let url = format!("{}{}", base_url, TOKEN_PATH);
        let form = [
            ("client_id", ADMIN_CLI_CLIENT),
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("scope", "openid"),
        ];

        tracing::debug!(%url, "token exchange");
        let response = http.post(&url).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AdminError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = serde_json::from_slice(&response.bytes().await?)?;
        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AdminError::Auth("token response carries no access_token".to_string())
            })?
            .to_string();
        let id_token = body
            .get("id_token")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            access_token,
            id_token,
        })
    }
}
