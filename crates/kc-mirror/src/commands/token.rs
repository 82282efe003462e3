//! The `token` command: print the claims of the session's id token.
//!
//! A pure formatting utility. The token body is base64-decoded without any
//! signature validation.

use std::collections::BTreeMap;

use base64::Engine;
use kc_admin_client::AdminSession;
use serde_json::Value;

use crate::error::CliError;

/// Prints the id-token claims, sorted by name.
pub fn run_token(session: &AdminSession) -> crate::CliResult<()> {
    let token = session.id_token.as_deref().ok_or_else(|| {
        CliError::InvalidArgument("the session carries no id_token".to_string())
    })?;

    let claims = decode_claims(token)?;
    println!("id_token:");
    for (key, value) in &claims {
        println!("  {}", format_claim(key, value));
    }
    Ok(())
}

/// Decodes the body of a JWT without verifying anything.
fn decode_claims(token: &str) -> crate::CliResult<BTreeMap<String, Value>> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(CliError::InvalidArgument(
            "invalid JWT format: expected 3 parts separated by '.'".to_string(),
        ));
    }

    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let bytes = engine
        .decode(parts[1])
        .map_err(|e| CliError::InvalidArgument(format!("invalid token body base64: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Renders one claim. Epoch-second claims (`exp`, `iat`) get an ISO-8601
/// annotation.
fn format_claim(key: &str, value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match key {
        "exp" | "iat" => match value.as_i64().and_then(|ts| {
            chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.to_rfc3339())
        }) {
            Some(timestamp) => format!("{key}: {rendered} # {timestamp}"),
            None => format!("{key}: {rendered}"),
        },
        _ => format!("{key}: {rendered}"),
    }
}
