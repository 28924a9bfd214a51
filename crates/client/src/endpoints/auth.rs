//! Authorization endpoint.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Access token grant returned by `/authorization/token`.
///
/// `expiresIn` arrives as a string of seconds.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenGrant {
    access_token: String,
    #[serde(default)]
    expires_in: Option<String>,
}

/// Authorize with username and password (OAuth2 password grant).
///
/// Returns the granted access token and its reported time-to-live in
/// seconds, when the server reports one.
pub async fn authorize(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<(String, Option<u64>)> {
    debug!("Authorizing with UltraDNS as {}", username);

    let url = format!("{}/authorization/token", base_url);
    let builder = client.post(&url).form(&[
        ("grant_type", "password"),
        ("username", username),
        ("password", password),
    ]);

    let response = send_request(builder).await?;

    let grant: TokenGrant = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse token response: {}", e))
    })?;

    let ttl = grant.expires_in.as_deref().and_then(|s| s.parse().ok());
    Ok((grant.access_token, ttl))
}
