//! Client-level access token helpers.
//!
//! This module contains methods on [`UltraClient`] that interact with the
//! [`TokenManager`] to handle bearer token retrieval and renewal.
//!
//! # What this module does NOT handle:
//! - Low-level token storage and expiry tracking (handled by
//!   [`TokenManager`] in `auth.rs`)
//! - The authorization HTTP call itself (handled by
//!   [`crate::endpoints::authorize`])
//!
//! # Invariants
//! - [`get_auth_token()`] requires `&mut self` because it may trigger an
//!   authorization call
//! - Static token authentication never triggers authorization; the token is
//!   returned directly
//! - Password-grant authentication proactively refreshes tokens before they
//!   expire

use crate::auth::AuthStrategy;
use crate::client::UltraClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use secrecy::ExposeSecret;

impl UltraClient {
    /// Get the current bearer token, authorizing if necessary.
    ///
    /// - For static token auth: returns the configured token directly
    /// - For password auth: checks if the access token is expired or will
    ///   expire soon, and triggers an authorization call if needed
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if authorization fails.
    /// Returns [`ClientError::TokenExpired`] if no valid token is available.
    pub(crate) async fn get_auth_token(&mut self) -> Result<String> {
        // For static token auth, just return the token
        if self.token_manager.is_static_token()
            && let Some(token) = self.token_manager.get_bearer_token()
        {
            return Ok(token.to_string());
        }

        // For password auth, authorize if the token is expired OR will expire soon
        if self.token_manager.is_token_expired() || self.token_manager.token_expires_soon() {
            self.authorize().await?;
        }

        self.token_manager
            .get_bearer_token()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                let username = match self.token_manager.strategy() {
                    AuthStrategy::Password { username, .. } => username.clone(),
                    AuthStrategy::AccessToken { .. } => "access-token".to_string(),
                };
                ClientError::TokenExpired { username }
            })
    }

    /// Check if the client is using a static bearer token.
    ///
    /// Static tokens do not expire and do not require token management.
    pub fn is_static_token_auth(&self) -> bool {
        self.token_manager.is_static_token()
    }

    /// Authorize with username/password to obtain an access token.
    ///
    /// This method is only valid for [`AuthStrategy::Password`]. The granted
    /// token is stored in the `TokenManager` for subsequent API calls.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the auth strategy is not
    /// password-based. Returns [`ClientError::ApiError`] if the
    /// authorization request fails.
    pub async fn authorize(&mut self) -> Result<String> {
        if let AuthStrategy::Password { username, password } = self.token_manager.strategy() {
            let (token, reported_ttl) = endpoints::authorize(
                &self.http,
                &self.base_url,
                username,
                password.expose_secret(),
            )
            .await?;

            // Prefer the server-reported TTL, falling back to the configured one
            let ttl = reported_ttl.unwrap_or(self.token_ttl_seconds);
            self.token_manager.set_access_token(
                token.clone(),
                Some(ttl),
                Some(self.token_expiry_buffer_seconds),
            );

            Ok(token)
        } else {
            Err(ClientError::AuthFailed(
                "Cannot authorize with a static token auth strategy".to_string(),
            ))
        }
    }
}
