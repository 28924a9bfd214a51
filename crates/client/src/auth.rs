//! Authentication strategies and access token management.

use secrecy::{ExposeSecret, SecretString};
use std::time::Instant;
use udns_config::constants::DEFAULT_EXPIRY_BUFFER_SECS;

/// Strategy for authenticating with UltraDNS.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication (OAuth2 password grant).
    /// The client will automatically manage access tokens.
    Password {
        username: String,
        password: SecretString,
    },
    /// Static bearer token. No token management is performed.
    AccessToken { token: SecretString },
}

/// Manages UltraDNS access tokens with automatic renewal.
#[derive(Debug)]
pub struct TokenManager {
    auth_strategy: AuthStrategy,
    access_token: Option<AccessToken>,
}

/// Access token with expiry information.
#[derive(Debug, Clone)]
struct AccessToken {
    value: SecretString,
    expires_at: Option<Instant>,
    expiry_buffer_seconds: u64,
}

impl AccessToken {
    fn new(
        value: SecretString,
        ttl_seconds: Option<u64>,
        expiry_buffer_seconds: Option<u64>,
    ) -> Self {
        let expires_at =
            ttl_seconds.map(|ttl| Instant::now() + std::time::Duration::from_secs(ttl));
        Self {
            value,
            expires_at,
            expiry_buffer_seconds: expiry_buffer_seconds.unwrap_or(DEFAULT_EXPIRY_BUFFER_SECS),
        }
    }

    /// Check if the token is past its actual expiry time.
    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| exp.saturating_duration_since(Instant::now()).is_zero())
            .unwrap_or(false)
    }

    /// Check if the token will expire soon (within the buffer window).
    ///
    /// Used to proactively re-authorize before expiry, preventing races
    /// where a token expires during an API call.
    fn will_expire_soon(&self) -> bool {
        self.expires_at
            .map(|exp| {
                let buffer = std::time::Duration::from_secs(self.expiry_buffer_seconds);
                let remaining = exp.saturating_duration_since(Instant::now());
                remaining < buffer
            })
            .unwrap_or(false)
    }
}

impl TokenManager {
    /// Create a new token manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            access_token: None,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using a static token (no token management needed).
    pub fn is_static_token(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::AccessToken { .. })
    }

    /// Get the bearer token for API requests.
    /// For static token auth, returns the token directly.
    /// For password auth, returns the granted access token if one is held.
    pub fn get_bearer_token(&self) -> Option<&str> {
        match &self.auth_strategy {
            AuthStrategy::AccessToken { token } => Some(token.expose_secret()),
            AuthStrategy::Password { .. } => {
                self.access_token.as_ref().map(|t| t.value.expose_secret())
            }
        }
    }

    /// Store an access token received from the authorization endpoint.
    ///
    /// # Arguments
    /// * `token` - The access token string
    /// * `ttl_seconds` - Time-to-live in seconds (None means no expiry)
    /// * `expiry_buffer_seconds` - Buffer before expiry to trigger proactive
    ///   re-authorization (None uses the default of 60 seconds)
    pub fn set_access_token(
        &mut self,
        token: String,
        ttl_seconds: Option<u64>,
        expiry_buffer_seconds: Option<u64>,
    ) {
        self.access_token = Some(AccessToken::new(
            SecretString::new(token.into()),
            ttl_seconds,
            expiry_buffer_seconds,
        ));
    }

    /// Generic helper to check token state.
    /// Returns false for static token auth, true if no access token is held.
    fn check_token<F>(&self, check: F) -> bool
    where
        F: FnOnce(&AccessToken) -> bool,
    {
        if self.is_static_token() {
            return false;
        }
        self.access_token.as_ref().map(check).unwrap_or(true)
    }

    /// Check if the current access token is expired.
    pub fn is_token_expired(&self) -> bool {
        self.check_token(|t| t.is_expired())
    }

    /// Check if the current access token will expire soon (within buffer).
    ///
    /// Returns false for static token auth (no expiry concerns).
    pub fn token_expires_soon(&self) -> bool {
        self.check_token(|t| t.will_expire_soon())
    }

    /// Clear the current access token (force re-authorization).
    pub fn clear_token(&mut self) {
        self.access_token = None;
    }
}
