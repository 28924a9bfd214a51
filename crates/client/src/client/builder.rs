//! Client builder for constructing [`UltraClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`UltraClient`] methods)
//! - Access token management (handled by [`TokenManager`] in `auth.rs`)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` are required fields and must be provided
//!   before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a
//!   warning

use std::time::Duration;

use crate::auth::{AuthStrategy, TokenManager};
use crate::client::UltraClient;
use crate::error::{ClientError, Result};
use udns_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{
        DEFAULT_EXPIRY_BUFFER_SECS, DEFAULT_MAX_FETCH_ATTEMPTS, DEFAULT_MAX_REDIRECTS,
        DEFAULT_RETRY_BACKOFF_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_TTL_SECS,
    },
};

/// Builder for creating a new [`UltraClient`].
///
/// All configuration options have sensible defaults except for `base_url`
/// and `auth_strategy`, which are required.
///
/// # Example
///
/// ```rust,ignore
/// use udns_client::{UltraClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = UltraClient::builder()
///     .base_url("https://restapi.ultradns.com/v2".to_string())
///     .auth_strategy(AuthStrategy::AccessToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct UltraClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_fetch_attempts: usize,
    retry_backoff: Duration,
    token_ttl_seconds: u64,
    token_expiry_buffer_seconds: u64,
}

impl Default for UltraClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_fetch_attempts: DEFAULT_MAX_FETCH_ATTEMPTS,
            retry_backoff: Duration::from_secs(DEFAULT_RETRY_BACKOFF_SECS),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECS,
            token_expiry_buffer_seconds: DEFAULT_EXPIRY_BUFFER_SECS,
        }
    }
}

impl UltraClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the UltraDNS API, including the version segment
    /// (e.g., `https://restapi.ultradns.com/v2`).
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    ///
    /// See [`AuthStrategy`] for available options.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against test endpoints. Disabling TLS verification
    /// makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the attempt budget for a whole multi-page fetch.
    ///
    /// The budget spans the entire fetch: it is not reset when pagination
    /// advances to the next page. Default is 5 attempts.
    pub fn max_fetch_attempts(mut self, attempts: usize) -> Self {
        self.max_fetch_attempts = attempts;
        self
    }

    /// Set the fixed backoff between retries of a failed page fetch.
    ///
    /// Default is 5 seconds.
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Set the access token TTL in seconds, used when the authorization
    /// response does not report one. Default is 3600 seconds (1 hour).
    pub fn token_ttl_seconds(mut self, ttl: u64) -> Self {
        self.token_ttl_seconds = ttl;
        self
    }

    /// Set the token expiry buffer in seconds.
    ///
    /// Tokens are proactively refreshed if they expire within this buffer
    /// window. Default is 60 seconds.
    pub fn token_expiry_buffer_seconds(mut self, buffer: u64) -> Self {
        self.token_expiry_buffer_seconds = buffer;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types to client crate
    /// types.
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::Password { username, password } => AuthStrategy::Password {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::AccessToken { token } => AuthStrategy::AccessToken {
                token: token.clone(),
            },
        };

        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_fetch_attempts = config.connection.max_fetch_attempts;
        self.retry_backoff = Duration::from_secs(config.connection.retry_backoff_seconds);
        self.token_ttl_seconds = config.connection.token_ttl_seconds;
        self.token_expiry_buffer_seconds = config.connection.token_expiry_buffer_seconds;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`UltraClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not
    /// provided. Returns `ClientError::HttpError` if the HTTP client fails
    /// to build.
    pub fn build(self) -> Result<UltraClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            let is_https = base_url.starts_with("https://");
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(UltraClient {
            http,
            base_url,
            token_manager: TokenManager::new(auth_strategy),
            max_fetch_attempts: self.max_fetch_attempts,
            retry_backoff: self.retry_backoff,
            token_ttl_seconds: self.token_ttl_seconds,
            token_expiry_buffer_seconds: self.token_expiry_buffer_seconds,
        })
    }
}
