//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `ULTRADNS_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` for programmatic overrides.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Invariants / Assumptions:
//! - Programmatic `with_*` values take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Empty or whitespace-only environment variables are treated as unset.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required (set ULTRADNS_BASE_URL)")]
    MissingBaseUrl,

    #[error(
        "Authentication configuration is required (either ULTRADNS_USERNAME/ULTRADNS_PASSWORD or ULTRADNS_TOKEN)"
    )]
    MissingAuth,
}

/// Read an environment variable, treating empty/whitespace values as unset.
fn env_var_or_none(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Parse a numeric environment variable into `T`.
fn parse_env_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| ConfigError::InvalidValue {
        var: name.to_string(),
        message: format!("{}", e),
    })
}

/// Configuration loader that builds a [`Config`] from environment variables
/// and programmatic overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_fetch_attempts: Option<usize>,
    retry_backoff_seconds: Option<u64>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file is ignored. Failures to find a `.env` file are not
    /// errors.
    pub fn load_dotenv(self) -> Self {
        let disabled = env_var_or_none("DOTENV_DISABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        if !disabled {
            let _ = dotenvy::dotenv();
        }
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Override the username for password-grant authentication.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Override the password for password-grant authentication.
    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Override the static bearer token.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Override TLS verification skipping.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fill unset fields from `ULTRADNS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.base_url = self.base_url.or_else(|| env_var_or_none("ULTRADNS_BASE_URL"));
        self.username = self.username.or_else(|| env_var_or_none("ULTRADNS_USERNAME"));
        self.password = self
            .password
            .or_else(|| env_var_or_none("ULTRADNS_PASSWORD").map(|p| SecretString::new(p.into())));
        self.token = self
            .token
            .or_else(|| env_var_or_none("ULTRADNS_TOKEN").map(|t| SecretString::new(t.into())));

        if self.skip_verify.is_none()
            && let Some(v) = env_var_or_none("ULTRADNS_SKIP_VERIFY")
        {
            self.skip_verify = Some(v == "true" || v == "1");
        }
        if self.timeout.is_none()
            && let Some(v) = env_var_or_none("ULTRADNS_TIMEOUT_SECS")
        {
            self.timeout = Some(Duration::from_secs(parse_env_var(
                "ULTRADNS_TIMEOUT_SECS",
                &v,
            )?));
        }
        if self.max_fetch_attempts.is_none()
            && let Some(v) = env_var_or_none("ULTRADNS_MAX_FETCH_ATTEMPTS")
        {
            self.max_fetch_attempts = Some(parse_env_var("ULTRADNS_MAX_FETCH_ATTEMPTS", &v)?);
        }
        if self.retry_backoff_seconds.is_none()
            && let Some(v) = env_var_or_none("ULTRADNS_RETRY_BACKOFF_SECS")
        {
            self.retry_backoff_seconds = Some(parse_env_var("ULTRADNS_RETRY_BACKOFF_SECS", &v)?);
        }

        Ok(self)
    }

    /// Build the final [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if no base URL was provided,
    /// and [`ConfigError::MissingAuth`] if neither a token nor a complete
    /// username/password pair was provided. A static token takes precedence
    /// over password credentials when both are present.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;

        let strategy = match (self.token, self.username, self.password) {
            (Some(token), _, _) => AuthStrategy::AccessToken { token },
            (None, Some(username), Some(password)) => {
                AuthStrategy::Password { username, password }
            }
            _ => return Err(ConfigError::MissingAuth),
        };

        let defaults = ConnectionConfig::default();
        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(defaults.skip_verify),
                timeout: self.timeout.unwrap_or(defaults.timeout),
                max_fetch_attempts: self
                    .max_fetch_attempts
                    .unwrap_or(defaults.max_fetch_attempts),
                retry_backoff_seconds: self
                    .retry_backoff_seconds
                    .unwrap_or(defaults.retry_backoff_seconds),
                token_ttl_seconds: defaults.token_ttl_seconds,
                token_expiry_buffer_seconds: defaults.token_expiry_buffer_seconds,
            },
            auth: AuthConfig { strategy },
        })
    }
}
