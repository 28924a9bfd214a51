//! Configuration types for the UltraDNS client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retry budget).
//! - Define authentication strategies (password grant, static bearer token).
//! - Provide serialization helpers for `Duration` and `SecretString`.
//!
//! Does NOT handle:
//! - Configuration loading from env or `.env` files (see `loader` module).
//! - Actual network connections or token exchange (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Default values come from `constants`, not inline magic numbers.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_EXPIRY_BUFFER_SECS, DEFAULT_MAX_FETCH_ATTEMPTS,
    DEFAULT_RETRY_BACKOFF_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_TTL_SECS,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing SecretString as plain strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with UltraDNS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Username and password (OAuth2 password grant; the client manages
    /// access tokens automatically).
    #[serde(rename = "password")]
    Password {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// Static bearer token. No token management is performed.
    #[serde(rename = "token")]
    AccessToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}

/// Connection configuration for the UltraDNS REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API, including the version segment
    /// (e.g., `https://restapi.ultradns.com/v2`).
    pub base_url: String,
    /// Whether to skip TLS verification (for test endpoints with
    /// self-signed certificates).
    pub skip_verify: bool,
    /// Per-request timeout (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Attempt budget for a whole multi-page fetch. Spans the entire
    /// fetch; not reset when pagination advances.
    #[serde(default = "default_max_fetch_attempts")]
    pub max_fetch_attempts: usize,
    /// Fixed backoff between retries of a failed page fetch (seconds).
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_seconds: u64,
    /// Access token time-to-live in seconds, used when the authorization
    /// response does not report one.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Buffer time before token expiry to proactively re-authorize (seconds).
    #[serde(default = "default_token_expiry_buffer")]
    pub token_expiry_buffer_seconds: u64,
}

pub(crate) fn default_max_fetch_attempts() -> usize {
    DEFAULT_MAX_FETCH_ATTEMPTS
}

pub(crate) fn default_retry_backoff() -> u64 {
    DEFAULT_RETRY_BACKOFF_SECS
}

pub(crate) fn default_token_ttl() -> u64 {
    DEFAULT_TOKEN_TTL_SECS
}

pub(crate) fn default_token_expiry_buffer() -> u64 {
    DEFAULT_EXPIRY_BUFFER_SECS
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings.
    pub connection: ConnectionConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
}

impl Config {
    /// Create a configuration with username/password authentication.
    pub fn with_password(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Password { username, password },
            },
        }
    }

    /// Create a configuration with a static bearer token.
    pub fn with_access_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::AccessToken { token },
            },
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_fetch_attempts: DEFAULT_MAX_FETCH_ATTEMPTS,
            retry_backoff_seconds: DEFAULT_RETRY_BACKOFF_SECS,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECS,
            token_expiry_buffer_seconds: DEFAULT_EXPIRY_BUFFER_SECS,
        }
    }
}
