//! Main UltraDNS REST API client and API methods.
//!
//! This module provides the primary [`UltraClient`] for interacting with the
//! UltraDNS REST API. It automatically handles authorization and access
//! token management.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `token`: Access token lifecycle helpers (private module)
//! - `alerts`: Probe alert methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Low-level access token storage (delegated to [`crate::auth::TokenManager`])
//!
//! # Invariants
//! - API methods handle a 401 by clearing the cached access token,
//!   re-authorizing, and retrying once (for password-grant authentication
//!   only; static tokens do not trigger re-authorization)
//! - The `retry_call!` macro centralizes this pattern across API methods

pub mod builder;
mod token;

// API method submodules
mod alerts;

use std::time::Duration;

use crate::auth::TokenManager;

pub use alerts::PartialFetchError;

/// Macro to wrap an async API call with automatic re-authorization on a 401.
///
/// When a 401 is received and the client is using password-grant auth (not a
/// static token), the cached access token is cleared, a new one is granted,
/// and the call is retried once.
///
/// # Usage
///
/// ```ignore
/// retry_call!(self, __token, endpoints::some_endpoint(&self.http, &self.base_url, &__token, arg).await)
/// ```
///
/// The placeholder `__token` will be replaced with the actual bearer token.
#[macro_export]
macro_rules! retry_call {
    ($self:expr, $token:ident, $call:expr) => {{
        let $token = $self.get_auth_token().await?;
        let result = $call;

        match result {
            Ok(data) => Ok(data),
            Err($crate::error::ClientError::ApiError { status: 401, .. })
                if !$self.is_static_token_auth() =>
            {
                ::tracing::debug!("Access token rejected (401), re-authorizing...");
                $self.token_manager.clear_token();
                let $token = $self.get_auth_token().await?;
                $call
            }
            Err(e) => Err(e),
        }
    }};
}

/// UltraDNS REST API client.
///
/// # Creating a Client
///
/// Use [`UltraClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use udns_client::{UltraClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = UltraClient::builder()
///     .base_url("https://restapi.ultradns.com/v2".to_string())
///     .auth_strategy(AuthStrategy::Password {
///         username: "teamrest".to_string(),
///         password: SecretString::new("my-password".to_string().into()),
///     })
///     .build()?;
/// ```
///
/// # Authentication
///
/// Two strategies are supported:
/// - `AuthStrategy::Password`: OAuth2 password grant with automatic access
///   token management
/// - `AuthStrategy::AccessToken`: a static bearer token (no management)
#[derive(Debug)]
pub struct UltraClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token_manager: TokenManager,
    pub(crate) max_fetch_attempts: usize,
    pub(crate) retry_backoff: Duration,
    pub(crate) token_ttl_seconds: u64,
    pub(crate) token_expiry_buffer_seconds: u64,
}

impl UltraClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing an [`UltraClient`].
    pub fn builder() -> builder::UltraClientBuilder {
        builder::UltraClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
