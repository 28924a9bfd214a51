//! Centralized constants for the UltraDNS client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default UltraDNS REST API base URL (includes the API version segment).
pub const DEFAULT_BASE_URL: &str = "https://restapi.ultradns.com/v2";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Token Defaults
// =============================================================================

/// Default access token time-to-live in seconds (1 hour).
///
/// Used when the authorization response does not carry an `expiresIn` value.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Default buffer time before token expiry to proactively re-authorize.
/// This prevents race conditions where a token expires during an API call.
pub const DEFAULT_EXPIRY_BUFFER_SECS: u64 = 60;

// =============================================================================
// Paginated Fetch Defaults
// =============================================================================

/// Default attempt budget for a whole multi-page fetch.
///
/// The budget spans the entire fetch: it is not reset when pagination
/// advances to the next page.
pub const DEFAULT_MAX_FETCH_ATTEMPTS: usize = 5;

/// Default fixed backoff between retries of a failed page fetch, in seconds.
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 5;
