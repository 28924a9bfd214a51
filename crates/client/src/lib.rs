//! UltraDNS REST API client.
//!
//! This crate provides a type-safe client for the UltraDNS REST API,
//! currently covering the probe-alerts resource on record-set pools. It
//! supports both password-grant and static bearer token authentication with
//! automatic access token renewal.

mod auth;
pub mod client;
pub mod error;
pub mod models;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, TokenManager};
pub use client::builder::UltraClientBuilder;
pub use client::{PartialFetchError, UltraClient};
pub use error::{ClientError, FailureClass, Result};
pub use models::{ProbeAlertData, QueryInfo, RRSetKey, ResultInfo};
