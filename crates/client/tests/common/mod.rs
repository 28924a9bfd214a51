//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the UltraDNS client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the
//!   crate root
//! - Generated pages are internally consistent: `returnedCount` matches the
//!   number of records and records are distinguishable across pages

use std::time::Duration;

// Re-export test utilities from udns-client
#[allow(unused_imports)]
pub use udns_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use udns_client::{AuthStrategy, RRSetKey, UltraClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// The record-set key used across integration tests.
#[allow(dead_code)]
pub fn test_key() -> RRSetKey {
    RRSetKey {
        zone: "example.com.".to_string(),
        rr_type: "A".to_string(),
        name: "pool.example.com.".to_string(),
    }
}

/// Path of the probe alerts endpoint for [`test_key`].
#[allow(dead_code)]
pub const TEST_ALERTS_PATH: &str = "/zones/example.com./rrsets/A/pool.example.com./alerts";

/// Build a client against a mock server using a static bearer token.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> UltraClient {
    use secrecy::SecretString;

    UltraClient::builder()
        .base_url(base_url.to_string())
        .auth_strategy(AuthStrategy::AccessToken {
            token: SecretString::new("test-token".to_string().into()),
        })
        .build()
        .expect("test client should build")
}

/// Generate one page of the alerts envelope with `returned` records starting
/// at `offset`, out of `total`. Records are numbered by their absolute index
/// so ordering across pages can be asserted.
#[allow(dead_code)]
pub fn alerts_page(offset: usize, returned: usize, total: usize) -> serde_json::Value {
    let alerts: Vec<serde_json::Value> = (offset..offset + returned)
        .map(|i| {
            serde_json::json!({
                "poolRecord": format!("10.0.0.{}", i),
                "probeType": "HTTP",
                "probeStatus": "Failed",
                "alertDate": format!("2016-01-13T14:{:02}:{:02}Z", i / 60, i % 60),
                "failoverOccured": i % 2 == 0,
                "ownerName": "teamrest",
                "status": "ACTIVE"
            })
        })
        .collect();

    serde_json::json!({
        "alerts": alerts,
        "queryInfo": {"q": "", "sort": "", "reverse": false, "limit": 100},
        "resultInfo": {"totalCount": total, "offset": offset, "returnedCount": returned}
    })
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
