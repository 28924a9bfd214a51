//! Probe alert endpoints for the UltraDNS alerts API.
//!
//! # What this module handles:
//! - Fetching one page of probe alerts for a record set
//!
//! # What this module does NOT handle:
//! - Pagination across pages and retry of transient failures
//!   (see [`crate::client::alerts`])
//! - Result parsing beyond JSON deserialization

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{ProbeAlertData, ProbeAlertsPage, RRSetKey, ResultInfo};

/// Fetch one page of probe alerts for a record set.
///
/// Performs exactly one GET against the page at the given offset. The
/// request URI is built from the key; an offset of zero is omitted.
/// Returns the page's records in server order together with its
/// result-info block. Never retries.
pub async fn probe_alerts_page(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    key: &RRSetKey,
    offset: usize,
) -> Result<(Vec<ProbeAlertData>, ResultInfo)> {
    debug!(offset, "Fetching probe alerts page for {}", key.uri());

    let url = format!("{}/{}", base_url, key.alerts_query_uri(offset));

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));

    let response = send_request(builder).await?;

    let page: ProbeAlertsPage = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse probe alerts response: {}", e))
    })?;

    Ok((page.alerts, page.result_info))
}
