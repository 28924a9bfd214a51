//! Probe alert methods for [`UltraClient`].
//!
//! # What this module handles:
//! - Fetching one page of probe alerts for a record set
//! - Collecting the complete alert set across pages, with a bounded retry
//!   budget for transient server failures
//!
//! # What this module does NOT handle:
//! - The page-fetch HTTP call itself (in [`crate::endpoints::alerts`])
//!
//! # Invariants
//! - The fetch loop is strictly sequential; pages are appended in page
//!   order, each page's records in server order
//! - The retry budget spans the whole multi-page fetch and is never reset,
//!   not on success and not when pagination advances

use thiserror::Error;
use tracing::debug;

use crate::client::UltraClient;
use crate::endpoints;
use crate::error::{ClientError, FailureClass, Result};
use crate::models::{ProbeAlertData, RRSetKey, ResultInfo};

/// Error returned by [`UltraClient::probe_alerts`], carrying the alerts
/// accumulated from pages that completed before the failure.
///
/// The partial results are best-effort: only a success return from
/// `probe_alerts` guarantees the set is complete.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct PartialFetchError {
    /// Alerts accumulated before the failure, possibly empty.
    pub partial: Vec<ProbeAlertData>,
    /// The underlying client error.
    #[source]
    pub source: ClientError,
}

impl UltraClient {
    /// Fetch every probe alert for the given record set key.
    ///
    /// Pages through the list endpoint starting at offset 0, appending each
    /// page's records in order, until the provider reports no more records
    /// remain. Transient server failures (HTTP 5xx) are retried at the same
    /// offset after a fixed backoff, up to the client's whole-fetch attempt
    /// budget; any other failure ends the fetch immediately.
    ///
    /// # Errors
    ///
    /// Returns [`PartialFetchError`] carrying whatever was accumulated
    /// together with the underlying error.
    pub async fn probe_alerts(
        &mut self,
        key: &RRSetKey,
    ) -> std::result::Result<Vec<ProbeAlertData>, PartialFetchError> {
        let mut alerts: Vec<ProbeAlertData> = Vec::new();
        let mut offset = 0;
        let mut errcnt = 0;

        loop {
            match self.probe_alerts_page(key, offset).await {
                Err(err) => {
                    if err.failure_class() == FailureClass::Transient {
                        errcnt += 1;
                        if errcnt < self.max_fetch_attempts {
                            debug!(
                                attempt = errcnt,
                                budget = self.max_fetch_attempts,
                                offset,
                                "Transient server error, backing off before retry"
                            );
                            tokio::time::sleep(self.retry_backoff).await;
                            continue;
                        }
                    }
                    return Err(PartialFetchError {
                        partial: alerts,
                        source: err,
                    });
                }
                Ok((page, ri)) => {
                    debug!(
                        offset = ri.offset,
                        returned = ri.returned_count,
                        total = ri.total_count,
                        "Fetched probe alerts page"
                    );
                    alerts.extend(page);
                    if !ri.has_more() {
                        return Ok(alerts);
                    }
                    offset = ri.next_offset();
                }
            }
        }
    }

    /// Fetch one page of probe alerts for the given key at the given offset.
    ///
    /// Performs exactly one request (plus at most one re-authorization on a
    /// 401 for password-grant auth). No retry of transient failures happens
    /// at this layer; that is [`probe_alerts`](Self::probe_alerts)'s
    /// responsibility.
    pub async fn probe_alerts_page(
        &mut self,
        key: &RRSetKey,
        offset: usize,
    ) -> Result<(Vec<ProbeAlertData>, ResultInfo)> {
        crate::retry_call!(
            self,
            __token,
            endpoints::probe_alerts_page(&self.http, &self.base_url, &__token, key, offset).await
        )
    }
}
