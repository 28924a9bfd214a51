//! Probe alert models for the UltraDNS alerts API.
//!
//! # What this module handles:
//! - Deserialization of probe alert records and the page envelope returned
//!   by `zones/{zone}/rrsets/{type}/{name}/alerts`
//! - Semantic equality of alert records (timestamps compare as instants)
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::endpoints::alerts`])
//! - Pagination across pages (see [`crate::client::alerts`])

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::common::{QueryInfo, ResultInfo};

/// One probe alert record.
///
/// Emitted by UltraDNS when a health probe against a pool member changes
/// status, optionally triggering failover. Immutable once decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeAlertData {
    /// Pool record the probe fired against.
    pub pool_record: String,
    /// Probe type (e.g., HTTP, PING, DNS).
    pub probe_type: String,
    /// Status reported by the probe.
    pub probe_status: String,
    /// When the alert fired. Carries the zone offset from the wire;
    /// comparisons are by instant, not by offset.
    pub alert_date: DateTime<FixedOffset>,
    /// Whether failover occurred. The wire name keeps the API's spelling.
    pub failover_occured: bool,
    /// Account that owns the record set.
    pub owner_name: String,
    /// Alert status.
    pub status: String,
}

/// Field-wise equality, with `alert_date` compared as an instant.
///
/// Two records whose timestamps denote the same instant in different zone
/// offsets are equal; any other field difference makes them unequal.
impl PartialEq for ProbeAlertData {
    fn eq(&self, other: &Self) -> bool {
        self.pool_record == other.pool_record
            && self.probe_type == other.probe_type
            && self.probe_status == other.probe_status
            && self.alert_date == other.alert_date
            && self.failover_occured == other.failover_occured
            && self.owner_name == other.owner_name
            && self.status == other.status
    }
}

impl Eq for ProbeAlertData {}

/// Page envelope for the probe alerts list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeAlertsPage {
    /// The records in this page, in server order.
    #[serde(default)]
    pub alerts: Vec<ProbeAlertData>,
    /// Query metadata echoed back by the server.
    #[serde(default)]
    pub query_info: QueryInfo,
    /// Pagination cursor state for this page.
    #[serde(default)]
    pub result_info: ResultInfo,
}
