//! Data models for the UltraDNS REST API.

mod alerts;
mod common;
mod rrset;

pub use alerts::{ProbeAlertData, ProbeAlertsPage};
pub use common::{ErrorInfo, QueryInfo, ResultInfo};
pub use rrset::RRSetKey;
