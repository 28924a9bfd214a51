//! Resource-record-set keys and their URI building.
//!
//! An [`RRSetKey`] identifies the record set a query is scoped to. It is
//! consumed by endpoint functions only to build request URIs; it owns no
//! state of its own.

use serde::{Deserialize, Serialize};

use crate::endpoints::url_encoding::encode_path_segment;

/// Key identifying a resource record set (e.g., a pool of endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRSetKey {
    /// Zone the record set lives in (e.g., `example.com.`).
    pub zone: String,
    /// Record type (e.g., `A`, `AAAA`).
    pub rr_type: String,
    /// Owner name of the record set.
    pub name: String,
}

impl RRSetKey {
    /// Relative URI of the record set itself.
    pub fn uri(&self) -> String {
        format!(
            "zones/{}/rrsets/{}/{}",
            encode_path_segment(&self.zone),
            encode_path_segment(&self.rr_type),
            encode_path_segment(&self.name)
        )
    }

    /// Relative URI of the record set's probe alerts.
    pub fn alerts_uri(&self) -> String {
        format!("{}/alerts", self.uri())
    }

    /// Relative query URI for a probe alerts page at the given offset.
    ///
    /// An offset of zero is omitted from the query string.
    pub fn alerts_query_uri(&self, offset: usize) -> String {
        let uri = self.alerts_uri();
        if offset != 0 {
            format!("{}?offset={}", uri, offset)
        } else {
            uri
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> RRSetKey {
        RRSetKey {
            zone: "example.com.".to_string(),
            rr_type: "A".to_string(),
            name: "pool.example.com.".to_string(),
        }
    }

    #[test]
    fn test_uri() {
        assert_eq!(
            sample_key().uri(),
            "zones/example.com./rrsets/A/pool.example.com."
        );
    }

    #[test]
    fn test_alerts_query_uri_omits_zero_offset() {
        assert_eq!(
            sample_key().alerts_query_uri(0),
            "zones/example.com./rrsets/A/pool.example.com./alerts"
        );
    }

    #[test]
    fn test_alerts_query_uri_with_offset() {
        assert_eq!(
            sample_key().alerts_query_uri(20),
            "zones/example.com./rrsets/A/pool.example.com./alerts?offset=20"
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let key = RRSetKey {
            zone: "exa mple.com.".to_string(),
            rr_type: "A".to_string(),
            name: "pool/primary".to_string(),
        };
        assert_eq!(
            key.uri(),
            "zones/exa%20mple.com./rrsets/A/pool%2Fprimary"
        );
    }
}
