//! Common types shared across UltraDNS API models.
//!
//! This module contains the pagination envelope blocks and error-body types
//! used by every paginated list endpoint. It does NOT contain
//! resource-specific models.

use serde::{Deserialize, Serialize};

/// Query metadata echoed back by paginated list endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInfo {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub limit: usize,
}

/// Pagination cursor state for one page of a list endpoint.
///
/// Produced fresh per response and consumed immediately to compute the
/// next offset; it has no independent lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInfo {
    /// Total count of records available across all pages.
    #[serde(default)]
    pub total_count: usize,
    /// Offset this page was requested at.
    #[serde(default)]
    pub offset: usize,
    /// Count of records returned in this page.
    #[serde(default)]
    pub returned_count: usize,
}

impl ResultInfo {
    /// Whether more pages remain after this one.
    pub fn has_more(&self) -> bool {
        self.returned_count + self.offset < self.total_count
    }

    /// The offset the next page must be requested at.
    pub fn next_offset(&self) -> usize {
        self.returned_count + self.offset
    }
}

/// One entry of an UltraDNS error response body.
///
/// Error responses carry a JSON array of these:
/// `[{"errorCode": 70002, "errorMessage": "Data not found."}]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub error_code: i32,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_info_has_more() {
        let ri = ResultInfo {
            total_count: 45,
            offset: 0,
            returned_count: 20,
        };
        assert!(ri.has_more());
        assert_eq!(ri.next_offset(), 20);

        let ri = ResultInfo {
            total_count: 45,
            offset: 40,
            returned_count: 5,
        };
        assert!(!ri.has_more());
    }

    #[test]
    fn test_result_info_empty_result_set() {
        let ri = ResultInfo {
            total_count: 0,
            offset: 0,
            returned_count: 0,
        };
        assert!(!ri.has_more());
    }

    #[test]
    fn test_result_info_deserializes_camel_case() {
        let json = r#"{"totalCount": 45, "offset": 20, "returnedCount": 20}"#;
        let ri: ResultInfo = serde_json::from_str(json).unwrap();
        assert_eq!(ri.total_count, 45);
        assert_eq!(ri.offset, 20);
        assert_eq!(ri.returned_count, 20);
        assert_eq!(ri.next_offset(), 40);
    }

    #[test]
    fn test_error_info_deserializes() {
        let json = r#"[{"errorCode": 70002, "errorMessage": "Data not found."}]"#;
        let errors: Vec<ErrorInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code, 70002);
        assert_eq!(errors[0].error_message, "Data not found.");
    }
}
