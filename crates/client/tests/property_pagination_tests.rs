//! Property-based tests for pagination logic and related invariants.
//!
//! This module uses proptest to verify:
//! - `ResultInfo::has_more` / `next_offset` are correct for all inputs
//! - A simulated page walk driven only by `ResultInfo` covers every record
//!   exactly once, with strictly increasing offsets
//! - `ResultInfo` deserializes correctly with various field combinations
//! - `ProbeAlertData` timestamp equality is instant-based, not offset-based
//!
//! # Test Coverage
//! - has_more: returned_count + offset < total_count
//! - next_offset: returned_count + offset
//! - Page walk termination and completeness
//! - JSON deserialization with missing envelope fields
//! - Timestamp equality across UTC offsets

use proptest::prelude::*;
use udns_client::models::{ProbeAlertData, ResultInfo};

/// Simulates a full page walk against a result set of `total` records
/// served in pages of at most `page_size`.
///
/// Returns the list of offsets the walk requested and the count of records
/// it accumulated. The walk uses only the per-page `ResultInfo`, exactly as
/// the client does.
fn walk_pages(total: usize, page_size: usize) -> (Vec<usize>, usize) {
    let mut offsets = Vec::new();
    let mut fetched = 0;
    let mut offset = 0;

    loop {
        offsets.push(offset);
        let remaining = total - offset;
        let returned = remaining.min(page_size);
        fetched += returned;

        let ri = ResultInfo {
            total_count: total,
            offset,
            returned_count: returned,
        };

        if !ri.has_more() {
            return (offsets, fetched);
        }
        offset = ri.next_offset();
    }
}

proptest! {
    /// Test that has_more is correct for all envelope states.
    ///
    /// # Invariants Tested
    /// - has_more iff returned_count + offset < total_count
    /// - next_offset is returned_count + offset
    /// - When has_more is false, next_offset >= total_count
    #[test]
    fn test_has_more_calculation_correctness(
        (offset, returned, total) in (0usize..10_000, 0usize..1_000, 0usize..10_000)
    ) {
        let ri = ResultInfo {
            total_count: total,
            offset,
            returned_count: returned,
        };

        prop_assert_eq!(ri.has_more(), offset + returned < total);
        prop_assert_eq!(ri.next_offset(), offset + returned);

        if !ri.has_more() {
            prop_assert!(ri.next_offset() >= total);
        }
    }

    /// Test that a page walk covers every record exactly once.
    ///
    /// # Invariants Tested
    /// - The accumulated record count equals total_count
    /// - Offsets are strictly increasing (the walk always makes progress)
    /// - The first offset is 0
    /// - The walk requests exactly ceil(total / page_size) pages (min 1)
    #[test]
    fn test_page_walk_completeness(
        (total, page_size) in (0usize..5_000, 1usize..500)
    ) {
        let (offsets, fetched) = walk_pages(total, page_size);

        prop_assert_eq!(fetched, total);
        prop_assert_eq!(offsets[0], 0);

        for pair in offsets.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        let expected_pages = if total == 0 {
            1
        } else {
            total.div_ceil(page_size)
        };
        prop_assert_eq!(offsets.len(), expected_pages);
    }

    /// Test ResultInfo deserialization with arbitrary numeric fields.
    #[test]
    fn test_result_info_deserialization(
        (offset, returned, total) in (0usize..100_000, 0usize..100_000, 0usize..100_000)
    ) {
        let json = serde_json::json!({
            "totalCount": total,
            "offset": offset,
            "returnedCount": returned
        });

        let ri: ResultInfo = serde_json::from_value(json).expect("Should deserialize");

        prop_assert_eq!(ri.total_count, total);
        prop_assert_eq!(ri.offset, offset);
        prop_assert_eq!(ri.returned_count, returned);
    }

    /// Test that missing envelope fields default to zero, and that a
    /// defaulted envelope reports no further pages.
    #[test]
    fn test_result_info_missing_fields_default(
        total in prop::option::of(0usize..10_000)
    ) {
        let json = match total {
            Some(t) => serde_json::json!({"totalCount": t}),
            None => serde_json::json!({}),
        };

        let ri: ResultInfo = serde_json::from_value(json).expect("Should deserialize");

        prop_assert_eq!(ri.offset, 0);
        prop_assert_eq!(ri.returned_count, 0);
        prop_assert_eq!(ri.has_more(), ri.total_count > 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Test that ProbeAlertData equality compares timestamps as instants.
    ///
    /// The same instant rendered at two different UTC offsets must compare
    /// equal; shifting the instant by any nonzero amount must not.
    #[test]
    fn test_probe_alert_timestamp_equality_is_instant_based(
        (hour, minute, shift_secs) in (0u32..24, 0u32..60, 1i64..3600)
    ) {
        let utc = format!("2024-06-15T{hour:02}:{minute:02}:00Z");
        // Same instant, rendered five hours behind UTC
        let est_hour = (hour + 19) % 24;
        let day = if hour < 5 { 14 } else { 15 };
        let est = format!("2024-06-{day:02}T{est_hour:02}:{minute:02}:00-05:00");

        let base: ProbeAlertData = serde_json::from_value(serde_json::json!({
            "poolRecord": "10.2.1.1",
            "probeType": "HTTP",
            "probeStatus": "Failed",
            "alertDate": utc,
            "failoverOccured": true,
            "ownerName": "pool.example.com.",
            "status": "Active"
        })).expect("Should deserialize");

        let mut shifted = base.clone();
        shifted.alert_date = base.alert_date - chrono::Duration::seconds(shift_secs);

        let mut rebased = base.clone();
        rebased.alert_date = est.parse().expect("valid RFC 3339 timestamp");

        prop_assert_eq!(&base, &rebased);
        prop_assert_ne!(&base, &shifted);
    }
}

/// Tests for edge cases that might not be covered by property-based tests.
#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_has_more_at_exact_boundary() {
        // At exact boundary: offset + returned_count == total_count
        let ri = ResultInfo {
            total_count: 10,
            offset: 5,
            returned_count: 5,
        };
        assert!(!ri.has_more());
    }

    #[test]
    fn test_walk_single_short_page() {
        let (offsets, fetched) = walk_pages(7, 100);
        assert_eq!(offsets, vec![0]);
        assert_eq!(fetched, 7);
    }

    #[test]
    fn test_walk_empty_result_set() {
        // An empty result set still requires exactly one request
        let (offsets, fetched) = walk_pages(0, 100);
        assert_eq!(offsets, vec![0]);
        assert_eq!(fetched, 0);
    }

    #[test]
    fn test_walk_exact_multiple_of_page_size() {
        let (offsets, fetched) = walk_pages(40, 20);
        assert_eq!(offsets, vec![0, 20]);
        assert_eq!(fetched, 40);
    }

    #[test]
    fn test_walk_ragged_final_page() {
        let (offsets, fetched) = walk_pages(45, 20);
        assert_eq!(offsets, vec![0, 20, 40]);
        assert_eq!(fetched, 45);
    }
}
