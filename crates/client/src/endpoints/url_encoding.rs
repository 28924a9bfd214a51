//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments so special characters in
//! zone names, record types, and owner names cannot break URL resolution.
//!
//! Without percent-encoding, special characters in resource names could:
//! - Cause path traversal (e.g., `pool/primary` would create a nested path)
//! - Break URL parsing (e.g., `pool?name` would create a query parameter)
//! - Cause double-decode issues (e.g., `pool%20name` might be decoded
//!   prematurely)

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that have special meaning
/// in REST API paths or are otherwise problematic: whitespace and quotes,
/// path and query delimiters, and the percent sign itself to prevent
/// double-encoding.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// Use this for any caller-provided value interpolated into a URL path:
/// zone names, record types, and record-set owner names.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
