// rapsa-core/src/request/query.rs
// ============================================================================
// Module: Query Encoding
// Description: Percent encoding and decoding for query values.
// Purpose: Keep the wire grammar round-trip exact for arbitrary values.
// Dependencies: percent-encoding
// ============================================================================

//! ## Overview
//! Query values are percent-encoded with the RFC 3986 unreserved set: every
//! character outside `A-Z a-z 0-9 - _ . ~` is escaped. Compact identifier
//! and numeric values are plain alphanumerics and pass through unchanged;
//! the escaping exists so that foreign values installed by the permissive
//! parser still round-trip exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;

use crate::request::RequestError;

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Characters escaped in query values: everything outside the unreserved set.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a query value.
pub(crate) fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODE_SET).to_string()
}

/// Percent-decodes a query value.
///
/// # Errors
///
/// Returns [`RequestError::MalformedUri`] when the decoded bytes are not
/// valid UTF-8.
pub(crate) fn decode_value(value: &str) -> Result<String, RequestError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RequestError::MalformedUri(format!("query value {value:?} is not valid utf-8")))
}
