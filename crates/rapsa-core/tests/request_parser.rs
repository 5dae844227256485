// crates/rapsa-core/tests/request_parser.rs
// ============================================================================
// Module: Request Parser Tests
// Description: Grammar inversion and permissive-parse behavior tests.
// Purpose: Ensure exact build/parse round trips and lazy validation.
// Dependencies: rapsa-core
// ============================================================================

//! ## Overview
//! Validates the parse grammar, the exact build/parse round trip, repeated
//! key grouping, and the deliberate asymmetry between build-time schema
//! enforcement and permissive parsing with accessor-time validation.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use rapsa_core::request::ParamValue;
use rapsa_core::request::Rapsa;
use rapsa_core::request::RequestError;
use rapsa_core::request::RequestPath;

/// Verifies the known URI vector reconstructs path and scalar values.
#[test]
fn known_uri_parses() {
    let request = Rapsa::parse("rapsa://p?a=1c&i=3D7").unwrap();
    assert_eq!(request.path(), Some(RequestPath::Pay));
    assert_eq!(request.amount().unwrap(), Some("100".to_string()));
    assert_eq!(request.invoice_id().unwrap(), Some("12345".to_string()));
}

/// Verifies a built request parses back to identical decoded state.
#[test]
fn build_parse_round_trip() {
    let mut request = Rapsa::pay();
    request
        .add_amount("100")
        .unwrap()
        .add_invoice_id("12345")
        .unwrap();
    let uri = request.build().unwrap();

    let parsed = Rapsa::parse(&uri).unwrap();
    assert_eq!(parsed.path(), Some(RequestPath::Pay));
    assert_eq!(parsed.amount().unwrap(), Some("100".to_string()));
    assert_eq!(parsed.invoice_id().unwrap(), Some("12345".to_string()));
    assert_eq!(parsed.build().unwrap(), uri);
}

/// Verifies repeated keys group into an ordered list.
#[test]
fn repeated_keys_group_into_lists() {
    let mut request = Rapsa::pay();
    request
        .add_card("6274129005473742")
        .unwrap()
        .add_card("6104337554103737")
        .unwrap();
    let uri = request.build().unwrap();

    let parsed = Rapsa::parse(&uri).unwrap();
    let cards = parsed.cards().unwrap().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].decoded(), "6274129005473742");
    assert_eq!(cards[1].decoded(), "6104337554103737");
    assert_eq!(parsed.build().unwrap(), uri);
}

/// Verifies a key appearing exactly once collapses to a scalar.
#[test]
fn single_list_entry_collapses_to_scalar() {
    let mut request = Rapsa::pay();
    request.add_card("6274129005473742").unwrap();
    let parsed = Rapsa::parse(&request.build().unwrap()).unwrap();
    assert_eq!(
        parsed.params(),
        &[("c".to_string(), ParamValue::Scalar("SjbYgweOE".to_string()))]
    );

    let cards = parsed.cards().unwrap().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].decoded(), "6274129005473742");
}

/// Verifies parse installs keys outside the path schema unchanged.
///
/// Parse is deliberately permissive; only `add_*` enforces the schema.
#[test]
fn parse_is_schema_agnostic() {
    let request = Rapsa::parse("rapsa://d?a=1c").unwrap();
    assert_eq!(request.path(), Some(RequestPath::Donate));
    assert_eq!(request.amount().unwrap(), Some("100".to_string()));
}

/// Verifies embedded identifier errors surface at accessor time, not parse.
#[test]
fn accessor_validation_is_lazy() {
    let request = Rapsa::parse("rapsa://p?c=zzzz").unwrap();
    assert!(request.cards().is_err());
}

/// Verifies every defined path token survives a bare round trip.
#[test]
fn all_path_tokens_round_trip() {
    for path in RequestPath::ALL {
        let uri = format!("rapsa://{}", path.token());
        let request = Rapsa::parse(&uri).unwrap();
        assert_eq!(request.path(), Some(path));
        assert_eq!(request.build().unwrap(), uri);
    }
}

/// Verifies an unknown path token is rejected.
#[test]
fn unknown_path_token_is_rejected() {
    assert_eq!(
        Rapsa::parse("rapsa://x?a=1c"),
        Err(RequestError::InvalidPath("x".to_string()))
    );
}

/// Verifies a missing separator or foreign scheme is rejected.
#[test]
fn malformed_uris_are_rejected() {
    assert!(matches!(
        Rapsa::parse("rapsa:p?a=1c"),
        Err(RequestError::MalformedUri(_))
    ));
    assert!(matches!(
        Rapsa::parse("pay://p?a=1c"),
        Err(RequestError::MalformedUri(_))
    ));
}

/// Verifies a bare path parses with an empty parameter map.
#[test]
fn bare_path_parses_empty() {
    let request = Rapsa::parse("rapsa://d").unwrap();
    assert_eq!(request.path(), Some(RequestPath::Donate));
    assert!(request.params().is_empty());
    assert_eq!(request.build().unwrap(), "rapsa://d");
}

/// Verifies a legacy trailing question mark parses as empty.
#[test]
fn trailing_question_mark_parses_empty() {
    let request = Rapsa::parse("rapsa://p?").unwrap();
    assert!(request.params().is_empty());
}

/// Verifies percent-encoded values decode and re-encode exactly.
#[test]
fn percent_encoding_round_trips() {
    let request = Rapsa::parse("rapsa://p?x=a%20b").unwrap();
    assert_eq!(
        request.params(),
        &[("x".to_string(), ParamValue::Scalar("a b".to_string()))]
    );
    assert_eq!(request.build().unwrap(), "rapsa://p?x=a%20b");
}
