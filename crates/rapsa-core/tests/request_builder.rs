// crates/rapsa-core/tests/request_builder.rs
// ============================================================================
// Module: Request Builder Tests
// Description: Schema enforcement, mutation, and serialization tests.
// Purpose: Ensure fail-fast parameter staging and exact build output.
// Dependencies: rapsa-core
// ============================================================================

//! ## Overview
//! Validates path-scoped schema enforcement, the wallet category business
//! rules, unit range checking, atomic mutation, remove semantics, and the
//! exact URI text produced by `build`.

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

use rapsa_core::request::ParamKey;
use rapsa_core::request::ParamValue;
use rapsa_core::request::Rapsa;
use rapsa_core::request::RequestError;
use rapsa_core::request::RequestPath;

/// Verifies the sugar constructors select their paths.
#[test]
fn sugar_constructors_select_paths() {
    assert_eq!(Rapsa::pay().path(), Some(RequestPath::Pay));
    assert_eq!(Rapsa::transfer().path(), Some(RequestPath::Transfer));
    assert_eq!(Rapsa::bill().path(), Some(RequestPath::Bill));
    assert_eq!(Rapsa::donate().path(), Some(RequestPath::Donate));
    assert_eq!(Rapsa::new().path(), None);
}

/// Verifies the schema table distinguishes list keys from scalar keys.
#[test]
fn schema_classifies_list_keys() {
    assert!(ParamKey::Cards.is_list());
    assert!(ParamKey::Accounts.is_list());
    assert!(ParamKey::Wallets.is_list());
    assert!(!ParamKey::Amount.is_list());
    assert!(!ParamKey::Unit.is_list());
    assert!(RequestPath::Pay.allows(ParamKey::Unit));
    assert!(!RequestPath::Transfer.allows(ParamKey::Unit));
    assert!(RequestPath::Donate.allowed_keys().is_empty());
}

/// Verifies amounts are staged in encoded form and decode back.
#[test]
fn amount_is_encoded_and_decoded() {
    let mut request = Rapsa::pay();
    request.add_amount("100").unwrap();
    assert_eq!(
        request.params(),
        &[("a".to_string(), ParamValue::Scalar("1c".to_string()))]
    );
    assert_eq!(request.amount().unwrap(), Some("100".to_string()));
}

/// Verifies mutators chain through the returned reference.
#[test]
fn mutators_chain() {
    let mut request = Rapsa::pay();
    request
        .add_amount("100")
        .unwrap()
        .add_invoice_id("12345")
        .unwrap();
    assert_eq!(request.invoice_id().unwrap(), Some("12345".to_string()));
}

/// Verifies build produces the exact expected URI text.
#[test]
fn build_produces_expected_uri() {
    let mut request = Rapsa::pay();
    request
        .add_amount("100")
        .unwrap()
        .add_invoice_id("12345")
        .unwrap();
    assert_eq!(request.build().unwrap(), "rapsa://p?a=1c&i=3D7");
}

/// Verifies build omits the query separator with no parameters staged.
#[test]
fn build_omits_empty_query() {
    assert_eq!(Rapsa::pay().build().unwrap(), "rapsa://p");
    assert_eq!(Rapsa::donate().build().unwrap(), "rapsa://d");
}

/// Verifies build fails fast without a path.
#[test]
fn build_requires_path() {
    assert_eq!(Rapsa::new().build(), Err(RequestError::MissingPath));
}

/// Verifies mutation without a path fails fast.
#[test]
fn mutation_requires_path() {
    let mut request = Rapsa::new();
    assert_eq!(request.add_amount("100").unwrap_err(), RequestError::MissingPath);
}

/// Verifies schema enforcement names the offending key and path.
#[test]
fn schema_violation_names_key_and_path() {
    let mut request = Rapsa::bill();
    let error = request.add_amount("100").unwrap_err();
    assert_eq!(
        error,
        RequestError::InvalidParameter {
            key: ParamKey::Amount,
            path: RequestPath::Bill,
        }
    );

    let mut donate = Rapsa::donate();
    assert!(donate.add_card("6274129005473742").is_err());
}

/// Verifies the transaction reference is legal on the pay path only.
#[test]
fn transaction_ref_is_pay_only() {
    let mut request = Rapsa::pay();
    request.add_transaction_ref("67890").unwrap();
    assert_eq!(request.transaction_ref().unwrap(), Some("67890".to_string()));

    let mut transfer = Rapsa::transfer();
    assert_eq!(
        transfer.add_transaction_ref("67890").unwrap_err(),
        RequestError::InvalidParameter {
            key: ParamKey::TransactionRef,
            path: RequestPath::Transfer,
        }
    );
}

/// Verifies unit boundaries on the closed interval [1, 5].
#[test]
fn unit_range_is_enforced() {
    let mut request = Rapsa::pay();
    assert_eq!(
        request.add_unit(0).unwrap_err(),
        RequestError::UnitOutOfRange {
            unit: 0,
        }
    );
    assert_eq!(
        request.add_unit(6).unwrap_err(),
        RequestError::UnitOutOfRange {
            unit: 6,
        }
    );
    request.add_unit(1).unwrap();
    assert_eq!(request.unit().unwrap(), Some(1));
    request.add_unit(5).unwrap();
    assert_eq!(request.unit().unwrap(), Some(5));
}

/// Verifies wallet category rules on the transfer and pay paths.
#[test]
fn wallet_category_rules_are_enforced() {
    let mut transfer = Rapsa::transfer();
    assert_eq!(
        transfer.add_wallet("23456789012348").unwrap_err(),
        RequestError::WalletCategoryNotAllowed {
            category: 2,
            path: RequestPath::Transfer,
        }
    );
    transfer.add_wallet("12345678901237").unwrap();

    let mut pay = Rapsa::pay();
    assert_eq!(
        pay.add_wallet("12345678901237").unwrap_err(),
        RequestError::WalletCategoryNotAllowed {
            category: 1,
            path: RequestPath::Pay,
        }
    );
    pay.add_wallet("23456789012348").unwrap();
}

/// Verifies list parameters append in insertion order and repeat on build.
#[test]
fn lists_append_in_order() {
    let mut request = Rapsa::pay();
    request
        .add_card("6274129005473742")
        .unwrap()
        .add_card("6104337554103737")
        .unwrap();
    let built = request.build().unwrap();
    let cards = request.cards().unwrap().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].decoded(), "6274129005473742");
    assert_eq!(cards[1].decoded(), "6104337554103737");
    assert!(built.starts_with("rapsa://p?c="));
    assert_eq!(built.matches("c=").count(), 2);
}

/// Verifies list removal filters by encoded equality across input forms.
#[test]
fn list_removal_matches_encoded_value() {
    let mut request = Rapsa::pay();
    request.add_card("6274129005473742").unwrap();
    request.remove_card("SjbYgweOE").unwrap();
    assert!(request.params().is_empty());
    assert_eq!(request.cards().unwrap(), None);
}

/// Verifies account staging and removal on the pay path.
#[test]
fn accounts_stage_and_remove() {
    let mut request = Rapsa::pay();
    request.add_account("IR870570028180010653892101").unwrap();
    let accounts = request.accounts().unwrap().unwrap();
    assert_eq!(accounts[0].encoded(), "4Lpy3R90Bm8eV3");
    request.remove_account("IR870570028180010653892101").unwrap();
    assert_eq!(request.accounts().unwrap(), None);
}

/// Verifies remove-all clears a populated list.
#[test]
fn remove_all_clears_list() {
    let mut request = Rapsa::transfer();
    request
        .add_wallet("12345678901237")
        .unwrap()
        .add_wallet("15712345678901")
        .unwrap();
    request.remove_all_wallets().unwrap();
    assert!(request.params().is_empty());
}

/// Verifies scalar removal deletes the key.
#[test]
fn scalar_removal_deletes_key() {
    let mut request = Rapsa::pay();
    request.add_transaction_ref("67890").unwrap();
    request.remove_transaction_ref().unwrap();
    assert_eq!(request.transaction_ref().unwrap(), None);
    assert!(request.params().is_empty());
}

/// Verifies scalar staging overwrites on repeat.
#[test]
fn scalar_overwrites_on_repeat() {
    let mut request = Rapsa::pay();
    request.add_amount("100").unwrap();
    request.add_amount("250").unwrap();
    assert_eq!(request.amount().unwrap(), Some("250".to_string()));
    assert_eq!(request.params().len(), 1);
}

/// Verifies selecting a path clears previously staged parameters.
#[test]
fn path_switch_clears_parameters() {
    let mut request = Rapsa::pay();
    request.add_amount("100").unwrap();
    request.select_path(RequestPath::Transfer);
    assert!(request.params().is_empty());
    assert_eq!(request.path(), Some(RequestPath::Transfer));
}

/// Verifies a failed mutation leaves the request unchanged.
#[test]
fn failed_mutation_is_atomic() {
    let mut request = Rapsa::pay();
    request.add_amount("100").unwrap();
    let before = request.clone();
    assert!(request.add_card("1234567890123456").is_err());
    assert!(request.add_amount("12x").is_err());
    assert_eq!(request, before);
}

/// Verifies bill parameters stage and decode on the bill path.
#[test]
fn bill_parameters_stage() {
    let mut request = Rapsa::bill();
    request
        .add_bill_id("67890")
        .unwrap()
        .add_payment_id("555")
        .unwrap();
    assert_eq!(request.bill_id().unwrap(), Some("67890".to_string()));
    assert_eq!(request.payment_id().unwrap(), Some("555".to_string()));
    assert_eq!(request.amount().unwrap(), None);
}
