// crates/rapsa-core/tests/adversarial_inputs.rs
// ============================================================================
// Module: Adversarial Input Tests
// Description: Perturbation and hostile-input tests for identifier types.
// Purpose: Ensure checksums catch corruption and malformed input fails fast.
// Dependencies: rapsa-core
// ============================================================================

//! ## Overview
//! Exhaustively perturbs single digits of known-valid identifiers and
//! asserts no perturbation survives validation; the mod-97 and Luhn
//! families both detect every single-digit substitution. Also exercises
//! hostile compact inputs.

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

use rapsa_core::base62;
use rapsa_core::identity::CardNumber;
use rapsa_core::identity::Sheba;
use rapsa_core::identity::WalletAddress;

/// Replaces the byte at `position` with the digit character `digit`.
fn with_digit(original: &str, position: usize, digit: u8) -> String {
    let mut bytes = original.as_bytes().to_vec();
    bytes[position] = b'0' + digit;
    String::from_utf8(bytes).unwrap_or_default()
}

/// Verifies every single-digit perturbation of a valid Sheba body fails.
#[test]
fn sheba_single_digit_perturbations_all_fail() {
    let valid = "IR870570028180010653892101";
    for position in 2..valid.len() {
        let original = valid.as_bytes()[position] - b'0';
        for digit in 0..=9_u8 {
            if digit == original {
                continue;
            }
            let perturbed = with_digit(valid, position, digit);
            assert!(
                Sheba::from_decimal(&perturbed).is_err(),
                "perturbation {perturbed} passed validation"
            );
        }
    }
}

/// Verifies every single-digit substitution of a valid card fails.
#[test]
fn card_single_digit_perturbations_all_fail() {
    let valid = "6274129005473742";
    for position in 0..valid.len() {
        let original = valid.as_bytes()[position] - b'0';
        for digit in 0..=9_u8 {
            if digit == original {
                continue;
            }
            let perturbed = with_digit(valid, position, digit);
            assert!(
                CardNumber::from_decimal(&perturbed).is_err(),
                "perturbation {perturbed} passed validation"
            );
        }
    }
}

/// Verifies every single-digit substitution of a valid wallet fails.
#[test]
fn wallet_single_digit_perturbations_all_fail() {
    let valid = "12345678901237";
    for position in 0..valid.len() {
        let original = valid.as_bytes()[position] - b'0';
        for digit in 0..=9_u8 {
            if digit == original {
                continue;
            }
            let perturbed = with_digit(valid, position, digit);
            assert!(
                WalletAddress::from_decimal(&perturbed).is_err(),
                "perturbation {perturbed} passed validation"
            );
        }
    }
}

/// Verifies empty input never constructs an identifier.
#[test]
fn empty_input_is_rejected_everywhere() {
    assert!(CardNumber::from_decimal("").is_err());
    assert!(CardNumber::from_compact("").is_err());
    assert!(Sheba::from_decimal("").is_err());
    assert!(Sheba::from_compact("").is_err());
    assert!(WalletAddress::from_decimal("").is_err());
    assert!(WalletAddress::from_compact("").is_err());
}

/// Verifies compact forms of out-of-width magnitudes are rejected.
#[test]
fn oversized_compact_magnitudes_are_rejected() {
    let card_overflow = base62::encode("12345678901234567").unwrap();
    assert!(CardNumber::from_compact(&card_overflow).is_err());

    let wallet_overflow = base62::encode("123456789012345").unwrap();
    assert!(WalletAddress::from_compact(&wallet_overflow).is_err());
}

/// Verifies hostile compact text surfaces codec errors, never panics.
#[test]
fn hostile_compact_text_is_rejected() {
    for input in ["!!!", "SjbY weOE", "نامعتبر", "c=a&b", "../../etc"] {
        assert!(CardNumber::from_compact(input).is_err());
        assert!(Sheba::from_compact(input).is_err());
        assert!(WalletAddress::from_compact(input).is_err());
    }
}
