// rapsa-core/src/identity/card.rs
// ============================================================================
// Module: Card Numbers
// Description: Sixteen-digit payment-card numbers with Luhn validation.
// Purpose: Validate card numbers and carry their compact base-62 form.
// Dependencies: crate::{base62, identity, interfaces}, serde
// ============================================================================

//! ## Overview
//! A [`CardNumber`] holds a 16-digit card number together with its compact
//! base-62 form. The mod-10 Luhn check runs once at construction; doubling
//! applies to even positions counted from the start of the number. The
//! leading six digits form the BIN used for issuer resolution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::base62;
use crate::identity::IdentifierError;
use crate::identity::IdentifierKind;
use crate::identity::bank::BankDescriptor;
use crate::interfaces::BankDirectory;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Number of digits in a canonical card number.
const CARD_LENGTH: usize = 16;

/// Number of leading digits forming the bank identification number.
const BIN_LENGTH: usize = 6;

// ============================================================================
// SECTION: Card Number
// ============================================================================

/// Validated 16-digit payment-card number with its compact base-62 form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardNumber {
    /// Canonical decimal form, exactly sixteen digits.
    decimal: String,
    /// Compact base-62 form.
    compact: String,
}

impl CardNumber {
    /// Constructs a card number from its canonical 16-digit decimal form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input does not match the card
    /// pattern or fails the Luhn check.
    pub fn from_decimal(decimal: &str) -> Result<Self, IdentifierError> {
        validate_format(decimal)?;
        if !luhn_valid(decimal) {
            return Err(IdentifierError::InvalidChecksum {
                kind: IdentifierKind::Card,
            });
        }
        let compact = base62::encode(decimal).map_err(|source| IdentifierError::Codec {
            kind: IdentifierKind::Card,
            source,
        })?;
        Ok(Self {
            decimal: decimal.to_string(),
            compact,
        })
    }

    /// Constructs a card number from its compact base-62 form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input is not base-62 text, does
    /// not decode to sixteen digits, or fails the Luhn check.
    pub fn from_compact(compact: &str) -> Result<Self, IdentifierError> {
        let decimal = base62::decode(compact).map_err(|source| IdentifierError::Codec {
            kind: IdentifierKind::Card,
            source,
        })?;
        if decimal.len() != CARD_LENGTH {
            return Err(IdentifierError::invalid_format(
                IdentifierKind::Card,
                "decoded value must have exactly 16 digits",
            ));
        }
        Self::from_decimal(&decimal)
    }

    /// Classifies input as canonical decimal or compact and constructs.
    ///
    /// Input is treated as canonical decimal exactly when it is sixteen
    /// decimal digits; anything else is decoded as compact text.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when construction fails under the
    /// selected interpretation.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        if input.len() == CARD_LENGTH && input.bytes().all(|byte| byte.is_ascii_digit()) {
            Self::from_decimal(input)
        } else {
            Self::from_compact(input)
        }
    }

    /// Returns the compact base-62 form.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.compact
    }

    /// Returns the canonical decimal form.
    #[must_use]
    pub fn decoded(&self) -> &str {
        &self.decimal
    }

    /// Re-exposes the checksum result established at construction.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        luhn_valid(&self.decimal)
    }

    /// Returns the bank identification number, the leading six digits.
    #[must_use]
    pub fn bin(&self) -> &str {
        &self.decimal[..BIN_LENGTH]
    }

    /// Resolves the issuing bank by BIN membership in the directory.
    ///
    /// An unmatched BIN yields [`BankDescriptor::unknown`].
    #[must_use]
    pub fn bank_of(&self, directory: &impl BankDirectory) -> BankDescriptor {
        directory.by_bin(self.bin()).unwrap_or_else(BankDescriptor::unknown)
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decimal)
    }
}

impl TryFrom<String> for CardNumber {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_decimal(&value)
    }
}

impl From<CardNumber> for String {
    fn from(card: CardNumber) -> Self {
        card.decimal
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Ensures the input matches the canonical card pattern.
fn validate_format(decimal: &str) -> Result<(), IdentifierError> {
    if decimal.len() != CARD_LENGTH || !decimal.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(IdentifierError::invalid_format(
            IdentifierKind::Card,
            "expected exactly 16 decimal digits",
        ));
    }
    if decimal.starts_with('0') {
        return Err(IdentifierError::invalid_format(
            IdentifierKind::Card,
            "first digit must be non-zero",
        ));
    }
    if decimal[1..11].bytes().all(|byte| byte == b'0') {
        return Err(IdentifierError::invalid_format(
            IdentifierKind::Card,
            "digits 2 through 11 must not all be zero",
        ));
    }
    if decimal[10..16].bytes().all(|byte| byte == b'0') {
        return Err(IdentifierError::invalid_format(
            IdentifierKind::Card,
            "digits 11 through 16 must not all be zero",
        ));
    }
    Ok(())
}

/// Runs the mod-10 Luhn check over the full sixteen-digit number.
///
/// Doubling applies at even indexes counted from the start of the number.
fn luhn_valid(decimal: &str) -> bool {
    let mut sum = 0_u32;
    for (index, byte) in decimal.bytes().enumerate() {
        let mut digit = u32::from(byte - b'0');
        if index % 2 == 0 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}
