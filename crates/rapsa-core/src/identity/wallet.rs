// rapsa-core/src/identity/wallet.rs
// ============================================================================
// Module: Wallet Addresses
// Description: Fourteen-digit wallet addresses with check-digit validation.
// Purpose: Validate wallet addresses and carry their compact base-62 form.
// Dependencies: crate::{base62, identity, interfaces}, serde
// ============================================================================

//! ## Overview
//! A [`WalletAddress`] holds a 14-digit address together with its compact
//! base-62 form. The leading digit is the address category (1 through 4);
//! categories 1 (non-commercial) and 2 (commercial) carry defined semantics
//! used by the request builder, while 3 and 4 are carried as opaque valid
//! categories. The trailing digit is a Luhn-style check digit computed over
//! the thirteen preceding digits from least significant to most significant.

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

/// Number of digits in a canonical wallet address.
const WALLET_LENGTH: usize = 14;

// ============================================================================
// SECTION: Wallet Category
// ============================================================================

/// Validated wallet address category, the leading digit of the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WalletCategory(u8);

impl WalletCategory {
    /// Category digit for non-commercial wallets.
    pub const NON_COMMERCIAL: Self = Self(1);

    /// Category digit for commercial wallets.
    pub const COMMERCIAL: Self = Self(2);

    /// Creates a category from its digit.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the digit is outside 1 through 4.
    pub fn new(digit: u8) -> Result<Self, IdentifierError> {
        if (1..=4).contains(&digit) {
            Ok(Self(digit))
        } else {
            Err(IdentifierError::invalid_format(
                IdentifierKind::Wallet,
                "category digit must be between 1 and 4",
            ))
        }
    }

    /// Returns the raw category digit.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }

    /// Indicates a non-commercial wallet.
    #[must_use]
    pub const fn is_non_commercial(self) -> bool {
        self.0 == 1
    }

    /// Indicates a commercial wallet.
    #[must_use]
    pub const fn is_commercial(self) -> bool {
        self.0 == 2
    }
}

impl fmt::Display for WalletCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u8> for WalletCategory {
    type Error = IdentifierError;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        Self::new(digit)
    }
}

impl From<WalletCategory> for u8 {
    fn from(category: WalletCategory) -> Self {
        category.digit()
    }
}

// ============================================================================
// SECTION: Wallet Address
// ============================================================================

/// Validated 14-digit wallet address with its compact base-62 form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress {
    /// Canonical decimal form, exactly fourteen digits.
    decimal: String,
    /// Compact base-62 form.
    compact: String,
    /// Category encoded by the leading digit.
    category: WalletCategory,
}

impl WalletAddress {
    /// Constructs a wallet address from its canonical 14-digit decimal form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input does not match the wallet
    /// pattern or the check digit does not match.
    pub fn from_decimal(decimal: &str) -> Result<Self, IdentifierError> {
        if decimal.len() != WALLET_LENGTH || !decimal.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(IdentifierError::invalid_format(
                IdentifierKind::Wallet,
                "expected exactly 14 decimal digits",
            ));
        }
        let category = WalletCategory::new(decimal.as_bytes()[0] - b'0')?;
        let body = &decimal[..WALLET_LENGTH - 1];
        let check = u32::from(decimal.as_bytes()[WALLET_LENGTH - 1] - b'0');
        if check_digit(body) != check {
            return Err(IdentifierError::InvalidChecksum {
                kind: IdentifierKind::Wallet,
            });
        }
        let compact = base62::encode(decimal).map_err(|source| IdentifierError::Codec {
            kind: IdentifierKind::Wallet,
            source,
        })?;
        Ok(Self {
            decimal: decimal.to_string(),
            compact,
            category,
        })
    }

    /// Constructs a wallet address from its compact base-62 form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input is not base-62 text, does
    /// not decode to fourteen digits, or fails validation.
    pub fn from_compact(compact: &str) -> Result<Self, IdentifierError> {
        let decimal = base62::decode(compact).map_err(|source| IdentifierError::Codec {
            kind: IdentifierKind::Wallet,
            source,
        })?;
        if decimal.len() != WALLET_LENGTH {
            return Err(IdentifierError::invalid_format(
                IdentifierKind::Wallet,
                "decoded value must have exactly 14 digits",
            ));
        }
        Self::from_decimal(&decimal)
    }

    /// Classifies input as canonical decimal or compact and constructs.
    ///
    /// Input is treated as canonical decimal exactly when it is fourteen
    /// decimal digits; anything else is decoded as compact text.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when construction fails under the
    /// selected interpretation.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        if input.len() == WALLET_LENGTH && input.bytes().all(|byte| byte.is_ascii_digit()) {
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
        let body = &self.decimal[..WALLET_LENGTH - 1];
        let check = u32::from(self.decimal.as_bytes()[WALLET_LENGTH - 1] - b'0');
        check_digit(body) == check
    }

    /// Returns the address category encoded by the leading digit.
    #[must_use]
    pub const fn category(&self) -> WalletCategory {
        self.category
    }

    /// Returns the two-digit bank code at address positions 1 through 2.
    #[must_use]
    pub fn bank_code(&self) -> &str {
        &self.decimal[1..3]
    }

    /// Resolves the issuing bank by exact numeric code in the directory.
    ///
    /// An unmatched code yields [`BankDescriptor::unknown`].
    #[must_use]
    pub fn bank_of(&self, directory: &impl BankDirectory) -> BankDescriptor {
        self.bank_code()
            .parse::<u32>()
            .ok()
            .and_then(|code| directory.by_code(code))
            .unwrap_or_else(BankDescriptor::unknown)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decimal)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_decimal(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(wallet: WalletAddress) -> Self {
        wallet.decimal
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Computes the expected check digit over the thirteen-digit body.
///
/// Doubling starts at the rightmost body digit and alternates moving left.
fn check_digit(body: &str) -> u32 {
    let mut sum = 0_u32;
    let mut double = true;
    for byte in body.bytes().rev() {
        let mut digit = u32::from(byte - b'0');
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }
    (10 - sum % 10) % 10
}
