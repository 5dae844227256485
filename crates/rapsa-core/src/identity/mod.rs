// rapsa-core/src/identity/mod.rs
// ============================================================================
// Module: Identifier Value Types
// Description: Validated financial identifiers with decimal and compact forms.
// Purpose: Provide fail-fast identifier construction and kind dispatch.
// Dependencies: crate::base62, serde, thiserror
// ============================================================================

//! ## Overview
//! Each identifier value type wraps a canonical decimal form and a compact
//! base-62 form, always kept consistent, and validates a kind-specific
//! checksum at construction. Construction fails instead of producing a
//! partially valid object; every value that exists has passed its checksum.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod bank;
pub mod card;
pub mod sheba;
pub mod wallet;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::base62::Base62Error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bank::BankDescriptor;
pub use card::CardNumber;
pub use sheba::Sheba;
pub use wallet::WalletAddress;
pub use wallet::WalletCategory;

// ============================================================================
// SECTION: Identifier Kinds
// ============================================================================

/// Identifier kinds understood by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Sixteen-digit payment-card number.
    Card,
    /// `IR`-prefixed 24-digit bank-account (Sheba) number.
    Account,
    /// Fourteen-digit wallet address.
    Wallet,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Card => "card number",
            Self::Account => "sheba number",
            Self::Wallet => "wallet address",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier construction and validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Input does not match the kind's expected character or length pattern.
    #[error("{kind} has invalid format: {reason}")]
    InvalidFormat {
        /// Identifier kind under construction.
        kind: IdentifierKind,
        /// Description of the format violation.
        reason: String,
    },
    /// Format is correct but the checksum algorithm rejects the value.
    #[error("{kind} failed checksum validation")]
    InvalidChecksum {
        /// Identifier kind under construction.
        kind: IdentifierKind,
    },
    /// Compact input is not valid base-62 text.
    #[error("{kind} compact form is invalid: {source}")]
    Codec {
        /// Identifier kind under construction.
        kind: IdentifierKind,
        /// Underlying codec error.
        source: Base62Error,
    },
}

impl IdentifierError {
    /// Creates an invalid-format error for the given kind.
    pub(crate) fn invalid_format(kind: IdentifierKind, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// SECTION: Tagged Identifier
// ============================================================================

/// Tagged identifier value holding any of the three identifier kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identifier {
    /// Payment-card number.
    Card(CardNumber),
    /// Sheba account number.
    Account(Sheba),
    /// Wallet address.
    Wallet(WalletAddress),
}

impl Identifier {
    /// Returns the kind tag of this identifier.
    #[must_use]
    pub const fn kind(&self) -> IdentifierKind {
        match self {
            Self::Card(_) => IdentifierKind::Card,
            Self::Account(_) => IdentifierKind::Account,
            Self::Wallet(_) => IdentifierKind::Wallet,
        }
    }

    /// Returns the compact base-62 form.
    #[must_use]
    pub fn encoded(&self) -> &str {
        match self {
            Self::Card(card) => card.encoded(),
            Self::Account(sheba) => sheba.encoded(),
            Self::Wallet(wallet) => wallet.encoded(),
        }
    }

    /// Returns the canonical decimal form.
    #[must_use]
    pub fn decoded(&self) -> &str {
        match self {
            Self::Card(card) => card.decoded(),
            Self::Account(sheba) => sheba.decoded(),
            Self::Wallet(wallet) => wallet.decoded(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.decoded())
    }
}

impl From<CardNumber> for Identifier {
    fn from(card: CardNumber) -> Self {
        Self::Card(card)
    }
}

impl From<Sheba> for Identifier {
    fn from(sheba: Sheba) -> Self {
        Self::Account(sheba)
    }
}

impl From<WalletAddress> for Identifier {
    fn from(wallet: WalletAddress) -> Self {
        Self::Wallet(wallet)
    }
}
