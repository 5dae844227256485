// rapsa-core/src/request/mod.rs
// ============================================================================
// Module: Request Types
// Description: Path tokens, parameter keys, schema table, and request errors.
// Purpose: Define the typed vocabulary of the request builder and parser.
// Dependencies: crate::{base62, identity}, serde, thiserror
// ============================================================================

//! ## Overview
//! A request addresses one of four intents (pay, transfer, bill, donate),
//! each mapped to a single-character wire token. A fixed schema restricts
//! which parameter keys are legal on each path; every builder mutation is
//! checked against it before anything is staged. Parsing is deliberately
//! permissive and installs whatever keys the URI carried — accessors
//! re-validate lazily (see [`builder::Rapsa`]).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod builder;
pub mod parser;
mod query;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::base62::Base62Error;
use crate::identity::IdentifierError;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::Rapsa;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// URI scheme under which requests serialize.
pub const SCHEME: &str = "rapsa";

// ============================================================================
// SECTION: Request Paths
// ============================================================================

/// Request intents addressable by a path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPath {
    /// Payment request.
    Pay,
    /// Transfer request.
    Transfer,
    /// Bill payment request.
    Bill,
    /// Donation request.
    Donate,
}

impl RequestPath {
    /// All defined request paths.
    pub const ALL: [Self; 4] = [Self::Pay, Self::Transfer, Self::Bill, Self::Donate];

    /// Returns the single-character wire token for this path.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pay => "p",
            Self::Transfer => "t",
            Self::Bill => "b",
            Self::Donate => "d",
        }
    }

    /// Resolves a wire token into a path.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidPath`] for an unknown token.
    pub fn from_token(token: &str) -> Result<Self, RequestError> {
        match token {
            "p" => Ok(Self::Pay),
            "t" => Ok(Self::Transfer),
            "b" => Ok(Self::Bill),
            "d" => Ok(Self::Donate),
            _ => Err(RequestError::InvalidPath(token.to_string())),
        }
    }

    /// Returns the parameter keys legal on this path.
    #[must_use]
    pub const fn allowed_keys(self) -> &'static [ParamKey] {
        match self {
            Self::Pay => &[
                ParamKey::Amount,
                ParamKey::InvoiceId,
                ParamKey::TransactionRef,
                ParamKey::Cards,
                ParamKey::Accounts,
                ParamKey::Wallets,
                ParamKey::Unit,
            ],
            Self::Transfer => &[
                ParamKey::Amount,
                ParamKey::Cards,
                ParamKey::Accounts,
                ParamKey::Wallets,
            ],
            Self::Bill => &[ParamKey::BillId, ParamKey::PaymentId],
            Self::Donate => &[],
        }
    }

    /// Indicates whether a key is legal on this path.
    #[must_use]
    pub fn allows(self, key: ParamKey) -> bool {
        self.allowed_keys().contains(&key)
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pay => "pay",
            Self::Transfer => "transfer",
            Self::Bill => "bill",
            Self::Donate => "donate",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Parameter Keys
// ============================================================================

/// Parameter keys understood by the request schema.
///
/// `TransactionRef` and `BillId` share the wire token `b`; the schema keeps
/// tokens disjoint within any single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
    /// Payment amount in minor currency units.
    Amount,
    /// Invoice identifier.
    InvoiceId,
    /// Upstream transaction reference.
    TransactionRef,
    /// Destination card list.
    Cards,
    /// Destination account (Sheba) list.
    Accounts,
    /// Destination wallet list.
    Wallets,
    /// Currency unit selector.
    Unit,
    /// Bill identifier.
    BillId,
    /// Payment identifier within a bill.
    PaymentId,
}

impl ParamKey {
    /// Returns the wire token under which this key is stored.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Amount => "a",
            Self::InvoiceId => "i",
            Self::TransactionRef | Self::BillId => "b",
            Self::Cards => "c",
            Self::Accounts => "s",
            Self::Wallets => "w",
            Self::Unit => "u",
            Self::PaymentId => "p",
        }
    }

    /// Indicates whether this key stores a list of values.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Cards | Self::Accounts | Self::Wallets)
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Amount => "amount",
            Self::InvoiceId => "invoice id",
            Self::TransactionRef => "transaction ref",
            Self::Cards => "cards",
            Self::Accounts => "accounts",
            Self::Wallets => "wallets",
            Self::Unit => "unit",
            Self::BillId => "bill id",
            Self::PaymentId => "payment id",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Parameter Values
// ============================================================================

/// Scalar-or-list parameter value in encoded wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Single encoded value.
    Scalar(String),
    /// Ordered list of encoded values.
    List(Vec<String>),
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Request construction, serialization, and parsing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No path has been selected yet.
    #[error("no request path selected")]
    MissingPath,
    /// Unknown path token encountered while parsing.
    #[error("unknown request path token: {0:?}")]
    InvalidPath(String),
    /// Parameter key is not permitted on the current path.
    #[error("parameter {key} is not allowed on the {path} path")]
    InvalidParameter {
        /// Offending parameter key.
        key: ParamKey,
        /// Path the request is currently scoped to.
        path: RequestPath,
    },
    /// Unit value is outside the closed interval [1, 5].
    #[error("unit {unit} is out of range 1..=5")]
    UnitOutOfRange {
        /// Rejected unit value.
        unit: u8,
    },
    /// Wallet category is not permitted on the current path.
    #[error("wallet category {category} is not allowed on the {path} path")]
    WalletCategoryNotAllowed {
        /// Category digit of the rejected wallet.
        category: u8,
        /// Path the request is currently scoped to.
        path: RequestPath,
    },
    /// URI text does not match the request grammar.
    #[error("malformed request uri: {0}")]
    MalformedUri(String),
    /// Embedded numeric value is not valid decimal or base-62 text.
    #[error(transparent)]
    Codec(#[from] Base62Error),
    /// Embedded identifier failed validation.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}
