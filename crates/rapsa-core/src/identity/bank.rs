// rapsa-core/src/identity/bank.rs
// ============================================================================
// Module: Bank Descriptors
// Description: Issuer descriptor record produced by bank directory lookups.
// Purpose: Give identifier types a stable result shape for issuer resolution.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`BankDescriptor`] names the issuing bank behind an identifier. The
//! directory itself is an injected capability (see [`crate::interfaces`]);
//! an unmatched lookup yields the defined unknown sentinel rather than an
//! error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Descriptor
// ============================================================================

/// Sentinel bank name for unmatched lookups.
const UNKNOWN_BANK_NAME: &str = "unknown";

/// Descriptor for an issuing bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankDescriptor {
    /// Numeric bank code.
    pub code: u32,
    /// Human-readable bank name.
    pub name: String,
}

impl BankDescriptor {
    /// Creates a new bank descriptor.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Returns the sentinel descriptor for unmatched lookups.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            code: 0,
            name: UNKNOWN_BANK_NAME.to_string(),
        }
    }

    /// Indicates whether this descriptor is the unknown sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.code == 0 && self.name == UNKNOWN_BANK_NAME
    }
}

impl fmt::Display for BankDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
