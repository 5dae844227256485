// rapsa-core/src/interfaces/mod.rs
// ============================================================================
// Module: Rapsa Interfaces
// Description: Backend-agnostic interfaces for issuer directory lookups.
// Purpose: Define the contract surfaces used by identifier resolution.
// Dependencies: crate::identity
// ============================================================================

//! ## Overview
//! Interfaces define how the core resolves issuer information without
//! embedding a data source. Directory implementations are read-only, hold no
//! mutable state, and must be safe for unsynchronized concurrent reads; the
//! core never mutates a directory. Lookups are total: a miss is an ordinary
//! `None`, which callers convert to the unknown sentinel descriptor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::identity::bank::BankDescriptor;

// ============================================================================
// SECTION: Bank Directory
// ============================================================================

/// Read-only issuer directory injected into identifier lookups.
pub trait BankDirectory {
    /// Resolves a bank by membership of a six-digit card BIN.
    fn by_bin(&self, bin: &str) -> Option<BankDescriptor>;

    /// Resolves a bank by its exact numeric code.
    fn by_code(&self, code: u32) -> Option<BankDescriptor>;
}
