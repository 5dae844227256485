// rapsa-directory/src/lib.rs
// ============================================================================
// Module: Rapsa Directory
// Description: Built-in issuer directory and table loading utilities.
// Purpose: Provide a zero-config bank directory aligned with Rapsa core.
// Dependencies: rapsa-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the static issuer table consumed through the core's
//! [`rapsa_core::interfaces::BankDirectory`] trait: a built-in table of
//! Iranian issuer records (numeric IBAN bank codes plus card BIN lists) and
//! a serde-based loader for custom JSON tables. Directories are read-only
//! once constructed and safe for unsynchronized concurrent reads.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod banks;
mod directory;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use directory::BankRecord;
pub use directory::DirectoryError;
pub use directory::StaticBankDirectory;
