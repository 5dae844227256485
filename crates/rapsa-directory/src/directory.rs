// rapsa-directory/src/directory.rs
// ============================================================================
// Module: Static Bank Directory
// Description: Read-only issuer directory backed by a record table.
// Purpose: Implement the core BankDirectory trait over static data.
// Dependencies: crate::banks, rapsa-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`StaticBankDirectory`] resolves card BINs by list membership and bank
//! codes by exact numeric equality over an immutable record table. The
//! built-in table covers known Iranian issuers; custom tables load from
//! JSON and are validated once at load time. Lookups never fail — a miss
//! is a `None`, which the core converts to the unknown sentinel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use rapsa_core::identity::BankDescriptor;
use rapsa_core::interfaces::BankDirectory;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::banks::BUILTIN_BANKS;

// ============================================================================
// SECTION: Records
// ============================================================================

/// Record describing one issuing bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    /// Numeric bank code, the IBAN bank identifier without leading zeros.
    pub code: u32,
    /// Bank name.
    pub name: String,
    /// Six-digit card BIN prefixes issued by the bank.
    #[serde(default)]
    pub bins: Vec<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Directory table errors raised while loading records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Table text is not valid JSON for a record list.
    #[error("directory table is not valid json: {0}")]
    Json(String),
    /// Two records share the same bank code.
    #[error("duplicate bank code: {0}")]
    DuplicateCode(u32),
    /// A BIN entry is not exactly six decimal digits.
    #[error("invalid bin {bin:?} for bank code {code}")]
    InvalidBin {
        /// Bank code owning the rejected BIN.
        code: u32,
        /// Rejected BIN text.
        bin: String,
    },
}

// ============================================================================
// SECTION: Directory
// ============================================================================

/// Read-only bank directory backed by a static record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBankDirectory {
    /// Immutable record table in load order.
    records: Vec<BankRecord>,
}

impl StaticBankDirectory {
    /// Returns the directory backed by the built-in issuer table.
    #[must_use]
    pub fn builtin() -> Self {
        let records = BUILTIN_BANKS
            .iter()
            .map(|(code, name, bins)| BankRecord {
                code: *code,
                name: (*name).to_string(),
                bins: bins.iter().map(|bin| (*bin).to_string()).collect(),
            })
            .collect();
        Self {
            records,
        }
    }

    /// Builds a directory from explicit records.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when two records share a code or a BIN
    /// entry is not exactly six decimal digits.
    pub fn from_records(records: Vec<BankRecord>) -> Result<Self, DirectoryError> {
        for (index, record) in records.iter().enumerate() {
            if records.iter().skip(index + 1).any(|other| other.code == record.code) {
                return Err(DirectoryError::DuplicateCode(record.code));
            }
            for bin in &record.bins {
                if bin.len() != 6 || !bin.bytes().all(|byte| byte.is_ascii_digit()) {
                    return Err(DirectoryError::InvalidBin {
                        code: record.code,
                        bin: bin.clone(),
                    });
                }
            }
        }
        Ok(Self {
            records,
        })
    }

    /// Loads a directory table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the text is not a valid record list
    /// or the records fail table validation.
    pub fn from_json_str(table: &str) -> Result<Self, DirectoryError> {
        let records: Vec<BankRecord> =
            serde_json::from_str(table).map_err(|error| DirectoryError::Json(error.to_string()))?;
        Self::from_records(records)
    }

    /// Returns the records in table order.
    #[must_use]
    pub fn records(&self) -> &[BankRecord] {
        &self.records
    }
}

impl BankDirectory for StaticBankDirectory {
    fn by_bin(&self, bin: &str) -> Option<BankDescriptor> {
        self.records
            .iter()
            .find(|record| record.bins.iter().any(|known| known == bin))
            .map(|record| BankDescriptor::new(record.code, record.name.clone()))
    }

    fn by_code(&self, code: u32) -> Option<BankDescriptor> {
        self.records
            .iter()
            .find(|record| record.code == code)
            .map(|record| BankDescriptor::new(record.code, record.name.clone()))
    }
}
