// rapsa-core/src/lib.rs
// ============================================================================
// Module: Rapsa Core Library
// Description: Public API surface for the Rapsa core.
// Purpose: Expose identifier types, the codec, interfaces, and requests.
// Dependencies: crate::{base62, identity, interfaces, request}
// ============================================================================

//! ## Overview
//! Rapsa core compresses financial identifiers — payment-card numbers,
//! Sheba account numbers, and wallet addresses — into compact base-62 form,
//! validates their checksums at construction, and composes path-scoped
//! `rapsa://` request URIs referencing them. Everything is a pure,
//! synchronous computation over strings; issuer resolution integrates
//! through an explicit directory interface rather than an embedded table.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod base62;
pub mod identity;
pub mod interfaces;
pub mod request;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use base62::Base62Error;
pub use identity::BankDescriptor;
pub use identity::CardNumber;
pub use identity::Identifier;
pub use identity::IdentifierError;
pub use identity::IdentifierKind;
pub use identity::Sheba;
pub use identity::WalletAddress;
pub use identity::WalletCategory;
pub use interfaces::BankDirectory;
pub use request::ParamKey;
pub use request::ParamValue;
pub use request::Rapsa;
pub use request::RequestError;
pub use request::RequestPath;
pub use request::SCHEME;
