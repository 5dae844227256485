// rapsa-core/src/identity/sheba.rs
// ============================================================================
// Module: Sheba Account Numbers
// Description: IR-prefixed 24-digit account numbers with mod-97 validation.
// Purpose: Validate Sheba numbers and carry their compact base-62 form.
// Dependencies: crate::{base62, identity, interfaces}, num-bigint, serde
// ============================================================================

//! ## Overview
//! A [`Sheba`] holds the literal `IR` country prefix plus a 24-digit numeric
//! body together with the body's compact base-62 form. Only the body passes
//! through the codec; decoding re-zero-pads to 24 digits because leading
//! zeros are significant and the codec does not preserve them. The mod-97
//! check appends the fixed suffix `1827` (the digit expansion of `IR`) and
//! runs over exact big integers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
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

/// Literal country prefix of a canonical Sheba number.
const COUNTRY_PREFIX: &str = "IR";

/// Number of digits in the Sheba numeric body.
const BODY_LENGTH: usize = 24;

/// Fixed numeric suffix standing in for the country prefix in the check.
const COUNTRY_SUFFIX: &str = "1827";

// ============================================================================
// SECTION: Sheba
// ============================================================================

/// Validated Sheba account number with its compact base-62 form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sheba {
    /// Canonical decimal form: `IR` followed by exactly 24 digits.
    decimal: String,
    /// Compact base-62 form of the numeric body.
    compact: String,
}

impl Sheba {
    /// Constructs a Sheba number from its canonical decimal form.
    ///
    /// The `IR` prefix is accepted case-insensitively and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input does not match the Sheba
    /// pattern or fails the mod-97 check.
    pub fn from_decimal(decimal: &str) -> Result<Self, IdentifierError> {
        let canonical = decimal.to_ascii_uppercase();
        let Some(body) = canonical.strip_prefix(COUNTRY_PREFIX) else {
            return Err(IdentifierError::invalid_format(
                IdentifierKind::Account,
                "expected the IR country prefix",
            ));
        };
        if body.len() != BODY_LENGTH || !body.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(IdentifierError::invalid_format(
                IdentifierKind::Account,
                "expected exactly 24 decimal digits after the IR prefix",
            ));
        }
        if !mod97_valid(body) {
            return Err(IdentifierError::InvalidChecksum {
                kind: IdentifierKind::Account,
            });
        }
        let compact = base62::encode(body).map_err(|source| IdentifierError::Codec {
            kind: IdentifierKind::Account,
            source,
        })?;
        Ok(Self {
            decimal: canonical,
            compact,
        })
    }

    /// Constructs a Sheba number from the compact form of its body.
    ///
    /// The decoded body is re-zero-padded to 24 digits before validation.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input is not base-62 text, the
    /// decoded body exceeds 24 digits, or the mod-97 check fails.
    pub fn from_compact(compact: &str) -> Result<Self, IdentifierError> {
        let digits = base62::decode(compact).map_err(|source| IdentifierError::Codec {
            kind: IdentifierKind::Account,
            source,
        })?;
        if digits.len() > BODY_LENGTH {
            return Err(IdentifierError::invalid_format(
                IdentifierKind::Account,
                "decoded body exceeds 24 digits",
            ));
        }
        Self::from_decimal(&format!("{COUNTRY_PREFIX}{digits:0>BODY_LENGTH$}"))
    }

    /// Classifies input as canonical decimal or compact and constructs.
    ///
    /// Input is treated as canonical decimal exactly when it matches the
    /// case-insensitive `IR` prefix followed by 24 decimal digits; anything
    /// else is decoded as compact text.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when construction fails under the
    /// selected interpretation.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        if is_canonical_decimal(input) {
            Self::from_decimal(input)
        } else {
            Self::from_compact(input)
        }
    }

    /// Returns the compact base-62 form of the numeric body.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.compact
    }

    /// Returns the canonical decimal form including the `IR` prefix.
    #[must_use]
    pub fn decoded(&self) -> &str {
        &self.decimal
    }

    /// Re-exposes the checksum result established at construction.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        mod97_valid(self.body())
    }

    /// Returns the three-digit bank code at body positions 2 through 4.
    #[must_use]
    pub fn bank_code(&self) -> &str {
        &self.body()[2..5]
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

    /// Returns the 24-digit numeric body.
    fn body(&self) -> &str {
        &self.decimal[COUNTRY_PREFIX.len()..]
    }
}

impl fmt::Display for Sheba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decimal)
    }
}

impl TryFrom<String> for Sheba {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_decimal(&value)
    }
}

impl From<Sheba> for String {
    fn from(sheba: Sheba) -> Self {
        sheba.decimal
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Indicates whether input matches the canonical Sheba pattern.
fn is_canonical_decimal(input: &str) -> bool {
    let Some((prefix, body)) = input.split_at_checked(COUNTRY_PREFIX.len()) else {
        return false;
    };
    prefix.eq_ignore_ascii_case(COUNTRY_PREFIX)
        && body.len() == BODY_LENGTH
        && body.bytes().all(|byte| byte.is_ascii_digit())
}

/// Runs the mod-97 rearrangement check over a 24-digit body.
///
/// The fixed suffix is appended, the first two characters of the result
/// move to the end, and the rearrangement must be congruent to 1 mod 97.
fn mod97_valid(body: &str) -> bool {
    let transformed = format!("{body}{COUNTRY_SUFFIX}");
    let rearranged = format!("{}{}", &transformed[2..], &transformed[..2]);
    let Ok(value) = rearranged.parse::<BigUint>() else {
        return false;
    };
    value % BigUint::from(97_u32) == BigUint::one()
}
