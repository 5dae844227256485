// rapsa-core/src/base62.rs
// ============================================================================
// Module: Base-62 Codec
// Description: Arbitrary-precision conversion between decimal and base-62 text.
// Purpose: Compress long decimal identifiers into compact alphanumeric form.
// Dependencies: num-bigint, num-traits, thiserror
// ============================================================================

//! ## Overview
//! The codec maps non-negative integers between decimal text and base-62
//! text using the alphabet `0-9A-Za-z`, where a digit's value equals its
//! alphabet index and the most significant digit comes first. Arithmetic is
//! exact at any magnitude; values never pass through machine integers or
//! floating point. Both operations are pure and total on valid input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

// ============================================================================
// SECTION: Alphabet
// ============================================================================

/// Base-62 alphabet ordered by digit value.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Numeric radix of the compact representation.
const RADIX: u32 = 62;

/// Returns the numeric value of a base-62 digit character.
const fn digit_value(digit: char) -> Option<u32> {
    match digit {
        '0'..='9' => Some(digit as u32 - '0' as u32),
        'A'..='Z' => Some(digit as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(digit as u32 - 'a' as u32 + 36),
        _ => None,
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Base-62 codec errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base62Error {
    /// Input text is empty.
    #[error("input is empty")]
    Empty,
    /// Decimal input contains a character that is not a decimal digit.
    #[error("invalid decimal digit {digit:?} at position {position}")]
    InvalidDecimalDigit {
        /// Offending character.
        digit: char,
        /// Byte position of the offending character.
        position: usize,
    },
    /// Compact input contains a character outside the base-62 alphabet.
    #[error("invalid base-62 digit {digit:?} at position {position}")]
    InvalidBase62Digit {
        /// Offending character.
        digit: char,
        /// Byte position of the offending character.
        position: usize,
    },
}

// ============================================================================
// SECTION: Codec Operations
// ============================================================================

/// Encodes a non-negative decimal integer into its base-62 form.
///
/// The result carries no leading `'0'` digits except the single-character
/// result `"0"` for the value zero.
///
/// # Errors
///
/// Returns [`Base62Error`] when the input is empty or contains a character
/// that is not a decimal digit.
pub fn encode(decimal: &str) -> Result<String, Base62Error> {
    let value = parse_decimal(decimal)?;
    let compact = value
        .to_radix_be(RADIX)
        .into_iter()
        .map(|digit| char::from(ALPHABET[usize::from(digit)]))
        .collect();
    Ok(compact)
}

/// Decodes base-62 text back into its minimal decimal form.
///
/// The result carries no leading zeros; callers that need a fixed-width
/// identifier re-pad to the identifier's canonical width.
///
/// # Errors
///
/// Returns [`Base62Error`] when the input is empty or contains a character
/// outside the base-62 alphabet.
pub fn decode(compact: &str) -> Result<String, Base62Error> {
    if compact.is_empty() {
        return Err(Base62Error::Empty);
    }
    let radix = BigUint::from(RADIX);
    let mut value = BigUint::zero();
    for (position, digit) in compact.char_indices() {
        let Some(digit_value) = digit_value(digit) else {
            return Err(Base62Error::InvalidBase62Digit {
                digit,
                position,
            });
        };
        value = value * &radix + BigUint::from(digit_value);
    }
    Ok(value.to_string())
}

// ============================================================================
// SECTION: Decimal Parsing
// ============================================================================

/// Parses decimal text into a big unsigned integer, validating every digit.
fn parse_decimal(decimal: &str) -> Result<BigUint, Base62Error> {
    if decimal.is_empty() {
        return Err(Base62Error::Empty);
    }
    let ten = BigUint::from(10_u32);
    let mut value = BigUint::zero();
    for (position, digit) in decimal.char_indices() {
        let Some(digit_value) = digit.to_digit(10) else {
            return Err(Base62Error::InvalidDecimalDigit {
                digit,
                position,
            });
        };
        value = value * &ten + BigUint::from(digit_value);
    }
    Ok(value)
}
