// crates/pincode-core/src/validate.rs

//! Format validation: the only gate in front of every lookup.

use crate::input::IntoPincode;
use crate::tables;
use serde::Serialize;

/// Why a raw input is not a syntactically valid Indian pincode.
///
/// Checks run in declaration order; the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Pincode cannot be empty")]
    EmptyInput,

    #[error("Pincode must contain only digits")]
    NonNumeric,

    /// Carries the observed digit count.
    #[error("Pincode must be exactly 6 digits, got {0}")]
    WrongLength(usize),

    #[error("Pincode cannot start with 0")]
    LeadingZero,

    #[error("Invalid pincode: First digit '{0}' is not valid for Indian pincodes")]
    UnknownRegionDigit(char),
}

/// Outcome of [`validate_format`]: `{ "valid": true }` or
/// `{ "valid": false, "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Validation {
            valid: true,
            error: None,
        }
    }

    pub fn failed(err: FormatError) -> Self {
        Validation {
            valid: false,
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<(), FormatError>> for Validation {
    fn from(r: Result<(), FormatError>) -> Self {
        match r {
            Ok(()) => Validation::ok(),
            Err(e) => Validation::failed(e),
        }
    }
}

/// Check an already-normalised (trimmed) string.
pub fn check_format(s: &str) -> Result<(), FormatError> {
    if s.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::NonNumeric);
    }
    // All ASCII from here, so byte length is the digit count.
    if s.len() != 6 {
        return Err(FormatError::WrongLength(s.len()));
    }
    let first = s.as_bytes()[0];
    if first == b'0' {
        return Err(FormatError::LeadingZero);
    }
    if tables::states_for_digit(first - b'0').is_none() {
        return Err(FormatError::UnknownRegionDigit(first as char));
    }
    Ok(())
}

/// Validate a pincode given as text or integer.
///
/// ```rust
/// use pincode_core::validate::validate_format;
///
/// assert!(validate_format("110001").valid);
/// assert_eq!(
///     validate_format("123").error.as_deref(),
///     Some("Pincode must be exactly 6 digits, got 3")
/// );
/// ```
pub fn validate_format(pincode: impl IntoPincode) -> Validation {
    check_format(&pincode.to_pincode_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failure_wins() {
        assert_eq!(check_format(""), Err(FormatError::EmptyInput));
        // Non-numeric beats wrong length.
        assert_eq!(check_format("12a"), Err(FormatError::NonNumeric));
        // Wrong length beats leading zero.
        assert_eq!(check_format("0123"), Err(FormatError::WrongLength(4)));
        assert_eq!(check_format("012345"), Err(FormatError::LeadingZero));
        assert_eq!(check_format("560001"), Ok(()));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(
            validate_format("   "),
            Validation::failed(FormatError::EmptyInput)
        );
    }

    #[test]
    fn signs_and_unicode_digits_are_not_digits() {
        assert_eq!(check_format("-11000"), Err(FormatError::NonNumeric));
        assert_eq!(check_format("١١٠٠٠١"), Err(FormatError::NonNumeric));
        assert_eq!(
            validate_format(-110001).error.as_deref(),
            Some("Pincode must contain only digits")
        );
    }

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(
            FormatError::WrongLength(7).to_string(),
            "Pincode must be exactly 6 digits, got 7"
        );
        assert_eq!(
            FormatError::UnknownRegionDigit('0').to_string(),
            "Invalid pincode: First digit '0' is not valid for Indian pincodes"
        );
        assert_eq!(
            serde_json::to_value(validate_format("110001")).unwrap(),
            serde_json::json!({ "valid": true })
        );
    }
}
