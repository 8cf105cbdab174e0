//! IBAN validation error types.
//!
//! These errors describe why a string is not a usable IBAN. The boolean and
//! `Option` entry points in [`super::validation`] collapse them into a plain
//! "validation failed"; [`super::Iban::parse`] reports them in full.

use thiserror::Error;

/// Reasons an input is rejected as an IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    /// No input was supplied.
    #[error("No IBAN supplied")]
    AbsentInput,

    /// Input does not match `[A-Z]{2}[0-9]{2}[A-Za-z0-9]{1,30}`.
    #[error("IBAN does not match the expected format")]
    MalformedGrammar,

    /// Input is well formed but the check digits are wrong.
    #[error("IBAN check digits mismatch: expected {expected:02}, found {actual:02}")]
    ChecksumMismatch {
        /// Check digits computed from country code and BBAN.
        expected: u8,
        /// Check digits carried by the input.
        actual: u8,
    },

    /// Input is an IBAN but not shaped like an Austrian one.
    #[error("IBAN is not an Austrian IBAN")]
    NotAustrian,
}

impl IbanError {
    /// Returns the stable error code for logs and reports.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AbsentInput => "ABSENT_INPUT",
            Self::MalformedGrammar => "MALFORMED_GRAMMAR",
            Self::ChecksumMismatch { .. } => "CHECKSUM_MISMATCH",
            Self::NotAustrian => "NOT_AUSTRIAN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IbanError::AbsentInput.error_code(), "ABSENT_INPUT");
        assert_eq!(IbanError::MalformedGrammar.error_code(), "MALFORMED_GRAMMAR");
        assert_eq!(
            IbanError::ChecksumMismatch {
                expected: 61,
                actual: 62
            }
            .error_code(),
            "CHECKSUM_MISMATCH"
        );
        assert_eq!(IbanError::NotAustrian.error_code(), "NOT_AUSTRIAN");
    }

    #[test]
    fn test_error_display() {
        let err = IbanError::ChecksumMismatch {
            expected: 5,
            actual: 61,
        };
        assert_eq!(
            err.to_string(),
            "IBAN check digits mismatch: expected 05, found 61"
        );
        assert_eq!(IbanError::AbsentInput.to_string(), "No IBAN supplied");
    }
}
