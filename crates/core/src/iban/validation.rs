//! Sentinel-returning IBAN checks.
//!
//! Every function here accepts `&str`, `Option<&str>` or `None::<&str>` and
//! reports failure as `false` / `None`. None of them panic.

use super::grammar;
use super::types::Iban;

/// Returns `true` if `raw` is a checksum-valid IBAN after whitespace removal.
pub fn is_valid_iban<'a>(raw: impl Into<Option<&'a str>>) -> bool {
    Iban::parse_opt(raw.into()).is_ok()
}

/// Returns `true` if `raw` is a valid IBAN with the Austrian shape.
pub fn is_valid_austrian_iban<'a>(raw: impl Into<Option<&'a str>>) -> bool {
    Iban::parse_opt(raw.into()).is_ok_and(|iban| iban.is_austrian())
}

/// Returns `true` if `raw` looks like an Austrian IBAN (`AT` + 18 digits).
///
/// The check digits are not verified.
pub fn is_austrian_iban<'a>(raw: impl Into<Option<&'a str>>) -> bool {
    grammar::normalize(raw).is_some_and(|s| grammar::is_austrian_shape(&s))
}

/// Converts `raw` to electronic format (whitespace removed).
///
/// Returns `None` for absent input or when the result does not match the
/// IBAN grammar. The check digits are not verified.
pub fn to_electronic_format<'a>(raw: impl Into<Option<&'a str>>) -> Option<String> {
    grammar::normalize(raw).filter(|s| grammar::is_well_formed(s))
}

/// Extracts the five digit bank code of an Austrian-shaped IBAN.
///
/// The check digits are not verified.
pub fn extract_austrian_bank_code<'a>(raw: impl Into<Option<&'a str>>) -> Option<String> {
    let normalized = grammar::normalize(raw)?;
    grammar::split_austrian(&normalized).map(|parts| parts.bank_code.to_string())
}

/// Extracts the eleven digit account number of an Austrian-shaped IBAN.
///
/// The check digits are not verified.
pub fn extract_austrian_account_number<'a>(raw: impl Into<Option<&'a str>>) -> Option<String> {
    let normalized = grammar::normalize(raw)?;
    grammar::split_austrian(&normalized).map(|parts| parts.account_number.to_string())
}
