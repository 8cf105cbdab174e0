//! Structural grammar of IBAN strings.
//!
//! Nothing here consults the checksum. These are the parsing primitives the
//! validation layer is built on.

/// Length of the country code prefix.
pub const COUNTRY_CODE_LEN: usize = 2;

/// Length of the check digits following the country code.
pub const CHECK_DIGITS_LEN: usize = 2;

/// Maximum BBAN length.
pub const MAX_BBAN_LEN: usize = 30;

/// Country code of Austrian IBANs.
pub const AUSTRIAN_COUNTRY_CODE: &str = "AT";

/// Total length of an Austrian IBAN in electronic format.
pub const AUSTRIAN_IBAN_LEN: usize = 20;

/// Length of the Austrian bank code (Bankleitzahl).
pub const AUSTRIAN_BANK_CODE_LEN: usize = 5;

const BBAN_START: usize = COUNTRY_CODE_LEN + CHECK_DIGITS_LEN;
const AUSTRIAN_ACCOUNT_START: usize = BBAN_START + AUSTRIAN_BANK_CODE_LEN;

/// The three structural parts of a well-formed IBAN, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanParts<'a> {
    /// Two uppercase letters.
    pub country_code: &'a str,
    /// Two decimal digits.
    pub check_digits: &'a str,
    /// 1–30 alphanumerics.
    pub bban: &'a str,
}

/// Bank code and account number of an Austrian-shaped IBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AustrianParts<'a> {
    /// Five digit bank code.
    pub bank_code: &'a str,
    /// Eleven digit account number.
    pub account_number: &'a str,
}

/// Removes every whitespace character, leaving case untouched.
#[must_use]
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns the whitespace-free form of `raw`, or `None` for absent input.
pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> Option<String> {
    raw.into().map(strip_whitespace)
}

/// Checks `s` against `[A-Z]{2}[0-9]{2}[A-Za-z0-9]{1,30}`.
///
/// Whitespace is not stripped here; callers normalize first.
#[must_use]
pub fn is_well_formed(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() <= BBAN_START || bytes.len() > BBAN_START + MAX_BBAN_LEN {
        return false;
    }
    bytes[..COUNTRY_CODE_LEN].iter().all(u8::is_ascii_uppercase)
        && bytes[COUNTRY_CODE_LEN..BBAN_START].iter().all(u8::is_ascii_digit)
        && bytes[BBAN_START..].iter().all(u8::is_ascii_alphanumeric)
}

/// Splits a well-formed IBAN into its parts.
///
/// Returns `None` unless [`is_well_formed`] holds.
#[must_use]
pub fn split(s: &str) -> Option<IbanParts<'_>> {
    if !is_well_formed(s) {
        return None;
    }
    Some(IbanParts {
        country_code: &s[..COUNTRY_CODE_LEN],
        check_digits: &s[COUNTRY_CODE_LEN..BBAN_START],
        bban: &s[BBAN_START..],
    })
}

/// Checks `s` against `AT[0-9]{18}`.
#[must_use]
pub fn is_austrian_shape(s: &str) -> bool {
    s.len() == AUSTRIAN_IBAN_LEN
        && s.starts_with(AUSTRIAN_COUNTRY_CODE)
        && s.as_bytes()[COUNTRY_CODE_LEN..].iter().all(u8::is_ascii_digit)
}

/// Splits an Austrian-shaped IBAN into bank code and account number.
///
/// Returns `None` unless [`is_austrian_shape`] holds.
#[must_use]
pub fn split_austrian(s: &str) -> Option<AustrianParts<'_>> {
    if !is_austrian_shape(s) {
        return None;
    }
    Some(AustrianParts {
        bank_code: &s[BBAN_START..AUSTRIAN_ACCOUNT_START],
        account_number: &s[AUSTRIAN_ACCOUNT_START..],
    })
}
