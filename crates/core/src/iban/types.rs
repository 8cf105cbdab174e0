//! Validated IBAN value types.

use serde::{Deserialize, Serialize};

use super::checksum::check_digits_for;
use super::error::IbanError;
use super::grammar::{self, IbanParts};

/// A checksum-valid IBAN in electronic format (no whitespace).
///
/// The only way to obtain one is through [`Iban::parse`] (or its `FromStr`,
/// `TryFrom` and serde equivalents), so every instance satisfies the grammar
/// and the mod-97 check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Parses and validates `raw`, ignoring whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`IbanError::MalformedGrammar`] if the normalized input does
    /// not match the IBAN grammar, or [`IbanError::ChecksumMismatch`] if the
    /// check digits are wrong.
    pub fn parse(raw: &str) -> Result<Self, IbanError> {
        let electronic = grammar::strip_whitespace(raw);
        let parts = grammar::split(&electronic).ok_or(IbanError::MalformedGrammar)?;
        let expected = check_digits_for(parts.country_code, parts.bban)
            .ok_or(IbanError::MalformedGrammar)?;
        let actual = parse_check_digits(parts.check_digits);
        if expected != actual {
            return Err(IbanError::ChecksumMismatch { expected, actual });
        }
        Ok(Self(electronic))
    }

    /// Like [`Iban::parse`] but accepts absent input.
    ///
    /// # Errors
    ///
    /// Returns [`IbanError::AbsentInput`] for `None`, otherwise whatever
    /// [`Iban::parse`] returns.
    pub fn parse_opt(raw: Option<&str>) -> Result<Self, IbanError> {
        raw.ok_or(IbanError::AbsentInput).and_then(Self::parse)
    }

    /// Builds an IBAN from a country code and BBAN, computing the check
    /// digits.
    ///
    /// # Errors
    ///
    /// Returns [`IbanError::MalformedGrammar`] if the assembled string does
    /// not match the IBAN grammar.
    pub fn from_parts(country_code: &str, bban: &str) -> Result<Self, IbanError> {
        let check = check_digits_for(country_code, bban).ok_or(IbanError::MalformedGrammar)?;
        Self::parse(&format!("{country_code}{check:02}{bban}"))
    }

    fn parts(&self) -> IbanParts<'_> {
        // Invariant: construction went through `grammar::split`.
        IbanParts {
            country_code: &self.0[..grammar::COUNTRY_CODE_LEN],
            check_digits: &self.0[grammar::COUNTRY_CODE_LEN
                ..grammar::COUNTRY_CODE_LEN + grammar::CHECK_DIGITS_LEN],
            bban: &self.0[grammar::COUNTRY_CODE_LEN + grammar::CHECK_DIGITS_LEN..],
        }
    }

    /// Two-letter country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        self.parts().country_code
    }

    /// Two check digits.
    #[must_use]
    pub fn check_digits(&self) -> &str {
        self.parts().check_digits
    }

    /// Basic Bank Account Number.
    #[must_use]
    pub fn bban(&self) -> &str {
        self.parts().bban
    }

    /// Electronic format, as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Print format: groups of four characters separated by single spaces.
    #[must_use]
    pub fn to_print_format(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// Returns `true` if this IBAN has the Austrian shape.
    #[must_use]
    pub fn is_austrian(&self) -> bool {
        grammar::is_austrian_shape(&self.0)
    }

    /// Narrows to an [`AustrianIban`] if the shape matches.
    #[must_use]
    pub fn austrian(&self) -> Option<AustrianIban> {
        self.is_austrian().then(|| AustrianIban(self.clone()))
    }
}

fn parse_check_digits(digits: &str) -> u8 {
    digits
        .bytes()
        .fold(0u8, |acc, b| acc * 10 + (b - b'0'))
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A checksum-valid Austrian IBAN (`AT` followed by 18 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AustrianIban(Iban);

impl AustrianIban {
    /// Parses and validates `raw` as an Austrian IBAN.
    ///
    /// # Errors
    ///
    /// Returns the [`Iban::parse`] error, or [`IbanError::NotAustrian`] for a
    /// valid IBAN of another shape.
    pub fn parse(raw: &str) -> Result<Self, IbanError> {
        Iban::parse(raw)?.austrian().ok_or(IbanError::NotAustrian)
    }

    /// Five digit bank code.
    #[must_use]
    pub fn bank_code(&self) -> &str {
        &self.0.bban()[..grammar::AUSTRIAN_BANK_CODE_LEN]
    }

    /// Eleven digit account number.
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.0.bban()[grammar::AUSTRIAN_BANK_CODE_LEN..]
    }

    /// The underlying IBAN.
    #[must_use]
    pub fn iban(&self) -> &Iban {
        &self.0
    }
}

impl std::fmt::Display for AustrianIban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<AustrianIban> for Iban {
    fn from(iban: AustrianIban) -> Self {
        iban.0
    }
}
