//! IBAN engine.
//!
//! This module implements IBAN handling:
//! - Whitespace normalization and the fixed IBAN grammar
//! - ISO 7064 mod-97-10 checksum computation
//! - Validated `Iban` / `AustrianIban` value types
//! - Sentinel-returning checks and Austrian field extraction
//! - Error types describing why an input was rejected

pub mod checksum;
pub mod error;
pub mod grammar;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use checksum::{check_digits_for, numeric_checksum, to_numeral};
pub use error::IbanError;
pub use grammar::{AustrianParts, IbanParts, is_well_formed, normalize, split, split_austrian};
pub use types::{AustrianIban, Iban};
pub use validation::{
    extract_austrian_account_number, extract_austrian_bank_code, is_austrian_iban,
    is_valid_austrian_iban, is_valid_iban, to_electronic_format,
};
