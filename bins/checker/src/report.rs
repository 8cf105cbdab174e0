//! Per-IBAN report printed by `ibancheck validate`.

use ibancheck_core::{
    Entity, Iban, extract_austrian_account_number, extract_austrian_bank_code, is_austrian_iban,
    resolve_entity, to_electronic_format,
};
use serde::Serialize;

/// Everything the engine can say about one input string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IbanReport {
    /// Input as given.
    pub input: String,
    /// Electronic format, if the input is well formed.
    pub electronic: Option<String>,
    /// Print format, if the input is valid.
    pub print: Option<String>,
    /// Grammar and checksum both pass.
    pub valid: bool,
    /// Austrian shape, regardless of checksum.
    pub austrian: bool,
    /// Austrian bank code, regardless of checksum.
    pub bank_code: Option<String>,
    /// Austrian account number, regardless of checksum.
    pub account_number: Option<String>,
    /// Resolved entity, if valid.
    pub entity: Option<Entity>,
    /// Error code when invalid.
    pub error: Option<&'static str>,
}

impl IbanReport {
    /// Builds the report for `raw`.
    #[must_use]
    pub fn build(raw: &str) -> Self {
        let parsed = Iban::parse(raw);
        Self {
            input: raw.to_string(),
            electronic: to_electronic_format(raw),
            print: parsed.as_ref().ok().map(Iban::to_print_format),
            valid: parsed.is_ok(),
            austrian: is_austrian_iban(raw),
            bank_code: extract_austrian_bank_code(raw),
            account_number: extract_austrian_account_number(raw),
            entity: resolve_entity(raw),
            error: parsed.err().map(|err| err.error_code()),
        }
    }
}
