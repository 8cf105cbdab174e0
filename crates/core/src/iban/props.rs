//! Property-based tests for the IBAN engine.
//!
//! - Structural round trip of the grammar split
//! - Checksum determinism and agreement with direct arithmetic
//! - Case and whitespace invariance of validation
//! - Austrian shape implies fixed length

use proptest::prelude::*;
use proptest::sample::Index;

use super::checksum::{check_digits_for, numeric_checksum, to_numeral};
use super::grammar::{normalize, split, split_austrian};
use super::types::Iban;
use super::validation::{is_austrian_iban, is_valid_iban};

/// Strategy to generate strings accepted by the IBAN grammar.
fn well_formed() -> impl Strategy<Value = String> {
    "[A-Z]{2}[0-9]{2}[A-Za-z0-9]{1,30}"
}

/// Strategy to generate checksum-valid IBANs in electronic format.
fn valid_iban() -> impl Strategy<Value = String> {
    ("[A-Z]{2}", "[A-Z0-9]{1,30}").prop_map(|(country, bban)| {
        Iban::from_parts(&country, &bban)
            .expect("generated parts are well formed")
            .as_str()
            .to_string()
    })
}

/// Strategy to generate checksum-valid Austrian IBANs.
fn valid_austrian_iban() -> impl Strategy<Value = String> {
    "[0-9]{16}".prop_map(|bban| {
        Iban::from_parts("AT", &bban)
            .expect("generated parts are well formed")
            .as_str()
            .to_string()
    })
}

/// Strategy to generate Austrian-shaped strings, check digits not fixed.
fn austrian_shaped() -> impl Strategy<Value = String> {
    "AT[0-9]{18}"
}

/// Strategy to generate `AT` + digits with a length just off 20.
fn austrian_near_miss() -> impl Strategy<Value = String> {
    prop_oneof!["AT[0-9]{16,17}", "AT[0-9]{19,20}"]
}

/// Strategy to generate whitespace insertions (position, character).
fn whitespace_insertions() -> impl Strategy<Value = Vec<(Index, char)>> {
    prop::collection::vec(
        (
            any::<Index>(),
            prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\u{00A0}')],
        ),
        0..8,
    )
}

fn insert_whitespace(s: &str, insertions: &[(Index, char)]) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    for (index, ws) in insertions {
        let at = index.index(chars.len() + 1);
        chars.insert(at, *ws);
    }
    chars.into_iter().collect()
}

fn with_bban_case(s: &str, f: impl Fn(&str) -> String) -> String {
    format!("{}{}", &s[..4], f(&s[4..]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Country code, check digits and BBAN reassemble the normalized input.
    #[test]
    fn prop_split_reconstructs_normalized_input(s in well_formed()) {
        let normalized = normalize(s.as_str()).unwrap();
        let parts = split(&normalized).unwrap();
        prop_assert_eq!(
            format!("{}{}{}", parts.country_code, parts.check_digits, parts.bban),
            normalized
        );
    }

    /// Checksum is a pure function of its input.
    #[test]
    fn prop_checksum_is_deterministic(s in "[A-Za-z0-9]{0,40}") {
        prop_assert_eq!(numeric_checksum(&s), numeric_checksum(&s));
    }

    /// Streaming reduction agrees with reducing the expanded numeral directly.
    #[test]
    fn prop_streaming_matches_direct_modulus(s in "[A-Za-z0-9]{1,8}") {
        let numeral = to_numeral(&s).unwrap();
        let direct = u32::try_from(numeral.parse::<u128>().unwrap() % 97).unwrap();
        prop_assert_eq!(numeric_checksum(&s), Some(direct));
    }

    /// Check digits always fall in 2..=98.
    #[test]
    fn prop_check_digits_in_range(country in "[A-Z]{2}", bban in "[A-Za-z0-9]{1,30}") {
        let check = check_digits_for(&country, &bban).unwrap();
        prop_assert!((2..=98).contains(&check), "check digits {} out of range", check);
    }

    /// Generated IBANs validate, with any case applied to BBAN letters.
    #[test]
    fn prop_validation_ignores_bban_letter_case(s in valid_iban()) {
        prop_assert!(is_valid_iban(s.as_str()));
        prop_assert!(is_valid_iban(with_bban_case(&s, str::to_lowercase).as_str()));
        prop_assert!(is_valid_iban(with_bban_case(&s, str::to_uppercase).as_str()));
    }

    /// Case of BBAN letters never changes the outcome, valid or not.
    #[test]
    fn prop_case_invariance_for_any_well_formed(s in well_formed()) {
        let expected = is_valid_iban(s.as_str());
        prop_assert_eq!(is_valid_iban(with_bban_case(&s, str::to_lowercase).as_str()), expected);
        prop_assert_eq!(is_valid_iban(with_bban_case(&s, str::to_uppercase).as_str()), expected);
    }

    /// Inserting whitespace anywhere does not change the outcome.
    #[test]
    fn prop_whitespace_invariance(
        s in prop_oneof![valid_iban(), well_formed()],
        insertions in whitespace_insertions(),
    ) {
        let spaced = insert_whitespace(&s, &insertions);
        prop_assert_eq!(is_valid_iban(spaced.as_str()), is_valid_iban(s.as_str()));
    }

    /// Altering one BBAN digit is always detected.
    #[test]
    fn prop_single_digit_substitution_detected(
        s in valid_austrian_iban(),
        position in 4usize..20,
        delta in 1u8..10,
    ) {
        let mut bytes = s.into_bytes();
        bytes[position] = b'0' + (bytes[position] - b'0' + delta) % 10;
        let altered = String::from_utf8(bytes).unwrap();
        prop_assert!(!is_valid_iban(altered.as_str()));
    }

    /// Austrian shape implies a normalized length of exactly 20.
    #[test]
    fn prop_austrian_shape_implies_length_20(
        s in prop_oneof![valid_austrian_iban(), austrian_shaped()],
        insertions in whitespace_insertions(),
    ) {
        let spaced = insert_whitespace(&s, &insertions);
        prop_assert!(is_austrian_iban(spaced.as_str()), "{:?} should look Austrian", spaced);
        prop_assert_eq!(normalize(spaced.as_str()).unwrap().len(), 20);
    }

    /// One digit too few or too many is never Austrian-shaped.
    #[test]
    fn prop_austrian_near_miss_lengths_rejected(
        s in austrian_near_miss(),
        insertions in whitespace_insertions(),
    ) {
        let spaced = insert_whitespace(&s, &insertions);
        prop_assert_ne!(normalize(spaced.as_str()).unwrap().len(), 20);
        prop_assert!(!is_austrian_iban(spaced.as_str()), "{:?} should not look Austrian", spaced);
    }

    /// Austrian bank code and account number reassemble the BBAN.
    #[test]
    fn prop_austrian_parts_reassemble(s in valid_austrian_iban()) {
        let parts = split_austrian(&s).unwrap();
        prop_assert_eq!(parts.bank_code.len(), 5);
        prop_assert_eq!(parts.account_number.len(), 11);
        prop_assert_eq!(format!("{}{}", parts.bank_code, parts.account_number), &s[4..]);
    }
}
