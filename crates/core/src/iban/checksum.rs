//! ISO 7064 mod-97-10 checksum.
//!
//! Letters expand to two decimal digits (`A` = 10 … `Z` = 35, either case) and
//! digits stand for themselves. The expanded numeral for a 30-character BBAN
//! runs past 60 digits, so the remainder is folded digit by digit instead of
//! materializing a big integer: `acc = (acc * 10 + d) % 97` never exceeds
//! `u32`.

/// ISO 7064 modulus.
const MODULUS: u32 = 97;

/// Two-digit values for `A..=Z`, indexed by `letter - b'A'`.
const ALPHA_TO_DIGITS: [u8; 26] = alpha_to_digits();

const fn alpha_to_digits() -> [u8; 26] {
    let mut table = [0u8; 26];
    let mut value = 10u8;
    let mut i = 0;
    while i < table.len() {
        table[i] = value;
        value += 1;
        i += 1;
    }
    table
}

/// Returns the numeric value of an ASCII alphanumeric.
///
/// Letters yield `10..=35`, digits `0..=9`; anything else is `None`.
#[must_use]
pub const fn char_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'Z' => Some(ALPHA_TO_DIGITS[(byte - b'A') as usize]),
        b'a'..=b'z' => Some(ALPHA_TO_DIGITS[(byte - b'a') as usize]),
        _ => None,
    }
}

fn fold(acc: u32, byte: u8) -> Option<u32> {
    let value = u32::from(char_value(byte)?);
    let shift = if value < 10 { 10 } else { 100 };
    Some((acc * shift + value) % MODULUS)
}

fn mod97(bytes: impl IntoIterator<Item = u8>) -> Option<u32> {
    bytes.into_iter().try_fold(0, fold)
}

/// Expands `s` into its decimal numeral (`"AT00"` → `"102900"`).
///
/// Returns `None` if `s` contains a character that is not an ASCII letter or
/// digit.
#[must_use]
pub fn to_numeral(s: &str) -> Option<String> {
    let mut numeral = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        let value = char_value(byte)?;
        if value < 10 {
            numeral.push(char::from(b'0' + value));
        } else {
            numeral.push(char::from(b'0' + value / 10));
            numeral.push(char::from(b'0' + value % 10));
        }
    }
    Some(numeral)
}

/// Computes `numeral(s) mod 97`.
///
/// Returns `None` if `s` contains a character that is not an ASCII letter or
/// digit. The empty string yields `Some(0)`.
#[must_use]
pub fn numeric_checksum(s: &str) -> Option<u32> {
    mod97(s.bytes())
}

/// Computes the check digits for `country_code` and `bban`.
///
/// This is `98 - (numeral(bban + country_code + "00") mod 97)`, always in
/// `2..=98`.
#[must_use]
pub fn check_digits_for(country_code: &str, bban: &str) -> Option<u8> {
    let remainder = mod97(bban.bytes().chain(country_code.bytes()).chain(*b"00"))?;
    u8::try_from(98 - remainder).ok()
}
