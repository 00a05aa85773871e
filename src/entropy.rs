//! Entropy estimation from character-class diversity and length.

use crate::report::EntropyScore;

const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SPECIAL_SIZE: u32 = 32;

/// A character that is neither a word character (letter, digit, underscore)
/// nor whitespace. This is the classifier shared by the entropy estimator
/// and the special-character recommendation gate.
pub(crate) fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && c != '_' && !c.is_whitespace()
}

/// Nominal alphabet size for the character classes present in `password`.
///
/// Each class contributes a fixed bucket: ASCII lowercase 26, ASCII
/// uppercase 26, ASCII digits 10, specials 32. Characters outside every
/// bucket (e.g. underscore, whitespace, non-ASCII letters) contribute
/// nothing.
fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += LOWERCASE_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += UPPERCASE_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += DIGIT_SIZE;
    }
    if password.chars().any(is_special) {
        size += SPECIAL_SIZE;
    }
    size
}

/// Estimates search-space entropy for a password.
///
/// Returns `length * log2(charset size)` in bits, rounded to two decimals,
/// or zero when no character class is present (including the empty string).
/// Total over the whole string domain; never fails.
pub fn estimate_entropy(password: &str) -> EntropyScore {
    let charset = charset_size(password);
    if charset == 0 {
        return EntropyScore::new(0.0);
    }
    let length = password.chars().count() as f64;
    EntropyScore::new(length * f64::from(charset).log2())
}
