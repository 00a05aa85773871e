//! Character variety sections - one gate per character class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::entropy::is_special;

/// Checks for ASCII lowercase letters.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Add lowercase letters.".to_string());
    }
    None
}

/// Checks for ASCII uppercase letters.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Add uppercase letters.".to_string());
    }
    None
}

/// Checks for decimal digits.
pub fn digit_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_digit()) {
        return Some("Include digits.".to_string());
    }
    None
}

/// Checks for special characters (neither word character nor whitespace).
pub fn special_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(is_special) {
        return Some("Use special characters.".to_string());
    }
    None
}
