//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(suggestion)` if the password is too short
/// - `None` if the password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!("Use at least {} characters.", MIN_LENGTH));
    }
    None
}
