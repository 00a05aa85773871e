//! Affix augmentation: fixed symbol patterns and year suffixes.

use std::ops::RangeInclusive;

/// Ordered affix pattern literals, applied as both suffix and prefix.
pub const AFFIX_PATTERNS: [&str; 9] = ["!", "@", "#", "123", "_", "1", "12", "!@#", "321"];

/// Years appended when year augmentation is enabled.
pub const YEARS: RangeInclusive<u16> = 1990..=2024;

/// Candidates formed by appending each year to `base`.
pub fn year_suffixes(base: &str) -> impl Iterator<Item = String> + '_ {
    YEARS.map(move |year| format!("{base}{year}"))
}

/// Candidates formed by appending and prepending each pattern to `base`.
pub fn pattern_affixes(base: &str) -> impl Iterator<Item = String> + '_ {
    AFFIX_PATTERNS
        .into_iter()
        .flat_map(move |pattern| [format!("{base}{pattern}"), format!("{pattern}{base}")])
}
