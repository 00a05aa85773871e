//! Password recommendation sections
//!
//! Each section gates one improvement suggestion. Sections are independent
//! and are emitted in a fixed precedence order by the analyzer.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section functions.
/// - `Some(suggestion)` - Section fired, the suggestion applies
/// - `None` - Section passed
pub type SectionResult = Option<String>;
