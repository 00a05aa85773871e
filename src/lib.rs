//! Password strength auditing and targeted wordlist generation.
//!
//! This library provides two independent engines:
//!
//! - **Strength analysis**: a character-class entropy heuristic, five
//!   ordinal strength bands, ordered improvement recommendations, and a
//!   seam for an external probabilistic scorer whose verdict is reported
//!   alongside the local analysis (never folded into it).
//! - **Wordlist generation**: leetspeak substitution expansion of seed
//!   words, year/affix augmentation, and deduplicated, deterministically
//!   ordered assembly with an optional candidate cap.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `cli` (default): Builds the `pwd-audit` command-line binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_audit::{StrengthBand, analyze_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let report = analyze_password(&password, None, None);
//!
//! #[cfg(not(feature = "async"))]
//! let report = analyze_password(&password, None);
//!
//! assert_eq!(report.band(), Some(StrengthBand::Strong));
//! assert!(report.recommendations.is_empty());
//! ```

// Internal modules
mod analyzer;
mod entropy;
mod report;
mod scorer;
mod sections;
pub mod wordlist;

// Public API
pub use analyzer::{analyze_password, recommendations};
pub use entropy::estimate_entropy;
pub use report::{EntropyScore, ExternalScore, PasswordReport, StrengthBand};
pub use scorer::ExternalScorer;
pub use wordlist::{GeneratorOptions, SubstitutionTable, Wordlist, WordlistGenerator, generate_wordlist};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
