//! Wordlist generation: seed expansion, augmentation, assembly, export.
//!
//! Seed words are expanded into leetspeak variants, the variants are
//! augmented with year suffixes and common affix patterns, and everything is
//! assembled into one deduplicated, deterministically ordered list.
//!
//! ```rust
//! use pwd_audit::wordlist::{GeneratorOptions, WordlistGenerator};
//!
//! let generator = WordlistGenerator::new(GeneratorOptions {
//!     include_years: false,
//!     ..GeneratorOptions::default()
//! });
//! let wordlist = generator.generate(["cat"]);
//!
//! assert!(wordlist.entries().contains(&"cat!".to_string()));
//! assert!(wordlist.entries().contains(&"123cat".to_string()));
//! ```

mod augment;
mod export;
mod leet;

pub use augment::{AFFIX_PATTERNS, YEARS, pattern_affixes, year_suffixes};
pub use export::{ExportError, write_wordlist};
pub use leet::{LeetVariants, SubstitutionTable};

use std::collections::BTreeSet;
use std::path::Path;

/// Per-run generation options.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Append each year in [`YEARS`] to every base candidate.
    pub include_years: bool,
    /// Upper bound on total candidates. Generation stops deterministically
    /// once the set reaches the cap; `None` leaves it unbounded.
    pub limit: Option<usize>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_years: true,
            limit: None,
        }
    }
}

/// Expands seed words into a deduplicated, ordered candidate list.
pub struct WordlistGenerator {
    table: SubstitutionTable,
    options: GeneratorOptions,
}

impl WordlistGenerator {
    /// Generator with the built-in substitution table.
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_table(SubstitutionTable::default(), options)
    }

    /// Generator with a caller-supplied substitution table.
    pub fn with_table(table: SubstitutionTable, options: GeneratorOptions) -> Self {
        Self { table, options }
    }

    /// Generates the candidate list for `seeds`.
    ///
    /// Base candidates are the substitution variants of every seed,
    /// aggregated across seeds. Augmenters then add year-suffixed and
    /// pattern-affixed forms of each base candidate; augmented forms are
    /// never re-augmented. The result contains no duplicates and is sorted
    /// ascending by code point, so identical inputs in any order produce an
    /// identical sequence.
    pub fn generate<I, S>(&self, seeds: I) -> Wordlist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let limit = self.options.limit.unwrap_or(usize::MAX);
        let mut truncated = false;

        let mut base: BTreeSet<String> = BTreeSet::new();
        'expansion: for seed in seeds {
            for variant in self.table.variants(seed.as_ref()) {
                if base.len() >= limit {
                    truncated = true;
                    break 'expansion;
                }
                base.insert(variant);
            }
        }

        let mut candidates = base.clone();

        if self.options.include_years {
            'years: for word in &base {
                for suffixed in year_suffixes(word) {
                    if candidates.len() >= limit {
                        truncated = true;
                        break 'years;
                    }
                    candidates.insert(suffixed);
                }
            }
        }

        'affixes: for word in &base {
            for affixed in pattern_affixes(word) {
                if candidates.len() >= limit {
                    truncated = true;
                    break 'affixes;
                }
                candidates.insert(affixed);
            }
        }

        Wordlist {
            entries: candidates.into_iter().collect(),
            truncated,
        }
    }
}

/// Generates a wordlist from seeds with the built-in substitution table.
pub fn generate_wordlist<I, S>(seeds: I, options: GeneratorOptions) -> Wordlist
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WordlistGenerator::new(options).generate(seeds)
}

/// A deduplicated candidate list in ascending lexicographic order.
#[derive(Debug, Clone)]
pub struct Wordlist {
    entries: Vec<String>,
    truncated: bool,
}

impl Wordlist {
    /// The candidates, sorted ascending by code point.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the candidate cap halted generation early.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Writes the list to `path`, one candidate per line. Overwrites an
    /// existing file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        write_wordlist(path, &self.entries)
    }
}
