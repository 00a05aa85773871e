//! Leetspeak substitution table and variant expansion.

use std::collections::HashMap;

/// Built-in substitution entries: visually similar alternatives per letter.
const DEFAULT_ENTRIES: [(char, &[&str]); 6] = [
    ('a', &["a", "@", "4"]),
    ('e', &["e", "3"]),
    ('i', &["i", "1", "!"]),
    ('o', &["o", "0"]),
    ('s', &["s", "$", "5"]),
    ('t', &["t", "7"]),
];

/// Mapping from a lowercase letter to its substitute alternatives.
///
/// Lookup is ASCII case-insensitive; characters without an entry are their
/// own sole substitute. Alternatives are emitted as written - the built-in
/// table stores lowercase and symbol literals, so a mapped uppercase letter
/// substitutes through the lowercase alternatives and its original casing is
/// not preserved. Unmapped characters pass through unchanged.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    entries: HashMap<char, Vec<String>>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        let entries = DEFAULT_ENTRIES
            .iter()
            .map(|(c, subs)| (*c, subs.iter().map(|s| (*s).to_string()).collect()))
            .collect();
        Self { entries }
    }
}

impl SubstitutionTable {
    /// A table with no entries; every character substitutes only to itself.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Sets the substitute alternatives for a letter (keyed lowercase).
    ///
    /// An empty list removes the entry, restoring identity behavior for the
    /// letter; entries are otherwise always non-empty.
    pub fn set<I, S>(&mut self, letter: char, substitutes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let subs: Vec<String> = substitutes.into_iter().map(Into::into).collect();
        let key = letter.to_ascii_lowercase();
        if subs.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, subs);
        }
    }

    /// Substitute alternatives for a character, if its lowercase form has an
    /// entry.
    pub fn substitutes(&self, c: char) -> Option<&[String]> {
        self.entries
            .get(&c.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// Lazy iterator over every substitution variant of `word`.
    ///
    /// The full expansion is the cartesian product of the per-position
    /// alternatives; nothing is materialized up front. The yielded set has
    /// no meaningful order - consumers impose ordering at assembly. An empty
    /// word yields exactly one variant, the empty string.
    pub fn variants(&self, word: &str) -> LeetVariants<'_> {
        let pools: Vec<Pool<'_>> = word
            .chars()
            .map(|c| match self.substitutes(c) {
                Some(subs) => Pool::Table(subs),
                None => Pool::Identity(c),
            })
            .collect();
        let indices = vec![0; pools.len()];
        LeetVariants {
            pools,
            indices,
            exhausted: false,
        }
    }
}

/// Per-position alternatives: a table entry, or the character itself.
enum Pool<'t> {
    Table(&'t [String]),
    Identity(char),
}

impl Pool<'_> {
    fn len(&self) -> usize {
        match self {
            Pool::Table(subs) => subs.len(),
            Pool::Identity(_) => 1,
        }
    }

    fn push_choice(&self, index: usize, out: &mut String) {
        match self {
            Pool::Table(subs) => out.push_str(&subs[index]),
            Pool::Identity(c) => out.push(*c),
        }
    }
}

/// Lazy cartesian-product iterator over substitution variants.
///
/// Positions advance odometer-style, rightmost fastest.
pub struct LeetVariants<'t> {
    pools: Vec<Pool<'t>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl LeetVariants<'_> {
    /// Total number of variants in the full expansion (product of branching
    /// factors), independent of iteration progress. Saturates.
    pub fn variant_count(&self) -> u128 {
        self.pools
            .iter()
            .fold(1u128, |acc, p| acc.saturating_mul(p.len() as u128))
    }
}

impl Iterator for LeetVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let mut variant = String::new();
        for (pool, &index) in self.pools.iter().zip(&self.indices) {
            pool.push_choice(index, &mut variant);
        }

        self.exhausted = true;
        for pos in (0..self.pools.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.pools[pos].len() {
                self.exhausted = false;
                break;
            }
            self.indices[pos] = 0;
        }

        Some(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn variant_set(word: &str) -> BTreeSet<String> {
        SubstitutionTable::default().variants(word).collect()
    }

    #[test]
    fn test_single_mapped_letter() {
        let expected: BTreeSet<String> =
            ["a", "@", "4"].iter().map(|s| s.to_string()).collect();
        assert_eq!(variant_set("a"), expected);
    }

    #[test]
    fn test_two_mapped_letters() {
        let expected: BTreeSet<String> = ["at", "a7", "@t", "@7", "4t", "47"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(variant_set("at"), expected);
    }

    #[test]
    fn test_unmapped_letter_is_identity() {
        let expected: BTreeSet<String> = ["b".to_string()].into_iter().collect();
        assert_eq!(variant_set("b"), expected);
    }

    #[test]
    fn test_mapped_uppercase_loses_casing() {
        // 'A' looks up the 'a' entry, whose alternatives are lowercase
        // literals; "A" itself is never yielded.
        let variants = variant_set("A");
        assert!(variants.contains("a"));
        assert!(!variants.contains("A"));
    }

    #[test]
    fn test_unmapped_uppercase_keeps_casing() {
        let expected: BTreeSet<String> = ["B".to_string()].into_iter().collect();
        assert_eq!(variant_set("B"), expected);
    }

    #[test]
    fn test_empty_word_yields_empty_string() {
        let variants: Vec<String> = SubstitutionTable::default().variants("").collect();
        assert_eq!(variants, vec![String::new()]);
    }

    #[test]
    fn test_variant_count() {
        let table = SubstitutionTable::default();
        // c: 1, a: 3, t: 2
        assert_eq!(table.variants("cat").variant_count(), 6);
        assert_eq!(table.variants("").variant_count(), 1);
        assert_eq!(table.variants("xyz").variant_count(), 1);
    }

    #[test]
    fn test_expansion_matches_variant_count() {
        let table = SubstitutionTable::default();
        let variants: Vec<String> = table.variants("cat").collect();
        assert_eq!(variants.len() as u128, table.variants("cat").variant_count());
    }

    #[test]
    fn test_empty_table_is_all_identity() {
        let table = SubstitutionTable::empty();
        let variants: Vec<String> = table.variants("Seat").collect();
        assert_eq!(variants, vec!["Seat".to_string()]);
    }

    #[test]
    fn test_custom_entry() {
        let mut table = SubstitutionTable::empty();
        table.set('b', ["b", "8"]);
        let variants: BTreeSet<String> = table.variants("ab").collect();
        let expected: BTreeSet<String> =
            ["ab", "a8"].iter().map(|s| s.to_string()).collect();
        assert_eq!(variants, expected);
    }

    #[test]
    fn test_clearing_an_entry_restores_identity() {
        let mut table = SubstitutionTable::default();
        table.set('a', Vec::<String>::new());
        let variants: Vec<String> = table.variants("Aa").collect();
        assert_eq!(variants, vec!["Aa".to_string()]);
    }

    #[test]
    fn test_substitutes_lookup_is_case_insensitive() {
        let table = SubstitutionTable::default();
        assert_eq!(table.substitutes('S'), table.substitutes('s'));
        assert!(table.substitutes('z').is_none());
    }
}
