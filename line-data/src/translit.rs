//! Script transliteration for line codes.
//!
//! Line codes in the dataset are written in Serbian Cyrillic, while users
//! frequently type them in Latin. The [`Transliterator`] derives the Latin
//! variant of a code from an injectable [`TransliterationTable`], so that
//! alternate scripts can be tested in isolation from the built-in table.

use std::collections::HashMap;

/// Substitutions used by the line dataset's producer.
///
/// Several entries are visual lookalikes rather than phonetic equivalents
/// (`Н` → `H`, `Р` → `P`, `С` → `C`), and distinct letters may collapse to
/// the same Latin text.
#[rustfmt::skip]
const SERBIAN_CYRILLIC: &[(char, &str)] = &[
    ('А', "A"), ('а', "a"), ('В', "B"), ('в', "b"), ('Г', "G"), ('г', "g"),
    ('Д', "D"), ('д', "d"), ('Е', "E"), ('е', "e"), ('З', "Z"), ('з', "z"),
    ('И', "I"), ('и', "i"), ('Й', "J"), ('й', "j"), ('К', "K"), ('к', "k"),
    ('Л', "L"), ('л', "l"), ('М', "M"), ('м', "m"), ('Н', "H"), ('н', "h"),
    ('О', "O"), ('о', "o"), ('П', "P"), ('п', "p"), ('Р', "P"), ('р', "r"),
    ('С', "C"), ('с', "c"), ('Т', "T"), ('т', "t"), ('У', "U"), ('у', "u"),
    ('Ф', "F"), ('ф', "f"), ('Х', "H"), ('х', "h"), ('Ц', "C"), ('ц', "c"),
    ('Ч', "C"), ('ч', "c"), ('Ш', "S"), ('ш', "s"), ('Ђ', "Dj"), ('ђ', "dj"),
    ('Ж', "Z"), ('ж', "z"), ('Ћ', "C"), ('ћ', "c"),
];

/// Error returned when building an invalid transliteration table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A rule with an empty source sequence would match everywhere
    #[error("empty source sequence for target {target:?}")]
    EmptySource { target: String },
}

/// An immutable set of source → target substitutions.
///
/// Sources may span several characters. Rules are indexed by their first
/// character and kept longest-source-first, so lookup at a position is a
/// single hash probe followed by a short prefix scan.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    rules: HashMap<char, Vec<(String, String)>>,
    len: usize,
}

impl TransliterationTable {
    /// Build a table from `(source, target)` pairs.
    ///
    /// A repeated source replaces the earlier target. Fails if any source
    /// is empty.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut table = Self::default();
        for (source, target) in pairs {
            let source = source.into();
            let target = target.into();
            let Some(first) = source.chars().next() else {
                return Err(TableError::EmptySource { target });
            };
            table.insert(first, source, target);
        }
        Ok(table)
    }

    /// The Serbian Cyrillic → Latin table used for line codes.
    pub fn serbian_cyrillic() -> Self {
        let mut table = Self::default();
        for &(source, target) in SERBIAN_CYRILLIC {
            table.insert(source, source.to_string(), target.to_string());
        }
        table
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the target for an exact source sequence.
    pub fn get(&self, source: &str) -> Option<&str> {
        let first = source.chars().next()?;
        self.rules
            .get(&first)?
            .iter()
            .find(|(s, _)| s == source)
            .map(|(_, t)| t.as_str())
    }

    /// `first` must be the first character of `source`.
    fn insert(&mut self, first: char, source: String, target: String) {
        let bucket = self.rules.entry(first).or_default();

        if let Some(existing) = bucket.iter_mut().find(|(s, _)| *s == source) {
            existing.1 = target;
            return;
        }

        bucket.push((source, target));
        bucket.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self.len += 1;
    }

    /// Find the longest rule matching at the start of `rest`.
    ///
    /// Returns the byte length of the matched source and the target.
    fn longest_match(&self, rest: &str) -> Option<(usize, &str)> {
        let first = rest.chars().next()?;
        self.rules
            .get(&first)?
            .iter()
            .find(|(source, _)| rest.starts_with(source.as_str()))
            .map(|(source, target)| (source.len(), target.as_str()))
    }
}

/// Converts line codes between scripts using a [`TransliterationTable`].
///
/// # Examples
///
/// ```
/// use line_data::translit::Transliterator;
///
/// let translit = Transliterator::default();
/// assert_eq!(translit.transliterate("ЕКО1"), "EKO1");
/// assert_eq!(translit.transliterate("26Л"), "26L");
///
/// // Latin input is returned unchanged
/// assert_eq!(translit.transliterate("EKO1"), "EKO1");
/// ```
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: TransliterationTable,
}

impl Transliterator {
    /// Create a transliterator over the given table.
    pub fn new(table: TransliterationTable) -> Self {
        Self { table }
    }

    /// The table this transliterator applies.
    pub fn table(&self) -> &TransliterationTable {
        &self.table
    }

    /// Replace every mapped sequence in `input`, leaving other characters as-is.
    ///
    /// The input is scanned once, left to right, and substituted output is
    /// never rescanned.
    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(c) = rest.chars().next() {
            match self.table.longest_match(rest) {
                Some((source_len, target)) => {
                    out.push_str(target);
                    rest = &rest[source_len..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(TransliterationTable::serbian_cyrillic())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy mixing Cyrillic letters, Latin letters and digits
    fn code_string() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                proptest::char::range('\u{0400}', '\u{045F}'),
                proptest::char::range('A', 'Z'),
                proptest::char::range('0', '9'),
            ],
            0..12,
        )
        .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    proptest! {
        /// Applying the table twice gives the same result as once
        #[test]
        fn idempotent(s in code_string()) {
            let translit = Transliterator::default();
            let once = translit.transliterate(&s);
            let twice = translit.transliterate(&once);
            prop_assert_eq!(once, twice);
        }

        /// ASCII input is never changed
        #[test]
        fn ascii_unchanged(s in "[ -~]{0,20}") {
            let translit = Transliterator::default();
            prop_assert_eq!(translit.transliterate(&s), s);
        }

        /// Every mapped letter is gone from the output
        #[test]
        fn no_mapped_letters_remain(s in code_string()) {
            let translit = Transliterator::default();
            let out = translit.transliterate(&s);
            for c in out.chars() {
                let mut buf = [0u8; 4];
                prop_assert!(translit.table().get(c.encode_utf8(&mut buf)).is_none());
            }
        }
    }
}
