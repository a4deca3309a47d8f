// textscreen-pinyin/src/lib.rs
//! Table-driven Chinese-to-pinyin transliteration.
//!
//! Banned-word lists that contain Chinese characters are routinely evaded by
//! spelling the word out in Latin letters ("傻逼" typed as "shabi"). This
//! crate produces those phonetic spellings so the matcher can register them
//! alongside the literal words.
//!
//! The syllable table is supplied programmatically by the embedding
//! application; nothing ships on disk and there is no global state. A word
//! converts as a whole: every CJK character is replaced by its registered
//! syllable, ASCII letters are folded to lowercase, everything else passes
//! through unchanged. A CJK character without a registered reading fails the
//! whole word with a typed error, which callers treat as "no phonetic
//! variant available".
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

/// Inclusive range of the CJK ideographs considered Chinese here.
pub const CJK_RANGE: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// Whether `c` is a Chinese ideograph.
pub fn is_cjk(c: char) -> bool {
    CJK_RANGE.contains(&c)
}

/// Errors raised while transliterating a word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PinyinError {
    #[error("no pinyin reading registered for character '{0}'")]
    MissingReading(char),
}

/// A per-character syllable table.
///
/// Readings are plain lowercase syllables without tone marks; the last
/// registration for a character wins.
#[derive(Debug, Clone, Default)]
pub struct PinyinTable {
    readings: HashMap<char, String>,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(character, reading)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (ch, reading) in entries {
            table.insert(ch, reading);
        }
        table
    }

    /// Register the reading for one character.
    pub fn insert(&mut self, ch: char, reading: impl Into<String>) {
        self.readings.insert(ch, reading.into());
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Convert a word into its flat Latin spelling ("傻逼" -> "shabi").
    ///
    /// Fails on the first CJK character without a registered reading; the
    /// caller decides whether that is fatal (for vocabulary building it is
    /// not).
    pub fn convert(&self, word: &str) -> Result<String, PinyinError> {
        let mut spelled = String::with_capacity(word.len());
        for ch in word.chars() {
            if is_cjk(ch) {
                let reading = self
                    .readings
                    .get(&ch)
                    .ok_or(PinyinError::MissingReading(ch))?;
                spelled.push_str(reading);
            } else {
                spelled.push(ch.to_ascii_lowercase());
            }
        }
        debug!("transliterated '{word}' -> '{spelled}'");
        Ok(spelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PinyinTable {
        PinyinTable::from_entries([('傻', "sha"), ('逼', "bi"), ('垃', "la"), ('圾', "ji")])
    }

    #[test]
    fn converts_all_chinese_word() {
        assert_eq!(table().convert("傻逼").unwrap(), "shabi");
        assert_eq!(table().convert("垃圾").unwrap(), "laji");
    }

    #[test]
    fn folds_latin_and_passes_noise_through() {
        assert_eq!(table().convert("SB傻-逼").unwrap(), "sbsha-bi");
    }

    #[test]
    fn missing_reading_fails_the_word() {
        assert_eq!(
            table().convert("傻瓜"),
            Err(PinyinError::MissingReading('瓜'))
        );
    }

    #[test]
    fn last_registration_wins() {
        let mut t = table();
        t.insert('逼', "bii");
        assert_eq!(t.convert("逼").unwrap(), "bii");
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn cjk_range_boundaries() {
        assert!(is_cjk('\u{4e00}'));
        assert!(is_cjk('\u{9fa5}'));
        assert!(is_cjk('傻'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('☺'));
        assert!(!is_cjk('\u{4dff}'));
    }
}
