// textscreen-core/src/vocabulary.rs
//! Vocabulary assembly: literal banned words plus their pinyin evasion
//! variants.
//!
//! The word list is an explicit value handed to a matcher's constructor,
//! never process-wide state. `VocabularyBuilder` owns the one external call
//! in the whole pipeline, the phonetic transliteration behind the
//! [`Transliterate`] trait: each Chinese-containing word is offered for
//! conversion, and a per-word failure drops only that word's phonetic
//! variant, never the literal word and never the rest of the batch.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use textscreen_pinyin::PinyinTable;

use crate::charclass::contains_cjk;

/// Normalize a word the way the matcher stores it: trim surrounding
/// whitespace, fold ASCII letters to lowercase, keep everything else (CJK
/// included) verbatim. Returns `None` for empty or whitespace-only input.
pub fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().map(|c| c.to_ascii_lowercase()).collect())
}

/// The word set a matcher is seeded with.
///
/// Insertion order is preserved; duplicates are harmless because the trie
/// merges shared prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Boundary to the phonetic transliteration service.
///
/// An `Err` means "no phonetic variant available for this word"; it never
/// fails an overall vocabulary build.
pub trait Transliterate {
    fn convert(&self, word: &str) -> Result<String>;
}

impl<T: Transliterate + ?Sized> Transliterate for &T {
    fn convert(&self, word: &str) -> Result<String> {
        (**self).convert(word)
    }
}

impl Transliterate for PinyinTable {
    fn convert(&self, word: &str) -> Result<String> {
        Ok(PinyinTable::convert(self, word)?)
    }
}

/// Adapter for using a plain function as the transliteration boundary,
/// mainly in tests and embedding glue.
pub struct TransliterateFn<F>(pub F);

impl<F> Transliterate for TransliterateFn<F>
where
    F: Fn(&str) -> Result<String>,
{
    fn convert(&self, word: &str) -> Result<String> {
        (self.0)(word)
    }
}

/// Assembles the vocabulary a matcher is seeded with: every literal word,
/// followed by the phonetic spelling of each Chinese-containing word whose
/// conversion succeeded.
#[derive(Debug)]
pub struct VocabularyBuilder<T: Transliterate> {
    transliterator: T,
    words: Vec<String>,
}

impl<T: Transliterate> VocabularyBuilder<T> {
    pub fn new(transliterator: T) -> Self {
        Self {
            transliterator,
            words: Vec::new(),
        }
    }

    pub fn add_word(&mut self, word: impl Into<String>) -> &mut Self {
        self.words.push(word.into());
        self
    }

    pub fn add_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Consume the builder and produce the merged vocabulary.
    ///
    /// Only words containing Chinese characters are offered for
    /// transliteration; a failed conversion is logged and skipped.
    pub fn build(self) -> Vocabulary {
        let mut vocabulary: Vocabulary = self.words.iter().cloned().collect();
        for word in &self.words {
            if !contains_cjk(word) {
                continue;
            }
            match self.transliterator.convert(word) {
                Ok(pinyin) => {
                    debug!("phonetic variant for '{word}': '{pinyin}'");
                    vocabulary.push(pinyin);
                }
                Err(err) => {
                    debug!("no phonetic variant for '{word}': {err:#}");
                }
            }
        }
        vocabulary
    }
}
