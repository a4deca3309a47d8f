// textscreen-core/src/engines/naive_engine.rs
//! Brute-force substring baseline.
//!
//! Replaces every literal occurrence of each word in turn. Blind to
//! interleaved noise and to letter case, and it reports matched words in
//! vocabulary order rather than first-seen order. Retained only so the
//! trie engine's output can be validated against it on plain inputs.
//!
//! License: MIT OR Apache-2.0

use std::iter;

use anyhow::Result;

use crate::engine::{ScreenOutcome, ScreeningEngine};
use crate::trie::DEFAULT_MASK;
use crate::vocabulary::{normalize_word, Vocabulary};

#[derive(Debug)]
pub struct NaiveEngine {
    words: Vec<String>,
    mask: char,
}

impl NaiveEngine {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            words: vocabulary.iter().filter_map(normalize_word).collect(),
            mask: DEFAULT_MASK,
        }
    }
}

impl ScreeningEngine for NaiveEngine {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn screen(&self, content: &str) -> Result<ScreenOutcome> {
        let mut redacted = content.to_string();
        let mut matched_words = Vec::new();
        for word in &self.words {
            if !redacted.contains(word.as_str()) {
                continue;
            }
            let mask: String = iter::repeat(self.mask).take(word.chars().count()).collect();
            redacted = redacted.replace(word.as_str(), &mask);
            if !matched_words.contains(word) {
                matched_words.push(word.clone());
            }
        }
        Ok(ScreenOutcome {
            matched_words,
            redacted,
        })
    }
}
