// textscreen-core/src/engines/regex_engine.rs
//! Legacy alternation baseline.
//!
//! Compiles the vocabulary into a single `w1|w2|…` pattern. Alternatives
//! are ordered longest first so the longest word wins at each position,
//! matching the trie's policy; `(?i)` makes Latin matching comparable too.
//! Noise interleaved inside a word is still invisible to this engine,
//! which is why it is a baseline and not the production matcher.
//!
//! License: MIT OR Apache-2.0

use std::iter;

use anyhow::Result;
use log::debug;
use regex::Regex;

use crate::engine::{ScreenOutcome, ScreeningEngine};
use crate::errors::ScreenError;
use crate::trie::DEFAULT_MASK;
use crate::vocabulary::{normalize_word, Vocabulary};

#[derive(Debug)]
pub struct RegexEngine {
    pattern: Regex,
    mask: char,
}

impl RegexEngine {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ScreenError> {
        let mut words: Vec<String> = vocabulary.iter().filter_map(normalize_word).collect();
        if words.is_empty() {
            return Err(ScreenError::EmptyVocabulary);
        }
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i){alternation}"))?;
        debug!("compiled alternation of {} words", words.len());
        Ok(Self {
            pattern,
            mask: DEFAULT_MASK,
        })
    }
}

impl ScreeningEngine for RegexEngine {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn screen(&self, content: &str) -> Result<ScreenOutcome> {
        let mut matched_words: Vec<String> = Vec::new();
        let redacted = self.pattern.replace_all(content, |caps: &regex::Captures<'_>| {
            let hit = caps[0].to_lowercase();
            if !matched_words.contains(&hit) {
                matched_words.push(hit);
            }
            iter::repeat(self.mask)
                .take(caps[0].chars().count())
                .collect::<String>()
        });
        let redacted = redacted.into_owned();
        Ok(ScreenOutcome {
            matched_words,
            redacted,
        })
    }
}
