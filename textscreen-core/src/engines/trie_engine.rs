// textscreen-core/src/engines/trie_engine.rs
//! The production `ScreeningEngine`: a thin wrapper over `SensitiveTrie`.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::engine::{ScreenOutcome, ScreeningEngine};
use crate::trie::SensitiveTrie;
use crate::vocabulary::Vocabulary;

#[derive(Debug, Default)]
pub struct TrieEngine {
    trie: SensitiveTrie,
}

impl TrieEngine {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            trie: SensitiveTrie::from_vocabulary(vocabulary),
        }
    }

    /// Register another word after construction. Subject to the trie's
    /// single-writer contract.
    pub fn add_word(&mut self, word: &str) {
        self.trie.add_word(word);
    }

    pub fn trie(&self) -> &SensitiveTrie {
        &self.trie
    }
}

impl ScreeningEngine for TrieEngine {
    fn name(&self) -> &'static str {
        "trie"
    }

    fn screen(&self, content: &str) -> Result<ScreenOutcome> {
        let (matched_words, redacted) = self.trie.match_text(content);
        Ok(ScreenOutcome {
            matched_words,
            redacted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_through_the_trait() {
        let vocabulary: Vocabulary = ["垃圾"].into_iter().collect();
        let engine = TrieEngine::new(&vocabulary);
        let outcome = engine.screen("什么垃圾打野").unwrap();
        assert_eq!(outcome.matched_words, vec!["垃圾"]);
        assert_eq!(outcome.redacted, "什么**打野");
    }

    #[test]
    fn grows_after_construction() {
        let mut engine = TrieEngine::new(&Vocabulary::new());
        engine.add_word("牛大大");
        let outcome = engine.screen("今天，牛大大签发军令").unwrap();
        assert_eq!(outcome.matched_words, vec!["牛大大"]);
        assert_eq!(outcome.redacted, "今天，***签发军令");
    }
}
