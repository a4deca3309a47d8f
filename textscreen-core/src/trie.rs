// textscreen-core/src/trie.rs
//! The trie-based sensitive-word matcher.
//!
//! A `SensitiveTrie` indexes the vocabulary as a prefix tree over code
//! points and scans input text in one forward pass. At each scan position
//! the walk folds ASCII case, may consume noise code points (punctuation,
//! whitespace, symbols, emoji) that have no edge of their own, and keeps
//! the longest registered word it reaches. Spans never overlap and come
//! back in increasing start order, which is exactly what the redactor
//! needs for position-for-position masking.
//!
//! The trie is a single mutable structure with no internal locking:
//! callers must serialize insertions against in-flight matches and against
//! each other.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::charclass::{classify, CharClass};
use crate::redactor;
use crate::vocabulary::{normalize_word, Vocabulary};

/// Mask character used unless a matcher is built with another one.
pub const DEFAULT_MASK: char = '*';

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: Option<Terminal>,
}

#[derive(Debug)]
struct Terminal {
    /// The registered word, in normalized form.
    word: String,
    /// Its length in code points.
    char_len: usize,
}

/// One matched, maskable region of the source text.
///
/// `start..end` is a half-open range over the source's code-point indices
/// and may be longer than the matched word when noise was consumed inside
/// the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// First covered code-point index.
    pub start: usize,
    /// One past the last covered code-point index.
    pub end: usize,
    /// The registered word, in normalized form.
    pub word: String,
}

impl MatchSpan {
    /// Covered length in code points.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// The prefix-tree matcher.
#[derive(Debug)]
pub struct SensitiveTrie {
    root: TrieNode,
    mask: char,
    word_count: usize,
}

impl Default for SensitiveTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitiveTrie {
    /// An empty trie masking with [`DEFAULT_MASK`].
    pub fn new() -> Self {
        Self::with_mask(DEFAULT_MASK)
    }

    /// An empty trie masking with `mask`.
    pub fn with_mask(mask: char) -> Self {
        Self {
            root: TrieNode::default(),
            mask,
            word_count: 0,
        }
    }

    /// Build a trie seeded with an explicit vocabulary.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let mut trie = Self::new();
        trie.add_words(vocabulary.iter());
        trie
    }

    /// Number of distinct registered words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Register one word.
    ///
    /// The word is normalized (trimmed, ASCII case folded); empty or
    /// whitespace-only input is silently dropped. Re-adding an existing
    /// word is a no-op. May be called at any point in the trie's life,
    /// subject to the single-writer contract above.
    pub fn add_word(&mut self, word: &str) {
        let Some(normalized) = normalize_word(word) else {
            debug!("ignoring empty sensitive word");
            return;
        };
        let char_len = normalized.chars().count();
        let mut node = &mut self.root;
        for ch in normalized.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal.is_none() {
            trace!("registered sensitive word '{normalized}' ({char_len} code points)");
            node.terminal = Some(Terminal {
                word: normalized,
                char_len,
            });
            self.word_count += 1;
        }
    }

    /// Register every word in `words`; order does not matter and invalid
    /// entries are silently ignored.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Scan `text` once and return every matched span, non-overlapping and
    /// in increasing start order.
    pub fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        let runes: Vec<char> = text.chars().collect();
        self.scan(&runes)
    }

    /// Match and redact in one call.
    ///
    /// Returns the matched words in first-seen order (deduplicated) and a
    /// redacted copy of `text` whose code-point length equals the input's.
    /// With no match this is the identity transform.
    pub fn match_text(&self, text: &str) -> (Vec<String>, String) {
        let runes: Vec<char> = text.chars().collect();
        let spans = self.scan(&runes);
        if spans.is_empty() {
            return (Vec::new(), text.to_string());
        }
        let mut matched_words: Vec<String> = Vec::new();
        for span in &spans {
            if !matched_words.iter().any(|w| w == &span.word) {
                matched_words.push(span.word.clone());
            }
        }
        let redacted = redactor::redact(&runes, &spans, self.mask);
        (matched_words, redacted)
    }

    fn scan(&self, runes: &[char]) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        let mut i = 0;
        while i < runes.len() {
            match self.longest_match_at(runes, i) {
                Some(span) => {
                    trace!("matched '{}' at {}..{}", span.word, span.start, span.end);
                    i = span.end;
                    spans.push(span);
                }
                None => i += 1,
            }
        }
        spans
    }

    /// Walk the trie from `start`, folding ASCII case. A code point with no
    /// edge of its own is consumed without moving in the trie when it
    /// classifies as noise, except at the very first position: a span never
    /// begins on skipped noise. Returns the longest terminal reached.
    fn longest_match_at(&self, runes: &[char], start: usize) -> Option<MatchSpan> {
        let mut node = &self.root;
        let mut best: Option<(usize, &Terminal)> = None;
        let mut j = start;
        while j < runes.len() {
            let folded = runes[j].to_ascii_lowercase();
            if let Some(child) = node.children.get(&folded) {
                node = child;
                j += 1;
                if let Some(terminal) = &node.terminal {
                    best = Some((j, terminal));
                }
            } else if j > start && classify(runes[j]) == CharClass::Noise {
                j += 1;
            } else {
                break;
            }
        }
        best.map(|(end, terminal)| {
            debug_assert!(end - start >= terminal.char_len);
            MatchSpan {
                start,
                end,
                word: terminal.word.clone(),
            }
        })
    }
}
