// textscreen-core/src/lib.rs
//! # textscreen Core Library
//!
//! `textscreen-core` detects and redacts sensitive (profane/banned)
//! vocabulary in free text that mixes Chinese ideographs, Latin letters,
//! digits, and punctuation. The production matcher is a prefix tree
//! (`SensitiveTrie`) that scans input once, tolerates junk characters
//! interleaved inside a banned word, catches Latin phonetic ("pinyin")
//! spellings of Chinese words, and accepts new words at runtime without a
//! rebuild. Redacted output always has exactly as many code points as the
//! input, so downstream systems can rely on position-for-position masking.
//!
//! ## Modules
//!
//! * `charclass`: rune-category dispatch (alphanumeric / CJK / noise).
//! * `trie`: the `SensitiveTrie` matcher and `MatchSpan` reporting type.
//! * `redactor`: the pure span-masking transform.
//! * `vocabulary`: `Vocabulary` values, the `Transliterate` boundary, and
//!   the builder that merges literal and phonetic word forms.
//! * `engine`: the pluggable `ScreeningEngine` trait.
//! * `engines`: concrete engines (production trie, legacy baselines).
//! * `errors`: the library's error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use textscreen_core::{SensitiveTrie, Vocabulary, VocabularyBuilder};
//! use textscreen_pinyin::PinyinTable;
//!
//! // The syllable table and word list are explicit values supplied by the
//! // embedding application; there is no global state.
//! let table = PinyinTable::from_entries([('傻', "sha"), ('逼', "bi")]);
//! let mut builder = VocabularyBuilder::new(table);
//! builder.add_words(["傻逼", "sb"]);
//! let vocabulary: Vocabulary = builder.build();
//!
//! let mut trie = SensitiveTrie::from_vocabulary(&vocabulary);
//! let (words, redacted) = trie.match_text("你是一个大傻&逼");
//! assert_eq!(words, vec!["傻逼"]);
//! assert_eq!(redacted, "你是一个大***");
//!
//! // Romanized evasions are caught through the phonetic variant.
//! let (words, _) = trie.match_text("shabi东西");
//! assert_eq!(words, vec!["shabi"]);
//!
//! // The vocabulary can grow at any time.
//! trie.add_word("牛大大");
//! let (words, redacted) = trie.match_text("今天，牛大大签发军令");
//! assert_eq!(words, vec!["牛大大"]);
//! assert_eq!(redacted, "今天，***签发军令");
//! ```
//!
//! ## Concurrency
//!
//! The trie is a single mutable structure with no internal locking. The
//! contract is single-writer/no-concurrent-reader: callers serialize
//! `add_word`/`add_words` against in-flight `match_text` calls and against
//! each other.
//!
//! License: MIT OR Apache-2.0

pub mod charclass;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod redactor;
pub mod trie;
pub mod vocabulary;

/// Re-exports the rune-category dispatch used by the scanner.
pub use charclass::{classify, contains_cjk, CharClass};

/// Re-exports the pluggable engine seam.
pub use engine::{ScreenOutcome, ScreeningEngine};

/// Re-exports the concrete engine implementations.
pub use engines::{NaiveEngine, RegexEngine, TrieEngine};

/// Re-exports the library error type.
pub use errors::ScreenError;

/// Re-exports the span-masking transform.
pub use redactor::redact;

/// Re-exports the core matcher and its reporting type.
pub use trie::{MatchSpan, SensitiveTrie, DEFAULT_MASK};

/// Re-exports vocabulary assembly and the transliteration boundary.
pub use vocabulary::{
    normalize_word, Transliterate, TransliterateFn, Vocabulary, VocabularyBuilder,
};
