// textscreen-core/src/charclass.rs
//! Rune-category dispatch for the scanner.
//!
//! Every code point in an input falls into exactly one of three classes.
//! Classification is a pure function; the scanner consults it only when a
//! code point has no edge of its own in the trie.
//!
//! License: MIT OR Apache-2.0

pub use textscreen_pinyin::is_cjk;

/// The category of one code point, as seen by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters and digits, Latin or otherwise (excluding CJK ideographs).
    Alphanumeric,
    /// Chinese ideographs (U+4E00..=U+9FA5).
    Cjk,
    /// Punctuation, whitespace, symbols, emoji. Skippable mid-walk.
    Noise,
}

/// Classify one code point.
pub fn classify(c: char) -> CharClass {
    // CJK first: `is_alphanumeric` is also true for ideographs.
    if is_cjk(c) {
        CharClass::Cjk
    } else if c.is_alphanumeric() {
        CharClass::Alphanumeric
    } else {
        CharClass::Noise
    }
}

/// Whether `word` contains at least one Chinese ideograph.
pub fn contains_cjk(word: &str) -> bool {
    word.chars().any(is_cjk)
}
