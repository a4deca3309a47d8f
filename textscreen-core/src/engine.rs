// textscreen-core/src/engine.rs
//! Defines the core ScreeningEngine trait.
//!
//! The trait decouples callers from the concrete matching strategy, so the
//! production trie engine and the legacy baselines stay interchangeable
//! behind one seam and can be compared output-for-output in tests.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Result of screening one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenOutcome {
    /// Matched registered words. The trie engine reports them in
    /// first-seen order, deduplicated.
    pub matched_words: Vec<String>,
    /// Copy of the input with matched spans masked.
    pub redacted: String,
}

/// A pluggable sensitive-word matcher.
pub trait ScreeningEngine {
    /// Engine name, for logs and comparison reports.
    fn name(&self) -> &'static str;

    /// Find every registered word in `content` and return the matched
    /// words together with the redacted text.
    fn screen(&self, content: &str) -> Result<ScreenOutcome>;
}
