// textscreen-core/src/errors.rs
//! Custom error types for the textscreen-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// Errors surfaced while building a screening engine.
///
/// Matching itself never fails: degraded outcomes are "no match" or
/// "partial vocabulary", not errors. `#[non_exhaustive]` leaves room for
/// new variants without breaking consumers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScreenError {
    #[error("failed to compile vocabulary alternation pattern: {0}")]
    PatternCompilation(#[from] regex::Error),

    #[error("cannot build an alternation pattern from an empty vocabulary")]
    EmptyVocabulary,
}
