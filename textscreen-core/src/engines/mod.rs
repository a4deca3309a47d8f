// textscreen-core/src/engines/mod.rs
//! Concrete `ScreeningEngine` implementations.
//!
//! `trie_engine` is the production matcher. `naive_engine` and
//! `regex_engine` are inferior legacy baselines retained so tests can
//! validate that the trie's matched set and mask lengths agree with the
//! simpler implementations on plain inputs.
//!
//! License: MIT OR Apache-2.0

pub mod naive_engine;
pub mod regex_engine;
pub mod trie_engine;

pub use naive_engine::NaiveEngine;
pub use regex_engine::RegexEngine;
pub use trie_engine::TrieEngine;
