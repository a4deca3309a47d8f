// textscreen-core/src/redactor.rs
//! Length-preserving masking of matched spans.
//!
//! License: MIT OR Apache-2.0

use crate::trie::MatchSpan;

/// Rebuild the source with every span replaced by `mask`, one mask
/// character per covered code point. Unmatched runs are copied verbatim,
/// so the output's code-point length always equals the input's.
///
/// `spans` must be sorted by start and non-overlapping, which is what
/// [`crate::trie::SensitiveTrie::find_spans`] produces.
pub fn redact(runes: &[char], spans: &[MatchSpan], mask: char) -> String {
    let mut out = String::with_capacity(runes.len());
    let mut cursor = 0;
    for span in spans {
        debug_assert!(span.start >= cursor && span.end <= runes.len());
        out.extend(&runes[cursor..span.start]);
        out.extend(std::iter::repeat(mask).take(span.len()));
        cursor = span.end;
    }
    out.extend(&runes[cursor..]);
    out
}
