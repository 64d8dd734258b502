//! Token normalization: lowercase, strip punctuation, drop short tokens
//! and stop-words.
//!
//! Total and deterministic: empty input produces an empty set, never an
//! error.

use verdict_core::types::collections::FxHashSet;

/// Normalize text into a token set.
///
/// Lowercases, replaces every non-alphanumeric character with whitespace
/// (Unicode-aware, so umlauts survive), splits on whitespace, then drops
/// tokens of length <= 2 and tokens in `stop_words`.
pub fn normalize(text: &str, stop_words: &FxHashSet<String>) -> FxHashSet<String> {
    cleaned(text)
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .filter(|t| !stop_words.contains(*t))
        .map(|t| t.to_string())
        .collect()
}

/// Canonical single-string form of a text: lowercase, punctuation stripped,
/// whitespace collapsed. Used for duplicate detection across descriptions.
pub fn canonical_text(text: &str) -> String {
    cleaned(text).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-separated word count of raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn cleaned(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}
