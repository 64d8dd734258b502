//! Stop-word lists for token normalization.
//!
//! The default is a fixed German+English core set, since judge output and
//! curated references arrive in either language. Callers with other locales
//! substitute their own list; the normalizer treats the list as opaque.

use verdict_core::types::collections::FxHashSet;

/// German function words. Tokens of length <= 2 are dropped before the
/// stop-word check, so two-letter words are omitted here.
pub static GERMAN_CORE: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem",
    "einer", "eines", "und", "oder", "aber", "auch", "als", "auf", "aus",
    "bei", "bis", "durch", "für", "gegen", "ohne", "über", "unter", "vom",
    "von", "vor", "zum", "zur", "ist", "sind", "war", "waren", "wird",
    "werden", "wurde", "wurden", "hat", "haben", "hatte", "hatten", "kann",
    "können", "könnte", "soll", "sollte", "sollten", "muss", "müssen",
    "nicht", "kein", "keine", "noch", "nur", "nach", "man", "mehr", "sehr",
    "sich", "sie", "wie", "was", "wenn", "dass", "dies", "diese", "dieser",
    "dieses", "hier", "dort", "alle", "allem", "sein", "seine", "ihre",
    "ihren", "dabei", "damit", "sowie", "etwa",
];

/// English function words, same length convention as the German list.
pub static ENGLISH_CORE: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "with", "this", "that",
    "from", "they", "them", "their", "there", "have", "has", "had", "was",
    "were", "will", "would", "should", "could", "can", "may", "might", "its",
    "all", "any", "been", "being", "when", "which", "who", "whom", "what",
    "where", "why", "how", "some", "than", "then", "into", "onto", "only",
    "also", "very", "more", "most", "much", "such", "each", "about", "after",
    "before", "between", "during", "through", "over", "under", "other",
    "these", "those", "does", "doing", "done", "while", "because", "out",
    "own", "off", "per", "via",
];

/// The default German+English stop-word set.
pub fn default_stop_words() -> FxHashSet<String> {
    GERMAN_CORE
        .iter()
        .chain(ENGLISH_CORE.iter())
        .map(|w| (*w).to_string())
        .collect()
}
