//! Text normalization, the leaf every other component builds on.

pub mod normalize;
pub mod stopwords;

pub use normalize::{canonical_text, normalize, word_count};
pub use stopwords::default_stop_words;
