//! First-match-wins taxonomy classification over finding text.
//!
//! Builds one Aho-Corasick automaton over all category keywords so each
//! finding is scanned once regardless of table size. "First match" follows
//! table order: the earliest category with any keyword hit wins, which the
//! automaton answers as the minimum category index across hits.

use aho_corasick::AhoCorasick;

use verdict_core::errors::TableError;

use super::tables::TaxonomyCategory;

pub struct TaxonomyClassifier {
    automaton: AhoCorasick,
    /// Pattern index → category index.
    category_of_pattern: Vec<usize>,
    names: Vec<String>,
}

impl TaxonomyClassifier {
    pub fn new(taxonomy: &[TaxonomyCategory]) -> Result<Self, TableError> {
        let mut patterns = Vec::new();
        let mut category_of_pattern = Vec::new();
        let mut names = Vec::with_capacity(taxonomy.len());

        for (category_index, category) in taxonomy.iter().enumerate() {
            if category.keywords.is_empty() {
                return Err(TableError::EmptyKeywordList(category.name.clone()));
            }
            names.push(category.name.clone());
            for keyword in &category.keywords {
                patterns.push(keyword.to_lowercase());
                category_of_pattern.push(category_index);
            }
        }

        let automaton = AhoCorasick::new(&patterns)
            .map_err(|e| TableError::InvalidTable(format!("automaton build failed: {e}")))?;

        Ok(Self {
            automaton,
            category_of_pattern,
            names,
        })
    }

    /// Classify a finding's text. Returns the winning category name, or
    /// `None` when no keyword matches (the caller records "uncategorized").
    pub fn classify(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        let winner = self
            .automaton
            .find_iter(&lowered)
            .map(|m| self.category_of_pattern[m.pattern().as_usize()])
            .min()?;
        Some(&self.names[winner])
    }
}
