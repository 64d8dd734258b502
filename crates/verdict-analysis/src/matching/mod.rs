//! Similarity matching: exact text equality or token-set Jaccard.
//!
//! The threshold is a per-call parameter, never a global constant: the two
//! standard use sites differ (0.7 for ground-truth matching, 0.5 for
//! uniqueness/duplicate detection) and callers choose per purpose.

use serde::Serialize;

use verdict_core::errors::EvaluationError;
use verdict_core::types::collections::FxHashSet;
use verdict_core::types::finding::Finding;

use crate::text::{normalize, stopwords};

/// How a match decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMethod {
    /// Case-insensitive equality of titles or descriptions.
    Exact,
    /// Jaccard similarity over normalized token sets.
    KeywordJaccard,
}

/// Outcome of comparing two findings. Ephemeral: produced and consumed
/// within a single evaluation call, never persisted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchDecision {
    pub matched: bool,
    /// Similarity in [0, 1]. 1.0 for exact matches, 0.0 when either token
    /// set is empty.
    pub similarity: f64,
    pub method: MatchMethod,
}

/// Compute exact Jaccard similarity between two token sets.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
/// Returns 0.0 if either set is empty, so empty-description findings never
/// match anything.
pub fn jaccard_similarity(set_a: &FxHashSet<String>, set_b: &FxHashSet<String>) -> f64 {
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.union(set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Fail fast on a threshold outside [0, 1] or non-finite.
pub fn validate_threshold(threshold: f64) -> Result<(), EvaluationError> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(EvaluationError::InvalidThreshold { value: threshold });
    }
    Ok(())
}

/// Pairwise finding matcher with a configurable stop-word list.
#[derive(Debug, Clone)]
pub struct Matcher {
    stop_words: FxHashSet<String>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            stop_words: stopwords::default_stop_words(),
        }
    }
}

impl Matcher {
    /// Create a matcher with a caller-supplied stop-word list.
    pub fn with_stop_words(stop_words: FxHashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Normalized token set over a finding's title and description.
    pub fn token_set(&self, finding: &Finding) -> FxHashSet<String> {
        normalize(&finding.combined_text(), &self.stop_words)
    }

    /// Decide whether two findings describe the same issue.
    ///
    /// Exact case-insensitive equality of titles or descriptions wins with
    /// similarity 1.0; otherwise token-set Jaccard over title+description,
    /// matched iff similarity > threshold.
    pub fn is_match(
        &self,
        a: &Finding,
        b: &Finding,
        threshold: f64,
    ) -> Result<MatchDecision, EvaluationError> {
        validate_threshold(threshold)?;
        Ok(self.decide(a, b, threshold))
    }

    /// Matching core. Callers inside the engine validate the threshold once
    /// per evaluation and then loop over pairs with this method.
    pub(crate) fn decide(&self, a: &Finding, b: &Finding, threshold: f64) -> MatchDecision {
        let title_eq =
            !a.title.trim().is_empty() && a.title.to_lowercase() == b.title.to_lowercase();
        let desc_eq = !a.description.trim().is_empty()
            && a.description.to_lowercase() == b.description.to_lowercase();
        if title_eq || desc_eq {
            return MatchDecision {
                matched: true,
                similarity: 1.0,
                method: MatchMethod::Exact,
            };
        }

        let tokens_a = self.token_set(a);
        let tokens_b = self.token_set(b);
        let similarity = jaccard_similarity(&tokens_a, &tokens_b);
        MatchDecision {
            matched: similarity > threshold,
            similarity,
            method: MatchMethod::KeywordJaccard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(title: &str, description: &str) -> Finding {
        Finding::new(title, description)
    }

    #[test]
    fn test_exact_title_match_ignores_case() {
        let m = Matcher::default();
        let a = finding("Back button missing", "one thing");
        let b = finding("BACK BUTTON MISSING", "another thing entirely");
        let decision = m.is_match(&a, &b, 0.9).unwrap();
        assert!(decision.matched);
        assert_eq!(decision.similarity, 1.0);
        assert_eq!(decision.method, MatchMethod::Exact);
    }

    #[test]
    fn test_exact_description_match() {
        let m = Matcher::default();
        let a = finding("A", "Users cannot return to previous screen");
        let b = finding("B", "users cannot return to previous screen");
        let decision = m.is_match(&a, &b, 0.9).unwrap();
        assert!(decision.matched);
        assert_eq!(decision.method, MatchMethod::Exact);
    }

    #[test]
    fn test_empty_titles_do_not_exact_match() {
        let m = Matcher::default();
        let a = finding("", "contrast too low on submit button");
        let b = finding("", "loading spinner never stops on login");
        let decision = m.is_match(&a, &b, 0.5).unwrap();
        assert!(!decision.matched);
        assert_eq!(decision.method, MatchMethod::KeywordJaccard);
    }

    #[test]
    fn test_jaccard_empty_sets_similarity_zero() {
        let m = Matcher::default();
        let a = finding("", "");
        let b = finding("X", "some description text here");
        let decision = m.is_match(&a, &b, 0.0).unwrap();
        assert!(!decision.matched);
        assert_eq!(decision.similarity, 0.0);
    }

    #[test]
    fn test_disjoint_texts_do_not_match() {
        let m = Matcher::default();
        let a = finding("Contrast issue", "Text contrast ratio fails on header");
        let b = finding("Slow loading", "Spinner blocks checkout forever");
        let decision = m.is_match(&a, &b, 0.3).unwrap();
        assert!(!decision.matched);
        assert_eq!(decision.similarity, 0.0);
    }

    #[test]
    fn test_invalid_threshold_fails_fast() {
        let m = Matcher::default();
        let a = finding("X", "Y");
        assert!(m.is_match(&a, &a, -0.1).is_err());
        assert!(m.is_match(&a, &a, 1.5).is_err());
        assert!(m.is_match(&a, &a, f64::NAN).is_err());
    }

    #[test]
    fn test_custom_stop_words_are_honored() {
        let mut stops = crate::text::default_stop_words();
        stops.insert("button".to_string());
        let m = Matcher::with_stop_words(stops);
        let tokens = m.token_set(&finding("Button", "the button area placement"));
        assert!(!tokens.contains("button"));
        assert!(tokens.contains("area"));
        assert!(tokens.contains("placement"));

        // The same pair no longer matches once its only shared token is
        // stopped out.
        let a = finding("A", "button misplaced");
        let b = finding("B", "button overlapping");
        assert!(!m.is_match(&a, &b, 0.0).unwrap().matched);
        assert!(Matcher::default().is_match(&a, &b, 0.3).unwrap().matched);
    }

    #[test]
    fn test_partial_overlap_similarity() {
        let m = Matcher::default();
        // Shared tokens: users, cannot, return, previous, screen, back.
        let a = finding("Back button missing", "Users cannot return to previous screen");
        let b = finding(
            "No back navigation",
            "Users cannot return back to previous screen view",
        );
        let decision = m.is_match(&a, &b, 0.5).unwrap();
        assert!(decision.matched, "similarity was {}", decision.similarity);
        assert!(decision.similarity > 0.5 && decision.similarity < 1.0);
    }
}
