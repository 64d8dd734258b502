//! Qualitative scoring: reference-free quality dimensions per judge, plus
//! comparative unique-contribution detection against all other judges.

pub mod depth;
pub mod relevance;
pub mod tables;
pub mod taxonomy;

use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::Serialize;

use verdict_core::config::EvaluationConfig;
use verdict_core::errors::{EvaluationError, TableError};
use verdict_core::types::collections::{FxHashMap, FxHashSet};
use verdict_core::types::finding::Finding;

use crate::matching::{validate_threshold, Matcher};
use crate::text::{canonical_text, word_count};

pub use depth::Depth;
pub use relevance::Relevance;
pub use tables::{ScoringTables, TaxonomyCategory, UNCATEGORIZED};
pub use taxonomy::TaxonomyClassifier;

use tables::contains_any;

/// Reference-free quality profile of one judge's finding set.
#[derive(Debug, Clone, Serialize)]
pub struct QualitativeProfile {
    /// Taxonomy category → finding count (includes "uncategorized").
    pub taxonomy_histogram: FxHashMap<String, usize>,
    /// Depth tier → finding count.
    pub depth_histogram: FxHashMap<Depth, usize>,
    /// Relevance tier → finding count.
    pub relevance_histogram: FxHashMap<Relevance, usize>,
    /// Distinct normalized descriptions / findings. Duplicate-heavy sets
    /// score lower. 0.0 for an empty set.
    pub reproducibility: f64,
    /// min(distinct taxonomy categories used / 8, 1).
    pub systematicity: f64,
    /// Distinct non-uncategorized categories this judge covered.
    pub dimensions_covered: BTreeSet<String>,
    /// Fraction of findings whose description contains a context-indicator
    /// word (user/task/goal/scenario).
    pub context_consideration: f64,
    /// Findings matching subtle vocabulary but not obvious vocabulary.
    pub subtle_problems_found: usize,
    /// 0.8 if mean words per finding is in (10, 50), else 0.5. Words are
    /// counted over title plus description, the same text matching uses.
    pub clarity: f64,
    /// Fraction of findings with a concrete UI noun and no vague phrase.
    pub specificity: f64,
    /// Fraction of findings with an actionable verb.
    pub actionability: f64,
    /// Findings with no match against any other judge's findings.
    pub unique_findings: Vec<Finding>,
    /// Taxonomy categories only this judge covered.
    pub distinctive_perspectives: Vec<String>,
}

/// Computes qualitative profiles from a judge's own findings.
pub struct Scorer {
    matcher: Matcher,
    tables: ScoringTables,
    classifier: TaxonomyClassifier,
    config: EvaluationConfig,
}

impl Scorer {
    pub fn new(
        tables: ScoringTables,
        matcher: Matcher,
        config: EvaluationConfig,
    ) -> Result<Self, TableError> {
        let classifier = TaxonomyClassifier::new(&tables.taxonomy)?;
        Ok(Self {
            matcher,
            tables,
            classifier,
            config,
        })
    }

    /// Scorer over the default German+English tables.
    pub fn with_defaults() -> Self {
        Self::new(
            ScoringTables::default(),
            Matcher::default(),
            EvaluationConfig::default(),
        )
        .expect("default scoring tables are valid")
    }

    /// Score with the configured uniqueness threshold (default 0.50).
    pub fn score(
        &self,
        judge_findings: &[Finding],
        other_judges: &[&[Finding]],
    ) -> Result<QualitativeProfile, EvaluationError> {
        self.score_with_threshold(
            judge_findings,
            other_judges,
            self.config.effective_uniqueness_threshold(),
        )
    }

    /// Score one judge's findings.
    ///
    /// `other_judges` holds every other judge's findings for the same
    /// subject (the judge being scored must not be included); only the
    /// uniqueness dimensions compare across judges, everything else is a
    /// pure function of `judge_findings`.
    pub fn score_with_threshold(
        &self,
        judge_findings: &[Finding],
        other_judges: &[&[Finding]],
        uniqueness_threshold: f64,
    ) -> Result<QualitativeProfile, EvaluationError> {
        validate_threshold(uniqueness_threshold)?;
        tracing::debug!(
            findings = judge_findings.len(),
            other_judges = other_judges.len(),
            uniqueness_threshold,
            "scoring judge findings"
        );

        let categories: Vec<Option<&str>> = judge_findings
            .iter()
            .map(|f| self.classifier.classify(&f.description))
            .collect();

        let mut taxonomy_histogram: FxHashMap<String, usize> = FxHashMap::default();
        for category in &categories {
            let name = category.unwrap_or(UNCATEGORIZED);
            *taxonomy_histogram.entry(name.to_string()).or_insert(0) += 1;
        }

        let mut depth_histogram: FxHashMap<Depth, usize> = FxHashMap::default();
        let mut relevance_histogram: FxHashMap<Relevance, usize> = FxHashMap::default();
        for finding in judge_findings {
            *depth_histogram
                .entry(depth::classify_depth(&finding.description, &self.tables))
                .or_insert(0) += 1;
            *relevance_histogram
                .entry(relevance::classify_relevance(&finding.description, &self.tables))
                .or_insert(0) += 1;
        }

        let dimensions_covered: BTreeSet<String> = categories
            .iter()
            .flatten()
            .map(|c| (*c).to_string())
            .collect();

        let total = judge_findings.len();
        let distinct_descriptions: FxHashSet<String> = judge_findings
            .iter()
            .map(|f| canonical_text(&f.description))
            .collect();
        let reproducibility = fraction(distinct_descriptions.len(), total);
        let systematicity = (dimensions_covered.len() as f64 / 8.0).min(1.0);

        let context_consideration = fraction(
            count_matching(judge_findings, |text| {
                contains_any(text, &self.tables.context_words)
            }),
            total,
        );
        let subtle_problems_found = count_matching(judge_findings, |text| {
            contains_any(text, &self.tables.subtle_words)
                && !contains_any(text, &self.tables.obvious_words)
        });

        let mean_words = fraction(
            judge_findings
                .iter()
                .map(|f| word_count(&f.combined_text()))
                .sum(),
            total,
        );
        let clarity = if mean_words > 10.0 && mean_words < 50.0 {
            0.8
        } else {
            0.5
        };
        let specificity = fraction(
            count_matching(judge_findings, |text| {
                contains_any(text, &self.tables.ui_nouns)
                    && !contains_any(text, &self.tables.vague_phrases)
            }),
            total,
        );
        let actionability = fraction(
            count_matching(judge_findings, |text| {
                contains_any(text, &self.tables.actionable_verbs)
            }),
            total,
        );

        // Match decisions are independent, so the pairwise loop
        // parallelizes without changing results.
        let unique_findings: Vec<Finding> = judge_findings
            .par_iter()
            .filter(|finding| {
                !other_judges.iter().flat_map(|set| set.iter()).any(|other| {
                    self.matcher
                        .decide(finding, other, uniqueness_threshold)
                        .matched
                })
            })
            .cloned()
            .collect();

        let mut other_categories: FxHashSet<&str> = FxHashSet::default();
        for set in other_judges {
            for finding in set.iter() {
                if let Some(category) = self.classifier.classify(&finding.description) {
                    other_categories.insert(category);
                }
            }
        }
        let distinctive_perspectives: Vec<String> = dimensions_covered
            .iter()
            .filter(|c| !other_categories.contains(c.as_str()))
            .cloned()
            .collect();

        Ok(QualitativeProfile {
            taxonomy_histogram,
            depth_histogram,
            relevance_histogram,
            reproducibility,
            systematicity,
            dimensions_covered,
            context_consideration,
            subtle_problems_found,
            clarity,
            specificity,
            actionability,
            unique_findings,
            distinctive_perspectives,
        })
    }
}

fn count_matching(findings: &[Finding], predicate: impl Fn(&str) -> bool) -> usize {
    findings
        .iter()
        .filter(|f| predicate(&f.description.to_lowercase()))
        .count()
}

/// 0.0 on an empty set, never NaN.
fn fraction(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_scores_zero_not_nan() {
        let scorer = Scorer::with_defaults();
        let profile = scorer.score(&[], &[]).unwrap();
        assert_eq!(profile.reproducibility, 0.0);
        assert_eq!(profile.systematicity, 0.0);
        assert_eq!(profile.context_consideration, 0.0);
        assert_eq!(profile.actionability, 0.0);
        assert!(profile.unique_findings.is_empty());
    }

    #[test]
    fn test_duplicate_descriptions_lower_reproducibility() {
        let scorer = Scorer::with_defaults();
        let findings = vec![
            Finding::new("A", "The back button is missing"),
            Finding::new("B", "The back button is missing"),
        ];
        let profile = scorer.score(&findings, &[]).unwrap();
        assert_eq!(profile.reproducibility, 0.5);
    }

    #[test]
    fn test_systematicity_caps_at_one() {
        let scorer = Scorer::with_defaults();
        // Nine distinct categories covered, capped at 9/8 -> 1.0.
        let findings = vec![
            Finding::new("1", "No loading feedback shown"),
            Finding::new("2", "The wording uses internal jargon"),
            Finding::new("3", "No way to cancel the process"),
            Finding::new("4", "Buttons are inconsistent across pages"),
            Finding::new("5", "No validation before deleting"),
            Finding::new("6", "Users must remember the code"),
            Finding::new("7", "No shortcut for frequent actions"),
            Finding::new("8", "The page is cluttered"),
            Finding::new("9", "The error message offers no recovery"),
        ];
        let profile = scorer.score(&findings, &[]).unwrap();
        assert_eq!(profile.systematicity, 1.0);
        assert_eq!(profile.dimensions_covered.len(), 9);
    }
}
