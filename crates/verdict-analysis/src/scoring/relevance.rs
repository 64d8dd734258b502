//! Practical relevance scoring: low / medium / high.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tables::{contains_any, ScoringTables};

/// Practical relevance tier, bucketed at 0.4 and 0.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    Low,
    Medium,
    High,
}

impl Relevance {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score practical relevance of a description.
///
/// Base 0.5; +0.2 for an actionable verb; +0.2 for a concrete UI-component
/// noun; +0.1 when longer than 50 characters; clipped to 1.0.
pub fn relevance_score(description: &str, tables: &ScoringTables) -> f64 {
    let lowered = description.to_lowercase();
    let mut score: f64 = 0.5;
    if contains_any(&lowered, &tables.actionable_verbs) {
        score += 0.2;
    }
    if contains_any(&lowered, &tables.ui_nouns) {
        score += 0.2;
    }
    if description.chars().count() > 50 {
        score += 0.1;
    }
    score.min(1.0)
}

/// Classify a description's relevance tier.
pub fn classify_relevance(description: &str, tables: &ScoringTables) -> Relevance {
    Relevance::from_score(relevance_score(description, tables))
}
