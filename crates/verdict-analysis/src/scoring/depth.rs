//! Analysis depth scoring: superficial / deep / comprehensive.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tables::{contains_any, ScoringTables};

/// Depth tier of one finding's description, bucketed at 0.4 and 0.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Superficial,
    Deep,
    Comprehensive,
}

impl Depth {
    /// Bucket a depth score into a tier.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::Comprehensive
        } else if score >= 0.4 {
            Self::Deep
        } else {
            Self::Superficial
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Superficial => "superficial",
            Self::Deep => "deep",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score a description against the three indicator-word tiers.
///
/// Base 0.2; superficial adjectives -0.1; causal-reasoning connectives
/// +0.3; impact/consequence vocabulary +0.3; descriptions longer than 100
/// characters +0.1. Clamped to [0, 1].
pub fn depth_score(description: &str, tables: &ScoringTables) -> f64 {
    let lowered = description.to_lowercase();
    let mut score: f64 = 0.2;
    if contains_any(&lowered, &tables.superficial_words) {
        score -= 0.1;
    }
    if contains_any(&lowered, &tables.causal_words) {
        score += 0.3;
    }
    if contains_any(&lowered, &tables.impact_words) {
        score += 0.3;
    }
    if description.chars().count() > 100 {
        score += 0.1;
    }
    score.clamp(0.0, 1.0)
}

/// Classify a description's depth tier.
pub fn classify_depth(description: &str, tables: &ScoringTables) -> Depth {
    Depth::from_score(depth_score(description, tables))
}
