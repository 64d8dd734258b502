//! Evaluation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for reconciliation, scoring, and aggregation.
///
/// The two similarity thresholds are deliberately separate: ground-truth
/// matching is stricter than uniqueness/duplicate detection, and both stay
/// caller-overridable rather than being collapsed into one constant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Similarity threshold for ground-truth matching. Default: 0.70.
    pub ground_truth_threshold: Option<f64>,
    /// Similarity threshold for uniqueness/duplicate detection. Default: 0.50.
    pub uniqueness_threshold: Option<f64>,
    /// Maximum keyword groups reported by the aggregator. Default: 10.
    pub max_groups: Option<usize>,
}

impl EvaluationConfig {
    /// Returns the effective ground-truth threshold, defaulting to 0.70.
    pub fn effective_ground_truth_threshold(&self) -> f64 {
        self.ground_truth_threshold.unwrap_or(0.70)
    }

    /// Returns the effective uniqueness threshold, defaulting to 0.50.
    pub fn effective_uniqueness_threshold(&self) -> f64 {
        self.uniqueness_threshold.unwrap_or(0.50)
    }

    /// Returns the effective maximum group count, defaulting to 10.
    pub fn effective_max_groups(&self) -> usize {
        self.max_groups.unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_defaults() {
        let config = EvaluationConfig::default();
        assert_eq!(config.effective_ground_truth_threshold(), 0.70);
        assert_eq!(config.effective_uniqueness_threshold(), 0.50);
        assert_eq!(config.effective_max_groups(), 10);
    }

    #[test]
    fn test_overrides_win() {
        let config = EvaluationConfig {
            ground_truth_threshold: Some(0.85),
            uniqueness_threshold: Some(0.40),
            max_groups: Some(5),
        };
        assert_eq!(config.effective_ground_truth_threshold(), 0.85);
        assert_eq!(config.effective_uniqueness_threshold(), 0.40);
        assert_eq!(config.effective_max_groups(), 5);
    }
}
