//! Versioned severity→numeric weight table.
//!
//! The average-severity bucketing used by surface comparison depends on an
//! explicit lookup table, not on enum ordering, because severity
//! vocabularies differ between the basic and advanced analysis variants
//! upstream. Bump `SEVERITY_WEIGHTS_VERSION` whenever the mapping changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::collections::FxHashMap;
use crate::types::finding::Severity;

/// Current version of the default weight mapping.
pub const SEVERITY_WEIGHTS_VERSION: u32 = 1;

/// Coarse average-severity label for a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLabel {
    High,
    Medium,
    Low,
}

impl SeverityLabel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Explicit severity→numeric weight table.
///
/// Contains the per-severity weights, the mapping version, and the two cut
/// points that bucket a mean weight into High/Medium/Low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityWeightTable {
    /// Version of the mapping these weights follow.
    pub version: u32,
    /// Per-severity weights (severity → numeric score).
    pub weights: FxHashMap<Severity, f64>,
    /// Mean weight at or above which a surface is labeled High.
    pub high_cutoff: f64,
    /// Mean weight at or above which a surface is labeled Medium.
    pub medium_cutoff: f64,
}

impl Default for SeverityWeightTable {
    fn default() -> Self {
        Self::static_defaults()
    }
}

impl SeverityWeightTable {
    /// Static v1 default weights.
    pub fn static_defaults() -> Self {
        let mut weights = FxHashMap::default();
        weights.insert(Severity::Catastrophic, 5.0);
        weights.insert(Severity::Critical, 4.0);
        weights.insert(Severity::Serious, 3.0);
        weights.insert(Severity::Minor, 2.0);
        weights.insert(Severity::Unrated, 1.0);
        weights.insert(Severity::Positive, 0.0);

        Self {
            version: SEVERITY_WEIGHTS_VERSION,
            weights,
            high_cutoff: 3.5,
            medium_cutoff: 2.0,
        }
    }

    /// Get the weight for a severity, falling back to 1.0 if not mapped.
    /// Clamps negative weights to 0.0, replaces NaN with the static default.
    pub fn get_weight(&self, severity: Severity) -> f64 {
        let raw = self.weights.get(&severity).copied().unwrap_or(1.0);
        if raw.is_nan() {
            let defaults = Self::static_defaults();
            defaults.weights.get(&severity).copied().unwrap_or(1.0)
        } else if raw < 0.0 {
            0.0
        } else {
            raw
        }
    }

    /// Bucket a mean weight into a coarse label.
    pub fn label_for_mean(&self, mean: f64) -> SeverityLabel {
        if mean >= self.high_cutoff {
            SeverityLabel::High
        } else if mean >= self.medium_cutoff {
            SeverityLabel::Medium
        } else {
            SeverityLabel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_defaults_have_correct_values() {
        let table = SeverityWeightTable::static_defaults();
        assert_eq!(table.version, SEVERITY_WEIGHTS_VERSION);
        assert_eq!(table.get_weight(Severity::Catastrophic), 5.0);
        assert_eq!(table.get_weight(Severity::Critical), 4.0);
        assert_eq!(table.get_weight(Severity::Serious), 3.0);
        assert_eq!(table.get_weight(Severity::Minor), 2.0);
        assert_eq!(table.get_weight(Severity::Unrated), 1.0);
        assert_eq!(table.get_weight(Severity::Positive), 0.0);
    }

    #[test]
    fn test_negative_weight_clamped_to_zero() {
        let mut table = SeverityWeightTable::static_defaults();
        table.weights.insert(Severity::Minor, -1.5);
        assert_eq!(table.get_weight(Severity::Minor), 0.0);
    }

    #[test]
    fn test_nan_weight_falls_back_to_static() {
        let mut table = SeverityWeightTable::static_defaults();
        table.weights.insert(Severity::Critical, f64::NAN);
        assert_eq!(table.get_weight(Severity::Critical), 4.0);
    }

    #[test]
    fn test_label_buckets() {
        let table = SeverityWeightTable::static_defaults();
        assert_eq!(table.label_for_mean(4.2), SeverityLabel::High);
        assert_eq!(table.label_for_mean(3.5), SeverityLabel::High);
        assert_eq!(table.label_for_mean(2.4), SeverityLabel::Medium);
        assert_eq!(table.label_for_mean(1.0), SeverityLabel::Low);
    }
}
