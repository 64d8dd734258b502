//! Ground-truth reconciliation: true/false positive/negative partitions
//! with precision and recall.
//!
//! Reconciliation is per-judge-independent: every judge is evaluated against
//! the full reference set, so the recall denominator is always
//! `|reference|`, never a pool shrunk by other judges. Summing recall across
//! judges therefore over-counts by design; downstream reporting relies on
//! the per-judge definition.

use serde::Serialize;

use verdict_core::config::EvaluationConfig;
use verdict_core::errors::EvaluationError;
use verdict_core::types::collections::FxHashMap;
use verdict_core::types::finding::{ErrorKind, Finding};

use crate::matching::{validate_threshold, Matcher};

/// Per-judge evaluation result against a reference set.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationMetrics {
    /// Candidate findings that claimed a reference finding.
    pub true_positives: Vec<Finding>,
    /// Candidate findings with no (unclaimed) reference match.
    pub false_positives: Vec<Finding>,
    /// Reference findings no candidate claimed.
    pub false_negatives: Vec<Finding>,
    /// |TP| / (|TP| + |FP|); 0.0 when there are no candidates.
    pub precision: f64,
    /// |TP| / (|TP| + |FN|); 0.0 when the reference set is empty.
    pub recall: f64,
    /// Count of candidate findings per error kind.
    pub error_distribution: FxHashMap<ErrorKind, usize>,
    /// False positives that are not wrong, just absent from the reference
    /// (`error_kind` is `None` or `NoIssue`).
    pub unique_contributions: Vec<Finding>,
}

/// Classifies judge findings against a curated reference set.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    matcher: Matcher,
    config: EvaluationConfig,
}

impl Reconciler {
    pub fn new(matcher: Matcher, config: EvaluationConfig) -> Self {
        Self { matcher, config }
    }

    /// Reconcile with the configured ground-truth threshold (default 0.70).
    pub fn reconcile(
        &self,
        candidates: &[Finding],
        reference: &[Finding],
    ) -> Result<EvaluationMetrics, EvaluationError> {
        self.reconcile_with_threshold(
            candidates,
            reference,
            self.config.effective_ground_truth_threshold(),
        )
    }

    /// Reconcile one judge's findings against the reference set.
    ///
    /// Each candidate claims the first still-unclaimed matching reference
    /// finding; the claimed set is shared within this call so one reference
    /// item is never counted as matched twice for the same judge. Invariants:
    /// `|TP| + |FP| == |candidates|` and `|TP| + |FN| == |reference|`.
    pub fn reconcile_with_threshold(
        &self,
        candidates: &[Finding],
        reference: &[Finding],
        threshold: f64,
    ) -> Result<EvaluationMetrics, EvaluationError> {
        validate_threshold(threshold)?;
        tracing::debug!(
            candidates = candidates.len(),
            reference = reference.len(),
            threshold,
            "reconciling findings against reference set"
        );

        let mut claimed = vec![false; reference.len()];
        let mut true_positives = Vec::new();
        let mut false_positives = Vec::new();

        for candidate in candidates {
            let matched_index = reference.iter().enumerate().find_map(|(i, reference_finding)| {
                if claimed[i] {
                    return None;
                }
                self.matcher
                    .decide(candidate, reference_finding, threshold)
                    .matched
                    .then_some(i)
            });

            match matched_index {
                Some(i) => {
                    claimed[i] = true;
                    true_positives.push(candidate.clone());
                }
                None => false_positives.push(candidate.clone()),
            }
        }

        let false_negatives: Vec<Finding> = reference
            .iter()
            .zip(claimed.iter())
            .filter(|(_, was_claimed)| !**was_claimed)
            .map(|(f, _)| f.clone())
            .collect();

        let mut error_distribution: FxHashMap<ErrorKind, usize> = FxHashMap::default();
        for candidate in candidates {
            *error_distribution.entry(candidate.error_kind).or_insert(0) += 1;
        }

        let unique_contributions: Vec<Finding> = false_positives
            .iter()
            .filter(|f| matches!(f.error_kind, ErrorKind::None | ErrorKind::NoIssue))
            .cloned()
            .collect();

        Ok(EvaluationMetrics {
            precision: ratio(true_positives.len(), candidates.len()),
            recall: ratio(true_positives.len(), reference.len()),
            true_positives,
            false_positives,
            false_negatives,
            error_distribution,
            unique_contributions,
        })
    }
}

/// 0.0 on an empty denominator, never NaN.
fn ratio(numerator: usize, denominator: usize) -> f64 {
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
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(3, 4), 0.75);
    }

    #[test]
    fn test_duplicate_candidates_claim_reference_once() {
        let reconciler = Reconciler::default();
        let reference = vec![Finding::new("Back button missing", "Cannot navigate back")];
        let candidates = vec![
            Finding::new("Back button missing", "Cannot navigate back"),
            Finding::new("Back button missing", "Cannot navigate back"),
        ];
        let metrics = reconciler.reconcile(&candidates, &reference).unwrap();
        assert_eq!(metrics.true_positives.len(), 1);
        assert_eq!(metrics.false_positives.len(), 1);
        assert_eq!(metrics.false_negatives.len(), 0);
        assert_eq!(metrics.precision, 0.5);
        assert_eq!(metrics.recall, 1.0);
    }
}
