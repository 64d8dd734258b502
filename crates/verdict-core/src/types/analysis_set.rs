//! Analysis and reference sets, the immutable inputs to every evaluation.

use serde::{Deserialize, Serialize};

use super::finding::Finding;

/// The ordered sequence of findings produced by one judge (one LLM, one run)
/// for one subject. Created whole and never mutated; new runs produce new
/// sets, which is the basis for reproducibility checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSet {
    pub judge_id: String,
    pub judge_name: String,
    /// Which screen/page/view this set evaluates, if known.
    #[serde(default)]
    pub surface_id: Option<String>,
    /// Creation time as unix milliseconds. Used only for chronological
    /// ordering during trend detection.
    pub created_at: i64,
    pub findings: Vec<Finding>,
}

impl AnalysisSet {
    pub fn new(
        judge_id: impl Into<String>,
        judge_name: impl Into<String>,
        created_at: i64,
        findings: Vec<Finding>,
    ) -> Self {
        Self {
            judge_id: judge_id.into(),
            judge_name: judge_name.into(),
            surface_id: None,
            created_at,
            findings,
        }
    }

    pub fn with_surface(mut self, surface_id: impl Into<String>) -> Self {
        self.surface_id = Some(surface_id.into());
        self
    }

    /// Number of findings with severity in {catastrophic, critical}.
    pub fn critical_finding_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity.is_critical())
            .count()
    }
}

/// A curated finding sequence used as ground truth for a subject.
/// Same shape as an analysis set, without a judge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    #[serde(default)]
    pub surface_id: Option<String>,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl ReferenceSet {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self {
            surface_id: None,
            findings,
        }
    }
}
