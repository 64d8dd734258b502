//! Cross-set aggregation: keyword groups, severity distributions, surface
//! comparison, and trend detection over many analysis runs.

pub mod groups;
pub mod trend;

use serde::Serialize;

use verdict_core::config::EvaluationConfig;
use verdict_core::errors::TableError;
use verdict_core::types::analysis_set::AnalysisSet;
use verdict_core::types::collections::FxHashMap;
use verdict_core::types::finding::Severity;
use verdict_core::weights::{SeverityLabel, SeverityWeightTable};

pub use groups::{AggregateGroup, KeywordGroupTable, KeywordGrouper};
pub use trend::{detect_trend, TrendDirection, TrendSignal};

/// Per-surface summary across all sets evaluating that surface.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceComparison {
    pub surface_id: String,
    pub finding_count: usize,
    /// Findings with severity in {catastrophic, critical, serious}.
    pub high_severity_count: usize,
    /// Coarse average-severity label from the weight table.
    pub severity_label: SeverityLabel,
}

/// Everything one aggregation call produces. Not persisted by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// Keyword groups, largest first, singletons dropped.
    pub groups: Vec<AggregateGroup>,
    /// Finding count per severity across all sets.
    pub severity_distribution: FxHashMap<Severity, usize>,
    /// Per-surface summaries, sorted by surface id. Sets without a surface
    /// id contribute to groups, distribution, and trend, but not here.
    pub surface_comparison: Vec<SurfaceComparison>,
    /// `None` with fewer than 2 sets.
    pub trend: Option<TrendSignal>,
}

/// Aggregates findings across many analysis sets.
pub struct Aggregator {
    grouper: KeywordGrouper,
    weights: SeverityWeightTable,
    config: EvaluationConfig,
}

impl Aggregator {
    pub fn new(
        table: &KeywordGroupTable,
        weights: SeverityWeightTable,
        config: EvaluationConfig,
    ) -> Result<Self, TableError> {
        Ok(Self {
            grouper: KeywordGrouper::new(table)?,
            weights,
            config,
        })
    }

    /// Aggregator over the default keyword table and v1 severity weights.
    pub fn with_defaults() -> Self {
        Self::new(
            &KeywordGroupTable::default(),
            SeverityWeightTable::static_defaults(),
            EvaluationConfig::default(),
        )
        .expect("default keyword group table is valid")
    }

    /// Aggregate findings across analysis sets.
    pub fn aggregate(&self, sets: &[AnalysisSet]) -> AggregateReport {
        let finding_count: usize = sets.iter().map(|s| s.findings.len()).sum();
        tracing::debug!(sets = sets.len(), findings = finding_count, "aggregating analysis sets");

        let labeled: Vec<_> = sets
            .iter()
            .flat_map(|set| {
                set.findings
                    .iter()
                    .map(move |f| (set.surface_id.as_deref(), f))
            })
            .collect();

        let groups = self
            .grouper
            .build_groups(&labeled, self.config.effective_max_groups());

        let mut severity_distribution: FxHashMap<Severity, usize> = FxHashMap::default();
        for (_, finding) in &labeled {
            *severity_distribution.entry(finding.severity).or_insert(0) += 1;
        }

        AggregateReport {
            groups,
            severity_distribution,
            surface_comparison: self.compare_surfaces(&labeled),
            trend: detect_trend(sets),
        }
    }

    fn compare_surfaces(
        &self,
        labeled: &[(Option<&str>, &verdict_core::types::finding::Finding)],
    ) -> Vec<SurfaceComparison> {
        let mut per_surface: FxHashMap<&str, Vec<Severity>> = FxHashMap::default();
        for (surface, finding) in labeled {
            if let Some(surface) = surface {
                per_surface.entry(surface).or_default().push(finding.severity);
            }
        }

        let mut comparisons: Vec<SurfaceComparison> = per_surface
            .into_iter()
            .map(|(surface_id, severities)| {
                let weight_sum: f64 = severities
                    .iter()
                    .map(|s| self.weights.get_weight(*s))
                    .sum();
                let mean = weight_sum / severities.len() as f64;
                SurfaceComparison {
                    surface_id: surface_id.to_string(),
                    finding_count: severities.len(),
                    high_severity_count: severities.iter().filter(|s| s.is_high()).count(),
                    severity_label: self.weights.label_for_mean(mean),
                }
            })
            .collect();

        comparisons.sort_by(|a, b| a.surface_id.cmp(&b.surface_id));
        comparisons
    }
}
