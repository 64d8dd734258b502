//! Plain-text report rendering over metrics, profiles, and aggregates.
//!
//! Pure formatting, no business logic. Empty input collections render an
//! explicit "no data" line instead of failing; hash-map contents are sorted
//! before rendering so output is deterministic.

use verdict_core::types::finding::Finding;

use crate::aggregate::AggregateReport;
use crate::reconcile::EvaluationMetrics;
use crate::scoring::QualitativeProfile;

const NO_DATA: &str = "  (no data)\n";

/// Text formatter for engine output.
pub struct TextReportRenderer;

impl TextReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render per-judge evaluation metrics.
    pub fn render_evaluation(&self, judge_name: &str, metrics: &EvaluationMetrics) -> String {
        let mut out = String::new();
        out.push_str(&format!("== Evaluation: {judge_name} ==\n"));
        out.push_str(&format!(
            "precision: {:.2}  recall: {:.2}\n",
            metrics.precision, metrics.recall
        ));
        out.push_str(&format!(
            "true positives: {}  false positives: {}  false negatives: {}\n",
            metrics.true_positives.len(),
            metrics.false_positives.len(),
            metrics.false_negatives.len()
        ));

        out.push_str("missed reference findings:\n");
        push_findings(&mut out, &metrics.false_negatives);

        out.push_str("unique contributions:\n");
        push_findings(&mut out, &metrics.unique_contributions);

        out.push_str("error distribution:\n");
        let mut kinds: Vec<_> = metrics
            .error_distribution
            .iter()
            .map(|(kind, count)| (kind.name(), *count))
            .collect();
        if kinds.is_empty() {
            out.push_str(NO_DATA);
        } else {
            kinds.sort();
            for (kind, count) in kinds {
                out.push_str(&format!("  {kind}: {count}\n"));
            }
        }
        out
    }

    /// Render a judge's qualitative profile.
    pub fn render_profile(&self, judge_name: &str, profile: &QualitativeProfile) -> String {
        let mut out = String::new();
        out.push_str(&format!("== Quality profile: {judge_name} ==\n"));

        out.push_str("taxonomy coverage:\n");
        let mut categories: Vec<_> = profile
            .taxonomy_histogram
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        if categories.is_empty() {
            out.push_str(NO_DATA);
        } else {
            categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            for (name, count) in categories {
                out.push_str(&format!("  {name}: {count}\n"));
            }
        }

        out.push_str("depth:\n");
        push_sorted_counts(
            &mut out,
            profile
                .depth_histogram
                .iter()
                .map(|(tier, count)| (tier.name(), *count)),
        );
        out.push_str("relevance:\n");
        push_sorted_counts(
            &mut out,
            profile
                .relevance_histogram
                .iter()
                .map(|(tier, count)| (tier.name(), *count)),
        );

        out.push_str(&format!(
            "reproducibility: {:.2}  systematicity: {:.2}  context: {:.2}\n",
            profile.reproducibility, profile.systematicity, profile.context_consideration
        ));
        out.push_str(&format!(
            "clarity: {:.2}  specificity: {:.2}  actionability: {:.2}\n",
            profile.clarity, profile.specificity, profile.actionability
        ));
        out.push_str(&format!(
            "subtle problems found: {}\n",
            profile.subtle_problems_found
        ));

        out.push_str("unique findings:\n");
        push_findings(&mut out, &profile.unique_findings);

        out.push_str("distinctive perspectives:\n");
        if profile.distinctive_perspectives.is_empty() {
            out.push_str(NO_DATA);
        } else {
            for perspective in &profile.distinctive_perspectives {
                out.push_str(&format!("  {perspective}\n"));
            }
        }
        out
    }

    /// Render a cross-set aggregate report.
    pub fn render_aggregate(&self, report: &AggregateReport) -> String {
        let mut out = String::new();
        out.push_str("== Aggregate ==\n");

        out.push_str("recurring finding groups:\n");
        if report.groups.is_empty() {
            out.push_str(NO_DATA);
        } else {
            for group in &report.groups {
                out.push_str(&format!(
                    "  {}: {} occurrences, {} surfaces, dominant severity {}\n",
                    group.label,
                    group.occurrences,
                    group.affected_surfaces.len(),
                    group.dominant_severity
                ));
            }
        }

        out.push_str("severity distribution:\n");
        push_sorted_counts(
            &mut out,
            report
                .severity_distribution
                .iter()
                .map(|(severity, count)| (severity.name(), *count)),
        );

        out.push_str("surfaces:\n");
        if report.surface_comparison.is_empty() {
            out.push_str(NO_DATA);
        } else {
            for surface in &report.surface_comparison {
                out.push_str(&format!(
                    "  {}: {} findings, {} high severity, average {}\n",
                    surface.surface_id,
                    surface.finding_count,
                    surface.high_severity_count,
                    surface.severity_label
                ));
            }
        }

        out.push_str("trend: ");
        match &report.trend {
            Some(signal) => out.push_str(&format!(
                "{} (earlier mean {:.2}, later mean {:.2})\n",
                signal.direction, signal.earlier_mean, signal.later_mean
            )),
            None => out.push_str("not enough runs\n"),
        }
        out
    }
}

impl Default for TextReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_findings(out: &mut String, findings: &[Finding]) {
    if findings.is_empty() {
        out.push_str(NO_DATA);
        return;
    }
    for finding in findings {
        out.push_str(&format!("  [{}] {}\n", finding.severity, finding.title));
    }
}

fn push_sorted_counts<'a>(out: &mut String, counts: impl Iterator<Item = (&'a str, usize)>) {
    let mut entries: Vec<_> = counts.collect();
    if entries.is_empty() {
        out.push_str(NO_DATA);
        return;
    }
    entries.sort();
    for (name, count) in entries {
        out.push_str(&format!("  {name}: {count}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregator;
    use crate::reconcile::Reconciler;
    use crate::scoring::Scorer;

    #[test]
    fn test_empty_metrics_render_no_data_sections() {
        let metrics = Reconciler::default().reconcile(&[], &[]).unwrap();
        let text = TextReportRenderer::new().render_evaluation("GPT", &metrics);
        assert!(text.contains("== Evaluation: GPT =="));
        assert!(text.contains("(no data)"));
        assert!(text.contains("precision: 0.00"));
    }

    #[test]
    fn test_empty_profile_renders() {
        let profile = Scorer::with_defaults().score(&[], &[]).unwrap();
        let text = TextReportRenderer::new().render_profile("Claude", &profile);
        assert!(text.contains("Quality profile: Claude"));
        assert!(text.contains("(no data)"));
    }

    #[test]
    fn test_empty_aggregate_renders_trend_placeholder() {
        let report = Aggregator::with_defaults().aggregate(&[]);
        let text = TextReportRenderer::new().render_aggregate(&report);
        assert!(text.contains("trend: not enough runs"));
        assert!(text.contains("(no data)"));
    }
}
