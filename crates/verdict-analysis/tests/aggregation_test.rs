//! Integration tests for cross-set aggregation.

use verdict_analysis::aggregate::{Aggregator, TrendDirection};
use verdict_core::types::analysis_set::AnalysisSet;
use verdict_core::types::finding::{Finding, Severity};

fn set(created_at: i64, surface: &str, findings: Vec<Finding>) -> AnalysisSet {
    AnalysisSet::new("judge-1", "Judge", created_at, findings).with_surface(surface)
}

#[test]
fn test_twelve_findings_one_button_group() {
    // Four findings share "button"; every other keyword occurs at most
    // once, so singleton groups vanish and one group remains.
    let findings = vec![
        Finding::new("A", "The submit button is too small"),
        Finding::new("B", "Button label is truncated"),
        Finding::new("C", "The button color blends into the background"),
        Finding::new("D", "No button for going back"),
        Finding::new("E", "The contrast is too low"),
        Finding::new("F", "The search is hidden"),
        Finding::new("G", "Loading takes forever"),
        Finding::new("H", "The spacing feels cramped"),
        Finding::new("I", "The wording confuses people"),
        Finding::new("J", "Checkout needs too many steps"),
        Finding::new("K", "Images are pixelated"),
        Finding::new("L", "The page scrolls unexpectedly"),
    ];
    assert_eq!(findings.len(), 12);

    let report = Aggregator::with_defaults().aggregate(&[set(1, "home", findings)]);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].label, "button");
    assert_eq!(report.groups[0].occurrences, 4);
}

#[test]
fn test_groups_sorted_by_occurrences_descending() {
    let findings = vec![
        Finding::new("1", "navigation is confusing"),
        Finding::new("2", "navigation misses a home entry"),
        Finding::new("3", "navigation hides the cart"),
        Finding::new("4", "button too small"),
        Finding::new("5", "button mislabeled"),
    ];
    let report = Aggregator::with_defaults().aggregate(&[set(1, "home", findings)]);
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.groups[0].label, "navigation");
    assert_eq!(report.groups[0].occurrences, 3);
    assert_eq!(report.groups[1].label, "button");
}

#[test]
fn test_severity_distribution_counts_all_sets() {
    let set_a = set(
        1,
        "home",
        vec![
            Finding::new("A", "x").with_severity(Severity::Critical),
            Finding::new("B", "y"),
        ],
    );
    let set_b = set(
        2,
        "cart",
        vec![Finding::new("C", "z").with_severity(Severity::Critical)],
    );
    let report = Aggregator::with_defaults().aggregate(&[set_a, set_b]);
    assert_eq!(report.severity_distribution[&Severity::Critical], 2);
    assert_eq!(report.severity_distribution[&Severity::Unrated], 1);
}

#[test]
fn test_trend_improving_over_four_runs() {
    let run = |t: i64, criticals: usize| {
        let findings = (0..criticals)
            .map(|i| Finding::new(format!("C{i}"), "broken").with_severity(Severity::Critical))
            .collect();
        set(t, "home", findings)
    };
    // Monotonically decreasing critical counts across four ordered runs.
    let report =
        Aggregator::with_defaults().aggregate(&[run(1, 6), run(2, 4), run(3, 2), run(4, 1)]);
    let trend = report.trend.unwrap();
    assert_eq!(trend.direction, TrendDirection::Improving);
    assert!(trend.later_mean < trend.earlier_mean);
}

#[test]
fn test_single_run_has_no_trend() {
    let report = Aggregator::with_defaults().aggregate(&[set(1, "home", vec![])]);
    assert!(report.trend.is_none());
}

#[test]
fn test_group_spans_surfaces() {
    let set_a = set(1, "home", vec![Finding::new("A", "button unreadable")]);
    let set_b = set(2, "cart", vec![Finding::new("B", "button overlaps price")]);
    let report = Aggregator::with_defaults().aggregate(&[set_a, set_b]);
    assert_eq!(report.groups.len(), 1);
    let surfaces = &report.groups[0].affected_surfaces;
    assert!(surfaces.contains("home") && surfaces.contains("cart"));
}
