//! Tests for the core data model and weight table.

use verdict_core::types::analysis_set::{AnalysisSet, ReferenceSet};
use verdict_core::types::finding::{ErrorKind, Finding, Severity};
use verdict_core::weights::{SeverityLabel, SeverityWeightTable};

#[test]
fn test_finding_roundtrips_through_json() {
    let finding = Finding::new("Low contrast", "Submit button fails contrast ratio")
        .with_severity(Severity::Serious)
        .with_error_kind(ErrorKind::Uncertain);
    let json = serde_json::to_string(&finding).unwrap();
    let back: Finding = serde_json::from_str(&json).unwrap();
    assert_eq!(back, finding);
}

#[test]
fn test_severity_wire_labels_are_lowercase() {
    let json = serde_json::to_string(&Severity::Catastrophic).unwrap();
    assert_eq!(json, "\"catastrophic\"");
    let json = serde_json::to_string(&ErrorKind::NoIssue).unwrap();
    assert_eq!(json, "\"no_issue\"");
}

#[test]
fn test_analysis_set_parses_upstream_payload() {
    let payload = r#"{
        "judge_id": "gpt-4o",
        "judge_name": "GPT-4o",
        "surface_id": "checkout",
        "created_at": 1724900000000,
        "findings": [
            {"title": "Back button missing", "description": "Cannot go back", "severity": "critical"}
        ]
    }"#;
    let set: AnalysisSet = serde_json::from_str(payload).unwrap();
    assert_eq!(set.surface_id.as_deref(), Some("checkout"));
    assert_eq!(set.findings[0].severity, Severity::Critical);
    assert_eq!(set.critical_finding_count(), 1);
}

#[test]
fn test_reference_set_defaults_to_empty() {
    let reference: ReferenceSet = serde_json::from_str("{}").unwrap();
    assert!(reference.findings.is_empty());
    assert!(reference.surface_id.is_none());
}

#[test]
fn test_weight_table_roundtrips_and_labels() {
    let table = SeverityWeightTable::static_defaults();
    let json = serde_json::to_string(&table).unwrap();
    let back: SeverityWeightTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
    assert_eq!(back.label_for_mean(5.0), SeverityLabel::High);
}
