//! Finding: one usability observation with title, description, and severity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a usability finding.
///
/// `Unrated` is the default for findings whose judge did not assign a
/// severity; unparseable labels also resolve to `Unrated` rather than
/// failing the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Catastrophic,
    Critical,
    Serious,
    Minor,
    Positive,
    #[default]
    Unrated,
}

impl Severity {
    /// Parse a severity label. Accepts English and German labels,
    /// case-insensitively. Unknown labels degrade to `Unrated`.
    pub fn parse_str(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "catastrophic" | "katastrophal" => Self::Catastrophic,
            "critical" | "kritisch" => Self::Critical,
            "serious" | "schwerwiegend" | "ernst" => Self::Serious,
            "minor" | "gering" | "geringfügig" => Self::Minor,
            "positive" | "positiv" => Self::Positive,
            _ => Self::Unrated,
        }
    }

    /// Severity name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Catastrophic => "catastrophic",
            Self::Critical => "critical",
            Self::Serious => "serious",
            Self::Minor => "minor",
            Self::Positive => "positive",
            Self::Unrated => "unrated",
        }
    }

    /// Whether this severity counts as high for surface comparison and
    /// trend detection ({catastrophic, critical, serious}).
    pub fn is_high(&self) -> bool {
        matches!(self, Self::Catastrophic | Self::Critical | Self::Serious)
    }

    /// Whether this severity feeds the critical-finding trend
    /// ({catastrophic, critical}).
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Catastrophic | Self::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification attached to a finding during reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No error classification assigned.
    #[default]
    None,
    /// The finding claims there is no issue.
    NoIssue,
    /// The judge was uncertain about the finding.
    Uncertain,
    /// The finding is unrelated to the evaluated surface.
    Irrelevant,
    /// The finding duplicates another finding in the same set.
    Duplicate,
    /// The finding could not be classified.
    Unclassified,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NoIssue => "no_issue",
            Self::Uncertain => "uncertain",
            Self::Irrelevant => "irrelevant",
            Self::Duplicate => "duplicate",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One usability observation. Immutable once created; owned by the
/// analysis set that produced it.
///
/// A finding with an empty description never matches anything during
/// reconciliation; it surfaces as a false positive or as uncategorized
/// rather than being rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub error_kind: ErrorKind,
}

impl Finding {
    /// Create a finding with default severity (`Unrated`) and no error kind.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Unrated,
            error_kind: ErrorKind::None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_error_kind(mut self, error_kind: ErrorKind) -> Self {
        self.error_kind = error_kind;
        self
    }

    /// Title and description joined for token-level matching.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_english_and_german() {
        assert_eq!(Severity::parse_str("critical"), Severity::Critical);
        assert_eq!(Severity::parse_str("Kritisch"), Severity::Critical);
        assert_eq!(Severity::parse_str("KATASTROPHAL"), Severity::Catastrophic);
        assert_eq!(Severity::parse_str("gering"), Severity::Minor);
    }

    #[test]
    fn test_severity_unknown_label_degrades_to_unrated() {
        assert_eq!(Severity::parse_str("blocker"), Severity::Unrated);
        assert_eq!(Severity::parse_str(""), Severity::Unrated);
    }

    #[test]
    fn test_finding_serde_defaults() {
        let finding: Finding =
            serde_json::from_str(r#"{"title":"X","description":"Y"}"#).unwrap();
        assert_eq!(finding.severity, Severity::Unrated);
        assert_eq!(finding.error_kind, ErrorKind::None);
    }

    #[test]
    fn test_severity_is_high() {
        assert!(Severity::Catastrophic.is_high());
        assert!(Severity::Serious.is_high());
        assert!(!Severity::Minor.is_high());
        assert!(!Severity::Serious.is_critical());
        assert!(Severity::Critical.is_critical());
    }
}
