//! Keyword grouping of findings across analysis sets.
//!
//! Single-label: each finding joins the group of the first table keyword
//! that occurs in its title+description. Groups with one member are noise
//! and get dropped.

use std::collections::BTreeSet;

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use verdict_core::errors::TableError;
use verdict_core::types::collections::FxHashMap;
use verdict_core::types::finding::{Finding, Severity};

/// Ordered keyword table for aggregation grouping. The keyword doubles as
/// the group label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordGroupTable {
    pub keywords: Vec<String>,
}

impl Default for KeywordGroupTable {
    fn default() -> Self {
        let keywords = [
            "navigation", "button", "schaltfläche", "menü", "menu", "link",
            "icon", "formular", "form", "eingabe", "input", "kontrast",
            "contrast", "farbe", "color", "schrift", "font", "label",
            "barrierefrei", "accessib", "feedback", "rückmeldung",
            "fehlermeldung", "error", "ladezeit", "loading", "layout",
            "abstand", "spacing", "suche", "search", "hilfe", "help",
        ];
        Self {
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

impl KeywordGroupTable {
    /// Load a group table from a TOML string supplied by the caller.
    pub fn load_from_str(toml_str: &str) -> Result<Self, TableError> {
        let table: KeywordGroupTable = toml::from_str(toml_str)
            .map_err(|e| TableError::InvalidTable(format!("TOML parse error: {e}")))?;
        Ok(table)
    }
}

/// A cross-surface cluster of semantically related findings.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateGroup {
    /// The keyword that labeled the group.
    pub label: String,
    pub occurrences: usize,
    /// Surfaces the group's findings came from.
    pub affected_surfaces: BTreeSet<String>,
    /// Most frequent severity among the group's findings.
    pub dominant_severity: Severity,
}

/// Assigns findings to keyword groups via one automaton scan per finding.
pub struct KeywordGrouper {
    automaton: AhoCorasick,
    labels: Vec<String>,
}

impl KeywordGrouper {
    pub fn new(table: &KeywordGroupTable) -> Result<Self, TableError> {
        if table.keywords.is_empty() {
            return Err(TableError::InvalidTable(
                "keyword group table is empty".to_string(),
            ));
        }
        let labels: Vec<String> = table.keywords.iter().map(|k| k.to_lowercase()).collect();
        let automaton = AhoCorasick::new(&labels)
            .map_err(|e| TableError::InvalidTable(format!("automaton build failed: {e}")))?;
        Ok(Self { automaton, labels })
    }

    /// Index of the first table keyword occurring in the finding text, or
    /// `None` if no keyword matches (the finding stays ungrouped).
    pub fn group_of(&self, finding: &Finding) -> Option<usize> {
        let lowered = finding.combined_text().to_lowercase();
        self.automaton
            .find_iter(&lowered)
            .map(|m| m.pattern().as_usize())
            .min()
    }

    /// Build groups over findings labeled with their originating surface.
    ///
    /// Singleton groups are dropped; the rest are sorted by occurrence count
    /// descending (label ascending on ties) and truncated to `max_groups`.
    pub fn build_groups(
        &self,
        findings: &[(Option<&str>, &Finding)],
        max_groups: usize,
    ) -> Vec<AggregateGroup> {
        let mut members: FxHashMap<usize, Vec<(Option<&str>, &Finding)>> = FxHashMap::default();
        for (surface, finding) in findings {
            if let Some(group) = self.group_of(finding) {
                members.entry(group).or_default().push((*surface, *finding));
            }
        }

        let mut groups: Vec<AggregateGroup> = members
            .into_iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|(group, members)| {
                let mut severity_counts: FxHashMap<Severity, usize> = FxHashMap::default();
                let mut affected_surfaces = BTreeSet::new();
                for (surface, finding) in &members {
                    *severity_counts.entry(finding.severity).or_insert(0) += 1;
                    if let Some(surface) = surface {
                        affected_surfaces.insert((*surface).to_string());
                    }
                }
                let dominant_severity = severity_counts
                    .into_iter()
                    .max_by_key(|(severity, count)| (*count, severity.name()))
                    .map(|(severity, _)| severity)
                    .unwrap_or(Severity::Unrated);

                AggregateGroup {
                    label: self.labels[group].clone(),
                    occurrences: members.len(),
                    affected_surfaces,
                    dominant_severity,
                }
            })
            .collect();

        groups.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.label.cmp(&b.label))
        });
        groups.truncate(max_groups);
        groups
    }
}
