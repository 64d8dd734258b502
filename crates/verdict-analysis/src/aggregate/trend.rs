//! Two-window trend detection over chronologically ordered analysis sets.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use verdict_core::types::analysis_set::AnalysisSet;

/// Directional change in mean critical-finding rate between the earlier and
/// later halves of a run history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Worsening,
    Flat,
}

impl TrendDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Worsening => "worsening",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trend signal with the two window means that produced it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendSignal {
    pub direction: TrendDirection,
    /// Mean {critical, catastrophic} findings per set, earlier half.
    pub earlier_mean: f64,
    /// Mean {critical, catastrophic} findings per set, later half.
    pub later_mean: f64,
}

/// Detect a trend across analysis runs.
///
/// Sets are sorted by `created_at`, split into first/second half (the first
/// half takes the extra set for odd counts), and the mean count of
/// {critical, catastrophic} findings per set is compared between halves.
/// Needs at least 2 sets; returns `None` otherwise.
pub fn detect_trend(sets: &[AnalysisSet]) -> Option<TrendSignal> {
    if sets.len() < 2 {
        return None;
    }

    let mut ordered: Vec<&AnalysisSet> = sets.iter().collect();
    ordered.sort_by_key(|s| s.created_at);

    let split = ordered.len().div_ceil(2);
    let earlier_mean = mean_critical(&ordered[..split]);
    let later_mean = mean_critical(&ordered[split..]);

    let direction = match later_mean.partial_cmp(&earlier_mean) {
        Some(Ordering::Less) => TrendDirection::Improving,
        Some(Ordering::Greater) => TrendDirection::Worsening,
        _ => TrendDirection::Flat,
    };

    Some(TrendSignal {
        direction,
        earlier_mean,
        later_mean,
    })
}

fn mean_critical(sets: &[&AnalysisSet]) -> f64 {
    if sets.is_empty() {
        return 0.0;
    }
    let total: usize = sets.iter().map(|s| s.critical_finding_count()).sum();
    total as f64 / sets.len() as f64
}
