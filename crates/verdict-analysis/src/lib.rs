//! Verdict analysis engine.
//!
//! Turns unstructured usability findings from multiple LLM judges into
//! comparable signals: match decisions, true/false positive/negative
//! partitions with precision and recall, reference-free quality profiles,
//! and cross-run aggregates with trend detection.
//!
//! The engine is computation-only. Every operation is synchronous and pure
//! given its arguments; inputs are treated as immutable value objects and
//! the engine performs no I/O. Upstream collaborators parse LLM prose into
//! [`verdict_core::types::Finding`] records; downstream collaborators
//! consume the metric and report values produced here.

pub mod aggregate;
pub mod matching;
pub mod reconcile;
pub mod report;
pub mod scoring;
pub mod text;

pub use aggregate::{AggregateGroup, AggregateReport, Aggregator, SurfaceComparison};
pub use aggregate::{TrendDirection, TrendSignal};
pub use matching::{MatchDecision, MatchMethod, Matcher};
pub use reconcile::{EvaluationMetrics, Reconciler};
pub use report::TextReportRenderer;
pub use scoring::{QualitativeProfile, Scorer, ScoringTables};
