//! Value types shared across the engine.

pub mod analysis_set;
pub mod collections;
pub mod finding;

pub use analysis_set::{AnalysisSet, ReferenceSet};
pub use finding::{ErrorKind, Finding, Severity};
