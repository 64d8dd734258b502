//! Evaluation errors.

/// Errors that can occur during matching, reconciliation, or scoring.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Invalid similarity threshold {value}: must be a finite value in [0.0, 1.0]")]
    InvalidThreshold { value: f64 },
}
