//! Error handling for Verdict.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Only programming-contract violations surface as errors; data-quality
//! issues (empty sets, duplicate text, unparseable severity labels) degrade
//! gracefully into the metrics instead of failing the call.

pub mod evaluation_error;
pub mod table_error;

pub use evaluation_error::EvaluationError;
pub use table_error::TableError;
