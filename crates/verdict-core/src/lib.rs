//! Core value types, configuration, and errors for the Verdict evaluation
//! engine.
//!
//! This crate carries no engine logic: findings, analysis sets, severity
//! vocabulary, the versioned severity-weight table, and the error enums live
//! here so that the analysis crate and downstream consumers share one
//! definition of the data model.

pub mod config;
pub mod errors;
pub mod types;
pub mod weights;
