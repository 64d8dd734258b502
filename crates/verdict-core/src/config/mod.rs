//! Configuration for the Verdict engine.

pub mod evaluation_config;

pub use evaluation_config::EvaluationConfig;
