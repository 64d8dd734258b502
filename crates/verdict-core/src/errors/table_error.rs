//! Keyword/taxonomy table errors.

/// Errors that can occur while building or loading keyword tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Category '{0}' has an empty keyword list")]
    EmptyKeywordList(String),
}
