//! Error types for focusdo.

use thiserror::Error;

/// Errors that can occur in focusdo.
#[derive(Debug, Error)]
pub enum FocusdoError {
    /// Database open, query, or migration failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration loading or path resolution failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that could not be parsed (dates, JSON, enum names).
    #[error("Parse error: {0}")]
    Parse(String),

    /// A referenced task does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FocusdoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<serde_yaml::Error> for FocusdoError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(format!("YAML error: {e}"))
    }
}
