//! Error types for quoting and catalog loading

use thiserror::Error;

/// Failures raised by the quote engine before any computation happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid variant '{name}': {reason}")]
    InvalidVariant { name: String, reason: String },
}

/// Failures raised while reading a variant catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Cannot read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidVariant(#[from] QuoteError),
}
