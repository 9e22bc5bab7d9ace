//! Error types for syntax overrides

use thiserror::Error;

/// Errors raised while reading or validating syntax overrides
///
/// Resolving a table never fails; these only surface from the parsing and
/// validation helpers.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// Override key does not name a known category
    #[error("Unknown syntax category: {0:?}")]
    UnknownCategory(String),

    /// Override document is not valid JSON or has the wrong shape
    #[error("Invalid syntax overrides: {0}")]
    InvalidOverrides(#[from] serde_json::Error),
}
