//! Errors raised while reading rule options

use thiserror::Error;

/// Rejected rule configuration.
///
/// Options are validated once, before any file is linted; a rule never
/// reports configuration problems as diagnostics.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options entry was present but was not a JSON object
    #[error("rule options must be an object, got {0}")]
    NotAnObject(&'static str),

    /// Unknown keys or wrongly typed values
    #[error("invalid rule options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
