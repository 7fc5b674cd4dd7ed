//! Error types for ship configuration loading.

use thiserror::Error;

/// Errors that can occur when loading the ship configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A value parsed fine but is unusable.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
