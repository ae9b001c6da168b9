//! Error types for page reconstruction.
//!
//! Provides [`ExtractError`] for fatal conditions that abort a run:
//! unreadable input, malformed token data, and invalid configuration.

use std::fmt;

/// Fatal error types for token input and reconstruction configuration.
///
/// Reconstruction itself is pure and deterministic; errors arise only at
/// the edges — reading token input, validating options, writing output.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Malformed token input (bad JSON line, missing field).
    ParseError(String),
    /// I/O error reading token input or writing output.
    IoError(String),
    /// Invalid configuration value, rejected before any page is processed.
    ConfigError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::ParseError(msg) => write!(f, "parse error: {msg}"),
            ExtractError::IoError(msg) => write!(f, "I/O error: {msg}"),
            ExtractError::ConfigError(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::IoError(err.to_string())
    }
}
