// ABOUTME: Error types for the docsite tidy pipeline.
// ABOUTME: Provides TidyError with Structural, Options, and FrontMatter variants plus helpers.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while cleaning a rendered document.
#[derive(Debug, Error)]
pub enum TidyError {
    /// The tree does not have the shape a pass requires (e.g. a highlight
    /// container without a source/text marker).
    #[error("structural error: {0}")]
    Structural(String),

    /// The options could not be loaded or are inconsistent.
    #[error("invalid options: {0}")]
    Options(String),

    /// The YAML front matter could not be serialized.
    #[error("failed to render front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

impl TidyError {
    /// Creates a Structural error with a custom message.
    pub fn structural(msg: impl Into<String>) -> Self {
        TidyError::Structural(msg.into())
    }

    /// Creates an Options error from an underlying deserialization error.
    pub fn options(err: impl fmt::Display) -> Self {
        TidyError::Options(err.to_string())
    }

    /// Returns true if this is a Structural error.
    pub fn is_structural(&self) -> bool {
        matches!(self, TidyError::Structural(_))
    }

    /// Returns true if this is an Options error.
    pub fn is_options(&self) -> bool {
        matches!(self, TidyError::Options(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TidyError>;
