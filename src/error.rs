//! Error types for pattern normalization, formatting, and parsing.

use thiserror::Error;

/// Errors that can occur when normalizing a format pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': literal character inside the digit span at position {position}")]
    InteriorLiteral { pattern: String, position: usize },
}

/// Errors that can occur when formatting a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error("no numeric value found in '{input}'")]
    MalformedValue { input: String },
}

/// Errors that can occur when parsing text into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("no numeric value found in '{input}'")]
    NoNumber { input: String },
}
