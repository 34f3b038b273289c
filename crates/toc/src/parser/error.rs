//! Parse error types for TOC files.

use thiserror::Error;

use crate::types::ValueError;

/// An error that occurred while parsing a line.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A typed directive's value cannot be converted to its declared kind.
    #[error("line {line}: malformed value for '{directive}': {source}")]
    MalformedValue {
        line: usize,
        directive: String,
        #[source]
        source: ValueError,
    },

    /// A localizable directive carries a locale suffix that is not a known
    /// text locale.
    #[error("line {line}: unknown locale '{locale}' on '{directive}'")]
    UnknownLocale {
        line: usize,
        directive: String,
        locale: String,
    },
}

impl ParseError {
    /// The 1-based line the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedValue { line, .. } | ParseError::UnknownLocale { line, .. } => {
                *line
            }
        }
    }
}
