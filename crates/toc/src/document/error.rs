//! Error types for the TOC document model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::types::ValueError;

/// Errors raised while loading, editing, or exporting a TOC file.
#[derive(Debug, Error)]
pub enum TocError {
    /// The input file does not exist.
    #[error("TOC file does not exist: '{path}'")]
    NotFound { path: PathBuf },

    /// The export target exists and overwriting was not requested.
    #[error("file already exists at '{path}'; pass overwrite to replace it")]
    AlreadyExists { path: PathBuf },

    /// File I/O error.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A value passed to a setter cannot be converted to the directive's kind.
    #[error("invalid value for '{directive}': {source}")]
    Value {
        directive: String,
        #[source]
        source: ValueError,
    },

    /// A directive that does not allow duplicates appeared more than once
    /// while strict duplicate checking was enabled.
    #[error("line {line}: duplicate '{name}' directive")]
    DuplicateDirective { name: String, line: usize },

    /// A setter was called with a name the schema does not know.
    #[error("unknown directive '{name}'")]
    UnknownDirective { name: String },

    /// A setter was called with a value of the wrong kind.
    #[error("'{directive}' expects a {expected} value")]
    KindMismatch {
        directive: String,
        expected: &'static str,
    },

    /// A file list index was out of range.
    #[error("file index {index} out of range for {len} files")]
    FileIndexOutOfRange { index: usize, len: usize },
}
