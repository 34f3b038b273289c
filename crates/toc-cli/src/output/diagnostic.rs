//! Miette diagnostic wrapper for TOC parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;
use toc::parser::ParseError;
use toc::TocError;
use toc_semantics::TextLocale;

/// A miette-compatible diagnostic for errors tied to one TOC line.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(toc::syntax))]
pub struct TocDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TocDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let help = match err {
            ParseError::MalformedValue { .. } => None,
            ParseError::UnknownLocale { .. } => Some(format!(
                "known locales: {}",
                TextLocale::ALL
                    .into_iter()
                    .map(TextLocale::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        };
        TocDiagnostic::at_line(path, content, err.line(), err.to_string(), help)
    }

    /// Create a diagnostic for model errors that point at a line.
    pub fn from_toc_error(path: &Path, content: &str, err: &TocError) -> Option<Self> {
        match err {
            TocError::DuplicateDirective { line, .. } => Some(TocDiagnostic::at_line(
                path,
                content,
                *line,
                err.to_string(),
                Some("remove the earlier occurrence or parse without --strict".to_string()),
            )),
            _ => None,
        }
    }

    /// Label the whole of a 1-based line.
    fn at_line(
        path: &Path,
        content: &str,
        line: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        // Byte offset of the line start, keeping terminators in the count.
        let offset = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let length = content
            .get(offset..)
            .and_then(|rest| rest.lines().next())
            .map_or(0, str::len);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        TocDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length.max(1)).into(),
            message,
            help,
        }
    }
}
