//! TOC line classifier and parser.
//!
//! Every physical line becomes one [`LineNode`], keeping its raw text so that
//! an unmodified document renders back byte-for-byte.

pub mod ast;
pub mod error;
mod file_line;
mod line;

pub use ast::*;
pub use error::ParseError;
pub use file_line::parse_file_entry;
pub use line::{is_comment, is_directive, is_empty, parse_line};

use crate::options::TocOptions;

/// Parse TOC text into a document, one node per line.
///
/// Line terminators stay attached to each node's raw text.
///
/// # Example
///
/// ```
/// use toc::TocOptions;
/// use toc::parser::{LineKind, parse_document};
///
/// let doc = parse_document("## Title: Foo\nCore.lua\n", &TocOptions::default()).unwrap();
/// assert_eq!(doc.len(), 2);
/// assert!(matches!(doc.lines[1].kind, LineKind::FileEntry(_)));
/// assert_eq!(doc.render(), "## Title: Foo\nCore.lua\n");
/// ```
pub fn parse_document(text: &str, options: &TocOptions) -> Result<Document, ParseError> {
    parse_lines(text.split_inclusive('\n'), options)
}

/// Parse an already-split sequence of lines.
pub fn parse_lines<I, S>(lines: I, options: &TocOptions) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(line_number, raw)| parse_line(line_number, raw.as_ref(), options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document { lines })
}
