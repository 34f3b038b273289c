//! Classification and parsing of single lines.

use toc_semantics::{TextLocale, directive_spec, resolve_directive_name};
use tracing::trace;

use crate::options::TocOptions;
use crate::parser::ast::{DirectiveLine, LineKind, LineNode};
use crate::parser::error::ParseError;
use crate::parser::file_line::parse_file_entry;
use crate::types::{LocalizedValue, Value};

/// Marker that starts every directive line.
const DIRECTIVE_PREFIX: &str = "## ";

/// Returns true for blank or whitespace-only lines.
pub fn is_empty(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns true for `## name: value` lines.
pub fn is_directive(line: &str) -> bool {
    line.starts_with(DIRECTIVE_PREFIX) && line.contains(':')
}

/// Returns true for `#` lines that are not directives.
///
/// The length check counts the line terminator.
pub fn is_comment(line: &str) -> bool {
    line.len() > 1 && line.starts_with('#') && !is_directive(line)
}

/// Classify and parse one raw line.
///
/// Classification order is empty, directive, comment, then file entry. The
/// directive check must run before the comment check since both start with `#`.
pub fn parse_line(line_number: usize, raw: &str, options: &TocOptions) -> Result<LineNode, ParseError> {
    let kind = if is_empty(raw) {
        LineKind::Empty
    } else if is_directive(raw) {
        LineKind::Directive(parse_directive(line_number, raw, options)?)
    } else if is_comment(raw) {
        LineKind::Comment(raw.trim_start_matches('#').trim().to_string())
    } else {
        LineKind::FileEntry(parse_file_entry(raw))
    };

    Ok(LineNode {
        line_number,
        raw_text: raw.to_string(),
        kind,
    })
}

fn strip_terminator(raw: &str) -> &str {
    raw.trim_end_matches(['\r', '\n'])
}

/// Parse a line already known to be a directive.
fn parse_directive(
    line_number: usize,
    raw: &str,
    options: &TocOptions,
) -> Result<DirectiveLine, ParseError> {
    let body = strip_terminator(raw);
    let (head, value) = body
        .split_once(": ")
        .or_else(|| body.split_once(':'))
        .unwrap_or((body, ""));
    let name = head.split_once(' ').map_or("", |(_, name)| name).trim();
    let resolved = resolve_directive_name(name);

    let value = if resolved.extended {
        let locale = resolved
            .locale
            .as_deref()
            .and_then(TextLocale::from_tag)
            .unwrap_or(TextLocale::DEFAULT);
        Value::Localized(LocalizedValue::new(value, locale))
    } else if let Some(spec) = directive_spec(&resolved.canonical) {
        let locale = match resolved.locale.as_deref() {
            Some(tag) if spec.localizable => {
                TextLocale::from_tag(tag).ok_or_else(|| ParseError::UnknownLocale {
                    line: line_number + 1,
                    directive: spec.name.to_string(),
                    locale: tag.to_string(),
                })?
            }
            _ => TextLocale::DEFAULT,
        };
        Value::parse(value, spec.kind, locale, options.bool_default).map_err(|source| {
            ParseError::MalformedValue {
                line: line_number + 1,
                directive: spec.name.to_string(),
                source,
            }
        })?
    } else {
        trace!(line = line_number + 1, name = %resolved.canonical, "unknown directive");
        Value::Unknown(value.trim().to_string())
    };

    Ok(DirectiveLine {
        canonical_name: resolved.canonical,
        raw_name: resolved.base,
        locale: resolved.locale,
        extended: resolved.extended,
        value,
    })
}
