//! Static lint rules for TOC documents.
//!
//! Parsing is deliberately lenient: unknown directives are kept as opaque
//! values, unknown condition clauses are dropped, and repeated directives
//! silently overwrite each other. These rules surface each of those cases
//! without failing the parse.

use std::collections::BTreeMap;

use strsim::levenshtein;
use thiserror::Error;
use toc_semantics::{directive_names, directive_spec};

use crate::parser::Document;
use crate::types::Value;

/// A suspicious but non-fatal construct in a TOC file.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    #[error("line {line}: unknown directive '{name}'{}", format_suggestions(.suggestions))]
    UnknownDirective {
        name: String,
        line: usize,
        suggestions: Vec<String>,
    },

    #[error("line {line}: ignored condition clause '[{clause}]'")]
    IgnoredCondition { line: usize, clause: String },

    #[error("'{name}' is set on lines {}; only the last one takes effect", format_lines(.lines))]
    DuplicateDirective { name: String, lines: Vec<usize> },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

fn format_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs every lint rule over a parsed document.
///
/// # Example
///
/// ```
/// use toc::TocOptions;
/// use toc::lint::{LintWarning, lint_document};
/// use toc::parser::parse_document;
///
/// let doc = parse_document("## Titel: Foo\n", &TocOptions::default()).unwrap();
/// let warnings = lint_document(&doc);
/// assert!(matches!(
///     &warnings[0],
///     LintWarning::UnknownDirective { suggestions, .. } if suggestions == &["Title"]
/// ));
/// ```
pub fn lint_document(document: &Document) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    lint_unknown_directives(document, &mut warnings);
    lint_ignored_conditions(document, &mut warnings);
    lint_duplicates(document, &mut warnings);
    warnings
}

fn lint_unknown_directives(document: &Document, warnings: &mut Vec<LintWarning>) {
    let known: Vec<&str> = directive_names().collect();
    for node in &document.lines {
        let Some(directive) = node.as_directive() else {
            continue;
        };
        if directive.extended || !matches!(directive.value, Value::Unknown(_)) {
            continue;
        }
        warnings.push(LintWarning::UnknownDirective {
            name: directive.canonical_name.clone(),
            line: node.line_number + 1,
            suggestions: compute_suggestions(&directive.canonical_name, &known),
        });
    }
}

fn lint_ignored_conditions(document: &Document, warnings: &mut Vec<LintWarning>) {
    for node in &document.lines {
        let Some(entry) = node.as_file_entry() else {
            continue;
        };
        for clause in &entry.ignored_clauses {
            warnings.push(LintWarning::IgnoredCondition {
                line: node.line_number + 1,
                clause: clause.clone(),
            });
        }
    }
}

/// Flags registered directives that do not merge and appear more than once
/// for the same locale.
fn lint_duplicates(document: &Document, warnings: &mut Vec<LintWarning>) {
    let mut seen: BTreeMap<(String, Option<String>), Vec<usize>> = BTreeMap::new();
    for node in &document.lines {
        let Some(directive) = node.as_directive() else {
            continue;
        };
        let Some(spec) = directive_spec(&directive.canonical_name) else {
            continue;
        };
        if spec.allow_duplicates {
            continue;
        }
        seen.entry((spec.name.to_string(), directive.locale.clone()))
            .or_default()
            .push(node.line_number + 1);
    }

    for ((name, locale), lines) in seen {
        if lines.len() > 1 {
            let name = match locale {
                Some(locale) => format!("{name}-{locale}"),
                None => name,
            };
            warnings.push(LintWarning::DuplicateDirective { name, lines });
        }
    }
}

/// Compute typo suggestions using Levenshtein distance, ignoring ASCII case.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let name = name.to_ascii_lowercase();
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(&name, &candidate.to_ascii_lowercase());
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
