//! File entry line parsing.

use toc_semantics::ConditionKind;
use tracing::trace;
use winnow::combinator::{delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_till;

use crate::conditions::{Condition, FileEntry};

/// Parse a file line into its path and bracketed condition clauses.
///
/// Clauses with an unrecognized name are dropped from the conditions and
/// recorded in [`FileEntry::ignored_clauses`].
///
/// # Example
///
/// ```
/// use toc::parser::parse_file_entry;
///
/// let entry = parse_file_entry("Classic.lua [AllowLoadGameType vanilla, tbc]\n");
/// assert_eq!(entry.path, "Classic.lua");
/// assert_eq!(entry.conditions.len(), 1);
/// ```
pub fn parse_file_entry(line: &str) -> FileEntry {
    let line = line.trim();
    let (path, mut rest) = split_path(line);
    let clauses = condition_clauses(&mut rest).unwrap_or_default();

    let mut entry = FileEntry::new(path);
    for clause in clauses {
        let clause = clause.trim();
        let (name, args) = clause
            .split_once(char::is_whitespace)
            .unwrap_or((clause, ""));
        match ConditionKind::from_name(name) {
            Some(kind) => entry.conditions.push(Condition::parse(kind, args)),
            None => {
                trace!(%clause, path, "dropping unrecognized condition clause");
                entry.ignored_clauses.push(clause.to_string());
            }
        }
    }
    entry
}

/// Split at the first whitespace outside of brackets.
fn split_path(line: &str) -> (&str, &str) {
    let mut depth = 0i32;
    for (i, c) in line.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            c if c.is_whitespace() && depth == 0 => return (&line[..i], line[i..].trim()),
            _ => {}
        }
    }
    (line, "")
}

/// Collect the contents of every `[...]` clause, skipping text between them.
fn condition_clauses<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    repeat(
        0..,
        preceded(take_till(0.., '['), delimited('[', take_till(1.., ']'), ']')),
    )
    .parse_next(input)
}
