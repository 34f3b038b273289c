use std::fmt::{Display, Formatter, Result as FmtResult};

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::conditions::{Condition, EvalContext, PathError};

/// A file referenced by a TOC file, with its optional load conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path template; may contain `[family]`, `[game]`, or `[textlocale]`.
    pub path: String,
    pub conditions: Vec<Condition>,
    /// Bracketed clauses whose name is not a known condition. They are
    /// dropped from evaluation and export.
    pub ignored_clauses: Vec<String>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        FileEntry {
            path: path.into(),
            conditions: Vec::new(),
            ignored_clauses: Vec::new(),
        }
    }

    pub fn with_conditions(path: impl Into<String>, conditions: Vec<Condition>) -> Self {
        FileEntry {
            conditions,
            ..FileEntry::new(path)
        }
    }

    /// Substitute every `[name]` variable in the path.
    ///
    /// Variable names are matched case-insensitively. A name outside the
    /// substitution table fails the whole resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use toc::conditions::{ClientContext, FileEntry};
    /// use toc_semantics::TextLocale;
    ///
    /// let ctx = ClientContext::builder().text_locale(TextLocale::FrFr).build();
    /// let entry = FileEntry::new("Locale/[TextLocale]/strings.lua");
    /// assert_eq!(entry.resolve_path(&ctx).unwrap(), "Locale/frFR/strings.lua");
    /// ```
    pub fn resolve_path<C: EvalContext + ?Sized>(&self, ctx: &C) -> Result<String, PathError> {
        let mut input = self.path.as_str();
        let segments: Vec<PathSegment<'_>> = repeat(0.., path_segment)
            .parse_next(&mut input)
            .map_err(|_| PathError::Malformed {
                path: self.path.clone(),
            })?;

        let mut resolved = String::with_capacity(self.path.len());
        for segment in segments {
            match segment {
                PathSegment::Literal(text) => resolved.push_str(text),
                PathSegment::Variable(name) => {
                    resolved.push_str(substitute(name, ctx).ok_or_else(|| {
                        PathError::UndefinedPlaceholder {
                            name: name.to_string(),
                            path: self.path.clone(),
                        }
                    })?);
                }
            }
        }
        resolved.push_str(input);
        Ok(resolved)
    }

    /// Returns true if every attached condition admits the context.
    pub fn should_load<C: EvalContext + ?Sized>(&self, ctx: &C) -> bool {
        self.conditions.iter().all(|condition| condition.evaluate(ctx))
    }

    /// Render the path followed by each condition clause.
    pub fn export(&self) -> String {
        let mut text = self.path.clone();
        for condition in &self.conditions {
            text.push(' ');
            text.push_str(&condition.export());
        }
        text.trim().to_string()
    }
}

impl Display for FileEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path)
    }
}

/// Look up a path variable in the fixed substitution table.
fn substitute<C: EvalContext + ?Sized>(name: &str, ctx: &C) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "family" => Some(ctx.family().as_str()),
        "game" => Some(ctx.game_type().path_name()),
        "textlocale" => Some(ctx.text_locale().as_str()),
        _ => None,
    }
}

/// A piece of a path template.
enum PathSegment<'i> {
    Literal(&'i str),
    Variable(&'i str),
}

/// Parse one segment: a `[name]` variable, a run of literal text, or a lone `[`.
fn path_segment<'i>(input: &mut &'i str) -> ModalResult<PathSegment<'i>> {
    alt((
        delimited('[', take_while(1.., is_variable_char), ']').map(PathSegment::Variable),
        take_while(1.., |c: char| c != '[').map(PathSegment::Literal),
        "[".map(PathSegment::Literal),
    ))
    .parse_next(input)
}

fn is_variable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
