//! Building the typed model from a parsed document.

use toc_semantics::{TextLocale, directive_spec};
use tracing::debug;

use crate::document::binding::{DirectiveBinding, FileBinding};
use crate::document::files::{CommentLine, FileLine};
use crate::document::{TocError, TocFile};
use crate::parser::{DirectiveLine, Document, LineKind};
use crate::types::{LocalizedValue, Value};

impl TocFile {
    /// Populate the model from `document`, then take ownership of it.
    ///
    /// Must only be called on a freshly constructed model.
    pub(super) fn build(&mut self, document: Document) -> Result<(), TocError> {
        for (index, node) in document.lines.iter().enumerate() {
            match &node.kind {
                LineKind::Empty => {}
                LineKind::Comment(text) => self.comments.push(CommentLine {
                    line_number: node.line_number,
                    raw_text: node.raw_text.clone(),
                    text: text.clone(),
                }),
                LineKind::Directive(directive) => {
                    self.bind_directive(directive, node.line_number, index)?;
                }
                LineKind::FileEntry(entry) => {
                    self.files.push(FileLine {
                        line_number: node.line_number,
                        raw_text: node.raw_text.clone(),
                        entry: entry.clone(),
                    });
                    self.file_bindings.push(FileBinding { node_index: index });
                }
            }
        }

        debug!(
            lines = document.len(),
            directives = self.attributes.len() + self.extended.len() + self.unknown.len(),
            files = self.files.len(),
            "built TOC model"
        );
        self.document = document;
        Ok(())
    }

    fn bind_directive(
        &mut self,
        directive: &DirectiveLine,
        line_number: usize,
        index: usize,
    ) -> Result<(), TocError> {
        if directive.extended {
            let overlay = self.extended.entry(directive.raw_name.clone()).or_default();
            if let Value::Localized(text) = &directive.value {
                merge_translations(overlay, text);
            }
            self.add_binding(&directive.raw_name, index);
            return Ok(());
        }

        let name = directive.canonical_name.as_str();
        match (&directive.value, directive_spec(name)) {
            (Value::Unknown(text), _) => {
                self.unknown.insert(name.to_string(), text.clone());
            }
            (value, None) => {
                self.unknown.insert(name.to_string(), value.to_string());
            }
            (Value::List(list), Some(spec)) => match self.attributes.get_mut(spec.name) {
                Some(Value::List(existing)) => {
                    existing.extend(list).map_err(|source| TocError::Value {
                        directive: spec.name.to_string(),
                        source,
                    })?;
                }
                _ => {
                    self.attributes.insert(spec.name, Value::List(list.clone()));
                }
            },
            (Value::Localized(text), Some(spec)) => match self.attributes.get_mut(spec.name) {
                Some(Value::Localized(existing)) => {
                    let locale = node_locale(directive);
                    if self.options.check_duplicates
                        && !spec.allow_duplicates
                        && existing.contains(locale)
                    {
                        return Err(TocError::DuplicateDirective {
                            name: spec.name.to_string(),
                            line: line_number + 1,
                        });
                    }
                    merge_translations(existing, text);
                }
                _ => {
                    self.attributes.insert(spec.name, Value::Localized(text.clone()));
                }
            },
            (value @ (Value::Bool(_) | Value::Int(_) | Value::Condition(_)), Some(spec)) => {
                if self.options.check_duplicates
                    && !spec.allow_duplicates
                    && self.attributes.contains_key(spec.name)
                {
                    return Err(TocError::DuplicateDirective {
                        name: spec.name.to_string(),
                        line: line_number + 1,
                    });
                }
                self.attributes.insert(spec.name, value.clone());
            }
        }

        self.add_binding(name, index);
        Ok(())
    }

    /// Record that the line at `index` contributed to `name`.
    pub(super) fn add_binding(&mut self, name: &str, index: usize) {
        self.attr_bindings
            .entry(name.to_string())
            .and_modify(|binding| binding.node_indices.push(index))
            .or_insert_with(|| DirectiveBinding::new(name, index));
    }
}

/// The locale a directive line carries; lines without a suffix, or with an
/// unrecognized one, belong to the default locale.
pub(super) fn node_locale(directive: &DirectiveLine) -> TextLocale {
    directive
        .locale
        .as_deref()
        .and_then(TextLocale::from_tag)
        .unwrap_or(TextLocale::DEFAULT)
}

fn merge_translations(target: &mut LocalizedValue, source: &LocalizedValue) {
    for (locale, text) in source.translations() {
        target.set(locale, text);
    }
}
