//! Editing directives through the model.
//!
//! Setters update the model and flag the affected directive. Lines are
//! regenerated on the next sync; a directive with no line yet gets one
//! inserted immediately so that it has somewhere to be written.

use std::collections::BTreeSet;

use toc_semantics::{
    DirectiveSpec, ElementKind, TextLocale, ValueKind, is_extended, lookup_directive,
};

use crate::document::build::node_locale;
use crate::document::{TocError, TocFile};
use crate::types::{ListValue, LocalizedValue, Value};

impl TocFile {
    /// Replace the value of a registered directive.
    ///
    /// `name` may be any spelling the schema resolves. Returns false if the
    /// new value equals the current one, in which case nothing is marked.
    pub fn set_attribute(&mut self, name: &str, value: Value) -> Result<bool, TocError> {
        let spec = resolve(name)?;
        if !value.is_kind(spec.kind) {
            return Err(TocError::KindMismatch {
                directive: spec.name.to_string(),
                expected: kind_name(spec.kind),
            });
        }
        if self.attributes.get(spec.name) == Some(&value) {
            return Ok(false);
        }

        self.attributes.insert(spec.name, value);
        self.mark_dirty(spec.name);
        self.ensure_lines(spec.name);
        Ok(true)
    }

    /// Set a registered directive from raw text, as if it had been read from
    /// a `## name: text` line.
    ///
    /// For localized directives only the default-locale translation changes.
    pub fn set_directive(&mut self, name: &str, text: &str) -> Result<bool, TocError> {
        let spec = resolve(name)?;
        if spec.kind == ValueKind::Localized {
            return self.set_translation(spec.name, TextLocale::DEFAULT, text);
        }
        let value = Value::parse(text, spec.kind, TextLocale::DEFAULT, self.options.bool_default)
            .map_err(|source| TocError::Value {
                directive: spec.name.to_string(),
                source,
            })?;
        self.set_attribute(spec.name, value)
    }

    /// Set one locale branch of a localized directive.
    pub fn set_translation(
        &mut self,
        name: &str,
        locale: TextLocale,
        text: &str,
    ) -> Result<bool, TocError> {
        let spec = resolve(name)?;
        let mut value = match self.attributes.get(spec.name) {
            Some(Value::Localized(existing)) => existing.clone(),
            _ => LocalizedValue::empty(),
        };
        if value.get(locale) == Some(text.trim()) {
            return Ok(false);
        }
        value.set(locale, text);
        self.set_attribute(spec.name, Value::Localized(value))
    }

    /// Apply `edit` to a copy of a directive's current value and store the
    /// result. The directive must already be present.
    pub fn modify_attribute<F>(&mut self, name: &str, edit: F) -> Result<bool, TocError>
    where
        F: FnOnce(&mut Value),
    {
        let spec = resolve(name)?;
        let Some(mut value) = self.attributes.get(spec.name).cloned() else {
            return Err(TocError::UnknownDirective {
                name: name.to_string(),
            });
        };
        edit(&mut value);
        self.set_attribute(spec.name, value)
    }

    /// Add an addon to `Dependencies` (if `required`) or `OptionalDeps`.
    ///
    /// Returns false if it is already listed.
    pub fn add_dependency(&mut self, name: &str, required: bool) -> Result<bool, TocError> {
        let directive = if required {
            "Dependencies"
        } else {
            "OptionalDeps"
        };
        let mut list = match self.attributes.get(directive) {
            Some(Value::List(list)) => list.clone(),
            _ => ListValue::new(ElementKind::String),
        };
        if list.contains(name.trim()) {
            return Ok(false);
        }
        list.append(name).map_err(|source| TocError::Value {
            directive: directive.to_string(),
            source,
        })?;
        self.set_attribute(directive, Value::List(list))
    }

    /// Set one locale branch of an `X-` directive, creating it if needed.
    pub fn set_extended_directive(
        &mut self,
        name: &str,
        locale: TextLocale,
        text: &str,
    ) -> Result<bool, TocError> {
        if !is_extended(name) {
            return Err(TocError::UnknownDirective {
                name: name.to_string(),
            });
        }
        let value = self.extended.entry(name.to_string()).or_default();
        if value.get(locale) == Some(text.trim()) {
            return Ok(false);
        }
        value.set(locale, text);
        self.mark_dirty(name);
        self.ensure_lines(name);
        Ok(true)
    }

    /// Insert lines for any part of `name` that has none: the whole
    /// directive, or a locale branch of a localized one.
    fn ensure_lines(&mut self, name: &str) {
        let value = match self.attributes.get(name) {
            Some(value) => value.clone(),
            None => match self.extended.get(name) {
                Some(text) => Value::Localized(text.clone()),
                None => return,
            },
        };

        if let Value::Localized(text) = &value {
            let bound = self.bound_locales(name);
            let missing: Vec<TextLocale> = text
                .translations()
                .map(|(locale, _)| locale)
                .filter(|locale| !bound.contains(locale))
                .collect();
            for locale in missing {
                let suffix = (locale != TextLocale::DEFAULT).then_some(locale);
                self.insert_directive(name, suffix, &value);
            }
        } else if !self.attr_bindings.contains_key(name) {
            self.insert_directive(name, None, &value);
        }
    }

    fn bound_locales(&self, name: &str) -> BTreeSet<TextLocale> {
        self.attr_bindings
            .get(name)
            .map(|binding| {
                binding
                    .node_indices
                    .iter()
                    .filter_map(|&index| self.document.get(index)?.as_directive())
                    .map(node_locale)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn resolve(name: &str) -> Result<&'static DirectiveSpec, TocError> {
    lookup_directive(name).ok_or_else(|| TocError::UnknownDirective {
        name: name.to_string(),
    })
}

fn kind_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Boolean => "boolean",
        ValueKind::Integer => "integer",
        ValueKind::List(ElementKind::String) => "string list",
        ValueKind::List(ElementKind::Integer) => "integer list",
        ValueKind::Localized => "localized text",
        ValueKind::Condition(_) => "condition",
    }
}
