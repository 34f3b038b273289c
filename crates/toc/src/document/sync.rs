//! Writing model edits back into the document.
//!
//! Every structural edit goes through [`TocFile::insert_node`] or
//! [`TocFile::remove_node`], which shift the directive and file bindings in
//! the same step.

use std::mem;

use toc_semantics::{TextLocale, is_extended};
use tracing::{debug, trace};

use crate::document::TocFile;
use crate::document::binding::FileBinding;
use crate::document::build::node_locale;
use crate::parser::{DirectiveLine, LineKind, LineNode};
use crate::types::{LocalizedValue, Value};

impl TocFile {
    /// Write pending attribute and file edits into the document.
    pub fn sync_all(&mut self) {
        self.sync_attributes();
        self.sync_files();
    }

    /// Regenerate the lines of every attribute changed since the last sync.
    ///
    /// A changed list that was spread over several lines is written to its
    /// first line and the other lines are removed, so this can shorten the
    /// document. Bindings are shifted to match.
    pub fn sync_attributes(&mut self) {
        for name in mem::take(&mut self.dirty_attributes) {
            self.sync_attribute(&name);
        }
    }

    /// Write the file list back into the document.
    ///
    /// When the number of files still matches the number of bound file lines
    /// they are updated in place. Otherwise the file section is rebuilt.
    pub fn sync_files(&mut self) {
        if !self.files_dirty {
            return;
        }
        if self.files.len() == self.file_bindings.len() {
            for (binding, file) in self.file_bindings.iter().zip(&self.files) {
                if let Some(node) = self.document.lines.get_mut(binding.node_index) {
                    node.raw_text.clone_from(&file.raw_text);
                    node.kind = LineKind::FileEntry(file.entry.clone());
                }
            }
            trace!(files = self.files.len(), "updated file lines in place");
        } else {
            self.rebuild_file_section();
        }
        self.files_dirty = false;
    }

    /// Flag an attribute for regeneration on the next sync.
    pub(super) fn mark_dirty(&mut self, name: &str) {
        self.dirty_attributes.insert(name.to_string());
    }

    /// The current model value for a bound name.
    fn bound_value(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.attributes.get(name) {
            return Some(value.clone());
        }
        if let Some(text) = self.extended.get(name) {
            return Some(Value::Localized(text.clone()));
        }
        self.unknown.get(name).cloned().map(Value::Unknown)
    }

    fn sync_attribute(&mut self, name: &str) {
        let Some(value) = self.bound_value(name) else {
            return;
        };
        let Some(binding) = self.attr_bindings.get(name) else {
            return;
        };
        let mut indices = binding.node_indices.clone();
        indices.sort_unstable();

        if let Value::List(_) = value {
            // The merged list is written to the first line; the rest go.
            for &index in indices.iter().skip(1).rev() {
                self.remove_node(index);
            }
            indices.truncate(1);
        }

        for index in indices {
            self.rewrite_directive_node(index, &value);
        }
        debug!(name, "synchronized directive");
    }

    /// Re-render one directive line from `value`, leaving it untouched when
    /// its own value would not change.
    fn rewrite_directive_node(&mut self, index: usize, value: &Value) {
        let Some(node) = self.document.lines.get_mut(index) else {
            return;
        };
        let terminator = node.terminator().unwrap_or("\n");
        let LineKind::Directive(directive) = &mut node.kind else {
            return;
        };
        let locale = node_locale(directive);
        let Some(line_value) = line_value(value, locale) else {
            return;
        };
        let text = line_text(&line_value, locale);
        if line_text(&directive.value, locale) == text {
            return;
        }

        node.raw_text = render_directive(
            &directive.raw_name,
            directive.locale.as_deref(),
            &text,
            terminator,
        );
        directive.value = line_value;
    }

    /// Append a new directive line after the last directive that precedes
    /// the first file line.
    pub(super) fn insert_directive(&mut self, name: &str, locale: Option<TextLocale>, value: &Value) {
        let line_locale = locale.unwrap_or(TextLocale::DEFAULT);
        let Some(line_value) = line_value(value, line_locale) else {
            return;
        };

        let mut index = 0;
        for (position, node) in self.document.lines.iter().enumerate() {
            match node.kind {
                LineKind::Directive(_) => index = position + 1,
                LineKind::FileEntry(_) => break,
                LineKind::Empty | LineKind::Comment(_) => {}
            }
        }

        let suffix = locale.map(TextLocale::as_str);
        let node = LineNode {
            line_number: index,
            raw_text: render_directive(name, suffix, &line_text(&line_value, line_locale), "\n"),
            kind: LineKind::Directive(DirectiveLine {
                canonical_name: name.to_string(),
                raw_name: name.to_string(),
                locale: suffix.map(str::to_string),
                extended: is_extended(name),
                value: line_value,
            }),
        };
        self.insert_node(index, node);
        self.add_binding(name, index);
        debug!(name, index, "inserted directive line");
    }

    /// Insert a line at `index`, shifting every binding at or after it.
    pub(super) fn insert_node(&mut self, index: usize, node: LineNode) {
        if let Some(previous) = index.checked_sub(1).and_then(|i| self.document.lines.get_mut(i)) {
            if previous.terminator().is_none() {
                previous.raw_text.push('\n');
            }
        }

        self.document.lines.insert(index, node);
        for binding in self.attr_bindings.values_mut() {
            binding.shift_for_insert(index);
        }
        for binding in &mut self.file_bindings {
            if binding.node_index >= index {
                binding.node_index += 1;
            }
        }
    }

    /// Remove the line at `index`, dropping bindings to it and shifting
    /// every binding after it.
    pub(super) fn remove_node(&mut self, index: usize) {
        if index >= self.document.lines.len() {
            return;
        }
        self.document.lines.remove(index);
        for binding in self.attr_bindings.values_mut() {
            binding.shift_for_remove(index);
        }
        self.attr_bindings
            .retain(|_, binding| !binding.node_indices.is_empty());
        self.file_bindings
            .retain(|binding| binding.node_index != index);
        for binding in &mut self.file_bindings {
            if binding.node_index > index {
                binding.node_index -= 1;
            }
        }
    }

    /// Replace every file line with the current file list, placed where the
    /// first file line was, or at the end of the document if there was none.
    fn rebuild_file_section(&mut self) {
        let file_lines: Vec<usize> = self
            .document
            .lines
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_file_entry())
            .map(|(index, _)| index)
            .collect();
        let mut index = file_lines
            .first()
            .copied()
            .unwrap_or(self.document.lines.len());

        for &line in file_lines.iter().rev() {
            self.remove_node(line);
        }
        self.file_bindings.clear();

        let files = self.files.clone();
        for file in files {
            let node = LineNode {
                line_number: file.line_number,
                raw_text: file.raw_text,
                kind: LineKind::FileEntry(file.entry),
            };
            self.insert_node(index, node);
            self.file_bindings.push(FileBinding { node_index: index });
            index += 1;
        }
        debug!(files = self.files.len(), "rebuilt file section");
    }
}

/// The value a single line holds for `locale`: localized values contribute
/// one translation, everything else is written whole.
fn line_value(value: &Value, locale: TextLocale) -> Option<Value> {
    match value {
        Value::Localized(text) => text
            .get(locale)
            .map(|translation| Value::Localized(LocalizedValue::new(translation, locale))),
        Value::Bool(_) | Value::Int(_) | Value::List(_) | Value::Condition(_) | Value::Unknown(_) => {
            Some(value.clone())
        }
    }
}

fn line_text(value: &Value, locale: TextLocale) -> String {
    match value {
        Value::Localized(text) => text.get(locale).unwrap_or_default().to_string(),
        Value::Bool(_) | Value::Int(_) | Value::List(_) | Value::Condition(_) | Value::Unknown(_) => {
            value.to_string()
        }
    }
}

fn render_directive(name: &str, locale: Option<&str>, text: &str, terminator: &str) -> String {
    match locale {
        Some(locale) => format!("## {name}-{locale}: {text}{terminator}"),
        None => format!("## {name}: {text}{terminator}"),
    }
}
