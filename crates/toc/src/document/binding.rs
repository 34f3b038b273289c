//! Bindings from model attributes and files to document line indices.
//!
//! Indices are only stable between structural edits. Every insertion or
//! removal of a line must shift all bindings in the same operation.

/// The lines that contributed to one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveBinding {
    pub name: String,
    pub node_indices: Vec<usize>,
}

impl DirectiveBinding {
    pub fn new(name: impl Into<String>, node_index: usize) -> Self {
        DirectiveBinding {
            name: name.into(),
            node_indices: vec![node_index],
        }
    }

    /// Account for a line inserted at `index`.
    pub(crate) fn shift_for_insert(&mut self, index: usize) {
        for node_index in &mut self.node_indices {
            if *node_index >= index {
                *node_index += 1;
            }
        }
    }

    /// Account for the line at `index` being removed.
    pub(crate) fn shift_for_remove(&mut self, index: usize) {
        self.node_indices.retain(|&node_index| node_index != index);
        for node_index in &mut self.node_indices {
            if *node_index > index {
                *node_index -= 1;
            }
        }
    }
}

/// The line a file entry is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileBinding {
    pub node_index: usize,
}
