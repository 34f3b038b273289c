//! Line-level syntax tree for TOC files.

use crate::conditions::FileEntry;
use crate::types::Value;

/// The ordered line sequence of a TOC file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<LineNode>,
}

impl Document {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LineNode> {
        self.lines.get(index)
    }

    /// Concatenate the raw text of every line.
    pub fn render(&self) -> String {
        self.lines.iter().map(|node| node.raw_text.as_str()).collect()
    }
}

/// One physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNode {
    /// 0-based position in the source text.
    pub line_number: usize,
    /// The line as written, including its terminator.
    pub raw_text: String,
    pub kind: LineKind,
}

impl LineNode {
    pub fn as_directive(&self) -> Option<&DirectiveLine> {
        match &self.kind {
            LineKind::Directive(directive) => Some(directive),
            _ => None,
        }
    }

    pub fn as_file_entry(&self) -> Option<&FileEntry> {
        match &self.kind {
            LineKind::FileEntry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_directive(&self) -> bool {
        matches!(self.kind, LineKind::Directive(_))
    }

    pub fn is_file_entry(&self) -> bool {
        matches!(self.kind, LineKind::FileEntry(_))
    }

    /// The line terminator of the raw text, if any.
    pub fn terminator(&self) -> Option<&'static str> {
        if self.raw_text.ends_with("\r\n") {
            Some("\r\n")
        } else if self.raw_text.ends_with('\n') {
            Some("\n")
        } else {
            None
        }
    }
}

/// What a line was classified as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    /// Comment text with the leading `#` marks and surrounding whitespace removed.
    Comment(String),
    Directive(DirectiveLine),
    FileEntry(FileEntry),
}

/// A `## Name[-locale]: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveLine {
    /// Registry name after alias resolution; unknown names pass through.
    pub canonical_name: String,
    /// The name as written, without any locale suffix.
    pub raw_name: String,
    pub locale: Option<String>,
    /// True for `X-` directives.
    pub extended: bool,
    pub value: Value,
}
