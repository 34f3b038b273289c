//! The file list and comment views.

use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::debug;

use crate::conditions::FileEntry;
use crate::document::{TocError, TocFile};
use crate::parser::{LineKind, LineNode, parse_file_entry};

/// A file line as seen by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLine {
    /// Position in the source text, or one past the previous file for
    /// files added after parsing.
    pub line_number: usize,
    /// The line as it will be written, including its terminator.
    pub raw_text: String,
    pub entry: FileEntry,
}

impl FileLine {
    /// Parse a file line, appending a newline if it has none.
    pub fn new(line_number: usize, text: &str) -> Self {
        FileLine::with_terminator(line_number, text, "\n")
    }

    fn with_terminator(line_number: usize, text: &str, terminator: &str) -> Self {
        let text = text.trim_end_matches(['\r', '\n']);
        FileLine {
            line_number,
            raw_text: format!("{text}{terminator}"),
            entry: parse_file_entry(text),
        }
    }

    pub fn path(&self) -> &str {
        &self.entry.path
    }
}

impl Display for FileLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.entry.export())
    }
}

/// A comment line, kept for inspection only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    pub line_number: usize,
    pub raw_text: String,
    /// Comment text with the leading `#` marks removed.
    pub text: String,
}

impl TocFile {
    pub fn files(&self) -> &[FileLine] {
        &self.files
    }

    /// Every file entry rendered as `path [Clause ...]`.
    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(|file| file.entry.export()).collect()
    }

    /// Append a file to the end of the file list.
    pub fn add_file(&mut self, text: &str) {
        let line_number = self.files.last().map_or(1, |file| file.line_number + 1);
        self.files.push(FileLine::new(line_number, text));
        self.files_dirty = true;
        debug!(file = text.trim(), "added file");
    }

    /// Remove the file at `index` from the file list.
    pub fn remove_file(&mut self, index: usize) -> Result<FileLine, TocError> {
        self.check_file_index(index)?;
        let file = self.files.remove(index);
        self.files_dirty = true;
        debug!(file = file.path(), "removed file");
        Ok(file)
    }

    /// Replace the file at `index`, keeping its line number and terminator.
    pub fn update_file_path(&mut self, index: usize, text: &str) -> Result<(), TocError> {
        self.check_file_index(index)?;
        let file = &mut self.files[index];
        let terminator = if file.raw_text.ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        };
        *file = FileLine::with_terminator(file.line_number, text, terminator);
        self.files_dirty = true;
        Ok(())
    }

    /// Append a blank line to the end of the document.
    pub fn push_empty_line(&mut self) {
        let index = self.document.lines.len();
        self.insert_node(
            index,
            LineNode {
                line_number: index,
                raw_text: "\n".to_string(),
                kind: LineKind::Empty,
            },
        );
    }

    fn check_file_index(&self, index: usize) -> Result<(), TocError> {
        if index < self.files.len() {
            Ok(())
        } else {
            Err(TocError::FileIndexOutOfRange {
                index,
                len: self.files.len(),
            })
        }
    }
}
