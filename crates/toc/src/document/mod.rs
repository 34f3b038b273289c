//! The TOC document model.
//!
//! A [`TocFile`] pairs the lossless line [`Document`] with typed views of
//! its directives, files, and comments. Views are bound back to the lines
//! they came from, so edits made through the model are written into the
//! document only when it is synchronized, and untouched lines keep their
//! original text.
//!
//! # Example
//!
//! ```
//! use toc::TocFile;
//!
//! let mut toc = TocFile::parse("## Interface: 110000\n## Title: Foo\nCore.lua\n").unwrap();
//! assert_eq!(toc.title(), Some("Foo"));
//!
//! toc.set_title("Bar").unwrap();
//! toc.add_file("Extra.lua");
//! assert_eq!(
//!     toc.export_string(),
//!     "## Interface: 110000\n## Title: Bar\nCore.lua\nExtra.lua\n"
//! );
//! ```

mod accessors;
mod admission;
mod binding;
mod build;
mod edit;
mod error;
mod files;
mod io;
mod summary;
mod sync;

use std::collections::{BTreeMap, BTreeSet};

pub use binding::{DirectiveBinding, FileBinding};
pub use error::TocError;
pub use files::{CommentLine, FileLine};
pub use summary::{AddonSummary, FileSummary};

use toc_semantics::lookup_directive;

use crate::options::TocOptions;
use crate::parser::{Document, parse_document};
use crate::types::{LocalizedValue, Value};

/// A parsed TOC file with typed, editable views of its contents.
#[derive(Debug, Clone)]
pub struct TocFile {
    document: Document,
    options: TocOptions,
    /// Registered directives, keyed by canonical name.
    attributes: BTreeMap<&'static str, Value>,
    /// `X-` directives, keyed by name without locale suffix.
    extended: BTreeMap<String, LocalizedValue>,
    /// Unregistered directives, keyed by name as written.
    unknown: BTreeMap<String, String>,
    files: Vec<FileLine>,
    comments: Vec<CommentLine>,
    attr_bindings: BTreeMap<String, DirectiveBinding>,
    file_bindings: Vec<FileBinding>,
    /// Attributes changed since the last synchronization.
    dirty_attributes: BTreeSet<String>,
    files_dirty: bool,
}

impl TocFile {
    /// An empty TOC file with default options.
    pub fn new() -> Self {
        TocFile::with_options(TocOptions::default())
    }

    /// An empty TOC file.
    pub fn with_options(options: TocOptions) -> Self {
        TocFile {
            document: Document::empty(),
            options,
            attributes: BTreeMap::new(),
            extended: BTreeMap::new(),
            unknown: BTreeMap::new(),
            files: Vec::new(),
            comments: Vec::new(),
            attr_bindings: BTreeMap::new(),
            file_bindings: Vec::new(),
            dirty_attributes: BTreeSet::new(),
            files_dirty: false,
        }
    }

    /// Parse TOC text with default options.
    pub fn parse(text: &str) -> Result<Self, TocError> {
        TocFile::parse_with(text, TocOptions::default())
    }

    pub fn parse_with(text: &str, options: TocOptions) -> Result<Self, TocError> {
        let document = parse_document(text, &options)?;
        TocFile::from_document(document, options)
    }

    /// Build the model from an already-parsed document.
    pub fn from_document(document: Document, options: TocOptions) -> Result<Self, TocError> {
        let mut toc = TocFile::with_options(options);
        toc.build(document)?;
        Ok(toc)
    }

    /// Discard all model state and rebuild it from `document`.
    pub fn replace_document(&mut self, document: Document) -> Result<(), TocError> {
        *self = TocFile::from_document(document, self.options)?;
        Ok(())
    }

    pub fn options(&self) -> &TocOptions {
        &self.options
    }

    /// The underlying document. Pending edits are not reflected until
    /// [`sync_all`](TocFile::sync_all) is called.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Look up a registered directive by any of its spellings.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        let spec = lookup_directive(name)?;
        self.attributes.get(spec.name)
    }

    /// Every registered directive present in the file, by canonical name.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.attributes.iter().map(|(name, value)| (*name, value))
    }

    /// Look up an `X-` directive by its name without locale suffix.
    pub fn extended_directive(&self, name: &str) -> Option<&LocalizedValue> {
        self.extended.get(name)
    }

    pub fn extended_directives(&self) -> impl Iterator<Item = (&str, &LocalizedValue)> {
        self.extended.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The value of a directive the schema does not know.
    pub fn unknown_directive(&self, name: &str) -> Option<&str> {
        self.unknown.get(name).map(String::as_str)
    }

    pub fn unknown_directives(&self) -> impl Iterator<Item = (&str, &str)> {
        self.unknown
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn comments(&self) -> &[CommentLine] {
        &self.comments
    }

    /// The lines bound to a directive, keyed by canonical (or `X-` base) name.
    pub fn directive_binding(&self, name: &str) -> Option<&DirectiveBinding> {
        self.attr_bindings.get(name)
    }

    pub fn file_bindings(&self) -> &[FileBinding] {
        &self.file_bindings
    }

    /// Returns true if the model holds edits not yet written to the document.
    pub fn is_dirty(&self) -> bool {
        !self.dirty_attributes.is_empty() || self.files_dirty
    }
}

impl Default for TocFile {
    fn default() -> Self {
        TocFile::new()
    }
}
