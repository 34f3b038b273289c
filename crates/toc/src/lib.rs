//! Lossless reading and editing of addon TOC manifests.
//!
//! A TOC file is a line-oriented manifest: `## Name: value` directives,
//! `#` comments, and the addon's file list, optionally gated by bracketed
//! load conditions. [`TocFile`] parses one into typed values while keeping
//! every line's original text, so an unmodified file exports byte-for-byte
//! and an edited one only changes the lines that were touched.

pub mod conditions;
pub mod document;
pub mod lint;
mod options;
pub mod parser;
pub mod types;

pub use conditions::{AddonLoadError, ClientContext, Condition, EvalContext, FileEntry, PathError};
pub use document::{AddonSummary, TocError, TocFile};
pub use lint::{LintWarning, lint_document};
pub use options::TocOptions;
pub use parser::{Document, ParseError, parse_document};
pub use types::{ListValue, LocalizedValue, Value};
