//! Load condition evaluation.
//!
//! Conditions gate whether a file line, or a whole addon, is admitted under
//! an externally supplied [`EvalContext`]. This module also resolves the
//! `[family]`, `[game]`, and `[textlocale]` variables in file paths.

mod condition;
mod context;
mod error;
mod file_entry;

pub use condition::Condition;
pub use context::{ClientContext, EvalContext};
pub use error::{AddonLoadError, PathError};
pub use file_entry::FileEntry;
