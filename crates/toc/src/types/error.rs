//! Value conversion errors.

use thiserror::Error;

/// A raw directive value that cannot be converted to its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Expected a base-10 integer.
    #[error("expected an integer, got '{value}'")]
    MalformedInteger { value: String },
}
