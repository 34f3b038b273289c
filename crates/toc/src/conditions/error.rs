//! Error types for condition evaluation and path resolution.

use thiserror::Error;

/// An error resolving the variables in a file path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path uses a `[name]` variable outside the substitution table.
    #[error("undefined file path variable '{name}' in '{path}'")]
    UndefinedPlaceholder { name: String, path: String },

    /// The path could not be tokenized.
    #[error("malformed file path '{path}'")]
    Malformed { path: String },
}

/// Why an addon cannot be loaded, reported by the first failing check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddonLoadError {
    /// A required dependency is not loaded.
    #[error("missing dependency '{name}'")]
    MissingDependency { name: String },

    /// `AllowLoad` rejects the current environment.
    #[error("addon is not allowed in this environment")]
    WrongEnvironment,

    /// `AllowLoadGameType` rejects the current game type.
    #[error("addon is not allowed for this game type")]
    WrongGameType,

    /// `AllowLoadTextLocale` rejects the current text locale.
    #[error("addon is not allowed for this text locale")]
    WrongTextLocale,
}
