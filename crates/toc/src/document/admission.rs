//! Whole-addon admission checks.

use tracing::debug;

use crate::conditions::{AddonLoadError, EvalContext, PathError};
use crate::document::TocFile;

impl TocFile {
    /// Check whether the addon may load under `ctx`.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// required dependencies, then `AllowLoad`, `AllowLoadGameType`, and
    /// `AllowLoadTextLocale`. An absent directive imposes no constraint.
    pub fn can_load_addon<C: EvalContext + ?Sized>(&self, ctx: &C) -> Result<(), AddonLoadError> {
        let missing = self.dependencies().and_then(|dependencies| {
            dependencies
                .iter()
                .map(ToString::to_string)
                .find(|name| !ctx.is_addon_loaded(name))
        });
        if let Some(name) = missing {
            debug!(dependency = %name, "addon rejected");
            return Err(AddonLoadError::MissingDependency { name });
        }

        let checks = [
            (self.allow_load(), AddonLoadError::WrongEnvironment),
            (self.allow_load_game_type(), AddonLoadError::WrongGameType),
            (self.allow_load_text_locale(), AddonLoadError::WrongTextLocale),
        ];
        for (condition, error) in checks {
            if condition.is_some_and(|condition| !condition.evaluate(ctx)) {
                debug!(%error, "addon rejected");
                return Err(error);
            }
        }
        Ok(())
    }

    /// The files that load under `ctx`, with path variables resolved.
    pub fn loadable_files<C: EvalContext + ?Sized>(&self, ctx: &C) -> Result<Vec<String>, PathError> {
        self.files
            .iter()
            .map(|file| &file.entry)
            .filter(|entry| entry.should_load(ctx))
            .map(|entry| entry.resolve_path(ctx))
            .collect()
    }
}
