//! Evaluation context supplied by the code that loads addons.

use std::collections::BTreeSet;

use bon::Builder;
use toc_semantics::{Environment, Family, GameType, TextLocale};

/// Runtime facts that conditions are evaluated against.
///
/// Implemented by the caller; the document never stores a context.
pub trait EvalContext {
    fn environment(&self) -> Environment;

    fn game_type(&self) -> GameType;

    fn text_locale(&self) -> TextLocale;

    /// The client family, derived from the game type by default.
    fn family(&self) -> Family {
        self.game_type().family()
    }

    /// Returns true if an addon with this name has already been loaded.
    fn is_addon_loaded(&self, name: &str) -> bool;
}

/// A fixed [`EvalContext`] built from known values.
///
/// # Example
///
/// ```
/// use toc::conditions::{ClientContext, EvalContext};
/// use toc_semantics::{GameType, TextLocale};
///
/// let mut ctx = ClientContext::builder()
///     .game_type(GameType::Cata)
///     .text_locale(TextLocale::DeDe)
///     .build();
/// ctx.mark_loaded("Ace3");
///
/// assert_eq!(ctx.family().as_str(), "Classic");
/// assert!(ctx.is_addon_loaded("ace3"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientContext {
    #[builder(default = Environment::Game)]
    environment: Environment,

    #[builder(default = GameType::Mainline)]
    game_type: GameType,

    #[builder(default = TextLocale::DEFAULT)]
    text_locale: TextLocale,

    /// Names of addons that are already loaded.
    #[builder(default)]
    loaded_addons: BTreeSet<String>,
}

impl Default for ClientContext {
    fn default() -> Self {
        ClientContext::builder().build()
    }
}

impl ClientContext {
    /// Record an addon as loaded.
    pub fn mark_loaded(&mut self, name: impl Into<String>) {
        self.loaded_addons.insert(name.into());
    }

    pub fn loaded_addons(&self) -> impl Iterator<Item = &str> {
        self.loaded_addons.iter().map(String::as_str)
    }
}

impl EvalContext for ClientContext {
    fn environment(&self) -> Environment {
        self.environment
    }

    fn game_type(&self) -> GameType {
        self.game_type
    }

    fn text_locale(&self) -> TextLocale {
        self.text_locale
    }

    /// Addon names compare case-insensitively, as the client does.
    fn is_addon_loaded(&self, name: &str) -> bool {
        self.loaded_addons
            .iter()
            .any(|loaded| loaded.eq_ignore_ascii_case(name))
    }
}
