//! Client context options shared by commands that evaluate conditions.

use std::collections::BTreeSet;

use clap::Args;
use toc::ClientContext;
use toc_semantics::{Environment, GameType, TextLocale};

/// Describes the client an addon is evaluated against.
#[derive(Debug, Clone, Args)]
pub struct ContextArgs {
    /// Client environment (glue or game)
    #[arg(long, default_value = "game", env = "TOC_ENVIRONMENT")]
    pub environment: Environment,

    /// Client game type (mainline, vanilla, tbc, wrath, cata, mists, ...)
    #[arg(long, default_value = "mainline", env = "TOC_GAME_TYPE")]
    pub game_type: GameType,

    /// Client text locale (enUS, deDE, ...)
    #[arg(long, default_value = "enUS", env = "TOC_TEXT_LOCALE")]
    pub locale: TextLocale,

    /// Addons already loaded (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub loaded: Vec<String>,
}

impl ContextArgs {
    pub fn to_context(&self) -> ClientContext {
        ClientContext::builder()
            .environment(self.environment)
            .game_type(self.game_type)
            .text_locale(self.locale)
            .loaded_addons(self.loaded.iter().cloned().collect::<BTreeSet<_>>())
            .build()
    }
}
