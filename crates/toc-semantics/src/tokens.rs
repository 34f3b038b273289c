//! Closed token sets used by load conditions and file path variables.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Token in a condition set that admits every environment.
pub const BOTH_ENVIRONMENTS: &str = "Both";

/// Error returned when a string does not name a known token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

impl Display for UnknownToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown {} '{}'", self.kind, self.token)
    }
}

impl Error for UnknownToken {}

/// A client text locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextLocale {
    EnUs,
    EnGb,
    DeDe,
    EsEs,
    EsMx,
    FrFr,
    ItIt,
    KoKr,
    PtBr,
    RuRu,
    ZhCn,
    ZhTw,
}

impl TextLocale {
    /// The locale used when a directive carries no locale suffix.
    pub const DEFAULT: TextLocale = TextLocale::EnUs;

    pub const ALL: [TextLocale; 12] = [
        TextLocale::EnUs,
        TextLocale::EnGb,
        TextLocale::DeDe,
        TextLocale::EsEs,
        TextLocale::EsMx,
        TextLocale::FrFr,
        TextLocale::ItIt,
        TextLocale::KoKr,
        TextLocale::PtBr,
        TextLocale::RuRu,
        TextLocale::ZhCn,
        TextLocale::ZhTw,
    ];

    /// The locale tag as written in TOC files, e.g. `deDE`.
    pub fn as_str(self) -> &'static str {
        match self {
            TextLocale::EnUs => "enUS",
            TextLocale::EnGb => "enGB",
            TextLocale::DeDe => "deDE",
            TextLocale::EsEs => "esES",
            TextLocale::EsMx => "esMX",
            TextLocale::FrFr => "frFR",
            TextLocale::ItIt => "itIT",
            TextLocale::KoKr => "koKR",
            TextLocale::PtBr => "ptBR",
            TextLocale::RuRu => "ruRU",
            TextLocale::ZhCn => "zhCN",
            TextLocale::ZhTw => "zhTW",
        }
    }

    /// Exact (case-sensitive) lookup of a locale tag.
    pub fn from_tag(tag: &str) -> Option<TextLocale> {
        TextLocale::ALL.into_iter().find(|l| l.as_str() == tag)
    }
}

impl Display for TextLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextLocale {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextLocale::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownToken {
                kind: "text locale",
                token: s.to_string(),
            })
    }
}

/// The client environment an addon is being loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Login and character select screens.
    Glue,
    /// The in-world game environment.
    Game,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Glue, Environment::Game];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Glue => "Glue",
            Environment::Game => "Game",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownToken {
                kind: "environment",
                token: s.to_string(),
            })
    }
}

/// A client flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    Mainline,
    Vanilla,
    Tbc,
    Wrath,
    Cata,
    Mists,
    Plunderstorm,
    Wowhack,
}

impl GameType {
    pub const ALL: [GameType; 8] = [
        GameType::Mainline,
        GameType::Vanilla,
        GameType::Tbc,
        GameType::Wrath,
        GameType::Cata,
        GameType::Mists,
        GameType::Plunderstorm,
        GameType::Wowhack,
    ];

    /// The token used in `AllowLoadGameType` conditions.
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Mainline => "mainline",
            GameType::Vanilla => "vanilla",
            GameType::Tbc => "tbc",
            GameType::Wrath => "wrath",
            GameType::Cata => "cata",
            GameType::Mists => "mists",
            GameType::Plunderstorm => "plunderstorm",
            GameType::Wowhack => "wowhack",
        }
    }

    /// The value substituted for the `[game]` file path variable.
    pub fn path_name(self) -> &'static str {
        match self {
            GameType::Mainline => "Standard",
            GameType::Vanilla => "Vanilla",
            GameType::Tbc => "TBC",
            GameType::Wrath => "Wrath",
            GameType::Cata => "Cata",
            GameType::Mists => "Mists",
            GameType::Plunderstorm => "Plunderstorm",
            GameType::Wowhack => "WoWHack",
        }
    }

    pub fn family(self) -> Family {
        match self {
            GameType::Mainline | GameType::Plunderstorm | GameType::Wowhack => Family::Mainline,
            GameType::Vanilla
            | GameType::Tbc
            | GameType::Wrath
            | GameType::Cata
            | GameType::Mists => Family::Classic,
        }
    }
}

impl Display for GameType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameType::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownToken {
                kind: "game type",
                token: s.to_string(),
            })
    }
}

/// The client family a game type belongs to, used by the `[family]` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Mainline,
    Classic,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Mainline => "Mainline",
            Family::Classic => "Classic",
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
