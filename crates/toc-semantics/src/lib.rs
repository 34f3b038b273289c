//! Shared TOC semantic tables used by both the parser and the CLI.
//!
//! This crate centralizes the directive schema, alias resolution, and the
//! closed token sets (locales, environments, game types) so that every
//! consumer agrees on what a directive name means.

mod tokens;

pub use tokens::{BOTH_ENVIRONMENTS, Environment, Family, GameType, TextLocale, UnknownToken};

/// Prefix marking an extended (addon-defined) directive, e.g. `X-Website`.
pub const EXTENDED_PREFIX: &str = "X-";

/// Element type of an ordered list directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    String,
    Integer,
}

/// Load condition variants, usable both as file-line clauses and as
/// document-level directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionKind {
    AllowLoad,
    AllowLoadEnvironment,
    AllowLoadGameType,
    AllowLoadTextLocale,
    ExcludeLoad,
    ExcludeLoadEnvironment,
    ExcludeLoadGameType,
    ExcludeLoadTextLocale,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 8] = [
        ConditionKind::AllowLoad,
        ConditionKind::AllowLoadEnvironment,
        ConditionKind::AllowLoadGameType,
        ConditionKind::AllowLoadTextLocale,
        ConditionKind::ExcludeLoad,
        ConditionKind::ExcludeLoadEnvironment,
        ConditionKind::ExcludeLoadGameType,
        ConditionKind::ExcludeLoadTextLocale,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ConditionKind::AllowLoad => "AllowLoad",
            ConditionKind::AllowLoadEnvironment => "AllowLoadEnvironment",
            ConditionKind::AllowLoadGameType => "AllowLoadGameType",
            ConditionKind::AllowLoadTextLocale => "AllowLoadTextLocale",
            ConditionKind::ExcludeLoad => "ExcludeLoad",
            ConditionKind::ExcludeLoadEnvironment => "ExcludeLoadEnvironment",
            ConditionKind::ExcludeLoadGameType => "ExcludeLoadGameType",
            ConditionKind::ExcludeLoadTextLocale => "ExcludeLoadTextLocale",
        }
    }

    /// Case-insensitive lookup of a condition clause name.
    pub fn from_name(name: &str) -> Option<ConditionKind> {
        ConditionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// Declared value kind of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Integer,
    List(ElementKind),
    Localized,
    Condition(ConditionKind),
}

/// Registry entry describing one known directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveSpec {
    /// Canonical directive name.
    pub name: &'static str,
    pub kind: ValueKind,
    /// Alternate spellings, matched case-insensitively.
    pub aliases: &'static [&'static str],
    /// Pattern-based alias match, consulted only when no exact alias matches.
    pub alias_predicate: Option<fn(&str) -> bool>,
    pub localizable: bool,
    pub allow_duplicates: bool,
}

impl DirectiveSpec {
    const fn new(name: &'static str, kind: ValueKind) -> Self {
        DirectiveSpec {
            name,
            kind,
            aliases: &[],
            alias_predicate: None,
            localizable: false,
            allow_duplicates: false,
        }
    }

    const fn localized(name: &'static str) -> Self {
        DirectiveSpec {
            localizable: true,
            ..DirectiveSpec::new(name, ValueKind::Localized)
        }
    }

    const fn list(name: &'static str, element: ElementKind) -> Self {
        DirectiveSpec {
            allow_duplicates: true,
            ..DirectiveSpec::new(name, ValueKind::List(element))
        }
    }

    const fn boolean(name: &'static str) -> Self {
        DirectiveSpec::new(name, ValueKind::Boolean)
    }

    const fn condition(kind: ConditionKind) -> Self {
        DirectiveSpec::new(kind.name(), ValueKind::Condition(kind))
    }

    /// Returns true if `name` matches the canonical name or an alias,
    /// ignoring ASCII case.
    pub fn matches_exact(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

fn is_dependencies_alias(name: &str) -> bool {
    name.to_ascii_lowercase().starts_with("deps")
}

/// Every directive known to the schema, in canonical order.
pub static DIRECTIVES: &[DirectiveSpec] = &[
    DirectiveSpec::list("Interface", ElementKind::Integer),
    DirectiveSpec::localized("Title"),
    DirectiveSpec::localized("Author"),
    DirectiveSpec::localized("Version"),
    DirectiveSpec::localized("Notes"),
    DirectiveSpec::localized("Group"),
    DirectiveSpec::localized("Category"),
    DirectiveSpec::list("SavedVariables", ElementKind::String),
    DirectiveSpec::list("SavedVariablesPerCharacter", ElementKind::String),
    DirectiveSpec::list("SavedVariablesMachine", ElementKind::String),
    DirectiveSpec::localized("IconTexture"),
    DirectiveSpec::localized("IconAtlas"),
    DirectiveSpec::localized("AddonCompartmentFunc"),
    DirectiveSpec::localized("AddonCompartmentFuncOnEnter"),
    DirectiveSpec::localized("AddonCompartmentFuncOnLeave"),
    DirectiveSpec::boolean("LoadOnDemand"),
    DirectiveSpec::boolean("LoadFirst"),
    DirectiveSpec::list("LoadWith", ElementKind::String),
    DirectiveSpec::list("LoadManagers", ElementKind::String),
    DirectiveSpec {
        aliases: &["Dependencies", "Deps", "RequiredDeps"],
        alias_predicate: Some(is_dependencies_alias),
        ..DirectiveSpec::list("Dependencies", ElementKind::String)
    },
    DirectiveSpec::list("OptionalDeps", ElementKind::String),
    DirectiveSpec::boolean("DefaultState"),
    DirectiveSpec::boolean("OnlyBetaAndPTR"),
    DirectiveSpec::boolean("LoadSavedVariablesFirst"),
    DirectiveSpec::condition(ConditionKind::AllowLoad),
    DirectiveSpec::condition(ConditionKind::AllowLoadGameType),
    DirectiveSpec::condition(ConditionKind::AllowLoadTextLocale),
    DirectiveSpec::boolean("UseSecureEnvironment"),
];

/// Look up a directive by its canonical name (exact, case-sensitive).
pub fn directive_spec(canonical: &str) -> Option<&'static DirectiveSpec> {
    DIRECTIVES.iter().find(|spec| spec.name == canonical)
}

/// Resolve a name through the exact alias table, ignoring ASCII case.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    DIRECTIVES
        .iter()
        .find(|spec| spec.matches_exact(name))
        .map(|spec| spec.name)
}

/// Resolve a name through the alias predicates. Callers are expected to try
/// [`canonical_name`] first.
pub fn predicate_alias(name: &str) -> Option<&'static DirectiveSpec> {
    DIRECTIVES
        .iter()
        .find(|spec| spec.alias_predicate.is_some_and(|matches| matches(name)))
}

/// Resolve any spelling of a directive name to its registry entry.
///
/// Resolution order:
/// 1. Exact alias match (case-insensitive)
/// 2. Alias predicates
pub fn lookup_directive(name: &str) -> Option<&'static DirectiveSpec> {
    canonical_name(name)
        .and_then(directive_spec)
        .or_else(|| predicate_alias(name))
}

/// Names of every known directive, for diagnostics and typo suggestions.
pub fn directive_names() -> impl Iterator<Item = &'static str> {
    DIRECTIVES.iter().map(|spec| spec.name)
}

/// Returns true if the directive name carries the extended `X-` prefix.
pub fn is_extended(name: &str) -> bool {
    name.get(..EXTENDED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENDED_PREFIX))
}

/// A directive name after locale stripping and alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Registry name for known directives, otherwise the base name unchanged.
    pub canonical: String,
    /// The name as written, with any locale suffix removed.
    pub base: String,
    /// Locale suffix, if one was split off.
    pub locale: Option<String>,
    pub extended: bool,
}

/// Split a raw directive name into its base name and optional locale suffix.
///
/// Extended names only split off a trailing segment that is a known locale
/// tag. All other names split at the first `-` unconditionally.
pub fn split_locale(raw: &str) -> (&str, Option<&str>) {
    if is_extended(raw) {
        match raw.rsplit_once('-') {
            Some((base, suffix))
                if base.len() >= EXTENDED_PREFIX.len() && TextLocale::from_tag(suffix).is_some() =>
            {
                (base, Some(suffix))
            }
            _ => (raw, None),
        }
    } else {
        match raw.split_once('-') {
            Some((base, locale)) => (base, Some(locale)),
            None => (raw, None),
        }
    }
}

/// Resolve a raw directive name (the text between `## ` and `:`).
///
/// Unknown names pass through as their own canonical name.
pub fn resolve_directive_name(raw: &str) -> ResolvedName {
    let raw = raw.trim();
    let (base, locale) = split_locale(raw);
    let extended = is_extended(base);
    let canonical = if extended {
        base.to_string()
    } else {
        lookup_directive(base)
            .map(|spec| spec.name.to_string())
            .unwrap_or_else(|| base.to_string())
    };

    ResolvedName {
        canonical,
        base: base.to_string(),
        locale: locale.map(str::to_string),
        extended,
    }
}
