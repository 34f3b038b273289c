//! Tests for the directive schema and token tables.

use std::collections::HashSet;
use toc_semantics::{
    ConditionKind, DIRECTIVES, ElementKind, Environment, Family, GameType, TextLocale, ValueKind,
    canonical_name, directive_names, directive_spec, is_extended, lookup_directive,
    resolve_directive_name, split_locale,
};

// =========================================================================
// Registry
// =========================================================================

#[test]
fn every_canonical_name_is_unique() {
    let mut seen = HashSet::new();
    for spec in DIRECTIVES {
        assert!(seen.insert(spec.name), "duplicate spec for {}", spec.name);
    }
}

#[test]
fn directive_spec_is_case_sensitive() {
    assert!(directive_spec("Title").is_some());
    assert!(directive_spec("title").is_none());
}

#[test]
fn canonical_name_ignores_case() {
    assert_eq!(canonical_name("title"), Some("Title"));
    assert_eq!(canonical_name("SAVEDVARIABLES"), Some("SavedVariables"));
    assert_eq!(canonical_name("Nope"), None);
}

#[test]
fn dependencies_exact_aliases() {
    for alias in ["Dependencies", "Deps", "RequiredDeps", "requireddeps"] {
        let spec = lookup_directive(alias).unwrap();
        assert_eq!(spec.name, "Dependencies", "alias {alias}");
    }
}

#[test]
fn dependencies_predicate_alias_resolves_to_canonical() {
    let spec = lookup_directive("DepsExtra").unwrap();
    assert_eq!(spec.name, "Dependencies");
    assert_eq!(spec.kind, ValueKind::List(ElementKind::String));
}

#[test]
fn exact_alias_wins_over_predicate() {
    assert_eq!(canonical_name("Deps"), Some("Dependencies"));
    assert!(lookup_directive("OptionalDeps").is_some_and(|spec| spec.name == "OptionalDeps"));
}

#[test]
fn list_directives_allow_duplicates() {
    for spec in DIRECTIVES {
        let is_list = matches!(spec.kind, ValueKind::List(_));
        assert_eq!(spec.allow_duplicates, is_list, "{}", spec.name);
    }
}

#[test]
fn only_localized_directives_are_localizable() {
    for spec in DIRECTIVES {
        assert_eq!(spec.localizable, spec.kind == ValueKind::Localized, "{}", spec.name);
    }
}

#[test]
fn interface_is_integer_list() {
    let spec = directive_spec("Interface").unwrap();
    assert_eq!(spec.kind, ValueKind::List(ElementKind::Integer));
}

#[test]
fn condition_directives_use_their_kind() {
    let spec = directive_spec("AllowLoadGameType").unwrap();
    assert_eq!(spec.kind, ValueKind::Condition(ConditionKind::AllowLoadGameType));
}

#[test]
fn directive_names_lists_every_spec() {
    assert_eq!(directive_names().count(), DIRECTIVES.len());
    assert!(directive_names().any(|name| name == "LoadOnDemand"));
}

// =========================================================================
// Name Resolution
// =========================================================================

#[test]
fn is_extended_ignores_case() {
    assert!(is_extended("X-Website"));
    assert!(is_extended("x-website"));
    assert!(!is_extended("Title"));
    assert!(!is_extended("X"));
}

#[test]
fn split_locale_on_plain_directive() {
    assert_eq!(split_locale("Title-deDE"), ("Title", Some("deDE")));
    assert_eq!(split_locale("Title"), ("Title", None));
}

#[test]
fn split_locale_keeps_dashes_in_extended_names() {
    assert_eq!(split_locale("X-Curse-Project-ID"), ("X-Curse-Project-ID", None));
    assert_eq!(split_locale("X-Website-frFR"), ("X-Website", Some("frFR")));
}

#[test]
fn resolve_known_directive_with_locale() {
    let resolved = resolve_directive_name("title-frFR");
    assert_eq!(resolved.canonical, "Title");
    assert_eq!(resolved.base, "title");
    assert_eq!(resolved.locale.as_deref(), Some("frFR"));
    assert!(!resolved.extended);
}

#[test]
fn resolve_unknown_directive_passes_through() {
    let resolved = resolve_directive_name(" Bad ");
    assert_eq!(resolved.canonical, "Bad");
    assert_eq!(resolved.locale, None);
}

#[test]
fn resolve_extended_directive_keeps_name() {
    let resolved = resolve_directive_name("X-Website");
    assert_eq!(resolved.canonical, "X-Website");
    assert!(resolved.extended);
}

// =========================================================================
// Tokens
// =========================================================================

#[test]
fn text_locale_tags_round_trip() {
    for locale in TextLocale::ALL {
        assert_eq!(TextLocale::from_tag(locale.as_str()), Some(locale));
    }
    assert_eq!(TextLocale::DEFAULT.as_str(), "enUS");
}

#[test]
fn text_locale_from_tag_is_exact() {
    assert_eq!(TextLocale::from_tag("dede"), None);
    assert_eq!("dede".parse::<TextLocale>(), Ok(TextLocale::DeDe));
}

#[test]
fn unknown_token_reports_kind() {
    let err = "moon".parse::<Environment>().unwrap_err();
    assert_eq!(err.to_string(), "unknown environment 'moon'");
}

#[test]
fn game_type_families() {
    assert_eq!(GameType::Mainline.family(), Family::Mainline);
    assert_eq!(GameType::Cata.family(), Family::Classic);
    assert_eq!(GameType::Vanilla.family().as_str(), "Classic");
}

#[test]
fn game_type_path_names() {
    assert_eq!(GameType::Mainline.path_name(), "Standard");
    assert_eq!(GameType::Tbc.path_name(), "TBC");
    assert_eq!("WRATH".parse::<GameType>(), Ok(GameType::Wrath));
}
