//! Tests for load conditions, path substitution, and addon admission.

use toc::conditions::{AddonLoadError, ClientContext, Condition, EvalContext, FileEntry, PathError};
use toc::TocFile;
use toc_semantics::{ConditionKind, Environment, Family, GameType, TextLocale};

fn context(environment: Environment, game_type: GameType, text_locale: TextLocale) -> ClientContext {
    ClientContext::builder()
        .environment(environment)
        .game_type(game_type)
        .text_locale(text_locale)
        .build()
}

/// A context implemented outside the crate, answering from fixed fields.
struct GlueScreen;

impl EvalContext for GlueScreen {
    fn environment(&self) -> Environment {
        Environment::Glue
    }

    fn game_type(&self) -> GameType {
        GameType::Wrath
    }

    fn text_locale(&self) -> TextLocale {
        TextLocale::KoKr
    }

    fn is_addon_loaded(&self, name: &str) -> bool {
        name == "Blizzard_GlueXML"
    }
}

// =========================================================================
// Context
// =========================================================================

#[test]
fn client_context_defaults() {
    let ctx = ClientContext::default();
    assert_eq!(ctx.environment(), Environment::Game);
    assert_eq!(ctx.game_type(), GameType::Mainline);
    assert_eq!(ctx.text_locale(), TextLocale::EnUs);
    assert_eq!(ctx.family(), Family::Mainline);
    assert!(!ctx.is_addon_loaded("Ace3"));
}

#[test]
fn client_context_tracks_loaded_addons() {
    let ctx = ClientContext::builder()
        .loaded_addons(["Ace3".to_string()].into())
        .build();
    assert!(ctx.is_addon_loaded("ACE3"));
    assert_eq!(ctx.loaded_addons().collect::<Vec<_>>(), ["Ace3"]);
}

// =========================================================================
// Condition Evaluation
// =========================================================================

#[test]
fn allow_load_environment() {
    let game = ClientContext::default();
    let glue = context(Environment::Glue, GameType::Mainline, TextLocale::EnUs);

    let condition = Condition::new(ConditionKind::AllowLoad, ["Game"]);
    assert!(condition.evaluate(&game));
    assert!(!condition.evaluate(&glue));

    let both = Condition::new(ConditionKind::AllowLoad, ["Both"]);
    assert!(both.evaluate(&game));
    assert!(both.evaluate(&glue));
}

#[test]
fn allow_load_tokens_ignore_case() {
    let condition = Condition::parse(ConditionKind::AllowLoadEnvironment, "glue");
    assert!(condition.evaluate(&GlueScreen));
}

#[test]
fn allow_load_game_type() {
    let condition = Condition::parse(ConditionKind::AllowLoadGameType, "vanilla, cata");
    assert!(condition.evaluate(&context(Environment::Game, GameType::Cata, TextLocale::EnUs)));
    assert!(!condition.evaluate(&ClientContext::default()));
}

#[test]
fn allow_load_text_locale() {
    let condition = Condition::parse(ConditionKind::AllowLoadTextLocale, "deDE, frFR");
    assert!(condition.evaluate(&context(Environment::Game, GameType::Mainline, TextLocale::FrFr)));
    assert!(!condition.evaluate(&ClientContext::default()));
}

#[test]
fn exclude_load_game_type_and_locale() {
    let ctx = context(Environment::Game, GameType::Mists, TextLocale::RuRu);
    assert!(!Condition::parse(ConditionKind::ExcludeLoadGameType, "mists").evaluate(&ctx));
    assert!(Condition::parse(ConditionKind::ExcludeLoadGameType, "mainline").evaluate(&ctx));
    assert!(!Condition::parse(ConditionKind::ExcludeLoadTextLocale, "ruRU").evaluate(&ctx));
}

#[test]
fn exclude_load_keeps_both_disjuncts() {
    let game = ClientContext::default();

    // Rejects only when the set names the environment and also `Both`.
    let named = Condition::new(ConditionKind::ExcludeLoad, ["Game"]);
    assert!(named.evaluate(&game));

    let both = Condition::new(ConditionKind::ExcludeLoad, ["Game", "Both"]);
    assert!(!both.evaluate(&game));

    let other = Condition::new(ConditionKind::ExcludeLoad, ["Glue", "Both"]);
    assert!(other.evaluate(&game));
}

#[test]
fn condition_export() {
    let condition = Condition::parse(ConditionKind::AllowLoadGameType, " mainline ,cata");
    assert_eq!(condition.export(), "[AllowLoadGameType cata, mainline]");
    assert_eq!(Condition::new(ConditionKind::AllowLoad, Vec::<String>::new()).export(), "[AllowLoad]");
}

// =========================================================================
// File Entries
// =========================================================================

#[test]
fn should_load_requires_every_condition() {
    let entry = FileEntry::with_conditions(
        "Classic.lua",
        vec![
            Condition::parse(ConditionKind::AllowLoadGameType, "vanilla"),
            Condition::parse(ConditionKind::AllowLoadTextLocale, "enUS"),
        ],
    );
    assert!(entry.should_load(&context(Environment::Game, GameType::Vanilla, TextLocale::EnUs)));
    assert!(!entry.should_load(&context(Environment::Game, GameType::Vanilla, TextLocale::DeDe)));
    assert!(FileEntry::new("Core.lua").should_load(&GlueScreen));
}

#[test]
fn resolve_text_locale_placeholder() {
    let entry = FileEntry::new("Locale/[textlocale]/strings.lua");
    let path = entry.resolve_path(&ClientContext::default()).unwrap();
    assert_eq!(path, "Locale/enUS/strings.lua");
}

#[test]
fn resolve_family_and_game_placeholders() {
    let entry = FileEntry::new("[Family]/[GAME]/init.lua");
    let ctx = context(Environment::Game, GameType::Tbc, TextLocale::EnUs);
    assert_eq!(entry.resolve_path(&ctx).unwrap(), "Classic/TBC/init.lua");
    assert_eq!(
        entry.resolve_path(&ClientContext::default()).unwrap(),
        "Mainline/Standard/init.lua"
    );
}

#[test]
fn resolve_path_without_placeholders() {
    let entry = FileEntry::new("Core/Init.lua");
    assert_eq!(entry.resolve_path(&GlueScreen).unwrap(), "Core/Init.lua");
}

#[test]
fn undefined_placeholder_fails_resolution() {
    let entry = FileEntry::new("Locale/[bogus]/strings.lua");
    let err = entry.resolve_path(&ClientContext::default()).unwrap_err();
    assert_eq!(
        err,
        PathError::UndefinedPlaceholder {
            name: "bogus".to_string(),
            path: "Locale/[bogus]/strings.lua".to_string(),
        }
    );
}

// =========================================================================
// Addon Admission
// =========================================================================

#[test]
fn addon_without_constraints_loads() {
    let toc = TocFile::parse("## Title: Plain\nCore.lua\n").unwrap();
    assert_eq!(toc.can_load_addon(&GlueScreen), Ok(()));
}

#[test]
fn missing_dependency_has_priority() {
    let toc = TocFile::parse("## Dependencies: Ace3\n## AllowLoad: Glue\n").unwrap();
    let err = toc.can_load_addon(&ClientContext::default()).unwrap_err();
    assert_eq!(
        err,
        AddonLoadError::MissingDependency {
            name: "Ace3".to_string()
        }
    );
}

#[test]
fn satisfied_dependencies_then_environment() {
    let toc = TocFile::parse("## Dependencies: Ace3\n## AllowLoad: Glue\n").unwrap();
    let mut ctx = ClientContext::default();
    ctx.mark_loaded("Ace3");
    assert_eq!(toc.can_load_addon(&ctx), Err(AddonLoadError::WrongEnvironment));
}

#[test]
fn wrong_game_type() {
    let toc = TocFile::parse("## AllowLoad: Both\n## AllowLoadGameType: vanilla\n").unwrap();
    assert_eq!(
        toc.can_load_addon(&ClientContext::default()),
        Err(AddonLoadError::WrongGameType)
    );
}

#[test]
fn wrong_text_locale() {
    let toc = TocFile::parse("## AllowLoadGameType: wrath\n## AllowLoadTextLocale: deDE\n").unwrap();
    assert_eq!(toc.can_load_addon(&GlueScreen), Err(AddonLoadError::WrongTextLocale));
}

#[test]
fn loadable_files_filters_and_resolves() {
    let toc = TocFile::parse(
        "Core.lua\n\
         Classic.lua [AllowLoadGameType vanilla]\n\
         Locale/[textlocale].lua\n",
    )
    .unwrap();
    let files = toc.loadable_files(&ClientContext::default()).unwrap();
    assert_eq!(files, ["Core.lua", "Locale/enUS.lua"]);
}
