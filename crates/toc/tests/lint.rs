//! Tests for TOC lint rules.

use toc::lint::{LintWarning, compute_suggestions, lint_document};
use toc::parser::parse_document;
use toc::TocOptions;

fn lint(text: &str) -> Vec<LintWarning> {
    lint_document(&parse_document(text, &TocOptions::default()).unwrap())
}

#[test]
fn clean_document_has_no_warnings() {
    let warnings = lint(
        "## Interface: 110000\n## Title: Foo\n## Title-deDE: Bar\n## Deps: A\n## Deps: B\nCore.lua\n",
    );
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn unknown_directive_with_suggestion() {
    let warnings = lint("## SavedVariable: DB\n");
    assert_eq!(
        warnings,
        [LintWarning::UnknownDirective {
            name: "SavedVariable".to_string(),
            line: 1,
            suggestions: vec!["SavedVariables".to_string()],
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "line 1: unknown directive 'SavedVariable'; did you mean: SavedVariables?"
    );
}

#[test]
fn unknown_directive_without_suggestion() {
    let warnings = lint("## Bad: bad:data\n");
    assert_eq!(warnings[0].to_string(), "line 1: unknown directive 'Bad'");
}

#[test]
fn extended_directives_are_not_flagged() {
    assert!(lint("## X-Anything: 1\n").is_empty());
}

#[test]
fn ignored_condition_clause() {
    let warnings = lint("\nCore.lua [LoadIfBored] [AllowLoad Game]\n");
    assert_eq!(
        warnings,
        [LintWarning::IgnoredCondition {
            line: 2,
            clause: "LoadIfBored".to_string(),
        }]
    );
}

#[test]
fn duplicate_directive_lines() {
    let warnings = lint("## DefaultState: 1\n## Title: A\n## DefaultState: 0\n## Title-deDE: B\n");
    assert_eq!(
        warnings,
        [LintWarning::DuplicateDirective {
            name: "DefaultState".to_string(),
            lines: vec![1, 3],
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "'DefaultState' is set on lines 1, 3; only the last one takes effect"
    );
}

#[test]
fn duplicate_locale_branch() {
    let warnings = lint("## Notes-frFR: A\n## Notes-frFR: B\n");
    assert!(matches!(
        &warnings[..],
        [LintWarning::DuplicateDirective { name, .. }] if name == "Notes-frFR"
    ));
}

#[test]
fn suggestions_ignore_case_and_limit_distance() {
    assert_eq!(
        compute_suggestions("loadondemnd", &["LoadOnDemand", "LoadFirst"]),
        ["LoadOnDemand"]
    );
    assert!(compute_suggestions("Zzz", &["Title"]).is_empty());
    assert!(compute_suggestions("Title", &["Title"]).is_empty());
}
