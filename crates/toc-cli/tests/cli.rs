//! End-to-end tests for the `toc` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const ADDON: &str = "## Interface: 110000\n\
## Title: Ghost Tools\n\
## Dependencies: Ace3\n\
## AllowLoadGameType: mainline\n\
Core.lua\n\
Classic.lua [AllowLoadGameType vanilla]\n\
Locale/[textlocale].lua\n";

fn write_toc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn toc(args: &[&str], path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_toc"))
        .args(["--color", "never"])
        .args(args)
        .arg(path)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =========================================================================
// check
// =========================================================================

#[test]
fn check_clean_file_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", ADDON);
    let output = toc(&["check"], &path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("ok"));
}

#[test]
fn check_reports_unknown_directive_as_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", "## Titel: Ghost Tools\n");

    let output = toc(&["check"], &path);
    assert!(output.status.success());
    let warning = stdout(&output);
    assert!(warning.contains("did you mean") && warning.contains("Title"));

    let output = toc(&["check", "--deny-warnings"], &path);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn check_fails_on_malformed_value() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", "## Interface: 11x000\n");
    let output = toc(&["check", "--json"], &path);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json[0]["error"].as_str().unwrap().contains("Interface"));
}

#[test]
fn check_strict_rejects_repeated_directive() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", "## Title: A\n## Title: B\n");
    assert!(toc(&["check"], &path).status.success());
    assert_eq!(
        toc(&["check", "--strict"], &path).status.code(),
        Some(exitcode::DATAERR)
    );
}

// =========================================================================
// info, files, can-load
// =========================================================================

#[test]
fn info_json_contains_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", ADDON);
    let output = toc(&["info", "--json"], &path);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Ghost Tools");
    assert_eq!(json["interface"][0], 110000);
    assert_eq!(json["files"].as_array().unwrap().len(), 3);
}

#[test]
fn files_loadable_filters_by_client() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", ADDON);
    let output = toc(
        &["files", "--json", "--loadable", "--locale", "deDE"],
        &path,
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let resolved: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["resolved"].as_str().unwrap())
        .collect();
    assert_eq!(resolved, ["Core.lua", "Locale/deDE.lua"]);
}

#[test]
fn can_load_reports_missing_dependency() {
    let dir = TempDir::new().unwrap();
    let path = write_toc(&dir, "Ghost.toc", ADDON);

    let output = toc(&["can-load"], &path);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert!(stdout(&output).contains("Ace3"));

    let output = toc(&["can-load", "--loaded", "Ace3,LibStub"], &path);
    assert!(output.status.success());
}
