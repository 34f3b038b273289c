//! Implementation of the `toc info` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use toc::{TocFile, TocOptions};
use toc_semantics::TextLocale;

use crate::commands::load_toc;
use crate::output::table::{format_directive_table, DirectiveRow};

/// Arguments for the info command.
#[derive(Debug, clap::Args)]
pub struct InfoArgs {
    /// TOC file to inspect
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the info command.
pub fn run_info(args: InfoArgs) -> miette::Result<i32> {
    let toc = load_toc(&args.file, TocOptions::default())?;

    if args.json {
        let output = serde_json::to_string_pretty(&toc.summary()).into_diagnostic()?;
        println!("{}", output);
    } else {
        println!("{}", format_directive_table(&directive_rows(&toc)));
        println!("{} files, {} comments", toc.files().len(), toc.comments().len());
    }
    Ok(exitcode::OK)
}

fn directive_rows(toc: &TocFile) -> Vec<DirectiveRow> {
    let mut rows = Vec::new();
    for (name, value) in toc.attributes() {
        match value.as_localized() {
            Some(text) => {
                for (locale, translation) in text.translations() {
                    rows.push(DirectiveRow {
                        name: localized_name(name, locale),
                        value: translation.to_string(),
                        origin: "registered",
                    });
                }
            }
            None => rows.push(DirectiveRow {
                name: name.to_string(),
                value: value.to_string(),
                origin: "registered",
            }),
        }
    }
    for (name, text) in toc.extended_directives() {
        for (locale, translation) in text.translations() {
            rows.push(DirectiveRow {
                name: localized_name(name, locale),
                value: translation.to_string(),
                origin: "extended",
            });
        }
    }
    for (name, value) in toc.unknown_directives() {
        rows.push(DirectiveRow {
            name: name.to_string(),
            value: value.to_string(),
            origin: "unknown",
        });
    }
    rows
}

fn localized_name(name: &str, locale: TextLocale) -> String {
    if locale == TextLocale::DEFAULT {
        name.to_string()
    } else {
        format!("{name}-{locale}")
    }
}
