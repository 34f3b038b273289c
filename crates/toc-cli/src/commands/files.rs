//! Implementation of the `toc files` command.

use std::path::PathBuf;

use clap::Args;
use miette::IntoDiagnostic;
use serde::Serialize;
use toc::TocOptions;

use crate::commands::context::ContextArgs;
use crate::commands::load_toc;
use crate::output::table::{format_file_table, FileRow};

/// Arguments for the files command.
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// TOC file to inspect
    pub file: PathBuf,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Only list files that load in the given client
    #[arg(long)]
    pub loadable: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one file entry.
#[derive(Debug, Serialize)]
struct FileJson {
    path: String,
    resolved: Option<String>,
    loads: bool,
}

/// Run the files command.
pub fn run_files(args: FilesArgs) -> miette::Result<i32> {
    let toc = load_toc(&args.file, TocOptions::default())?;
    let ctx = args.context.to_context();

    let entries: Vec<FileJson> = toc
        .files()
        .iter()
        .map(|file| FileJson {
            path: file.entry.export(),
            resolved: file.entry.resolve_path(&ctx).ok(),
            loads: file.entry.should_load(&ctx),
        })
        .filter(|entry| entry.loads || !args.loadable)
        .collect();

    if args.json {
        let output = serde_json::to_string_pretty(&entries).into_diagnostic()?;
        println!("{}", output);
    } else {
        let rows: Vec<FileRow> = entries
            .into_iter()
            .map(|entry| FileRow {
                path: entry.path,
                resolved: entry
                    .resolved
                    .unwrap_or_else(|| "(undefined variable)".to_string()),
                loads: entry.loads,
            })
            .collect();
        println!("{}", format_file_table(&rows));
    }
    Ok(exitcode::OK)
}
