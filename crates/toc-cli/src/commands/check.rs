//! Implementation of the `toc check` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;
use toc::{lint_document, TocOptions};

use crate::commands::load_toc;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.toc)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat repeated directives that do not merge as errors
    #[arg(long)]
    pub strict: bool,

    /// Exit with non-zero code if any lint warning is found
    #[arg(long)]
    pub deny_warnings: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let options = TocOptions::builder().check_duplicates(args.strict).build();
    let mut results = Vec::new();
    let mut failed = false;
    let mut warned = false;

    for path in &args.files {
        let (error, warnings) = match load_toc(path, options) {
            Ok(toc) => {
                let warnings: Vec<String> = lint_document(toc.document())
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                (None, warnings)
            }
            Err(report) => {
                if !args.json {
                    eprintln!("{:?}", report);
                }
                (Some(report.to_string()), Vec::new())
            }
        };
        failed |= error.is_some();
        warned |= !warnings.is_empty();

        if !args.json {
            for warning in &warnings {
                println!("{}: {} {}", path.display(), "warning:".yellow(), warning);
            }
            if error.is_none() && warnings.is_empty() {
                println!("{}: {}", path.display(), "ok".green());
            }
        }
        results.push(CheckJson {
            file: path.display().to_string(),
            error,
            warnings,
        });
    }

    if args.json {
        let output = serde_json::to_string_pretty(&results)
            .map_err(|e| miette::miette!("Failed to serialize results: {}", e))?;
        println!("{}", output);
    }

    if failed || (args.deny_warnings && warned) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
