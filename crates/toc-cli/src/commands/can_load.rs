//! Implementation of the `toc can-load` command.

use std::path::PathBuf;

use clap::Args;
use owo_colors::OwoColorize;
use toc::TocOptions;

use crate::commands::context::ContextArgs;
use crate::commands::load_toc;

/// Arguments for the can-load command.
#[derive(Debug, Args)]
pub struct CanLoadArgs {
    /// TOC file to check
    pub file: PathBuf,

    #[command(flatten)]
    pub context: ContextArgs,
}

/// Run the can-load command.
///
/// Exits with `DATAERR` when the addon is rejected.
pub fn run_can_load(args: CanLoadArgs) -> miette::Result<i32> {
    let toc = load_toc(&args.file, TocOptions::default())?;
    match toc.can_load_addon(&args.context.to_context()) {
        Ok(()) => {
            println!("{}: {}", args.file.display(), "can load".green());
            Ok(exitcode::OK)
        }
        Err(reason) => {
            println!("{}: {} ({})", args.file.display(), "cannot load".red(), reason);
            Ok(exitcode::DATAERR)
        }
    }
}
