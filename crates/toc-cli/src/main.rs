//! TOC CLI entry point.
//!
//! Provides command-line tools for working with addon TOC files:
//! - `toc check` - Validate TOC files and report lint warnings
//! - `toc info` - Show the directives a TOC file declares
//! - `toc files` - List files and whether they load in a given client
//! - `toc can-load` - Check whether an addon loads in a given client

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_can_load, run_check, run_files, run_info, CanLoadArgs, CheckArgs, FilesArgs, InfoArgs,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Addon TOC file tools.
#[derive(Debug, Parser)]
#[command(name = "toc")]
#[command(about = "Addon TOC file tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check TOC files for errors and lint warnings
    Check(CheckArgs),
    /// Show the directives declared by a TOC file
    Info(InfoArgs),
    /// List the files of a TOC file and whether they load
    Files(FilesArgs),
    /// Check whether an addon can load in a given client
    CanLoad(CanLoadArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn setup_logging(verbose: bool) {
    let default = if verbose { "toc=debug" } else { "toc=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Info(args) => run_info(args),
        Commands::Files(args) => run_files(args),
        Commands::CanLoad(args) => run_can_load(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
