//! CLI command implementations.

mod can_load;
mod check;
mod context;
mod files;
mod info;

pub use can_load::{run_can_load, CanLoadArgs};
pub use check::{run_check, CheckArgs};
pub use files::{run_files, FilesArgs};
pub use info::{run_info, InfoArgs};

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Result};
use toc::{TocError, TocFile, TocOptions};
use tracing::debug;

use crate::output::TocDiagnostic;

/// Read and parse a TOC file, turning parse failures into source diagnostics.
pub(crate) fn load_toc(path: &Path, options: TocOptions) -> Result<TocFile> {
    debug!(path = %path.display(), "loading TOC file");
    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read TOC file {}: {}", path.display(), e))?;
    TocFile::parse_with(&content, options).map_err(|err| match err {
        TocError::Parse(parse) => TocDiagnostic::from_parse_error(path, &content, &parse).into(),
        other => TocDiagnostic::from_toc_error(path, &content, &other)
            .map_or_else(|| miette!("{}: {}", path.display(), other), Into::into),
    })
}
