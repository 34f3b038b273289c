//! Reading and writing TOC files on disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::document::{TocError, TocFile};
use crate::options::TocOptions;

impl TocFile {
    /// Load and parse a TOC file with default options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TocError> {
        TocFile::load_with(path, TocOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, options: TocOptions) -> Result<Self, TocError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TocError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| TocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded TOC file");
        TocFile::parse_with(&text, options)
    }

    /// Synchronize pending edits and render the document to text.
    pub fn export_string(&mut self) -> String {
        self.sync_all();
        self.document.render()
    }

    /// Synchronize pending edits and write the document to `path`.
    ///
    /// Fails with [`TocError::AlreadyExists`] if the file exists and
    /// `overwrite` is false; the model is left untouched in that case.
    pub fn export(&mut self, path: impl AsRef<Path>, overwrite: bool) -> Result<(), TocError> {
        let path = path.as_ref();
        if path.exists() && !overwrite {
            return Err(TocError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let text = self.export_string();
        fs::write(path, &text).map_err(|source| TocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "exported TOC file");
        Ok(())
    }
}
