//! Parse and model configuration.

use bon::Builder;

/// Options controlling how TOC text is parsed into a model.
///
/// # Example
///
/// ```
/// use toc::TocOptions;
///
/// let strict = TocOptions::builder().check_duplicates(true).build();
/// assert!(strict.check_duplicates);
/// assert!(!strict.bool_default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct TocOptions {
    /// Treat a repeated directive that does not allow duplicates as a fatal
    /// error instead of letting the last occurrence win.
    #[builder(default)]
    pub check_duplicates: bool,

    /// Truth value used for empty or unrecognized boolean text.
    #[builder(default)]
    pub bool_default: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions::builder().build()
    }
}
