//! Terminal output helpers.

pub mod diagnostic;
pub mod table;

pub use diagnostic::TocDiagnostic;
