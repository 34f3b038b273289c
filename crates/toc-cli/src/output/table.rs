//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One row of the directive table.
pub struct DirectiveRow {
    /// Directive name, with a locale suffix for non-default translations.
    pub name: String,
    pub value: String,
    /// Where the directive came from: registered, extended, or unknown.
    pub origin: &'static str,
}

/// One row of the file table.
pub struct FileRow {
    pub path: String,
    /// The path with variables substituted, or the substitution error.
    pub resolved: String,
    pub loads: bool,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format directives as a table.
pub fn format_directive_table(rows: &[DirectiveRow]) -> Table {
    let mut table = new_table(vec!["Directive", "Value", "Kind"]);
    for row in rows {
        table.add_row(vec![row.name.clone(), row.value.clone(), row.origin.to_string()]);
    }
    table
}

/// Format file entries as a table.
pub fn format_file_table(rows: &[FileRow]) -> Table {
    let mut table = new_table(vec!["File", "Resolved", "Loads"]);
    for row in rows {
        table.add_row(vec![
            row.path.clone(),
            row.resolved.clone(),
            if row.loads { "yes" } else { "no" }.to_string(),
        ]);
    }
    table
}
