//! A serializable snapshot of the model, used for reporting.

use std::collections::BTreeMap;

use serde::Serialize;
use toc_semantics::TextLocale;

use crate::conditions::Condition;
use crate::document::TocFile;
use crate::types::{ListValue, LocalizedValue};

/// Snapshot of the addon metadata a TOC file declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonSummary {
    pub title: Option<String>,
    /// Title translations other than the default locale, keyed by locale tag.
    pub localized_titles: BTreeMap<String, String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub notes: Option<String>,
    pub interface: Vec<i64>,
    pub dependencies: Vec<String>,
    pub optional_deps: Vec<String>,
    pub saved_variables: Vec<String>,
    pub saved_variables_per_character: Vec<String>,
    pub load_on_demand: Option<bool>,
    pub default_state: Option<bool>,
    /// `X-` directives, default-locale text.
    pub extended: BTreeMap<String, String>,
    pub unknown: BTreeMap<String, String>,
    pub files: Vec<FileSummary>,
    pub comments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub path: String,
    /// Condition clauses as written on export, e.g. `[AllowLoadGameType cata]`.
    pub conditions: Vec<String>,
}

impl TocFile {
    /// Capture the current model state. Pending edits are included.
    pub fn summary(&self) -> AddonSummary {
        AddonSummary {
            title: self.title().map(str::to_string),
            localized_titles: self
                .localized("Title")
                .map(other_locales)
                .unwrap_or_default(),
            author: self.author().map(str::to_string),
            version: self.version().map(str::to_string),
            notes: self.notes().map(str::to_string),
            interface: self.interface_versions(),
            dependencies: strings(self.dependencies()),
            optional_deps: strings(self.optional_deps()),
            saved_variables: strings(self.saved_variables()),
            saved_variables_per_character: strings(self.saved_variables_per_character()),
            load_on_demand: self.load_on_demand(),
            default_state: self.default_state(),
            extended: self
                .extended
                .iter()
                .map(|(name, text)| (name.clone(), text.to_string()))
                .collect(),
            unknown: self.unknown.clone(),
            files: self
                .files
                .iter()
                .map(|file| FileSummary {
                    path: file.entry.path.clone(),
                    conditions: file.entry.conditions.iter().map(Condition::export).collect(),
                })
                .collect(),
            comments: self.comments.len(),
        }
    }
}

fn strings(list: Option<&ListValue>) -> Vec<String> {
    list.map(ListValue::to_strings).unwrap_or_default()
}

fn other_locales(text: &LocalizedValue) -> BTreeMap<String, String> {
    text.translations()
        .filter(|(locale, _)| *locale != TextLocale::DEFAULT)
        .map(|(locale, text)| (locale.to_string(), text.to_string()))
        .collect()
}
