use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use toc_semantics::TextLocale;

/// A directive value holding one string per locale.
///
/// Lines like `## Title: Foo` and `## Title-deDE: Bar` merge into a single
/// value. A locale that was never set is distinct from one set to `""`.
///
/// # Example
///
/// ```
/// use toc::types::LocalizedValue;
/// use toc_semantics::TextLocale;
///
/// let mut title = LocalizedValue::new("Foo", TextLocale::DEFAULT);
/// title.set(TextLocale::DeDe, "Bar");
///
/// assert_eq!(title, "Foo");
/// assert_eq!(title.get(TextLocale::DeDe), Some("Bar"));
/// ```
#[derive(Debug, Clone, Eq)]
pub struct LocalizedValue {
    /// Raw text of the most recently set locale branch.
    pub raw: String,
    translations: BTreeMap<TextLocale, String>,
}

impl LocalizedValue {
    /// Create a value seeded with one translation.
    pub fn new(text: impl Into<String>, locale: TextLocale) -> Self {
        let mut value = LocalizedValue::empty();
        value.set(locale, text);
        value
    }

    /// Create a value with no translations.
    pub fn empty() -> Self {
        LocalizedValue {
            raw: String::new(),
            translations: BTreeMap::new(),
        }
    }

    pub fn get(&self, locale: TextLocale) -> Option<&str> {
        self.translations.get(&locale).map(String::as_str)
    }

    /// The default-locale translation, if set.
    pub fn default_text(&self) -> Option<&str> {
        self.get(TextLocale::DEFAULT)
    }

    /// Set (or overwrite) the translation for `locale`.
    pub fn set(&mut self, locale: TextLocale, text: impl Into<String>) {
        let text = text.into();
        self.raw.clone_from(&text);
        self.translations.insert(locale, text.trim().to_string());
    }

    /// Remove a translation, returning the previous text.
    pub fn remove(&mut self, locale: TextLocale) -> Option<String> {
        self.translations.remove(&locale)
    }

    pub fn contains(&self, locale: TextLocale) -> bool {
        self.translations.contains_key(&locale)
    }

    pub fn translations(&self) -> impl Iterator<Item = (TextLocale, &str)> {
        self.translations
            .iter()
            .map(|(locale, text)| (*locale, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl Default for LocalizedValue {
    fn default() -> Self {
        LocalizedValue::empty()
    }
}

/// Displays the default-locale translation, or nothing if it is unset.
impl Display for LocalizedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.default_text().unwrap_or_default())
    }
}

impl PartialEq for LocalizedValue {
    fn eq(&self, other: &Self) -> bool {
        self.translations == other.translations
    }
}

impl PartialEq<str> for LocalizedValue {
    fn eq(&self, other: &str) -> bool {
        self.default_text() == Some(other)
    }
}

impl PartialEq<&str> for LocalizedValue {
    fn eq(&self, other: &&str) -> bool {
        self.default_text() == Some(*other)
    }
}
