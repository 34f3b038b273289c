use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice::Iter;

use toc_semantics::ElementKind;

use crate::types::ValueError;

/// One element of an ordered list directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    String(String),
    Integer(i64),
}

impl Element {
    /// Convert a trimmed token to the given element kind.
    pub fn convert(kind: ElementKind, token: &str) -> Result<Element, ValueError> {
        match kind {
            ElementKind::String => Ok(Element::String(token.to_string())),
            ElementKind::Integer => token.parse::<i64>().map(Element::Integer).map_err(|_| {
                ValueError::MalformedInteger {
                    value: token.to_string(),
                }
            }),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            Element::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Element::Integer(n) => Some(*n),
            Element::String(_) => None,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Element::String(s) => f.write_str(s),
            Element::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq<str> for Element {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Element {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Element {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

/// An ordered, comma-separated list value.
///
/// Repeated list directives merge into one value: the raw text of each line
/// is joined with `", "` and its elements are appended in order. Equality
/// compares the element kind and elements, not the raw text.
#[derive(Debug, Clone, Eq)]
pub struct ListValue {
    pub raw: String,
    kind: ElementKind,
    items: Vec<Element>,
}

impl ListValue {
    /// Create an empty list of the given element kind.
    pub fn new(kind: ElementKind) -> Self {
        ListValue {
            raw: String::new(),
            kind,
            items: Vec::new(),
        }
    }

    /// Split `raw` on commas and convert every trimmed token.
    ///
    /// An empty (or all-whitespace) value yields an empty list. Otherwise
    /// every token counts, so `a,,b` holds an empty string element and an
    /// integer list rejects it.
    pub fn parse(raw: &str, kind: ElementKind) -> Result<Self, ValueError> {
        let items = split_tokens(raw)
            .map(|token| Element::convert(kind, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListValue {
            raw: raw.to_string(),
            kind,
            items,
        })
    }

    /// Build a list from already-typed elements, rendering the raw text.
    pub fn from_items(
        kind: ElementKind,
        items: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ValueError> {
        let tokens: Vec<String> = items
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .collect();
        ListValue::parse(&tokens.join(", "), kind)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.items.iter()
    }

    /// Returns true if any element renders as `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item.to_string() == value)
    }

    /// The elements rendered as strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.items.iter().map(Element::to_string).collect()
    }

    /// Append a single element, converting it to this list's element kind.
    pub fn append(&mut self, token: &str) -> Result<(), ValueError> {
        let token = token.trim();
        let element = Element::convert(self.kind, token)?;
        self.push_raw(token);
        self.items.push(element);
        Ok(())
    }

    /// Append every element of `other`, re-running conversion so that the
    /// merged elements always match this list's element kind.
    pub fn extend(&mut self, other: &ListValue) -> Result<(), ValueError> {
        let converted = other
            .items
            .iter()
            .map(|item| Element::convert(self.kind, &item.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        self.push_raw(other.raw.trim());
        self.items.extend(converted);
        Ok(())
    }

    /// Remove every element rendering as `value`. Returns true if any was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.to_string() != value);
        let removed = self.items.len() != before;
        if removed {
            self.raw = self.to_strings().join(", ");
        }
        removed
    }

    fn push_raw(&mut self, text: &str) {
        if self.raw.trim().is_empty() {
            self.raw = text.to_string();
        } else {
            self.raw = format!("{}, {text}", self.raw.trim_end());
        }
    }
}

impl Display for ListValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_strings().join(", "))
    }
}

impl PartialEq for ListValue {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.items == other.items
    }
}

impl<T> PartialEq<[T]> for ListValue
where
    Element: PartialEq<T>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.items.len() == other.len() && self.items.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for ListValue
where
    Element: PartialEq<T>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a Element;
    type IntoIter = Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    let raw = if raw.trim().is_empty() { None } else { Some(raw) };
    raw.into_iter().flat_map(|raw| raw.split(',').map(str::trim))
}
