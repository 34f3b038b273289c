use std::fmt::{Display, Formatter, Result as FmtResult};

/// Leading characters read as false.
const FALSEY_CHARS: [char; 3] = ['0', 'n', 'f'];
/// Whole words read as false.
const FALSEY_STRINGS: [&str; 2] = ["off", "disabled"];
/// Leading characters read as true.
const TRUTHY_CHARS: [char; 11] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', 'y', 't'];
/// Whole words read as true.
const TRUTHY_STRINGS: [&str; 2] = ["on", "enabled"];

/// Interpret a string the way the game client reads boolean settings.
///
/// Falsey checks win over truthy checks, and anything unrecognized
/// (including the empty string) yields `default`.
///
/// # Example
///
/// ```
/// use toc::types::string_to_bool;
///
/// assert!(!string_to_bool("No", true));
/// assert!(string_to_bool("enabled", false));
/// assert!(string_to_bool("maybe", true));
/// ```
pub fn string_to_bool(s: &str, default: bool) -> bool {
    let lower = s.trim().to_lowercase();
    let Some(first) = lower.chars().next() else {
        return default;
    };

    if FALSEY_CHARS.contains(&first) || FALSEY_STRINGS.contains(&lower.as_str()) {
        false
    } else if TRUTHY_CHARS.contains(&first) || TRUTHY_STRINGS.contains(&lower.as_str()) {
        true
    } else {
        default
    }
}

/// A boolean directive value, keeping the text it was read from.
///
/// Equality compares the truth value only, so `false` and `0` are equal.
#[derive(Debug, Clone, Eq)]
pub struct BoolValue {
    pub raw: String,
    pub value: bool,
}

impl BoolValue {
    /// Build from a resolved truth value, rendered as `1` or `0`.
    pub fn new(value: bool) -> Self {
        BoolValue {
            raw: if value { "1" } else { "0" }.to_string(),
            value,
        }
    }

    pub fn parse(raw: &str, default: bool) -> Self {
        BoolValue {
            raw: raw.to_string(),
            value: string_to_bool(raw, default),
        }
    }

    /// Replace the raw text, recomputing the truth value.
    pub fn set_raw(&mut self, raw: impl Into<String>, default: bool) {
        self.raw = raw.into();
        self.value = string_to_bool(&self.raw, default);
    }
}

impl PartialEq for BoolValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Display for BoolValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.raw.trim())
    }
}

impl From<bool> for BoolValue {
    fn from(value: bool) -> Self {
        BoolValue::new(value)
    }
}
