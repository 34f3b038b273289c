use std::fmt::{Display, Formatter, Result as FmtResult};

use toc_semantics::{TextLocale, ValueKind};

use crate::conditions::Condition;
use crate::types::{BoolValue, ListValue, LocalizedValue, ValueError};

/// An integer directive value, keeping the text it was read from.
///
/// Equality compares the number only.
#[derive(Debug, Clone, Eq)]
pub struct IntValue {
    pub raw: String,
    pub value: i64,
}

impl IntValue {
    pub fn new(value: i64) -> Self {
        IntValue {
            raw: value.to_string(),
            value,
        }
    }

    /// Strict base-10 parse of the trimmed text.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValueError::MalformedInteger {
                value: raw.trim().to_string(),
            })?;
        Ok(IntValue {
            raw: raw.to_string(),
            value,
        })
    }
}

impl PartialEq for IntValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Display for IntValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

/// A typed directive value.
///
/// Every site that reads, builds, or re-renders directives matches on this
/// enum exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(BoolValue),
    Int(IntValue),
    List(ListValue),
    Localized(LocalizedValue),
    Condition(Condition),
    /// Value of a directive the schema does not know, trimmed.
    Unknown(String),
}

impl Value {
    /// Convert a raw directive value to the declared kind.
    ///
    /// `locale` seeds localized values; `bool_default` is the fallback for
    /// empty or unrecognized boolean text.
    pub fn parse(
        raw: &str,
        kind: ValueKind,
        locale: TextLocale,
        bool_default: bool,
    ) -> Result<Value, ValueError> {
        Ok(match kind {
            ValueKind::Boolean => Value::Bool(BoolValue::parse(raw, bool_default)),
            ValueKind::Integer => Value::Int(IntValue::parse(raw)?),
            ValueKind::List(element) => Value::List(ListValue::parse(raw, element)?),
            ValueKind::Localized => Value::Localized(LocalizedValue::new(raw, locale)),
            ValueKind::Condition(condition) => Value::Condition(Condition::parse(condition, raw)),
        })
    }

    /// Returns true if this value is an instance of the declared kind.
    pub fn is_kind(&self, kind: ValueKind) -> bool {
        match (self, kind) {
            (Value::Bool(_), ValueKind::Boolean)
            | (Value::Int(_), ValueKind::Integer)
            | (Value::Localized(_), ValueKind::Localized) => true,
            (Value::List(list), ValueKind::List(element)) => list.kind() == element,
            (Value::Condition(condition), ValueKind::Condition(expected)) => {
                condition.kind() == expected
            }
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b.value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n.value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_localized(&self) -> Option<&LocalizedValue> {
        match self {
            Value::Localized(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Value::Condition(condition) => Some(condition),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&str> {
        match self {
            Value::Unknown(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::List(list) => write!(f, "{list}"),
            Value::Localized(text) => write!(f, "{text}"),
            Value::Condition(condition) => write!(f, "{}", condition.values_text()),
            Value::Unknown(text) => f.write_str(text),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(BoolValue::new(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(IntValue::new(value))
    }
}

impl From<ListValue> for Value {
    fn from(list: ListValue) -> Self {
        Value::List(list)
    }
}

impl From<LocalizedValue> for Value {
    fn from(text: LocalizedValue) -> Self {
        Value::Localized(text)
    }
}

impl From<Condition> for Value {
    fn from(condition: Condition) -> Self {
        Value::Condition(condition)
    }
}
