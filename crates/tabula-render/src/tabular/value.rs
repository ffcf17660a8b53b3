//! Scalar cell values and rows.
//!
//! A [`Row`] is an ordered list of `(column name, Value)` pairs. Every value
//! knows its own [`TypeTag`], so column type inference inspects variants
//! instead of matching type names.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display pattern for date-time cells when no format override is given.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The kind of data held by a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Integer,
    FloatingPoint,
    Boolean,
    Text,
    DateTime,
    Other,
}

impl TypeTag {
    /// True for tags whose values read naturally right-aligned.
    pub fn is_numeric_like(&self) -> bool {
        matches!(
            self,
            TypeTag::Integer | TypeTag::FloatingPoint | TypeTag::Boolean
        )
    }
}

/// A single scalar cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    /// Any value without a more specific kind, kept as its display text.
    Other(String),
}

impl Value {
    /// The type tag of this value, or `None` for [`Value::Null`].
    pub fn kind(&self) -> Option<TypeTag> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(TypeTag::Boolean),
            Value::Integer(_) => Some(TypeTag::Integer),
            Value::Float(_) => Some(TypeTag::FloatingPoint),
            Value::Text(_) => Some(TypeTag::Text),
            Value::DateTime(_) => Some(TypeTag::DateTime),
            Value::Other(_) => Some(TypeTag::Other),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Renders the value as cell text. Nulls render as the empty string.
    pub fn to_cell(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) | Value::Other(s) => s.clone(),
            Value::DateTime(dt) => dt.format(DEFAULT_DATETIME_FORMAT).to_string(),
        }
    }

    /// Parses untyped text (e.g. a CSV field) into the most specific value.
    ///
    /// Empty input is null. `true`/`false`, integers, floats and date-times
    /// (RFC 3339 or `YYYY-MM-DD HH:MM:SS`) are recognised; anything else is text.
    pub fn parse_scalar(raw: &str) -> Value {
        let s = raw.trim();
        if s.is_empty() {
            return Value::Null;
        }
        match s {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
        // Reject "inf"/"NaN" spellings so words stay text.
        if s.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(f) = s.parse::<f64>() {
                if f.is_finite() {
                    return Value::Float(f);
                }
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Value::DateTime(dt.naive_local());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DEFAULT_DATETIME_FORMAT) {
            return Value::DateTime(dt);
        }
        Value::Text(raw.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .unwrap_or_else(|| Value::Other(n.to_string())),
            },
            Json::String(s) => Value::Text(s),
            other @ (Json::Array(_) | Json::Object(_)) => Value::Other(other.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// An ordered record of column name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a field. A repeated name replaces the earlier value in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a row from a JSON object, keeping key order.
    ///
    /// Returns `None` when `value` is not an object.
    pub fn from_json_object(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) => Some(
                map.into_iter()
                    .fold(Row::new(), |row, (k, v)| row.with(k, Value::from(v))),
            ),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Row::new(), |row, (k, v)| row.with(k, v))
    }
}
