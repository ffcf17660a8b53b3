//! Core types for column configuration.
//!
//! This module defines per-column metadata: alignment, value formatting,
//! user overrides, and the [`ColumnProfile`] inferred from sample rows.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::value::{TypeTag, Value};
use crate::error::{RenderError, Result};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

impl Align {
    /// Numeric and boolean columns align right, everything else left.
    pub fn for_type(tag: TypeTag) -> Self {
        if tag.is_numeric_like() {
            Align::Right
        } else {
            Align::Left
        }
    }
}

/// How a column's values are turned into text before measuring and display.
///
/// In configuration files a format spec is written as a string:
///
/// | String | Variant |
/// |--------|---------|
/// | `".2"` | [`FormatSpec::Precision`] with 2 decimals |
/// | `"date:%Y-%m-%d"` | [`FormatSpec::DateTime`] with a strftime pattern |
/// | `"{} ms"` | [`FormatSpec::Template`], `{}` replaced by the cell text |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatSpec {
    /// Fixed number of decimals for integer and float values.
    Precision(usize),
    /// strftime pattern for date-time values.
    DateTime(String),
    /// Template where every `{}` is replaced by the plain cell text.
    Template(String),
}

impl FormatSpec {
    /// Parses the string form described on [`FormatSpec`].
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(digits) = s.strip_prefix('.') {
            return digits
                .parse::<usize>()
                .map(FormatSpec::Precision)
                .map_err(|_| RenderError::InvalidFormat(s.to_string()));
        }
        if let Some(pattern) = s.strip_prefix("date:") {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(RenderError::InvalidFormat(s.to_string()));
            }
            return Ok(FormatSpec::DateTime(pattern.to_string()));
        }
        if s.contains("{}") {
            return Ok(FormatSpec::Template(s.to_string()));
        }
        Err(RenderError::InvalidFormat(s.to_string()))
    }

    /// Formats a value. Null stays empty; values the format does not apply to
    /// fall back to their plain cell text.
    pub fn apply(&self, value: &Value) -> String {
        if value.is_null() {
            return String::new();
        }
        match (self, value) {
            (FormatSpec::Precision(p), Value::Integer(i)) => format!("{:.*}", p, *i as f64),
            (FormatSpec::Precision(p), Value::Float(f)) => format!("{:.*}", p, f),
            (FormatSpec::DateTime(pattern), Value::DateTime(dt)) => {
                let mut out = String::new();
                match write!(out, "{}", dt.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => value.to_cell(),
                }
            }
            (FormatSpec::Template(t), v) => t.replace("{}", &v.to_cell()),
            (_, v) => v.to_cell(),
        }
    }
}

impl TryFrom<String> for FormatSpec {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        FormatSpec::parse(&s).map_err(|e| e.to_string())
    }
}

impl From<FormatSpec> for String {
    fn from(spec: FormatSpec) -> Self {
        match spec {
            FormatSpec::Precision(p) => format!(".{}", p),
            FormatSpec::DateTime(pattern) => format!("date:{}", pattern),
            FormatSpec::Template(t) => t,
        }
    }
}

/// Per-column settings supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnOverride {
    /// Applied to each value before width measurement and display.
    pub format: Option<FormatSpec>,
    /// Exact column width; content longer than this is truncated.
    pub fixed_width: Option<usize>,
    /// Marks the elastic column that absorbs the remaining width budget.
    pub auto_width: bool,
}

impl ColumnOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, spec: FormatSpec) -> Self {
        self.format = Some(spec);
        self
    }

    pub fn fixed_width(mut self, width: usize) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn auto_width(mut self) -> Self {
        self.auto_width = true;
        self
    }
}

/// Column overrides keyed by column name.
///
/// Loadable from YAML:
///
/// ```yaml
/// CPU:
///   format: ".1"
/// Description:
///   auto_width: true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    columns: HashMap<String, ColumnOverride>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the override for `name`, builder style.
    pub fn column(mut self, name: impl Into<String>, column: ColumnOverride) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    /// Mutable access to a column's override, creating an empty one if needed.
    pub fn entry(&mut self, name: impl Into<String>) -> &mut ColumnOverride {
        self.columns.entry(name.into()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnOverride> {
        self.columns.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// Metadata for one column, inferred from sample rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnProfile {
    /// Column name, also used as header text.
    pub name: String,
    /// Most specific kind observed among non-null values.
    pub type_tag: TypeTag,
    /// Derived from `type_tag`.
    pub align: Align,
    /// Longest formatted non-null value, in characters.
    pub content_width: usize,
    pub format: Option<FormatSpec>,
    pub fixed_width: Option<usize>,
    pub auto_width: bool,
}

impl ColumnProfile {
    /// Creates a profile with no sampled content.
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            align: Align::for_type(type_tag),
            content_width: 0,
            format: None,
            fixed_width: None,
            auto_width: false,
        }
    }

    pub fn content_width(mut self, width: usize) -> Self {
        self.content_width = width;
        self
    }

    pub fn auto_width(mut self) -> Self {
        self.auto_width = true;
        self
    }

    pub fn fixed_width(mut self, width: usize) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Length of the column name in characters.
    pub fn name_width(&self) -> usize {
        self.name.chars().count()
    }

    /// Converts a value to the text shown in this column.
    pub fn cell_text(&self, value: &Value) -> String {
        match &self.format {
            Some(spec) => spec.apply(value),
            None => value.to_cell(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn align_follows_type() {
        assert_eq!(Align::for_type(TypeTag::Integer), Align::Right);
        assert_eq!(Align::for_type(TypeTag::FloatingPoint), Align::Right);
        assert_eq!(Align::for_type(TypeTag::Boolean), Align::Right);
        assert_eq!(Align::for_type(TypeTag::Text), Align::Left);
        assert_eq!(Align::for_type(TypeTag::DateTime), Align::Left);
        assert_eq!(Align::for_type(TypeTag::Other), Align::Left);
    }

    #[test]
    fn parse_format_specs() {
        assert_eq!(FormatSpec::parse(".2").unwrap(), FormatSpec::Precision(2));
        assert_eq!(
            FormatSpec::parse("date:%d/%m").unwrap(),
            FormatSpec::DateTime("%d/%m".into())
        );
        assert_eq!(
            FormatSpec::parse("{} ms").unwrap(),
            FormatSpec::Template("{} ms".into())
        );
        assert!(FormatSpec::parse(".x").is_err());
        assert!(FormatSpec::parse("plain").is_err());
        assert!(FormatSpec::parse("date:%Q%").is_err());
    }

    #[test]
    fn precision_applies_to_numbers_only() {
        let spec = FormatSpec::Precision(2);
        assert_eq!(spec.apply(&Value::Float(78.234)), "78.23");
        assert_eq!(spec.apply(&Value::Integer(5)), "5.00");
        assert_eq!(spec.apply(&Value::from("n/a")), "n/a");
        assert_eq!(spec.apply(&Value::Null), "");
    }

    #[test]
    fn template_and_datetime() {
        let t = FormatSpec::Template("{}%".into());
        assert_eq!(t.apply(&Value::Float(45.5)), "45.5%");

        let dt = NaiveDateTime::parse_from_str("2024-03-01 09:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let d = FormatSpec::DateTime("%d/%m/%Y".into());
        assert_eq!(d.apply(&Value::DateTime(dt)), "01/03/2024");
    }

    #[test]
    fn overrides_from_yaml() {
        let overrides = Overrides::from_yaml(
            r#"
CPU:
  format: ".1"
Description:
  auto_width: true
Id:
  fixed_width: 4
"#,
        )
        .unwrap();

        assert_eq!(
            overrides.get("CPU").unwrap().format,
            Some(FormatSpec::Precision(1))
        );
        assert!(overrides.get("Description").unwrap().auto_width);
        assert_eq!(overrides.get("Id").unwrap().fixed_width, Some(4));
        assert!(overrides.get("Name").is_none());
    }

    #[test]
    fn overrides_reject_bad_format() {
        assert!(Overrides::from_yaml("CPU:\n  format: nonsense\n").is_err());
        assert!(Overrides::from_yaml("CPU:\n  colour: red\n").is_err());
    }

    #[test]
    fn overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Name:\n  auto_width: true\n").unwrap();
        let overrides = Overrides::from_file(file.path()).unwrap();
        assert!(overrides.get("Name").unwrap().auto_width);
    }

    #[test]
    fn format_spec_round_trips_through_string() {
        let s: String = FormatSpec::Precision(3).into();
        assert_eq!(s, ".3");
        let s: String = FormatSpec::DateTime("%H:%M".into()).into();
        assert_eq!(s, "date:%H:%M");
    }

    #[test]
    fn cell_text_uses_format() {
        let mut profile = ColumnProfile::new("CPU", TypeTag::FloatingPoint);
        assert_eq!(profile.cell_text(&Value::Float(1.0)), "1");
        profile.format = Some(FormatSpec::Precision(1));
        assert_eq!(profile.cell_text(&Value::Float(1.0)), "1.0");
    }
}
