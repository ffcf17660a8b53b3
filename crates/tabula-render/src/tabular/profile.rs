//! Column profiling: infer type, alignment and content width from rows.
//!
//! The column set comes from the first row. Later rows are read by name, so
//! a row missing a column simply contributes nothing to that column.

use std::collections::BTreeSet;

use super::types::{ColumnProfile, Overrides};
use super::value::{Row, TypeTag, Value};

/// Profiles every column of `rows`, applying `overrides` where present.
///
/// # Example
///
/// ```rust
/// use tabula_render::tabular::{profile, Align, Overrides, Row, TypeTag};
///
/// let rows = vec![
///     Row::new().with("Name", "Server1").with("CPU", 45.5),
///     Row::new().with("Name", "Server2").with("CPU", 78.234),
/// ];
/// let columns = profile(&rows, &Overrides::new());
/// assert_eq!(columns[1].type_tag, TypeTag::FloatingPoint);
/// assert_eq!(columns[1].align, Align::Right);
/// assert_eq!(columns[1].content_width, 6);
/// ```
pub fn profile(rows: &[Row], overrides: &Overrides) -> Vec<ColumnProfile> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    first
        .names()
        .map(|name| profile_column(name, rows, overrides))
        .collect()
}

fn profile_column(name: &str, rows: &[Row], overrides: &Overrides) -> ColumnProfile {
    let values: Vec<&Value> = rows
        .iter()
        .filter_map(|row| row.get(name))
        .filter(|v| !v.is_null())
        .collect();

    let type_tag = infer_type(values.iter().copied());
    let mut column = ColumnProfile::new(name, type_tag);

    if let Some(o) = overrides.get(name) {
        column.format = o.format.clone();
        column.fixed_width = o.fixed_width;
        column.auto_width = o.auto_width;
    }

    column.content_width = values
        .iter()
        .map(|v| column.cell_text(v).chars().count())
        .max()
        .unwrap_or(0);
    column
}

/// Picks the most specific tag describing every non-null value.
///
/// A single kind wins outright. Integers mixed with floats widen to
/// [`TypeTag::FloatingPoint`]. Any other mixture, or no values at all,
/// is [`TypeTag::Text`].
pub fn infer_type<'a>(values: impl IntoIterator<Item = &'a Value>) -> TypeTag {
    let kinds: BTreeSet<TypeTag> = values.into_iter().filter_map(Value::kind).collect();

    let mut iter = kinds.iter();
    match (iter.next(), iter.next(), iter.next()) {
        (None, _, _) => TypeTag::Text,
        (Some(only), None, _) => *only,
        (Some(TypeTag::Integer), Some(TypeTag::FloatingPoint), None) => TypeTag::FloatingPoint,
        _ => TypeTag::Text,
    }
}
