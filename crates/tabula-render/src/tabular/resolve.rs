//! Width allocation for table columns.
//!
//! Every column takes its natural width: the longer of its content and its
//! name, or its fixed width when one is set. At most one column is elastic
//! (`auto_width`); it keeps its natural content width while the table fits
//! the target, and otherwise shrinks to whatever space remains, down to 0.
//! Without an elastic column nothing is ever compressed and the table may be
//! wider than the target.

use tracing::{debug, warn};

use super::types::{Align, ColumnProfile};

/// Width of the separator placed between adjacent columns.
pub const SEPARATOR_WIDTH: usize = 1;

/// A column profile together with its allocated width.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedColumn {
    pub profile: ColumnProfile,
    /// Final width in characters.
    pub width: usize,
}

impl PlannedColumn {
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn align(&self) -> Align {
        self.profile.align
    }
}

/// Column profiles with final widths, ready for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPlan {
    columns: Vec<PlannedColumn>,
    elastic: Option<usize>,
}

impl RenderPlan {
    pub fn columns(&self) -> &[PlannedColumn] {
        &self.columns
    }

    /// Final width of every column, in order.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Index of the elastic column, if any.
    pub fn elastic_index(&self) -> Option<usize> {
        self.elastic
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Width of a rendered line: all columns plus single-space separators.
    pub fn total_width(&self) -> usize {
        let widths: usize = self.columns.iter().map(|c| c.width).sum();
        widths + separators(self.columns.len())
    }

    /// The `[start, end)` character span each column occupies in a rendered line.
    pub fn spans(&self) -> Vec<(usize, usize)> {
        let mut offset = 0;
        self.columns
            .iter()
            .map(|c| {
                let span = (offset, offset + c.width);
                offset += c.width + SEPARATOR_WIDTH;
                span
            })
            .collect()
    }
}

fn separators(columns: usize) -> usize {
    columns.saturating_sub(1) * SEPARATOR_WIDTH
}

/// Natural width of a non-elastic column.
fn natural_width(profile: &ColumnProfile) -> usize {
    match profile.fixed_width {
        Some(w) => w,
        None => profile.content_width.max(profile.name_width()),
    }
}

/// Allocates final widths for `profiles` within `target_width`.
///
/// # Example
///
/// ```rust
/// use tabula_render::tabular::{allocate, ColumnProfile, TypeTag};
///
/// let profiles = vec![
///     ColumnProfile::new("Id", TypeTag::Integer).content_width(4),
///     ColumnProfile::new("Message", TypeTag::Text).content_width(60).auto_width(),
/// ];
/// let plan = allocate(profiles, 40);
/// assert_eq!(plan.widths(), vec![4, 35]);
/// assert_eq!(plan.total_width(), 40);
/// ```
pub fn allocate(profiles: Vec<ColumnProfile>, target_width: usize) -> RenderPlan {
    if profiles.is_empty() {
        return RenderPlan::default();
    }

    let elastic = profiles.iter().position(|p| p.auto_width);
    if let Some(first) = elastic {
        let extra: Vec<&str> = profiles
            .iter()
            .skip(first + 1)
            .filter(|p| p.auto_width)
            .map(|p| p.name.as_str())
            .collect();
        if !extra.is_empty() {
            warn!(
                elastic = %profiles[first].name,
                ignored = ?extra,
                "more than one auto-width column; only the first is elastic"
            );
        }
    }

    // First pass: every column except the elastic one takes its natural width.
    let mut widths: Vec<usize> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| if Some(i) == elastic { 0 } else { natural_width(p) })
        .collect();
    let base_width = widths.iter().sum::<usize>() + separators(profiles.len());

    // Second pass: the elastic column takes its content width or what is left.
    if let Some(idx) = elastic {
        let wanted = profiles[idx].content_width;
        widths[idx] = if base_width + wanted <= target_width {
            wanted
        } else {
            let remaining = target_width.saturating_sub(base_width);
            if remaining == 0 {
                warn!(
                    column = %profiles[idx].name,
                    base_width,
                    target_width,
                    "no room left for auto-width column; rendering it empty"
                );
            }
            remaining
        };
    }

    debug!(?widths, target_width, elastic = ?elastic, "allocated column widths");

    RenderPlan {
        columns: profiles
            .into_iter()
            .zip(widths)
            .map(|(profile, width)| PlannedColumn { profile, width })
            .collect(),
        elastic,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::tabular::TypeTag;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn elastic_plan_fills_target_or_stays_natural(
            fixed in proptest::collection::vec(1usize..20, 0..5),
            elastic_content in 0usize..100,
            target in 0usize..200,
        ) {
            let mut profiles: Vec<ColumnProfile> = fixed
                .iter()
                .enumerate()
                .map(|(i, w)| ColumnProfile::new(format!("c{}", i), TypeTag::Text).content_width(*w))
                .collect();
            profiles.push(
                ColumnProfile::new("e", TypeTag::Text).content_width(elastic_content).auto_width(),
            );

            let natural: Vec<usize> = profiles[..fixed.len()]
                .iter()
                .map(natural_width)
                .collect();
            let plan = allocate(profiles, target);
            let widths = plan.widths();

            // Non-elastic columns never change.
            prop_assert_eq!(&widths[..fixed.len()], &natural[..]);

            let base = natural.iter().sum::<usize>() + fixed.len();
            if base + elastic_content <= target {
                prop_assert_eq!(widths[fixed.len()], elastic_content);
            } else if base <= target {
                prop_assert_eq!(plan.total_width(), target);
            } else {
                prop_assert_eq!(widths[fixed.len()], 0);
            }
        }

        #[test]
        fn without_elastic_total_is_natural_sum(
            contents in proptest::collection::vec(0usize..30, 1..6),
            target in 0usize..100,
        ) {
            let profiles: Vec<ColumnProfile> = contents
                .iter()
                .map(|w| ColumnProfile::new("x", TypeTag::Text).content_width(*w))
                .collect();
            let expected: usize =
                contents.iter().map(|w| (*w).max(1)).sum::<usize>() + contents.len() - 1;
            prop_assert_eq!(allocate(profiles, target).total_width(), expected);
        }
    }
}
