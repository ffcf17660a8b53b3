//! Header and row rendering.
//!
//! Lines are built from a [`RenderPlan`]: each cell is fitted to its column
//! width (padded by alignment, or truncated with a single `…`), columns are
//! joined by one space, and the finished line is optionally wrapped in the
//! theme's whole-line color.
//!
//! # Example
//!
//! ```rust
//! use tabula_render::tabular::{Overrides, Row, Table};
//! use tabula_render::{OutputMode, Theme};
//!
//! let rows = vec![
//!     Row::new().with("Name", "Server1").with("CPU", 45.5),
//!     Row::new().with("Name", "Server2").with("CPU", 78.234),
//! ];
//!
//! let table = Table::from_rows(&rows, &Overrides::new(), 40)
//!     .theme(Theme::new().underline_header(true))
//!     .mode(OutputMode::Text);
//!
//! let lines = table.render(&rows).unwrap();
//! assert_eq!(lines[0], "Name       CPU");
//! assert_eq!(lines[1], "----    ---   ");
//! assert_eq!(lines[2], "Server1   45.5");
//! assert_eq!(lines[3], "Server2 78.234");
//! ```

use std::io::Write;

use super::profile::profile;
use super::resolve::{allocate, PlannedColumn, RenderPlan};
use super::types::{Align, Overrides};
use super::util::{char_width, fit};
use super::value::{Row, Value};
use crate::error::Result;
use crate::output::{write_lines, OutputMode};
use crate::style::{decorate, DecorationRange, RangeStyle};
use crate::theme::Theme;

/// Where the dashes of the underline row sit inside each column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnderlineLayout {
    /// Dashes start at the column's left edge, followed by padding.
    #[default]
    Leading,
    /// Dashes sit under the header word, following the column alignment.
    /// [`extract_words`](super::extract_words) then recovers right-aligned
    /// header words correctly.
    Aligned,
}

/// Options controlling the header block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Emit a dash underline row beneath the header.
    pub underline: bool,
    pub underline_layout: UnderlineLayout,
    /// Attributes applied to each header word, inside the line color.
    pub word_styles: Vec<RangeStyle>,
}

impl HeaderOptions {
    /// Takes the header settings of a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            underline: theme.underline_header,
            underline_layout: UnderlineLayout::default(),
            word_styles: theme.header_words.clone(),
        }
    }
}

/// The `[start, end)` span of a column's header word inside its cell.
fn header_word_span(column: &PlannedColumn, span: (usize, usize)) -> (usize, usize) {
    let shown = column.profile.name_width().min(column.width);
    match column.align() {
        Align::Left => (span.0, span.0 + shown),
        Align::Right => (span.1 - shown, span.1),
    }
}

/// Renders the header line, plus the underline row when requested.
///
/// With `styled` off the lines are plain text: no color wrapper and no
/// header-word attributes.
pub fn render_header(
    plan: &RenderPlan,
    options: &HeaderOptions,
    theme: &Theme,
    styled: bool,
) -> Result<Vec<String>> {
    let mut line = plan
        .columns()
        .iter()
        .map(|c| fit(c.name(), c.width, c.align()))
        .collect::<Vec<_>>()
        .join(" ");

    if styled && !options.word_styles.is_empty() {
        let ranges: Vec<DecorationRange> = plan
            .columns()
            .iter()
            .zip(plan.spans())
            .map(|(column, span)| header_word_span(column, span))
            .filter(|(start, end)| start < end)
            .map(|(start, end)| DecorationRange::new(start, end, options.word_styles.iter().copied()))
            .collect();
        line = decorate(&line, &ranges)?;
    }

    let mut lines = vec![theme.paint_header(&line, styled)];
    if options.underline {
        lines.push(theme.paint_header(
            &underline_row(plan, options.underline_layout),
            styled,
        ));
    }
    Ok(lines)
}

/// The dash row placed under the header: one dash per visible header
/// character, padded to the column width.
///
/// With [`UnderlineLayout::Leading`] the dashes come first in every column;
/// with [`UnderlineLayout::Aligned`] they follow the column alignment.
pub fn underline_row(plan: &RenderPlan, layout: UnderlineLayout) -> String {
    plan.columns()
        .iter()
        .map(|c| {
            let dashes = "-".repeat(c.profile.name_width().min(c.width));
            match layout {
                UnderlineLayout::Leading => fit(&dashes, c.width, Align::Left),
                UnderlineLayout::Aligned => fit(&dashes, c.width, c.align()),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders one data row. Fields missing from `row` render as empty cells.
pub fn render_row(plan: &RenderPlan, row: &Row, theme: &Theme, styled: bool) -> String {
    let line = plan
        .columns()
        .iter()
        .map(|c| {
            let value = row.get(c.name()).unwrap_or(&Value::Null);
            fit(&c.profile.cell_text(value), c.width, c.align())
        })
        .collect::<Vec<_>>()
        .join(" ");
    theme.paint_row(&line, styled)
}

/// A planned table with its theme and output mode.
#[derive(Clone, Debug)]
pub struct Table {
    plan: RenderPlan,
    theme: Theme,
    header: HeaderOptions,
    mode: OutputMode,
}

impl Table {
    /// Creates a table from an existing plan with the default theme.
    pub fn new(plan: RenderPlan) -> Self {
        let theme = Theme::default();
        Table {
            plan,
            header: HeaderOptions::from_theme(&theme),
            theme,
            mode: OutputMode::Auto,
        }
    }

    /// Profiles `rows` and allocates widths within `target_width`.
    pub fn from_rows(rows: &[Row], overrides: &Overrides, target_width: usize) -> Self {
        Self::new(allocate(profile(rows, overrides), target_width))
    }

    /// Sets the theme. Header options are taken from the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.header = HeaderOptions::from_theme(&theme);
        self.theme = theme;
        self
    }

    /// Overrides the header options taken from the theme.
    pub fn header_options(mut self, options: HeaderOptions) -> Self {
        self.header = options;
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    /// Width of every rendered line, excluding escape codes.
    pub fn width(&self) -> usize {
        self.plan.total_width()
    }

    pub fn header_lines(&self) -> Result<Vec<String>> {
        render_header(
            &self.plan,
            &self.header,
            &self.theme,
            self.mode.should_use_color(),
        )
    }

    pub fn row(&self, row: &Row) -> String {
        render_row(&self.plan, row, &self.theme, self.mode.should_use_color())
    }

    /// Renders the header block followed by every row.
    pub fn render(&self, rows: &[Row]) -> Result<Vec<String>> {
        let styled = self.mode.should_use_color();
        let mut lines = render_header(&self.plan, &self.header, &self.theme, styled)?;
        lines.extend(
            rows.iter()
                .map(|row| render_row(&self.plan, row, &self.theme, styled)),
        );
        Ok(lines)
    }

    /// Renders and writes the table, one line per row.
    pub fn write_to<W: Write>(&self, out: &mut W, rows: &[Row]) -> Result<()> {
        let lines = self.render(rows)?;
        write_lines(out, &lines)?;
        Ok(())
    }
}

/// Strips every ANSI escape sequence, leaving only printable text.
pub fn visible_text(line: &str) -> String {
    console::strip_ansi_codes(line).into_owned()
}

/// Character width of a rendered line, ignoring escape sequences.
pub fn visible_width(line: &str) -> usize {
    char_width(&visible_text(line))
}
