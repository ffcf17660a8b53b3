//! # Tabula Render - Terminal Tables with Character-Range Styling
//!
//! `tabula-render` turns rows of loosely typed records into aligned,
//! width-bounded terminal tables, and styles arbitrary character ranges of a
//! string with ANSI attributes.
//!
//! ## Core Concepts
//!
//! - [`tabular::profile`]: infers each column's type, alignment and content width
//! - [`tabular::allocate`]: fits column widths into a target width, letting one
//!   `auto_width` column stretch or shrink
//! - [`tabular::Table`]: renders the header, optional underline and rows
//! - [`style::decorate`]: wraps character ranges with underline, bold, italic
//!   or blink markers without shifting any other range
//! - [`tabular::extract_words`]: recovers header word positions from a plain
//!   header and its dash underline
//! - [`Theme`]: explicit styling configuration passed to every render call
//! - [`OutputMode`]: styled terminal output or plain text
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula_render::{render_table, OutputMode, Theme};
//! use tabula_render::tabular::{ColumnOverride, FormatSpec, Overrides, Row};
//!
//! let rows = vec![
//!     Row::new().with("Name", "Server1").with("CPU", 45.5),
//!     Row::new().with("Name", "Server2").with("CPU", 78.234),
//! ];
//! let overrides = Overrides::new()
//!     .column("CPU", ColumnOverride::new().format(FormatSpec::Precision(1)));
//!
//! let lines = render_table(&rows, &overrides, &Theme::plain(), OutputMode::Text, Some(40))
//!     .unwrap();
//! assert_eq!(lines, vec!["Name     CPU", "Server1 45.5", "Server2 78.2"]);
//! ```
//!
//! ## Range Styling
//!
//! ```rust
//! use tabula_render::style::{decorate, DecorationRange, RangeStyle};
//!
//! let out = decorate("Hello World", &[DecorationRange::new(6, 11, [RangeStyle::Underline])])
//!     .unwrap();
//! assert_eq!(out, "Hello \x1b[4mWorld\x1b[24m");
//! ```
//!
//! ## YAML Configuration
//!
//! Themes and column overrides load from YAML:
//!
//! ```rust
//! use tabula_render::Theme;
//! use tabula_render::tabular::Overrides;
//!
//! let theme = Theme::from_yaml("header: cyan\nunderline_header: true\n").unwrap();
//! assert!(theme.underline_header);
//!
//! let overrides = Overrides::from_yaml("Message:\n  auto_width: true\n").unwrap();
//! assert!(overrides.get("Message").unwrap().auto_width);
//! ```

mod error;
pub mod menu;
pub mod output;
pub mod prelude;
pub mod style;
pub mod tabular;
pub mod theme;

// Error type
pub use error::{RenderError, Result};

// Theme and output exports
pub use output::{target_width_or_default, terminal_width, OutputMode, DEFAULT_WIDTH};
pub use theme::Theme;

// Style exports
pub use style::{decorate, ColorDef, DecorationRange, MarkerOrder, RangeStyle};

use tabular::{Overrides, Row, Table};

/// Profiles, plans and renders `rows` in one call.
///
/// `width` is the target table width; `None` uses the terminal width, or
/// [`DEFAULT_WIDTH`] when there is no terminal.
pub fn render_table(
    rows: &[Row],
    overrides: &Overrides,
    theme: &Theme,
    mode: OutputMode,
    width: Option<usize>,
) -> Result<Vec<String>> {
    let width = width.unwrap_or_else(target_width_or_default);
    Table::from_rows(rows, overrides, width)
        .theme(theme.clone())
        .mode(mode)
        .render(rows)
}
