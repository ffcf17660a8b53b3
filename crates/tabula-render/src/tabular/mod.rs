//! Column profiling, width allocation and row rendering.
//!
//! The pipeline runs in three steps:
//!
//! 1. [`profile`] infers a [`ColumnProfile`] per column from sample rows:
//!    type tag, alignment and longest formatted value.
//! 2. [`allocate`] turns the profiles and a target width into a
//!    [`RenderPlan`], letting at most one `auto_width` column absorb or shed
//!    the remaining space.
//! 3. [`render_header`] and [`render_row`] (or the [`Table`] wrapper) produce
//!    the lines.
//!
//! ```rust
//! use tabula_render::tabular::{allocate, profile, render_row, Overrides, Row};
//! use tabula_render::Theme;
//!
//! let rows = vec![Row::new().with("Host", "web-01").with("Load", 0.75)];
//! let plan = allocate(profile(&rows, &Overrides::new()), 80);
//! let line = render_row(&plan, &rows[0], &Theme::plain(), false);
//! assert_eq!(line, "web-01 0.75");
//! ```
//!
//! ## Widths
//!
//! A column's natural width is the longer of its name and its content, or
//! its `fixed_width` override. Widths are counted in characters; wide
//! glyphs are not measured specially.
//!
//! ## Truncation
//!
//! A cell longer than its column keeps its first `width - 1` characters
//! followed by `…`, so every cell is exactly as wide as its column.
//!
//! ## Header words
//!
//! When header words need their own attributes, the renderer takes word
//! positions straight from [`RenderPlan::spans`]. Callers holding only the
//! rendered text can recover them with [`extract_words`] instead.

mod decorator;
mod profile;
mod resolve;
mod segment;
mod types;
mod util;
mod value;

pub use decorator::{
    render_header, render_row, underline_row, visible_text, visible_width, HeaderOptions, Table,
    UnderlineLayout,
};
pub use profile::{infer_type, profile};
pub use resolve::{allocate, PlannedColumn, RenderPlan, SEPARATOR_WIDTH};
pub use segment::{decorate_header_words, extract_words, HeaderWord};
pub use types::{Align, ColumnOverride, ColumnProfile, FormatSpec, Overrides};
pub use util::{char_width, fit, pad, pad_left, pad_right, truncate_end, ELLIPSIS};
pub use value::{Row, TypeTag, Value, DEFAULT_DATETIME_FORMAT};
