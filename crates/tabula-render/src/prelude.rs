//! Convenient imports for rendering tables.
//!
//! ```rust
//! use tabula_render::prelude::*;
//!
//! let rows = vec![Row::new().with("Name", "Server1").with("CPU", 45.5)];
//! let lines = render_table(&rows, &Overrides::new(), &Theme::plain(), OutputMode::Text, Some(40))
//!     .unwrap();
//! assert_eq!(lines[1], "Server1 45.5");
//! ```

// Core rendering functions
pub use crate::render_table;
pub use crate::tabular::{allocate, profile, render_header, render_row, Table};

// Data model
pub use crate::tabular::{ColumnOverride, FormatSpec, Overrides, Row, Value};

// Theme and styling
pub use crate::style::{decorate, ColorDef, DecorationRange, RangeStyle};
pub use crate::theme::Theme;

// Output control
pub use crate::output::OutputMode;
