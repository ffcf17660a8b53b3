//! Terminal styling primitives.
//!
//! - [`range`]: wrap character ranges of a string with SGR attribute markers
//!   (underline, bold, italic, blink).
//! - [`color`]: color definitions used by [`Theme`](crate::Theme) for
//!   whole-line coloring.

pub mod color;
pub mod range;

pub use color::ColorDef;
pub use range::{
    decorate, decorate_char, decorate_with, strip_markers, DecorationRange, MarkerOrder,
    RangeStyle,
};
