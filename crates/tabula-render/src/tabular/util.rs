//! Padding and truncation helpers.
//!
//! Widths are plain character counts: every `char`, including the ellipsis,
//! occupies one column.

use super::types::Align;

/// The marker appended to truncated cells.
pub const ELLIPSIS: char = '…';

/// Number of characters in `s`.
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Pads `s` with trailing spaces to `width`. Longer input is returned as is.
pub fn pad_right(s: &str, width: usize) -> String {
    let len = char_width(s);
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - len);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Pads `s` with leading spaces to `width`. Longer input is returned as is.
pub fn pad_left(s: &str, width: usize) -> String {
    let len = char_width(s);
    if len >= width {
        return s.to_string();
    }
    let mut out: String = std::iter::repeat(' ').take(width - len).collect();
    out.push_str(s);
    out
}

/// Pads according to `align`.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
    }
}

/// Shortens `s` to exactly `width` characters, the last being [`ELLIPSIS`].
///
/// Input that already fits is returned unchanged. A width of 0 yields an
/// empty string.
///
/// ```rust
/// use tabula_render::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 6), "Hello…");
/// assert_eq!(truncate_end("Hello", 10), "Hello");
/// ```
pub fn truncate_end(s: &str, width: usize) -> String {
    if char_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Fits `s` into exactly `width` characters: truncate if too long, else pad.
pub fn fit(s: &str, width: usize, align: Align) -> String {
    if char_width(s) > width {
        truncate_end(s, width)
    } else {
        pad(s, width, align)
    }
}
