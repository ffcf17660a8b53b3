//! Character-range ANSI decoration.
//!
//! Wraps character spans of a string with the start/end SGR sequences of one
//! or more [`RangeStyle`]s. Offsets are character indices (not bytes), and
//! every range is checked against the original string before any output is
//! built, so a rejected request never yields a half-decorated string.
//!
//! Markers are emitted in a single left-to-right pass over the boundary
//! events of all ranges, sorted by offset. Because every offset refers to the
//! undecorated input, inserting one marker can never shift another.
//!
//! # Example
//!
//! ```rust
//! use tabula_render::style::{decorate, DecorationRange, RangeStyle};
//!
//! let out = decorate("Hello World", &[DecorationRange::new(6, 11, [RangeStyle::Bold])]).unwrap();
//! assert_eq!(out, "Hello \x1b[1mWorld\x1b[22m");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// A text attribute that can be applied to a character range.
///
/// Variants are declared in marker order: when several styles decorate the
/// same range their markers are concatenated Underline, Bold, Italic, Blink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStyle {
    Underline,
    Bold,
    Italic,
    Blink,
}

impl RangeStyle {
    /// All styles in declared marker order.
    pub const ALL: [RangeStyle; 4] = [
        RangeStyle::Underline,
        RangeStyle::Bold,
        RangeStyle::Italic,
        RangeStyle::Blink,
    ];

    /// The SGR sequence that switches this attribute on.
    pub fn start_marker(&self) -> &'static str {
        match self {
            RangeStyle::Underline => "\x1b[4m",
            RangeStyle::Bold => "\x1b[1m",
            RangeStyle::Italic => "\x1b[3m",
            RangeStyle::Blink => "\x1b[5m",
        }
    }

    /// The SGR sequence that switches this attribute off.
    pub fn end_marker(&self) -> &'static str {
        match self {
            RangeStyle::Underline => "\x1b[24m",
            RangeStyle::Bold => "\x1b[22m",
            RangeStyle::Italic => "\x1b[23m",
            RangeStyle::Blink => "\x1b[25m",
        }
    }

    /// Parses a style name (`underline`, `bold`, `italic`, `blink`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "underline" => Some(RangeStyle::Underline),
            "bold" => Some(RangeStyle::Bold),
            "italic" => Some(RangeStyle::Italic),
            "blink" => Some(RangeStyle::Blink),
            _ => None,
        }
    }
}

/// Order in which end markers are written when a range carries several styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerOrder {
    /// End markers follow the same declared order as start markers:
    /// `<u><b>text</u></b>`.
    #[default]
    Declared,
    /// End markers close in reverse order (stack discipline):
    /// `<u><b>text</b></u>`.
    Nested,
}

/// A `[start, end)` character span plus the styles to apply to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecorationRange {
    /// First decorated character (inclusive).
    pub start: usize,
    /// One past the last decorated character (exclusive).
    pub end: usize,
    styles: Vec<RangeStyle>,
}

impl DecorationRange {
    /// Creates a range over `[start, end)`.
    ///
    /// Styles are normalized to declared order with duplicates removed.
    /// Bounds are checked when the range is applied, not here.
    pub fn new(start: usize, end: usize, styles: impl IntoIterator<Item = RangeStyle>) -> Self {
        let mut styles: Vec<RangeStyle> = styles.into_iter().collect();
        styles.sort();
        styles.dedup();
        Self { start, end, styles }
    }

    /// Creates a single-character range `[position, position + 1)`.
    pub fn char(position: usize, styles: impl IntoIterator<Item = RangeStyle>) -> Self {
        Self::new(position, position + 1, styles)
    }

    /// The styles applied by this range, in declared order.
    pub fn styles(&self) -> &[RangeStyle] {
        &self.styles
    }

    /// True when `start == end`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn start_markers(&self) -> String {
        self.styles.iter().map(RangeStyle::start_marker).collect()
    }

    fn end_markers(&self, order: MarkerOrder) -> String {
        match order {
            MarkerOrder::Declared => self.styles.iter().map(RangeStyle::end_marker).collect(),
            MarkerOrder::Nested => self.styles.iter().rev().map(RangeStyle::end_marker).collect(),
        }
    }

    fn check(&self, len: usize) -> Result<()> {
        if self.start > self.end || self.end > len {
            return Err(RenderError::OutOfRange {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

/// Decorates `text` with the given ranges using [`MarkerOrder::Declared`].
pub fn decorate(text: &str, ranges: &[DecorationRange]) -> Result<String> {
    decorate_with(text, ranges, MarkerOrder::Declared)
}

/// Decorates a single character at `position`.
///
/// Fails with [`RenderError::PositionOutOfRange`], the single-position form
/// of [`RenderError::OutOfRange`], when `position` is not a valid character
/// index of `text`.
pub fn decorate_char(text: &str, position: usize, styles: &[RangeStyle]) -> Result<String> {
    let len = text.chars().count();
    if position >= len {
        return Err(RenderError::PositionOutOfRange { position, len });
    }
    decorate(text, &[DecorationRange::char(position, styles.iter().copied())])
}

/// Where a boundary event sits relative to others at the same offset.
///
/// Closing a non-empty range comes first so adjacent ranges do not overlap.
/// A zero-width range is emitted next as one adjoining marker pair, so no
/// other range's start marker can land inside it. Openings come last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    Close,
    Empty,
    Open,
}

/// Decorates `text` with the given ranges and end-marker order.
pub fn decorate_with(text: &str, ranges: &[DecorationRange], order: MarkerOrder) -> Result<String> {
    let len = text.chars().count();
    for range in ranges {
        range.check(len)?;
    }

    let mut events: Vec<(usize, Phase, usize)> = Vec::with_capacity(ranges.len() * 2);
    for (idx, range) in ranges.iter().enumerate() {
        if range.styles.is_empty() {
            continue;
        }
        if range.is_empty() {
            events.push((range.start, Phase::Empty, idx));
        } else {
            events.push((range.start, Phase::Open, idx));
            events.push((range.end, Phase::Close, idx));
        }
    }
    if events.is_empty() {
        return Ok(text.to_string());
    }
    events.sort();

    // Byte offset of every character boundary, including the end of the string.
    let bytes: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut out = String::with_capacity(text.len() + events.len() * 5);
    let mut cursor = 0;
    for (offset, phase, idx) in events {
        out.push_str(&text[bytes[cursor]..bytes[offset]]);
        cursor = offset;
        let range = &ranges[idx];
        match phase {
            Phase::Open => out.push_str(&range.start_markers()),
            Phase::Close => out.push_str(&range.end_markers(order)),
            Phase::Empty => {
                out.push_str(&range.start_markers());
                out.push_str(&range.end_markers(order));
            }
        }
    }
    out.push_str(&text[bytes[cursor]..]);
    Ok(out)
}

/// Removes every start and end marker of `styles` from `text`.
pub fn strip_markers(text: &str, styles: &[RangeStyle]) -> String {
    styles.iter().fold(text.to_string(), |acc, style| {
        acc.replace(style.start_marker(), "")
            .replace(style.end_marker(), "")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_word() {
        let out = decorate(
            "Hello World",
            &[DecorationRange::new(6, 11, [RangeStyle::Bold])],
        )
        .unwrap();
        assert_eq!(out, "Hello \x1b[1mWorld\x1b[22m");
    }

    #[test]
    fn no_styles_is_noop() {
        let out = decorate("Hello", &[DecorationRange::new(0, 3, [])]).unwrap();
        assert_eq!(out, "Hello");
        assert_eq!(decorate("Hello", &[]).unwrap(), "Hello");
    }

    #[test]
    fn single_char() {
        let out = decorate_char("abc", 1, &[RangeStyle::Underline]).unwrap();
        assert_eq!(out, "a\x1b[4mb\x1b[24mc");
    }

    #[test]
    fn single_char_at_end_is_rejected() {
        let err = decorate_char("abc", 3, &[RangeStyle::Bold]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::PositionOutOfRange {
                position: 3,
                len: 3
            }
        ));
    }

    #[test]
    fn end_past_length_is_rejected() {
        let err = decorate("abc", &[DecorationRange::new(1, 4, [RangeStyle::Bold])]).unwrap_err();
        assert!(matches!(err, RenderError::OutOfRange { end: 4, .. }));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = decorate("abc", &[DecorationRange::new(2, 1, [RangeStyle::Bold])]).unwrap_err();
        assert!(matches!(err, RenderError::OutOfRange { start: 2, .. }));
    }

    #[test]
    fn one_bad_range_rejects_the_whole_request() {
        let ranges = [
            DecorationRange::new(0, 1, [RangeStyle::Bold]),
            DecorationRange::new(0, 9, [RangeStyle::Bold]),
        ];
        assert!(decorate("abc", &ranges).is_err());
    }

    #[test]
    fn zero_width_range_inserts_adjoining_markers() {
        let out = decorate("abc", &[DecorationRange::new(1, 1, [RangeStyle::Bold])]).unwrap();
        assert_eq!(out, "a\x1b[1m\x1b[22mbc");
    }

    #[test]
    fn zero_width_at_end_of_string() {
        let out = decorate("abc", &[DecorationRange::new(3, 3, [RangeStyle::Italic])]).unwrap();
        assert_eq!(out, "abc\x1b[3m\x1b[23m");
    }

    #[test]
    fn zero_width_range_stays_adjoining_next_to_an_opening() {
        let empty = DecorationRange::new(2, 2, [RangeStyle::Bold]);
        let word = DecorationRange::new(2, 4, [RangeStyle::Underline]);
        let expected = "ab\x1b[1m\x1b[22m\x1b[4mcd\x1b[24m";

        assert_eq!(decorate("abcd", &[empty.clone(), word.clone()]).unwrap(), expected);
        assert_eq!(decorate("abcd", &[word, empty]).unwrap(), expected);
    }

    #[test]
    fn zero_width_range_stays_adjoining_next_to_a_closing() {
        let word = DecorationRange::new(0, 2, [RangeStyle::Underline]);
        let empty = DecorationRange::new(2, 2, [RangeStyle::Italic, RangeStyle::Blink]);
        let expected = "\x1b[4mab\x1b[24m\x1b[3m\x1b[5m\x1b[23m\x1b[25mcd";

        assert_eq!(decorate("abcd", &[empty.clone(), word.clone()]).unwrap(), expected);
        assert_eq!(decorate("abcd", &[word, empty]).unwrap(), expected);
    }

    #[test]
    fn full_string() {
        let out = decorate("abc", &[DecorationRange::new(0, 3, [RangeStyle::Blink])]).unwrap();
        assert_eq!(out, "\x1b[5mabc\x1b[25m");
    }

    #[test]
    fn styles_are_emitted_in_declared_order() {
        let range = DecorationRange::new(0, 2, [RangeStyle::Bold, RangeStyle::Underline]);
        assert_eq!(range.styles(), &[RangeStyle::Underline, RangeStyle::Bold]);
        let out = decorate("ab", &[range]).unwrap();
        assert!(out.starts_with("\x1b[4m\x1b[1m"));
    }

    #[test]
    fn declared_and_nested_end_orders_differ() {
        let range = DecorationRange::new(0, 2, [RangeStyle::Underline, RangeStyle::Bold]);

        let declared = decorate_with("ab", &[range.clone()], MarkerOrder::Declared).unwrap();
        assert_eq!(declared, "\x1b[4m\x1b[1mab\x1b[24m\x1b[22m");

        let nested = decorate_with("ab", &[range], MarkerOrder::Nested).unwrap();
        assert_eq!(nested, "\x1b[4m\x1b[1mab\x1b[22m\x1b[24m");
    }

    #[test]
    fn adjacent_ranges_close_before_opening() {
        let ranges = [
            DecorationRange::new(0, 2, [RangeStyle::Bold]),
            DecorationRange::new(2, 4, [RangeStyle::Underline]),
        ];
        let out = decorate("abcd", &ranges).unwrap();
        assert_eq!(out, "\x1b[1mab\x1b[22m\x1b[4mcd\x1b[24m");
    }

    #[test]
    fn ranges_may_be_given_out_of_order() {
        let ranges = [
            DecorationRange::new(4, 5, [RangeStyle::Bold]),
            DecorationRange::new(0, 1, [RangeStyle::Bold]),
        ];
        let out = decorate("a b c", &ranges).unwrap();
        assert_eq!(out, "\x1b[1ma\x1b[22m b \x1b[1mc\x1b[22m");
    }

    #[test]
    fn offsets_are_characters_not_bytes() {
        let out = decorate("héllo", &[DecorationRange::new(1, 2, [RangeStyle::Bold])]).unwrap();
        assert_eq!(out, "h\x1b[1mé\x1b[22mllo");
    }

    #[test]
    fn strip_restores_input() {
        let out = decorate(
            "Name Status",
            &[
                DecorationRange::new(0, 4, [RangeStyle::Underline]),
                DecorationRange::new(5, 11, [RangeStyle::Underline]),
            ],
        )
        .unwrap();
        assert_eq!(strip_markers(&out, &[RangeStyle::Underline]), "Name Status");
    }

    #[test]
    fn parse_style_names() {
        assert_eq!(RangeStyle::parse("Bold"), Some(RangeStyle::Bold));
        assert_eq!(RangeStyle::parse(" underline "), Some(RangeStyle::Underline));
        assert_eq!(RangeStyle::parse("strike"), None);
    }
}
