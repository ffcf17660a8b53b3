//! Recover header word spans from already-rendered text.
//!
//! Some callers only hold the plain output of a table (a header line and the
//! dash underline beneath it) and still want to style each header word. The
//! underline is a sequence of dash runs separated by spaces, so every run
//! marks one word:
//!
//! - a dash preceded by a space, or a dash at offset 0, opens a word at its
//!   own offset;
//! - a dash followed by a space, a newline or the end of the string closes
//!   the word just after itself.
//!
//! Each dash is inspected on its own, so a one-character word (`"- -"`) opens
//! and closes on the same dash and neighbouring one-character words never
//! swallow each other's boundaries.
//!
//! The scan trusts the underline grammar completely. If cell content next to
//! the header happens to look like `"- "` or `" -"`, words will be mis-split.
//! Callers that still have the [`RenderPlan`](super::RenderPlan) should use
//! its [`spans`](super::RenderPlan::spans) instead.

use super::util::char_width;
use crate::error::Result;
use crate::style::{decorate, DecorationRange, RangeStyle};

/// A header word and the character span it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderWord {
    pub text: String,
    /// Offset of the first character.
    pub start: usize,
    /// Offset one past the last character.
    pub end: usize,
}

impl HeaderWord {
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Extracts one [`HeaderWord`] per dash run in `underline`.
///
/// ```rust
/// use tabula_render::tabular::extract_words;
///
/// let words = extract_words("Name Status", "---- ------");
/// assert_eq!(words[0].text, "Name");
/// assert_eq!(words[0].span(), (0, 4));
/// assert_eq!(words[1].text, "Status");
/// assert_eq!(words[1].span(), (5, 11));
/// ```
pub fn extract_words(header: &str, underline: &str) -> Vec<HeaderWord> {
    let marks: Vec<char> = underline.chars().collect();
    let mut boundaries = Vec::new();

    for (i, &c) in marks.iter().enumerate() {
        if c != '-' {
            continue;
        }
        if i == 0 || marks[i - 1] == ' ' {
            boundaries.push(i);
        }
        if matches!(marks.get(i + 1), None | Some(' ') | Some('\n')) {
            boundaries.push(i + 1);
        }
    }

    let header_chars: Vec<char> = header.chars().collect();
    boundaries
        .chunks_exact(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let lo = start.min(header_chars.len());
            let hi = end.min(header_chars.len());
            HeaderWord {
                text: header_chars[lo..hi].iter().collect(),
                start,
                end,
            }
        })
        .collect()
}

/// Styles every header word found by [`extract_words`].
///
/// Word spans that run past the end of `header` are clipped to it.
pub fn decorate_header_words(
    header: &str,
    underline: &str,
    styles: &[RangeStyle],
) -> Result<String> {
    let len = char_width(header);
    let ranges: Vec<DecorationRange> = extract_words(header, underline)
        .into_iter()
        .filter(|w| w.start < len)
        .map(|w| DecorationRange::new(w.start, w.end.min(len), styles.iter().copied()))
        .collect();
    decorate(header, &ranges)
}
