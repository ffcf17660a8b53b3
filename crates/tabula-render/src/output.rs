//! Output mode control and terminal queries.
//!
//! The [`OutputMode`] enum decides whether rendered lines carry ANSI escape
//! codes. It is resolved once, at the call boundary, into a plain `bool`
//! handed to the renderer.

use std::io::Write;

use console::Term;

/// Width assumed when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Controls whether output is styled.
///
/// - `Auto` - Style only when stdout is a color-capable terminal (default)
/// - `Term` - Always include ANSI escape codes
/// - `Text` - Never include ANSI escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Auto-detect: TTY gets Term, pipe gets Text
    #[default]
    Auto,
    /// Always use terminal styling
    Term,
    /// Never use styling (plain text)
    Text,
}

impl OutputMode {
    /// Resolves the output mode to a concrete decision about whether to use color.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Gets the current terminal width, or `None` if not available.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// The terminal width, falling back to [`DEFAULT_WIDTH`].
pub fn target_width_or_default() -> usize {
    terminal_width().unwrap_or(DEFAULT_WIDTH)
}

/// Writes each line followed by a newline.
pub fn write_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}
