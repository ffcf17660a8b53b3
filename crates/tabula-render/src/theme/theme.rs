//! Theme struct holding per-call rendering defaults.

use std::path::{Path, PathBuf};

use console::Style;
use serde::Deserialize;

use crate::error::Result;
use crate::style::{ColorDef, RangeStyle};

/// Colors and header decoration applied when rendering a table.
///
/// # Example
///
/// ```rust
/// use tabula_render::Theme;
///
/// let theme = Theme::from_yaml(r#"
/// header: cyan
/// underline_header: true
/// "#).unwrap();
/// assert!(theme.underline_header);
/// assert_eq!(theme.row, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Theme name, derived from the filename when loaded with [`Theme::from_file`].
    #[serde(skip)]
    name: Option<String>,
    /// Source file path, kept for [`Theme::refresh`].
    #[serde(skip)]
    source_path: Option<PathBuf>,
    /// Whole-line color of the header and its underline.
    pub header: Option<ColorDef>,
    /// Whole-line color of data rows.
    pub row: Option<ColorDef>,
    /// Emit a dash underline row beneath the header.
    pub underline_header: bool,
    /// Attributes applied to each header word.
    pub header_words: Vec<RangeStyle>,
}

impl Default for Theme {
    /// Green header, uncolored rows, no underline.
    fn default() -> Self {
        Self {
            name: None,
            source_path: None,
            header: Some(ColorDef::Named(console::Color::Green)),
            row: None,
            underline_header: false,
            header_words: Vec::new(),
        }
    }
}

impl Theme {
    /// Creates the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// A theme that applies no colors or decorations at all.
    pub fn plain() -> Self {
        Self {
            header: None,
            ..Self::default()
        }
    }

    /// Sets the theme name, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn header(mut self, color: ColorDef) -> Self {
        self.header = Some(color);
        self
    }

    pub fn row(mut self, color: ColorDef) -> Self {
        self.row = Some(color);
        self
    }

    pub fn underline_header(mut self, underline: bool) -> Self {
        self.underline_header = underline;
        self
    }

    pub fn header_words(mut self, styles: impl IntoIterator<Item = RangeStyle>) -> Self {
        self.header_words = styles.into_iter().collect();
        self
    }

    /// Creates a theme from YAML content. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme from a YAML file.
    ///
    /// The theme name is derived from the filename (without extension).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut theme = Self::from_yaml(&content)?;
        theme.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        theme.source_path = Some(path.to_path_buf());
        Ok(theme)
    }

    /// Reloads the theme from its source file, if it has one.
    ///
    /// Returns `Ok(false)` when the theme was not loaded from a file.
    pub fn refresh(&mut self) -> Result<bool> {
        let Some(path) = self.source_path.clone() else {
            return Ok(false);
        };
        *self = Self::from_file(path)?;
        Ok(true)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Wraps `line` in the header color, when styling is on and a color is set.
    pub fn paint_header(&self, line: &str, styled: bool) -> String {
        paint(line, self.header, styled)
    }

    /// Wraps `line` in the row color, when styling is on and a color is set.
    pub fn paint_row(&self, line: &str, styled: bool) -> String {
        paint(line, self.row, styled)
    }
}

/// Whole-line coloring: `ESC[<n>m line ESC[0m`.
fn paint(line: &str, color: Option<ColorDef>, styled: bool) -> String {
    match color {
        Some(color) if styled => Style::new()
            .fg(color.to_console_color())
            .force_styling(true)
            .apply_to(line)
            .to_string(),
        _ => line.to_string(),
    }
}
