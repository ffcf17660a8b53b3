//! Color value parsing for themes.
//!
//! Supports:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//!
//! # Example
//!
//! ```rust
//! use tabula_render::style::ColorDef;
//!
//! let red = ColorDef::parse_string("red").unwrap();
//! let orange = ColorDef::parse_string("208").unwrap();
//! assert_ne!(red, orange);
//! ```

use console::Color;
use serde::{Deserialize, Deserializer};

use crate::error::RenderError;

/// Parsed color definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
}

impl ColorDef {
    /// Parses a color from a string value.
    ///
    /// Accepts named colors, `bright_` variants and decimal palette indices.
    pub fn parse_string(s: &str) -> Result<Self, RenderError> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u16>() {
            return Self::from_index(index as u64);
        }
        Self::parse_named(s)
    }

    fn from_index(index: u64) -> Result<Self, RenderError> {
        u8::try_from(index)
            .map(ColorDef::Color256)
            .map_err(|_| RenderError::UnknownColor(format!("palette index {} (0-255)", index)))
    }

    /// Parses a named color (including bright variants).
    fn parse_named(name: &str) -> Result<Self, RenderError> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            // Bright colors live at palette indices 8-15.
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(RenderError::UnknownColor(name.to_string())),
            };
            return Ok(ColorDef::Color256(index));
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            _ => return Err(RenderError::UnknownColor(name.to_string())),
        };
        Ok(ColorDef::Named(color))
    }

    /// Converts this color definition to a `console::Color`.
    pub fn to_console_color(self) -> Color {
        match self {
            ColorDef::Named(c) => c,
            ColorDef::Color256(n) => Color::Color256(n),
        }
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(u64),
            Name(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Index(n) => ColorDef::from_index(n),
            Raw::Name(s) => ColorDef::parse_string(&s),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
