//! Rendering configuration.
//!
//! A [`Theme`] carries every styling default the renderer needs: header and
//! row colors, whether the header is underlined, and which attributes to put
//! on individual header words. It is built once by the caller and passed into
//! each render call; nothing is read from process-wide state.
//!
//! Themes can be built in code or loaded from YAML:
//!
//! ```yaml
//! header: green
//! row: 250
//! underline_header: true
//! header_words: [bold]
//! ```

#[allow(clippy::module_inception)]
mod theme;

pub use theme::Theme;
