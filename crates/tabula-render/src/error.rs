//! Error types for table rendering and range decoration.
//!
//! Every error is local to the call that raised it. Rendering has no side
//! effects beyond its own output, so a failed call can simply be retried
//! with corrected input.

use thiserror::Error;

/// Errors raised by the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A decoration range does not fit inside the string it decorates.
    #[error("decoration range {start}..{end} is out of bounds for a string of {len} characters")]
    OutOfRange { start: usize, end: usize, len: usize },

    /// The single-position form of [`RenderError::OutOfRange`]: a
    /// one-character decoration points at or past the end of the string.
    #[error("position {position} is out of bounds for a string of {len} characters")]
    PositionOutOfRange { position: usize, len: usize },

    /// A theme referenced a color name that could not be parsed.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// A format spec string could not be parsed.
    #[error("invalid format spec '{0}'")]
    InvalidFormat(String),

    /// Theme or override configuration could not be deserialized.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error while reading configuration or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = RenderError::OutOfRange {
            start: 3,
            end: 12,
            len: 11,
        };
        let msg = err.to_string();
        assert!(msg.contains("3..12"));
        assert!(msg.contains("11 characters"));
    }

    #[test]
    fn position_out_of_range_display() {
        let err = RenderError::PositionOutOfRange {
            position: 5,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "position 5 is out of bounds for a string of 5 characters"
        );
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let render_err: RenderError = io_err.into();
        assert!(matches!(render_err, RenderError::Io(_)));
    }

    #[test]
    fn from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<u8>>("{not: [a list").unwrap_err();
        let render_err: RenderError = yaml_err.into();
        assert!(render_err.to_string().starts_with("config error"));
    }
}
