//! Error types for loading and reshaping binary data.

use std::fmt;
use std::io;

/// Errors raised by the raster pipeline.
///
/// Every variant is recoverable: the UI reports it through the status bar
/// and the log, and the previously rendered state stays intact.
#[derive(Debug)]
pub enum RasterError {
    /// The file could not be read.
    Io(io::Error),
    /// The requested raster dimensions are degenerate (e.g. zero width).
    Shape(String),
    /// User input could not be parsed.
    Input(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read file: {e}"),
            Self::Shape(msg) => write!(f, "invalid raster shape: {msg}"),
            Self::Input(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Shape(_) | Self::Input(_) => None,
        }
    }
}

impl From<io::Error> for RasterError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = RasterError::Shape("raster width must be positive".to_string());
        assert_eq!(
            e.to_string(),
            "invalid raster shape: raster width must be positive"
        );

        let e = RasterError::Input("not a number".to_string());
        assert_eq!(e.to_string(), "invalid input: not a number");
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e = RasterError::from(io_err);
        assert!(matches!(e, RasterError::Io(_)));
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("failed to read file:"));
    }
}
