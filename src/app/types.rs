//! Core types and constants for application state.

use std::path::PathBuf;

// =============================================================================
// Constants
// =============================================================================

/// Default raster row width in bytes.
pub const DEFAULT_WIDTH: usize = 256;

/// Lower bound of the display scale slider.
pub const MIN_SCALE: f32 = 1.0;

/// Upper bound of the display scale slider.
pub const MAX_SCALE: f32 = 16.0;

/// Initial display scale factor.
pub const DEFAULT_SCALE: f32 = 4.0;

/// Fixed canvas viewport size in display units.
pub const CANVAS_SIZE: f32 = 512.0;

// =============================================================================
// File Data
// =============================================================================

/// Loaded file contents and metadata.
pub struct FileData {
    /// Raw file bytes; replaced wholesale on each load.
    pub data: Vec<u8>,
    /// File size in bytes.
    pub size: u64,
    /// Original file path.
    pub path: PathBuf,
}

impl FileData {
    /// File name for the info readout.
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Byte under the cursor on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Byte offset in the file.
    pub offset: usize,
    /// Byte value at that offset.
    pub value: u8,
}

// =============================================================================
// Status Message
// =============================================================================

/// Last user-visible message, shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}
