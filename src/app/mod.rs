//! Application state and types.
//!
//! - `RasterApp` - main application state and event operations
//! - `FileData` - loaded file contents and metadata
//! - `Selection` - byte under the cursor
//! - `StatusMessage` - status bar line

mod state;
mod types;

pub use state::RasterApp;
pub use types::{
    FileData, Selection, StatusMessage, CANVAS_SIZE, DEFAULT_SCALE, DEFAULT_WIDTH, MAX_SCALE,
    MIN_SCALE,
};
