//! Application state and event operations.

use std::fs;
use std::path::PathBuf;

use eframe::egui::TextureHandle;

use super::types::{
    FileData, Selection, StatusMessage, DEFAULT_SCALE, DEFAULT_WIDTH, MAX_SCALE, MIN_SCALE,
};
use crate::error::RasterError;
use crate::raster::{self, RasterImage};

// =============================================================================
// RasterApp
// =============================================================================

/// Main application state.
///
/// Holds the loaded buffer and the view parameters, plus the raster
/// derived from them. UI event handlers call the operations below; the
/// pixel transforms themselves live in [`crate::raster`] and are pure.
///
/// State machine: Unloaded -> Loaded (via [`Self::load`]) -> Loaded
/// (self-transitions via [`Self::set_width`] / [`Self::set_scale`] with
/// re-render, or a new load replacing the buffer).
pub struct RasterApp {
    /// Loaded file, if any.
    pub file: Option<FileData>,
    /// Raster row width in bytes.
    width: usize,
    /// Display scale factor.
    scale_factor: f32,
    /// Contents of the width entry field (applied explicitly, not live).
    pub width_input: String,
    /// Raster derived from `(file, width)`; `None` while unloaded.
    image: Option<RasterImage>,
    /// Uploaded display texture; `None` marks the display as stale.
    pub texture: Option<TextureHandle>,
    /// Byte under the cursor.
    pub selection: Option<Selection>,
    /// Last user-visible message.
    pub status: Option<StatusMessage>,
    /// Whether a file is being dragged over the window.
    pub is_drop_target: bool,
    /// Initial file to load (from command-line argument).
    pub initial_file: Option<PathBuf>,
}

impl Default for RasterApp {
    fn default() -> Self {
        Self {
            file: None,
            width: DEFAULT_WIDTH,
            scale_factor: DEFAULT_SCALE,
            width_input: DEFAULT_WIDTH.to_string(),
            image: None,
            texture: None,
            selection: None,
            status: None,
            is_drop_target: false,
            initial_file: None,
        }
    }
}

impl RasterApp {
    /// Create a new application instance with an optional initial file.
    pub fn new_with_file(_cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        Self {
            initial_file,
            ..Self::default()
        }
    }

    /// Current raster row width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current display scale factor.
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Raster derived from the loaded buffer.
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    /// Load a file, replacing the current buffer wholesale.
    ///
    /// One synchronous read sized to the whole file. On failure the
    /// previous buffer, raster and display all stay unchanged. An empty
    /// file loads successfully and renders a 0-height raster.
    pub fn load(&mut self, path: PathBuf) -> Result<(), RasterError> {
        let data = fs::read(&path)?;
        let size = data.len() as u64;

        log::info!("loaded {} ({size} bytes)", path.display());

        self.file = Some(FileData { data, size, path });
        self.selection = None;
        self.refresh()
    }

    /// Re-derive the raster from the current buffer and width, and mark
    /// the display stale.
    ///
    /// Idempotent: unchanged inputs produce a bit-identical raster. No-op
    /// while no file is loaded.
    pub fn refresh(&mut self) -> Result<(), RasterError> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        let image = raster::reshape(&file.data, self.width)?;
        log::debug!("raster {}x{}", image.width(), image.height());
        self.image = Some(image);
        self.texture = None;
        Ok(())
    }

    /// Apply a width entered in the text field.
    ///
    /// Non-numeric input fails with [`RasterError::Input`] and zero with
    /// [`RasterError::Shape`]; both leave the current width and raster
    /// untouched. Otherwise the width is committed and the raster
    /// re-derived from the existing buffer (no reload from disk).
    pub fn set_width(&mut self, input: &str) -> Result<(), RasterError> {
        let width: usize = input
            .trim()
            .parse()
            .map_err(|_| RasterError::Input(format!("{input:?} is not a valid raster width")))?;
        if width == 0 {
            return Err(RasterError::Shape(
                "raster width must be positive".to_string(),
            ));
        }

        self.width = width;
        self.refresh()
    }

    /// Apply a new display scale factor, clamped to the slider range.
    ///
    /// Only the displayed bitmap is invalidated; the raster does not
    /// depend on the scale factor and is not re-derived. This is the
    /// cheap path: width changes reshape, scale changes only redraw.
    pub fn set_scale(&mut self, factor: f32) {
        let factor = factor.clamp(MIN_SCALE, MAX_SCALE);
        if factor != self.scale_factor {
            self.scale_factor = factor;
            self.texture = None;
        }
    }

    /// Update the selection to the byte at raster cell `(row, col)`.
    ///
    /// Cells past the end of the buffer (the zero-padded tail of the last
    /// row) clear the selection: padding is not inspectable data.
    pub fn select(&mut self, row: usize, col: usize) {
        self.selection = None;

        let (Some(file), Some(image)) = (&self.file, &self.image) else {
            return;
        };
        if col >= image.width() {
            return;
        }
        let Some(offset) = row
            .checked_mul(image.width())
            .and_then(|o| o.checked_add(col))
        else {
            return;
        };
        if let Some(&value) = file.data.get(offset) {
            self.selection = Some(Selection { offset, value });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(contents: &[u8]) -> PathBuf {
        use std::sync::atomic::{AtomicUsize, Ordering};

        // Unique per call so parallel tests never share a fixture.
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("rasterview-test-{}-{id}.bin", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn app_with(contents: &[u8]) -> RasterApp {
        let mut app = RasterApp::default();
        app.load(temp_file(contents)).unwrap();
        app
    }

    #[test]
    fn test_defaults() {
        let app = RasterApp::default();
        assert!(app.file.is_none());
        assert!(app.image().is_none());
        assert_eq!(app.width(), 256);
        assert_eq!(app.scale_factor(), 4.0);
        assert_eq!(app.width_input, "256");
    }

    #[test]
    fn test_load_derives_raster() {
        let app = app_with(&[1, 2, 3, 4, 5]);
        let image = app.image().unwrap();
        assert_eq!(image.width(), 256);
        assert_eq!(image.height(), 1);
        assert_eq!(app.file.as_ref().unwrap().size, 5);
    }

    #[test]
    fn test_load_missing_file_keeps_state() {
        let mut app = app_with(&[9, 9, 9]);
        let before = app.image().cloned();

        let err = app
            .load(PathBuf::from("/nonexistent/rasterview-nope.bin"))
            .unwrap_err();
        assert!(matches!(err, RasterError::Io(_)));
        // Previous buffer and raster survive a failed load.
        assert_eq!(app.file.as_ref().unwrap().data, vec![9, 9, 9]);
        assert_eq!(app.image().cloned(), before);
    }

    #[test]
    fn test_load_replaces_buffer_wholesale() {
        let mut app = app_with(&[1; 10]);
        app.load(temp_file(&[2; 600])).unwrap();

        assert_eq!(app.file.as_ref().unwrap().size, 600);
        // 600 bytes at width 256 -> 3 rows.
        assert_eq!(app.image().unwrap().height(), 3);
        assert!(app.selection.is_none());
    }

    #[test]
    fn test_load_empty_file_is_valid() {
        let app = app_with(&[]);
        let image = app.image().unwrap();
        assert_eq!(image.height(), 0);
        assert_eq!(app.file.as_ref().unwrap().size, 0);
    }

    #[test]
    fn test_set_width_reshapes_without_reload() {
        let mut app = app_with(&[0; 64]);
        app.set_width("16").unwrap();
        assert_eq!(app.width(), 16);
        assert_eq!(app.image().unwrap().width(), 16);
        assert_eq!(app.image().unwrap().height(), 4);
    }

    #[test]
    fn test_set_width_rejects_non_numeric() {
        let mut app = app_with(&[0; 8]);
        let before = app.image().cloned();

        let err = app.set_width("abc").unwrap_err();
        assert!(matches!(err, RasterError::Input(_)));
        assert_eq!(app.width(), 256);
        assert_eq!(app.image().cloned(), before);
    }

    #[test]
    fn test_set_width_rejects_zero() {
        let mut app = app_with(&[0; 8]);
        let before = app.image().cloned();

        let err = app.set_width("0").unwrap_err();
        assert!(matches!(err, RasterError::Shape(_)));
        assert_eq!(app.width(), 256);
        assert_eq!(app.image().cloned(), before);
    }

    #[test]
    fn test_set_width_negative_is_input_error() {
        let mut app = RasterApp::default();
        let err = app.set_width("-3").unwrap_err();
        assert!(matches!(err, RasterError::Input(_)));
        assert_eq!(app.width(), 256);
    }

    #[test]
    fn test_set_scale_clamps_and_keeps_raster() {
        let mut app = app_with(&[5; 32]);
        let before = app.image().cloned();

        app.set_scale(99.0);
        assert_eq!(app.scale_factor(), 16.0);
        app.set_scale(0.1);
        assert_eq!(app.scale_factor(), 1.0);
        // Scale changes never touch the raster itself.
        assert_eq!(app.image().cloned(), before);
    }

    #[test]
    fn test_refresh_idempotent() {
        let mut app = app_with(&[3, 1, 4, 1, 5, 9]);
        let first = app.image().cloned();
        app.refresh().unwrap();
        app.refresh().unwrap();
        assert_eq!(app.image().cloned(), first);
    }

    #[test]
    fn test_refresh_without_file_is_noop() {
        let mut app = RasterApp::default();
        app.refresh().unwrap();
        assert!(app.image().is_none());
    }

    #[test]
    fn test_select_maps_cell_to_offset() {
        let mut app = app_with(&[10, 20, 30, 40, 50]);
        app.set_width("2").unwrap();

        app.select(1, 1);
        assert_eq!(
            app.selection,
            Some(Selection {
                offset: 3,
                value: 40
            })
        );
    }

    #[test]
    fn test_select_padding_clears_selection() {
        let mut app = app_with(&[10, 20, 30, 40, 50]);
        app.set_width("2").unwrap();

        // (2, 1) is the zero-padded tail cell, not real data.
        app.select(2, 1);
        assert!(app.selection.is_none());

        app.select(2, 0);
        assert_eq!(
            app.selection,
            Some(Selection {
                offset: 4,
                value: 50
            })
        );
    }

    #[test]
    fn test_select_outside_grid() {
        let mut app = app_with(&[1, 2, 3, 4]);
        app.set_width("2").unwrap();

        app.select(0, 7);
        assert!(app.selection.is_none());
    }
}
