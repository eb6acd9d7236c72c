//! UI color palette.
//!
//! Consolidates the interface colors used throughout the application so
//! panels, readouts and alerts stay consistent.

use eframe::egui::Color32;

/// Canvas background behind the raster.
pub const CANVAS_BLACK: Color32 = Color32::from_rgb(8, 8, 10);

/// Toolbar and status bar background.
pub const PANEL_DARK: Color32 = Color32::from_rgb(22, 24, 28);

/// Primary readout text.
pub const DATA_WHITE: Color32 = Color32::from_rgb(225, 228, 232);

/// Secondary labels and hints.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(120, 126, 134);

/// Highlight for the selection readout and active values.
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(90, 200, 220);

/// Error messages in the status bar.
pub const ALERT_RED: Color32 = Color32::from_rgb(235, 80, 70);
