//! rasterview - binary data raster viewer.
//!
//! Renders a binary file as a grayscale raster: each byte becomes one
//! pixel intensity, rows wrap at a configurable width, and the result is
//! magnified with nearest-neighbor scaling so byte patterns (structure,
//! alignment, repeated blocks) stay visually distinct.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

mod app;
mod error;
mod raster;
mod util;

use std::path::PathBuf;

use eframe::egui::{self, Color32, Pos2, Rect, RichText, Sense, TextureOptions, Vec2};

use app::{RasterApp, StatusMessage, CANVAS_SIZE, MAX_SCALE, MIN_SCALE};
use util::color::{ACCENT_CYAN, ALERT_RED, CANVAS_BLACK, DATA_WHITE, MUTED_TEXT, PANEL_DARK};
use util::format_bytes;

/// Width of the left toolbar panel.
const TOOLBAR_WIDTH: f32 = 180.0;

// =============================================================================
// Event Handlers
// =============================================================================

impl RasterApp {
    /// Load a file and surface the outcome in the status bar.
    fn load_reported(&mut self, path: PathBuf) {
        match self.load(path) {
            Ok(()) => {
                if let Some(file) = &self.file {
                    self.status = Some(StatusMessage::info(format!(
                        "{} - {}",
                        file.name(),
                        format_bytes(file.size)
                    )));
                }
            }
            Err(e) => {
                log::error!("{e}");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Apply the width entry field and surface the outcome.
    fn apply_width_input(&mut self) {
        let input = self.width_input.clone();
        match self.set_width(&input) {
            Ok(()) => {
                self.status = Some(StatusMessage::info(format!(
                    "raster width set to {}",
                    self.width()
                )));
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Upload the displayed bitmap if the texture is stale.
    ///
    /// The bitmap is rebuilt from the current raster and scale factor and
    /// discarded after upload; only the texture survives the frame. A
    /// 0-height raster (empty file) uploads nothing.
    fn regenerate_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        let Some(image) = self.image() else {
            return;
        };

        let bitmap = raster::scale(image, self.scale_factor());
        if bitmap.is_empty() {
            return;
        }
        self.texture = Some(ctx.load_texture(
            "raster",
            bitmap.to_color_image(),
            TextureOptions::NEAREST,
        ));
    }

    /// Map the cursor back to a raster cell and update the selection.
    fn handle_hover(&mut self, response: &egui::Response, image_rect: Rect) {
        let Some(pos) = response.hover_pos() else {
            return;
        };

        let rel = pos - image_rect.min;
        if rel.x < 0.0 || rel.y < 0.0 {
            return;
        }
        let factor = self.scale_factor();
        let col = (rel.x / factor) as usize;
        let row = (rel.y / factor) as usize;
        self.select(row, col);
    }
}

// =============================================================================
// UI Implementation
// =============================================================================

impl eframe::App for RasterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial file from command-line argument (first frame only)
        if let Some(path) = self.initial_file.take() {
            self.load_reported(path);
        }

        // Handle file drops
        let dropped_file = ctx.input(|i| {
            self.is_drop_target = !i.raw.hovered_files.is_empty();
            i.raw.dropped_files.first().and_then(|f| f.path.clone())
        });
        if let Some(path) = dropped_file {
            self.load_reported(path);
        }

        egui::SidePanel::left("toolbar")
            .resizable(false)
            .exact_width(TOOLBAR_WIDTH)
            .frame(egui::Frame::none().fill(PANEL_DARK).inner_margin(10.0))
            .show(ctx, |ui| self.draw_toolbar(ui));

        egui::TopBottomPanel::bottom("status")
            .frame(egui::Frame::none().fill(PANEL_DARK).inner_margin(6.0))
            .show(ctx, |ui| self.draw_status_bar(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CANVAS_BLACK))
            .show(ctx, |ui| self.draw_canvas(ui));
    }
}

impl RasterApp {
    /// Draw the toolbar: file picker, width entry, scale slider, readouts.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("RASTER VIEWER")
                .monospace()
                .size(12.0)
                .strong()
                .color(DATA_WHITE),
        );
        ui.add_space(8.0);

        if ui
            .add(egui::Button::new(RichText::new("Open File").size(11.0)).min_size(Vec2::new(
                TOOLBAR_WIDTH - 20.0,
                22.0,
            )))
            .clicked()
        {
            // Cancelled dialog returns None: no action.
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                self.load_reported(path);
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // Width applies on the button or Enter, never per keystroke.
        ui.label(RichText::new("Raster width").size(10.0).color(MUTED_TEXT));
        let entry = ui.add(
            egui::TextEdit::singleline(&mut self.width_input)
                .desired_width(TOOLBAR_WIDTH - 20.0)
                .font(egui::TextStyle::Monospace),
        );
        let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(4.0);
        let clicked = ui
            .add(egui::Button::new(RichText::new("Set Width").size(11.0)).min_size(Vec2::new(
                TOOLBAR_WIDTH - 20.0,
                22.0,
            )))
            .clicked();
        if clicked || submitted {
            self.apply_width_input();
        }

        ui.add_space(10.0);

        // Scale applies immediately on drag.
        ui.label(RichText::new("Scale").size(10.0).color(MUTED_TEXT));
        let mut factor = self.scale_factor();
        let slider = ui.add(
            egui::Slider::new(&mut factor, MIN_SCALE..=MAX_SCALE)
                .step_by(1.0)
                .fixed_decimals(0),
        );
        if slider.changed() {
            self.set_scale(factor);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        self.draw_file_info(ui);
    }

    /// Draw the file and selection readouts.
    fn draw_file_info(&self, ui: &mut egui::Ui) {
        let Some(file) = &self.file else {
            ui.label(RichText::new("no file loaded").size(10.0).color(MUTED_TEXT));
            return;
        };

        let info_row = |ui: &mut egui::Ui, label: &str, value: String| {
            ui.label(RichText::new(label).size(9.0).color(MUTED_TEXT));
            ui.label(
                RichText::new(value)
                    .monospace()
                    .size(10.0)
                    .color(DATA_WHITE),
            );
            ui.add_space(4.0);
        };

        info_row(ui, "FILE", file.name().to_string());
        info_row(ui, "SIZE", format_bytes(file.size));
        if let Some(image) = self.image() {
            info_row(ui, "RASTER", format!("{} x {}", image.width(), image.height()));
        }

        ui.add_space(6.0);
        if let Some(sel) = self.selection {
            ui.label(RichText::new("OFFSET").size(9.0).color(MUTED_TEXT));
            ui.label(
                RichText::new(format!("{:#010x}", sel.offset))
                    .monospace()
                    .size(10.0)
                    .color(ACCENT_CYAN),
            );
            ui.label(RichText::new("BYTE").size(9.0).color(MUTED_TEXT));
            ui.label(
                RichText::new(format!("{:#04x} ({})", sel.value, sel.value))
                    .monospace()
                    .size(10.0)
                    .color(ACCENT_CYAN),
            );
        } else {
            ui.label(
                RichText::new("hover the raster to inspect")
                    .size(9.0)
                    .color(MUTED_TEXT),
            );
        }
    }

    /// Draw the scrollable raster canvas.
    ///
    /// The viewport is fixed at `CANVAS_SIZE` display units; the scroll
    /// region tracks the scaled bitmap's dimensions.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        if self.is_drop_target {
            self.draw_canvas_hint(ui, "DROP FILE TO LOAD", "");
            return;
        }

        self.regenerate_texture(ui.ctx());

        let Some(texture) = self.texture.clone() else {
            if self.file.is_some() {
                // Loaded but nothing to draw: zero-length file.
                self.draw_canvas_hint(ui, "EMPTY FILE", "0 rows at the current width");
            } else {
                self.draw_canvas_hint(
                    ui,
                    "NO FILE LOADED",
                    "Open File or drop a binary onto the window",
                );
            }
            return;
        };

        egui::ScrollArea::both()
            .max_width(CANVAS_SIZE)
            .max_height(CANVAS_SIZE)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let size = Vec2::new(texture.size()[0] as f32, texture.size()[1] as f32);
                let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
                ui.painter().image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
                self.handle_hover(&response, rect);
            });
    }

    /// Draw a centered hint over the empty canvas.
    fn draw_canvas_hint(&self, ui: &mut egui::Ui, line1: &str, line2: &str) {
        let rect = ui.available_rect_before_wrap();
        let center = rect.center();

        ui.painter().text(
            center - Vec2::new(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            line1,
            egui::FontId::monospace(14.0),
            MUTED_TEXT,
        );
        if !line2.is_empty() {
            ui.painter().text(
                center + Vec2::new(0.0, 12.0),
                egui::Align2::CENTER_CENTER,
                line2,
                egui::FontId::monospace(10.0),
                MUTED_TEXT.gamma_multiply(0.8),
            );
        }
    }

    /// Draw the status bar: last message left, scale readout right.
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match &self.status {
                Some(status) => {
                    let color = if status.is_error { ALERT_RED } else { MUTED_TEXT };
                    ui.label(
                        RichText::new(&status.text)
                            .monospace()
                            .size(10.0)
                            .color(color),
                    );
                }
                None => {
                    ui.label(RichText::new("ready").monospace().size(10.0).color(MUTED_TEXT));
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("x{:.0}", self.scale_factor()))
                        .monospace()
                        .size(10.0)
                        .color(MUTED_TEXT),
                );
            });
        });
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional initial file from the command line
    let args: Vec<String> = std::env::args().collect();
    let initial_file = if args.len() > 1 {
        let path = PathBuf::from(&args[1]);
        if path.exists() {
            Some(path)
        } else {
            log::warn!("file not found: {}", args[1]);
            None
        }
    } else {
        None
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([TOOLBAR_WIDTH + CANVAS_SIZE + 40.0, CANVAS_SIZE + 60.0])
            .with_min_inner_size([480.0, 360.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Raster Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(RasterApp::new_with_file(cc, initial_file)))),
    )
}
