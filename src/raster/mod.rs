//! Binary-to-raster transforms.
//!
//! Pure functions that derive the displayed image from application state:
//! - [`reshape`] cuts a byte buffer into a grayscale pixel grid
//! - [`scale`] magnifies the grid with nearest-neighbor resampling
//!
//! Both are deterministic in their inputs; the UI layer only decides when
//! to re-run them.

mod grid;
mod scale;

pub use grid::{reshape, RasterImage};
pub use scale::{scale, ScaledBitmap};
