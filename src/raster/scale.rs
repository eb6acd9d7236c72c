//! Nearest-neighbor magnification for display.

use eframe::egui::{Color32, ColorImage};
use rayon::prelude::*;

use super::grid::RasterImage;

/// A scaled grayscale bitmap ready for texture upload.
///
/// Rebuilt from the current [`RasterImage`] and scale factor on every
/// refresh and discarded after upload; never cached across refreshes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaledBitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl ScaledBitmap {
    /// Bitmap width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bitmap height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel intensities.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether there is anything to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert to an egui image for texture upload.
    ///
    /// Each intensity becomes an opaque gray. The caller uploads with
    /// `TextureOptions::NEAREST` so further on-screen magnification keeps
    /// hard pixel edges.
    pub fn to_color_image(&self) -> ColorImage {
        let pixels = self.pixels.iter().map(|&v| Color32::from_gray(v)).collect();
        ColorImage {
            size: [self.width, self.height],
            pixels,
        }
    }
}

/// Scale a raster with nearest-neighbor resampling.
///
/// Output dimensions are `(floor(width * factor), floor(height * factor))`;
/// each source pixel becomes a block of identical values, so individual
/// bytes remain visually distinguishable instead of being blurred by
/// smooth interpolation. The factor need not be integral.
pub fn scale(image: &RasterImage, factor: f32) -> ScaledBitmap {
    let out_width = (image.width() as f32 * factor) as usize;
    let out_height = (image.height() as f32 * factor) as usize;

    if out_width == 0 || out_height == 0 {
        return ScaledBitmap {
            width: out_width,
            height: out_height,
            pixels: Vec::new(),
        };
    }

    // The column lookup is identical for every output row.
    let col_map: Vec<usize> = (0..out_width)
        .map(|x| ((x as f32 / factor) as usize).min(image.width() - 1))
        .collect();

    let mut pixels = vec![0u8; out_width * out_height];
    pixels
        .par_chunks_mut(out_width)
        .enumerate()
        .for_each(|(y, row_out)| {
            let src_row = (y as f32 / factor) as usize;
            let src = image.row(src_row.min(image.height() - 1));
            for (dst, &sx) in row_out.iter_mut().zip(&col_map) {
                *dst = src[sx];
            }
        });

    ScaledBitmap {
        width: out_width,
        height: out_height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::reshape;

    #[test]
    fn test_scale_identity() {
        let image = reshape(&[1, 2, 3, 4], 2).unwrap();
        let bitmap = scale(&image, 1.0);
        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.pixels(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_scale_block_replication() {
        // Each source pixel becomes a factor x factor block of its value.
        let image = reshape(&[10, 200, 30, 40], 2).unwrap();
        let bitmap = scale(&image, 2.0);
        assert_eq!(bitmap.width(), 4);
        assert_eq!(bitmap.height(), 4);
        #[rustfmt::skip]
        let expected = [
            10, 10, 200, 200,
            10, 10, 200, 200,
            30, 30, 40, 40,
            30, 30, 40, 40,
        ];
        assert_eq!(bitmap.pixels(), &expected);
    }

    #[test]
    fn test_scale_fractional_truncates_dimensions() {
        let image = reshape(&[0u8; 9], 3).unwrap();
        let bitmap = scale(&image, 1.5);
        // floor(3 * 1.5) = 4
        assert_eq!(bitmap.width(), 4);
        assert_eq!(bitmap.height(), 4);
        assert_eq!(bitmap.pixels().len(), 16);
    }

    #[test]
    fn test_scale_monotonic_dimensions() {
        let image = reshape(&[0u8; 32], 8).unwrap();
        let mut prev = (0, 0);
        for step in 1..=16 {
            let bitmap = scale(&image, step as f32);
            assert!(bitmap.width() >= prev.0);
            assert!(bitmap.height() >= prev.1);
            prev = (bitmap.width(), bitmap.height());
        }
    }

    #[test]
    fn test_scale_zero_height_raster() {
        let image = reshape(&[], 16).unwrap();
        let bitmap = scale(&image, 4.0);
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.height(), 0);
    }

    #[test]
    fn test_scale_preserves_values() {
        // Nearest-neighbor never invents intensities.
        let buffer: Vec<u8> = (0..48).map(|i| (i * 11) as u8).collect();
        let image = reshape(&buffer, 6).unwrap();
        let bitmap = scale(&image, 3.0);
        for &v in bitmap.pixels() {
            assert!(buffer.contains(&v));
        }
    }

    #[test]
    fn test_to_color_image_grayscale() {
        let image = reshape(&[0, 128, 255, 7], 2).unwrap();
        let color = scale(&image, 1.0).to_color_image();
        assert_eq!(color.size, [2, 2]);
        assert_eq!(color.pixels[0], Color32::from_gray(0));
        assert_eq!(color.pixels[1], Color32::from_gray(128));
        assert_eq!(color.pixels[2], Color32::from_gray(255));
        // Gray means equal channels.
        let px = color.pixels[3];
        assert_eq!(px.r(), px.g());
        assert_eq!(px.g(), px.b());
    }
}
