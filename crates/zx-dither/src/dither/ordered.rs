//! Ordered (threshold-matrix) dithering.
//!
//! Tiles are independent: no error is carried, so the result does not depend
//! on visiting order.

use crate::color::Rgb;
use crate::quantize::PixelQuantizer;
use crate::raster::Raster;

use super::{Dither, DitherOptions};

/// A threshold matrix, stored row-major.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdMatrix {
    /// Tile width in pixels.
    pub width: usize,
    /// Tile height in pixels.
    pub height: usize,
    /// `width * height` ranks, each in `0..width * height`.
    pub values: &'static [u8],
}

impl ThresholdMatrix {
    /// Channel offset for cell `(mx, my)`:
    /// `((m + 0.5) / N - 0.5) * 255 * intensity`.
    #[inline]
    pub fn offset(&self, mx: usize, my: usize, intensity: f32) -> f32 {
        let cells = self.values.len() as f32;
        let m = self.values[my * self.width + mx] as f32;
        ((m + 0.5) / cells - 0.5) * 255.0 * intensity
    }
}

/// 2×1 threshold pair.
pub const BAYER_TWO_BY_ONE: ThresholdMatrix = ThresholdMatrix {
    width: 2,
    height: 1,
    values: &[0, 1],
};

/// 2×2 Bayer.
pub const BAYER_TWO_BY_TWO: ThresholdMatrix = ThresholdMatrix {
    width: 2,
    height: 2,
    values: &[
        0, 2, //
        3, 1,
    ],
};

/// 4×4 Bayer variant: rows two and four have their even columns swapped.
pub const OMEGA: ThresholdMatrix = ThresholdMatrix {
    width: 4,
    height: 4,
    values: &[
        0, 8, 2, 10, //
        14, 4, 12, 6, //
        3, 11, 1, 9, //
        13, 7, 15, 5,
    ],
};

/// Classic 4×4 Bayer.
pub const BAYER_FOUR_BY_FOUR: ThresholdMatrix = ThresholdMatrix {
    width: 4,
    height: 4,
    values: &[
        0, 8, 2, 10, //
        12, 4, 14, 6, //
        3, 11, 1, 9, //
        15, 7, 13, 5,
    ],
};

/// Classic 8×8 Bayer.
pub const BAYER_EIGHT_BY_EIGHT: ThresholdMatrix = ThresholdMatrix {
    width: 8,
    height: 8,
    values: &[
        0, 32, 8, 40, 2, 34, 10, 42, //
        48, 16, 56, 24, 50, 18, 58, 26, //
        12, 44, 4, 36, 14, 46, 6, 38, //
        60, 28, 52, 20, 62, 30, 54, 22, //
        3, 35, 11, 43, 1, 33, 9, 41, //
        51, 19, 59, 27, 49, 17, 57, 25, //
        15, 47, 7, 39, 13, 45, 5, 37, //
        63, 31, 55, 23, 61, 29, 53, 21,
    ],
};

/// 2×2 lightness ramp.
pub const LIGHTNESS: ThresholdMatrix = ThresholdMatrix {
    width: 2,
    height: 2,
    values: &[
        0, 3, //
        2, 1,
    ],
};

/// 4×4 magic square (Dürer's, shifted to start at zero).
pub const MAGIC_SQUARE: ThresholdMatrix = ThresholdMatrix {
    width: 4,
    height: 4,
    values: &[
        0, 14, 13, 3, //
        11, 5, 6, 8, //
        7, 9, 10, 4, //
        12, 2, 1, 15,
    ],
};

/// 4×4 Nasik (pandiagonal) magic square.
pub const NASIK_MAGIC_SQUARE: ThresholdMatrix = ThresholdMatrix {
    width: 4,
    height: 4,
    values: &[
        0, 11, 6, 13, //
        14, 5, 8, 3, //
        9, 2, 15, 4, //
        7, 12, 1, 10,
    ],
};

/// Ordered dithering with a fixed [`ThresholdMatrix`].
#[derive(Debug, Clone, Copy)]
pub struct OrderedDither {
    matrix: &'static ThresholdMatrix,
}

impl OrderedDither {
    /// Create an ordered ditherer for `matrix`.
    pub fn new(matrix: &'static ThresholdMatrix) -> Self {
        Self { matrix }
    }
}

impl Dither for OrderedDither {
    fn dither(&self, raster: &mut Raster, quantizer: &PixelQuantizer, options: &DitherOptions) {
        threshold(raster, self.matrix, quantizer, options.intensity);
    }
}

/// Offset and quantize every whole tile. Partial tiles at the right and
/// bottom edges are left untouched.
pub(crate) fn threshold(
    raster: &mut Raster,
    matrix: &ThresholdMatrix,
    quantizer: &PixelQuantizer,
    intensity: f32,
) {
    let (w, h) = (matrix.width, matrix.height);
    let mut y = 0;
    while y + h <= raster.height() {
        let mut x = 0;
        while x + w <= raster.width() {
            for my in 0..h {
                for mx in 0..w {
                    let offset = matrix.offset(mx, my, intensity);
                    let p = raster.get(x + mx, y + my);
                    let shifted = Rgb::from_clamped(
                        (p.r as f32 + offset) as i32,
                        (p.g as f32 + offset) as i32,
                        (p.b as f32 + offset) as i32,
                    );
                    raster.set(x + mx, y + my, quantizer.quantize(shifted));
                }
            }
            x += w;
        }
        y += h;
    }
}
