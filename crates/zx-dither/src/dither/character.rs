//! Character-set dithering.

use crate::charset::match_glyphs;
use crate::mode::ColourMode;
use crate::palette::{BLACK, WHITE};
use crate::quantize::PixelQuantizer;
use crate::raster::Raster;

use super::{Dither, DitherOptions, ErrorDiffusion, STUCKI};

/// Stucki diffusion to black and white, then each whole 8×8 block is
/// replaced by the ROM glyph agreeing with it on the most pixels.
///
/// The quantizer only lends its black threshold: the pre-dither is always
/// monochrome, so the output holds black ink on white paper.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterDither;

impl CharacterDither {
    /// Create a character ditherer.
    pub fn new() -> Self {
        Self
    }
}

impl Dither for CharacterDither {
    fn dither(&self, raster: &mut Raster, quantizer: &PixelQuantizer, options: &DitherOptions) {
        let mono = PixelQuantizer::new(ColourMode::Monochrome, false, quantizer.black_threshold());
        ErrorDiffusion::new(&STUCKI).dither(raster, &mono, options);
        match_glyphs(raster, BLACK, WHITE);
    }
}
