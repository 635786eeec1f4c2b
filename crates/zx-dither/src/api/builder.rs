//! Converter builder, the main entry point of the crate.
//!
//! [`Converter`] wraps preprocessing, dithering and the colour-mode post-pass
//! behind a fluent builder, and encodes finished conversions to SCR.

use crate::attribute::{colour_attributes, AttributeStrategy};
use crate::dither::DitherAlgorithm;
use crate::gigascreen::{combine, reorder, GigaScreenStrategy, HsbOption};
use crate::mode::ColourMode;
use crate::output::Conversion;
use crate::charset::text_dump;
use crate::palette::{BLACK, BRIGHT, WHITE};
use crate::preprocess::{PreprocessOptions, Preprocessor, Scaling};
use crate::raster::Raster;
use crate::scr::{self, BrightRule, SCR_SIZE};

use super::{ConversionOptions, ZxError};

/// Fluent conversion builder.
///
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter can be
///   reused across many images
///
/// # Example
///
/// ```
/// use zx_dither::{ColourMode, Converter, DitherAlgorithm, Raster, Rgb};
///
/// let converter = Converter::default()
///     .dither(DitherAlgorithm::FloydSteinberg)
///     .colour_mode(ColourMode::FullPalette);
///
/// let input = Raster::new(512, 384, Rgb::new(40, 90, 200));
/// let conversion = converter.convert(converter.preprocess(&input)).unwrap();
/// let scr = converter.encode_scr(&conversion).unwrap();
///
/// assert_eq!(conversion.final_image().raster().width(), 256);
/// assert_eq!(scr.len(), 6912);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
    preprocess: PreprocessOptions,
}

impl Converter {
    /// Create a converter with default preprocessing.
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            preprocess: PreprocessOptions::default(),
        }
    }

    /// Current conversion options.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Current preprocessing options.
    pub fn preprocess_options(&self) -> &PreprocessOptions {
        &self.preprocess
    }

    /// Replace the preprocessing options.
    #[inline]
    pub fn with_preprocess(mut self, preprocess: PreprocessOptions) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Set the dither algorithm.
    #[inline]
    pub fn dither(mut self, algorithm: DitherAlgorithm) -> Self {
        self.options.dither = algorithm;
        self
    }

    /// Set the colour mode.
    #[inline]
    pub fn colour_mode(mut self, mode: ColourMode) -> Self {
        self.options.colour_mode = mode;
        self
    }

    /// Set the attribute strategy.
    #[inline]
    pub fn attribute(mut self, strategy: AttributeStrategy) -> Self {
        self.options.attribute = strategy;
        self
    }

    /// Set the GigaScreen strategy.
    #[inline]
    pub fn giga_strategy(mut self, strategy: GigaScreenStrategy) -> Self {
        self.options.giga_strategy = strategy;
        self
    }

    /// Set the GigaScreen flicker option.
    #[inline]
    pub fn hsb_option(mut self, option: HsbOption) -> Self {
        self.options.hsb_option = option;
        self
    }

    /// Set serpentine scanning.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.options.serpentine = enabled;
        self
    }

    /// Set block-constrained error diffusion.
    #[inline]
    pub fn constrained(mut self, enabled: bool) -> Self {
        self.options.constrained = enabled;
        self
    }

    /// Set the prefer-detail heuristic.
    #[inline]
    pub fn prefer_detail(mut self, enabled: bool) -> Self {
        self.options.prefer_detail = enabled;
        self
    }

    /// Set the monochrome black threshold.
    #[inline]
    pub fn black_threshold(mut self, threshold: u32) -> Self {
        self.options.black_threshold = threshold;
        self
    }

    /// Set the monochrome ink and paper indices.
    #[inline]
    pub fn mono_colours(mut self, ink: u8, paper: u8) -> Self {
        self.options.mono_ink = ink;
        self.options.mono_paper = paper;
        self
    }

    /// Set the ordered dither intensity.
    #[inline]
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.options.intensity = intensity;
        self
    }

    /// Declare that an SCR file will be written.
    #[inline]
    pub fn export_screen(mut self, enabled: bool) -> Self {
        self.options.export_screen = enabled;
        self
    }

    /// Declare that a tape image will be built.
    #[inline]
    pub fn export_tape(mut self, enabled: bool) -> Self {
        self.options.export_tape = enabled;
        self
    }

    /// Set the contrast multiplier.
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.preprocess = self.preprocess.contrast(contrast);
        self
    }

    /// Set the brightness offset.
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.preprocess = self.preprocess.brightness(brightness);
        self
    }

    /// Set the saturation offset.
    #[inline]
    pub fn saturation(mut self, saturation: f32) -> Self {
        self.preprocess = self.preprocess.saturation(saturation);
        self
    }

    /// Set the initial resample mode.
    #[inline]
    pub fn scaling(mut self, scaling: Scaling) -> Self {
        self.preprocess = self.preprocess.scaling(scaling);
        self
    }

    /// Scale and adjust `input` ahead of [`convert()`](Self::convert).
    pub fn preprocess(&self, input: &Raster) -> Raster {
        Preprocessor::new(self.preprocess.clone()).process(input)
    }

    /// Quantize `raster` for the configured colour mode.
    ///
    /// 1. Dither with the selected algorithm
    /// 2. Monochrome (and character dithering): tint black with ink and
    ///    white with paper
    /// 3. Full palette: reduce each block to two attribute colours
    /// 4. GigaScreen: split into two screens, reordering them when the
    ///    strategy is mixed and an export was requested
    ///
    /// # Errors
    ///
    /// Returns [`ZxError::InvalidOption`] or [`ZxError::UnsupportedMode`]
    /// when the options fail validation.
    pub fn convert(&self, mut raster: Raster) -> Result<Conversion, ZxError> {
        let opts = &self.options;
        opts.validate()?;

        let quantizer = opts.quantizer();
        opts.dither
            .ditherer()
            .dither(&mut raster, &quantizer, &opts.dither_options());

        match opts.effective_mode() {
            ColourMode::Monochrome => {
                let ink = BRIGHT[opts.mono_ink as usize];
                let paper = BRIGHT[opts.mono_paper as usize];
                for p in raster.pixels_mut() {
                    // Edge pixels outside whole ordered tiles were never
                    // quantized.
                    let mono = match *p {
                        BLACK | WHITE => *p,
                        other => quantizer.quantize(other),
                    };
                    *p = if mono == BLACK { ink } else { paper };
                }
                Ok(Conversion::single(ColourMode::Monochrome, raster))
            }
            ColourMode::FullPalette => {
                colour_attributes(
                    &mut raster,
                    ColourMode::FullPalette,
                    opts.attribute,
                    opts.prefer_detail,
                )?;
                Ok(Conversion::single(ColourMode::FullPalette, raster))
            }
            ColourMode::GigaScreen => {
                let mut output = combine(&raster, opts.giga_strategy);
                if opts.reorders_screens() {
                    reorder(&mut output.screen1, &mut output.screen2, opts.hsb_option);
                }
                Ok(Conversion::gigascreen(
                    output.combined,
                    output.screen1,
                    output.screen2,
                ))
            }
        }
    }

    /// Render the final image as text, one ROM glyph character per whole
    /// block and one line per block row.
    ///
    /// Pixels in the monochrome paper colour count as paper, everything else
    /// as ink.
    pub fn encode_text(&self, conversion: &Conversion) -> String {
        let paper = BRIGHT[(self.options.mono_paper as usize).min(BRIGHT.len() - 1)];
        text_dump(conversion.final_image().raster(), paper)
    }

    /// Preprocess then convert.
    pub fn process(&self, input: &Raster) -> Result<Conversion, ZxError> {
        self.convert(self.preprocess(input))
    }

    /// Encode a conversion as SCR data.
    ///
    /// Returns 6912 bytes, or 13824 for GigaScreen: screen 1 then screen 2.
    ///
    /// # Errors
    ///
    /// Returns [`ZxError::InvalidDimensions`] unless the rasters are 256×192,
    /// and [`ZxError::Palette`] when a block colour is not a Spectrum colour.
    pub fn encode_scr(&self, conversion: &Conversion) -> Result<Vec<u8>, ZxError> {
        match conversion.colour_mode() {
            ColourMode::GigaScreen => {
                let rule = BrightRule::GigaScreen(self.options.giga_strategy);
                let mut out = Vec::with_capacity(SCR_SIZE * 2);
                for image in conversion.supporting_images() {
                    out.extend(scr::encode(image.raster(), rule)?);
                }
                Ok(out)
            }
            _ => scr::encode(
                conversion.final_image().raster(),
                BrightRule::Attribute(self.options.attribute),
            ),
        }
    }
}
