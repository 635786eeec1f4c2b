//! Conversion configuration.

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeStrategy;
use crate::dither::{DitherAlgorithm, DitherOptions};
use crate::gigascreen::{GigaScreenStrategy, HsbOption};
use crate::mode::ColourMode;
use crate::quantize::{PixelQuantizer, DEFAULT_BLACK_THRESHOLD};

use super::ZxError;

/// Highest valid monochrome ink/paper index.
pub const MAX_MONO_INDEX: u8 = 7;

/// Every setting a conversion reads.
///
/// Missing keys take their default when deserialized, so a config file only
/// needs to name what it changes.
///
/// # Defaults
///
/// - Dither: Atkinson
/// - Colour mode: full palette, favour half-bright attributes
/// - GigaScreen: half-bright strategy, no flicker reorder
/// - Black threshold: 384, monochrome ink 0 on paper 7
/// - Ordered intensity: 1.0
///
/// # Example
///
/// ```
/// use zx_dither::{ColourMode, ConversionOptions};
///
/// let options: ConversionOptions =
///     serde_json::from_str(r#"{"colour-mode": "monochrome", "mono-paper": 5}"#).unwrap();
/// assert_eq!(options.colour_mode, ColourMode::Monochrome);
/// assert_eq!(options.mono_ink, 0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConversionOptions {
    /// Dither algorithm.
    pub dither: DitherAlgorithm,
    /// Colour mode.
    pub colour_mode: ColourMode,
    /// Attribute strategy for full-palette mode.
    pub attribute: AttributeStrategy,
    /// Screen pairing for GigaScreen mode.
    pub giga_strategy: GigaScreenStrategy,
    /// Flicker score used by the GigaScreen reorder.
    pub hsb_option: HsbOption,
    /// Alternate row direction during error diffusion.
    pub serpentine: bool,
    /// Keep diffused error inside the source 8×8 block.
    pub constrained: bool,
    /// Snap very dark and very light pixels to the palette extremes.
    pub prefer_detail: bool,
    /// Monochrome channel-sum cutoff below which a pixel is black.
    pub black_threshold: u32,
    /// Bright palette index used for monochrome black.
    pub mono_ink: u8,
    /// Bright palette index used for monochrome white.
    pub mono_paper: u8,
    /// Ordered dither threshold scale.
    pub intensity: f32,
    /// An `.scr` file will be written.
    pub export_screen: bool,
    /// A tape image will be built.
    pub export_tape: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            dither: DitherAlgorithm::default(),
            colour_mode: ColourMode::default(),
            attribute: AttributeStrategy::default(),
            giga_strategy: GigaScreenStrategy::default(),
            hsb_option: HsbOption::default(),
            serpentine: false,
            constrained: false,
            prefer_detail: false,
            black_threshold: DEFAULT_BLACK_THRESHOLD,
            mono_ink: 0,
            mono_paper: MAX_MONO_INDEX,
            intensity: 1.0,
            export_screen: false,
            export_tape: false,
        }
    }
}

impl ConversionOptions {
    /// Reject out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ZxError::InvalidOption`] for a monochrome index above 7 or a
    /// negative or non-finite intensity, and [`ZxError::UnsupportedMode`] for
    /// character dithering in GigaScreen mode.
    pub fn validate(&self) -> Result<(), ZxError> {
        if self.dither == DitherAlgorithm::Character && self.colour_mode == ColourMode::GigaScreen
        {
            return Err(ZxError::UnsupportedMode {
                operation: "character dithering",
                mode: ColourMode::GigaScreen,
            });
        }
        if self.mono_ink > MAX_MONO_INDEX {
            return Err(ZxError::InvalidOption(format!(
                "mono-ink {} is out of range 0..={}",
                self.mono_ink, MAX_MONO_INDEX
            )));
        }
        if self.mono_paper > MAX_MONO_INDEX {
            return Err(ZxError::InvalidOption(format!(
                "mono-paper {} is out of range 0..={}",
                self.mono_paper, MAX_MONO_INDEX
            )));
        }
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(ZxError::InvalidOption(format!(
                "intensity {} must be a non-negative number",
                self.intensity
            )));
        }
        Ok(())
    }

    /// Whether the GigaScreen flicker reorder applies.
    pub fn reorders_screens(&self) -> bool {
        self.giga_strategy.is_mixed() && (self.export_screen || self.export_tape)
    }

    /// The mode the image is converted in. Character dithering always
    /// yields monochrome ink and paper.
    pub fn effective_mode(&self) -> ColourMode {
        if self.dither == DitherAlgorithm::Character {
            ColourMode::Monochrome
        } else {
            self.colour_mode
        }
    }

    /// Per-pixel quantizer for these settings.
    pub fn quantizer(&self) -> PixelQuantizer {
        PixelQuantizer::new(self.effective_mode(), self.prefer_detail, self.black_threshold)
    }

    /// Dither traversal settings.
    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .serpentine(self.serpentine)
            .constrained(self.constrained)
            .intensity(self.intensity)
    }
}
