//! Dithering algorithms.
//!
//! Three families share the [`Dither`] trait:
//!
//! - **Error diffusion** ([`ErrorDiffusion`]): sequential, pushes each
//!   pixel's quantization error to unvisited neighbours
//! - **Ordered** ([`OrderedDither`]): stateless threshold matrices applied
//!   per tile
//! - **Character** ([`CharacterDither`]): monochrome Stucki, then each block
//!   becomes the closest ROM glyph
//!
//! The first two quantize through a [`PixelQuantizer`], so the colour mode
//! decides which palette the pixels land in.

mod character;
mod error_diffusion;
mod kernel;
mod options;
mod ordered;

pub use character::CharacterDither;
pub use error_diffusion::ErrorDiffusion;
pub(crate) use error_diffusion::spread_error;
pub use kernel::*;
pub use options::DitherOptions;
pub use ordered::*;

use serde::{Deserialize, Serialize};

use crate::named::Named;
use crate::quantize::PixelQuantizer;
use crate::raster::Raster;

/// Trait for dithering algorithms.
///
/// Implementors rewrite the raster in place so that every visited pixel is
/// a member of the quantizer's palette.
pub trait Dither {
    /// Dither `raster` in place.
    fn dither(&self, raster: &mut Raster, quantizer: &PixelQuantizer, options: &DitherOptions);
}

/// Which family an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherFamily {
    /// Sequential error diffusion.
    ErrorDiffusion,
    /// Per-tile threshold matrix.
    Ordered,
    /// Glyph matching on a monochrome pre-dither.
    Character,
}

/// Dither algorithm selection.
///
/// # Example
///
/// ```
/// use zx_dither::{DitherAlgorithm, DitherFamily};
///
/// assert_eq!(DitherAlgorithm::default(), DitherAlgorithm::Atkinson);
/// assert_eq!(DitherAlgorithm::MagicSquare.family(), DitherFamily::Ordered);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation).
    FloydSteinberg,
    /// Burkes error diffusion (100%, 2 rows).
    Burkes,
    /// Stucki error diffusion (100%, 3 rows).
    Stucki,
    /// Jarvis-Judice-Ninke error diffusion (100%, 3 rows).
    JarvisJudiceNinke,
    /// Atkinson error diffusion (75% propagation).
    #[default]
    Atkinson,
    /// Atkinson footprint at half weight (37.5% propagation).
    LowErrorAtkinson,
    /// Sierra Lite error diffusion (100%, 3 neighbours).
    SierraFilterLight,
    /// Plain nearest-colour quantization.
    NoDither,
    /// 2×1 threshold pair.
    BayerTwoByOne,
    /// 2×2 Bayer matrix.
    BayerTwoByTwo,
    /// 4×4 Bayer variant.
    Omega,
    /// 4×4 Bayer matrix.
    BayerFourByFour,
    /// 8×8 Bayer matrix.
    BayerEightByEight,
    /// 2×2 lightness ramp.
    Lightness,
    /// 4×4 magic square.
    MagicSquare,
    /// 4×4 Nasik magic square.
    NasikMagicSquare,
    /// ROM character set glyphs over a monochrome Stucki pre-dither.
    Character,
}

impl DitherAlgorithm {
    /// The family this algorithm belongs to.
    pub fn family(self) -> DitherFamily {
        if self == Self::Character {
            DitherFamily::Character
        } else if self.kernel().is_some() {
            DitherFamily::ErrorDiffusion
        } else {
            DitherFamily::Ordered
        }
    }

    /// Diffusion kernel, for error-diffusion algorithms.
    pub fn kernel(self) -> Option<&'static Kernel> {
        match self {
            Self::FloydSteinberg => Some(&FLOYD_STEINBERG),
            Self::Burkes => Some(&BURKES),
            Self::Stucki => Some(&STUCKI),
            Self::JarvisJudiceNinke => Some(&JARVIS_JUDICE_NINKE),
            Self::Atkinson => Some(&ATKINSON),
            Self::LowErrorAtkinson => Some(&LOW_ERROR_ATKINSON),
            Self::SierraFilterLight => Some(&SIERRA_FILTER_LIGHT),
            Self::NoDither => Some(&NO_DITHER),
            Self::BayerTwoByOne
            | Self::BayerTwoByTwo
            | Self::Omega
            | Self::BayerFourByFour
            | Self::BayerEightByEight
            | Self::Lightness
            | Self::MagicSquare
            | Self::NasikMagicSquare
            | Self::Character => None,
        }
    }

    /// Threshold matrix, for ordered algorithms.
    pub fn matrix(self) -> Option<&'static ThresholdMatrix> {
        match self {
            Self::BayerTwoByOne => Some(&BAYER_TWO_BY_ONE),
            Self::BayerTwoByTwo => Some(&BAYER_TWO_BY_TWO),
            Self::Omega => Some(&OMEGA),
            Self::BayerFourByFour => Some(&BAYER_FOUR_BY_FOUR),
            Self::BayerEightByEight => Some(&BAYER_EIGHT_BY_EIGHT),
            Self::Lightness => Some(&LIGHTNESS),
            Self::MagicSquare => Some(&MAGIC_SQUARE),
            Self::NasikMagicSquare => Some(&NASIK_MAGIC_SQUARE),
            Self::FloydSteinberg
            | Self::Burkes
            | Self::Stucki
            | Self::JarvisJudiceNinke
            | Self::Atkinson
            | Self::LowErrorAtkinson
            | Self::SierraFilterLight
            | Self::NoDither
            | Self::Character => None,
        }
    }

    /// The ditherer implementing this algorithm.
    ///
    /// # Panics
    ///
    /// Panics if a table-driven algorithm has no kernel or matrix.
    pub fn ditherer(self) -> Box<dyn Dither> {
        if self == Self::Character {
            return Box::new(CharacterDither::new());
        }
        match (self.kernel(), self.matrix()) {
            (Some(kernel), None) => Box::new(ErrorDiffusion::new(kernel)),
            (None, Some(matrix)) => Box::new(OrderedDither::new(matrix)),
            _ => unreachable!("{self} needs exactly one of a kernel or a matrix"),
        }
    }
}

impl Named for DitherAlgorithm {
    const ALL: &'static [Self] = &[
        Self::FloydSteinberg,
        Self::Burkes,
        Self::Stucki,
        Self::JarvisJudiceNinke,
        Self::Atkinson,
        Self::LowErrorAtkinson,
        Self::SierraFilterLight,
        Self::NoDither,
        Self::BayerTwoByOne,
        Self::BayerTwoByTwo,
        Self::Omega,
        Self::BayerFourByFour,
        Self::BayerEightByEight,
        Self::Lightness,
        Self::MagicSquare,
        Self::NasikMagicSquare,
        Self::Character,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Burkes => "burkes",
            Self::Stucki => "stucki",
            Self::JarvisJudiceNinke => "jarvis-judice-ninke",
            Self::Atkinson => "atkinson",
            Self::LowErrorAtkinson => "low-error-atkinson",
            Self::SierraFilterLight => "sierra-filter-light",
            Self::NoDither => "no-dither",
            Self::BayerTwoByOne => "bayer-two-by-one",
            Self::BayerTwoByTwo => "bayer-two-by-two",
            Self::Omega => "omega",
            Self::BayerFourByFour => "bayer-four-by-four",
            Self::BayerEightByEight => "bayer-eight-by-eight",
            Self::Lightness => "lightness",
            Self::MagicSquare => "magic-square",
            Self::NasikMagicSquare => "nasik-magic-square",
            Self::Character => "character",
        }
    }
}

impl std::fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_at_most_one_table() {
        for &algo in DitherAlgorithm::ALL {
            assert!(
                !(algo.kernel().is_some() && algo.matrix().is_some()),
                "{algo} must not have both a kernel and a matrix"
            );
        }
    }

    #[test]
    fn test_only_character_has_no_table() {
        let tableless: Vec<_> = DitherAlgorithm::ALL
            .iter()
            .filter(|a| a.kernel().is_none() && a.matrix().is_none())
            .copied()
            .collect();
        assert_eq!(tableless, vec![DitherAlgorithm::Character]);
        assert_eq!(DitherAlgorithm::Character.family(), DitherFamily::Character);
    }

    #[test]
    fn test_every_algorithm_builds_a_ditherer() {
        let quantizer = PixelQuantizer::new(
            crate::mode::ColourMode::FullPalette,
            false,
            crate::quantize::DEFAULT_BLACK_THRESHOLD,
        );
        for &algo in DitherAlgorithm::ALL {
            let mut raster = Raster::new(8, 8, crate::color::Rgb::new(90, 90, 90));
            algo.ditherer()
                .dither(&mut raster, &quantizer, &DitherOptions::default());
            assert!(
                raster.pixels().iter().all(|p| crate::palette::ALL.contains(p)),
                "{algo} left unquantized pixels"
            );
        }
    }

    #[test]
    fn test_families() {
        let diffusion = DitherAlgorithm::ALL
            .iter()
            .filter(|a| a.family() == DitherFamily::ErrorDiffusion)
            .count();
        assert_eq!(diffusion, 8);
        assert_eq!(DitherAlgorithm::NoDither.family(), DitherFamily::ErrorDiffusion);
        assert_eq!(DitherAlgorithm::BayerTwoByOne.family(), DitherFamily::Ordered);
    }

    #[test]
    fn test_names_match_serde() {
        for &algo in DitherAlgorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{}\"", algo.name()));
        }
    }
}
