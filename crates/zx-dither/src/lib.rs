#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! zx-dither: ZX Spectrum screen conversion
//!
//! This library turns an RGB raster into an image the Spectrum can show:
//! colours drawn from its fixed palette, two colours per 8×8 attribute
//! block, and the 6912-byte SCR memory layout.
//!
//! # Quick Start
//!
//! The [`Converter`] builder is the primary entry point:
//!
//! ```
//! use zx_dither::{Converter, DitherAlgorithm, Raster, Rgb};
//!
//! let converter = Converter::default().dither(DitherAlgorithm::BayerFourByFour);
//!
//! let input = Raster::new(256, 192, Rgb::new(90, 160, 30));
//! let conversion = converter.process(&input).unwrap();
//! let scr = converter.encode_scr(&conversion).unwrap();
//!
//! assert_eq!(scr.len(), 6912);
//! ```
//!
//! # Colour Modes
//!
//! | Mode | Pixel palette | Post-pass |
//! |------|---------------|-----------|
//! | [`ColourMode::FullPalette`] | 15 primaries | two colours per block via [`AttributeStrategy`] |
//! | [`ColourMode::GigaScreen`] | averages of two primaries | split into two screens via [`GigaScreenStrategy`] |
//! | [`ColourMode::Monochrome`] | black/white by channel sum | tint with bright ink and paper |
//!
//! # Dithering Algorithms
//!
//! [`DitherAlgorithm`] selects one of three families:
//!
//! - Error diffusion: Floyd-Steinberg, Burkes, Stucki, Jarvis-Judice-Ninke,
//!   Atkinson (default), low-error Atkinson, Sierra Lite, or none
//! - Ordered: Bayer 2×1, 2×2, 4×4 and 8×8, Omega, lightness, magic square
//!   and Nasik magic square
//! - Character: each block becomes a ROM glyph in monochrome ink and paper
//!
//! Error diffusion visits pixels strictly in raster order (or serpentine),
//! so it is single-threaded by construction.
//!
//! # Tie-breaking
//!
//! Output is bit-exact, so equal-distance ties matter. The main
//! nearest-colour search keeps the last equally close palette entry, while
//! the exclusion search and GigaScreen block scoring keep the first. See
//! [`quantize`].
//!
//! # Modules
//!
//! - [`palette`]: colour tables and attribute colour codes
//! - [`quantize`]: nearest-colour search
//! - [`dither`]: error diffusion and ordered dithering
//! - [`attribute`]: per-block two-colour reduction
//! - [`gigascreen`]: two-screen colour mixing
//! - [`scr`]: SCR encoding and decoding
//! - [`charset`]: ROM glyphs, glyph matching and text dumps
//! - [`preprocess`]: scale, contrast, saturation and brightness

pub mod api;
pub mod attribute;
pub mod charset;
pub mod color;
pub mod dither;
pub mod gigascreen;
pub mod mode;
pub mod named;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod quantize;
pub mod raster;
pub mod scr;


pub use api::{ConversionOptions, Converter, ZxError};
pub use attribute::AttributeStrategy;
pub use color::{Hsb, Rgb};
pub use dither::{Dither, DitherAlgorithm, DitherFamily, DitherOptions};
pub use gigascreen::{GigaScreenStrategy, HsbOption};
pub use mode::ColourMode;
pub use named::Named;
pub use output::{Conversion, ResultImage, ResultKind};
pub use palette::PaletteError;
pub use preprocess::{PreprocessOptions, Preprocessor, Scaling};
pub use quantize::PixelQuantizer;
pub use raster::{Raster, BLOCK_SIZE};
pub use scr::{BrightRule, SCR_SIZE};
