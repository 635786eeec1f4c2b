//! Unified error type for the zx-dither public API.
//!
//! [`ZxError`] wraps every failure the conversion pipeline can report into a
//! single enum for convenient `?` propagation in application code.

use crate::mode::ColourMode;
use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the zx-dither public API.
///
/// # Example
///
/// ```
/// use zx_dither::{palette, Rgb, ZxError};
///
/// fn code_of(c: Rgb) -> Result<u8, ZxError> {
///     Ok(palette::colour_code(c)?)
/// }
///
/// assert!(code_of(Rgb::new(1, 2, 3)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ZxError {
    /// A pixel colour has no Spectrum colour index.
    Palette(PaletteError),
    /// An operation was asked to run in a colour mode it cannot handle.
    UnsupportedMode {
        /// What was attempted
        operation: &'static str,
        /// The mode it was attempted in
        mode: ColourMode,
    },
    /// The raster has the wrong size for the operation.
    InvalidDimensions {
        /// Actual width
        width: usize,
        /// Actual height
        height: usize,
        /// Required width
        expected_width: usize,
        /// Required height
        expected_height: usize,
    },
    /// A configuration value is out of range.
    InvalidOption(String),
}

impl fmt::Display for ZxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZxError::Palette(err) => write!(f, "palette error: {}", err),
            ZxError::UnsupportedMode { operation, mode } => {
                write!(f, "{} is not supported in {} mode", operation, mode)
            }
            ZxError::InvalidDimensions {
                width,
                height,
                expected_width,
                expected_height,
            } => write!(
                f,
                "image is {}x{}, expected {}x{}",
                width, height, expected_width, expected_height
            ),
            ZxError::InvalidOption(msg) => write!(f, "invalid option: {}", msg),
        }
    }
}

impl std::error::Error for ZxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZxError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for ZxError {
    fn from(err: PaletteError) -> Self {
        ZxError::Palette(err)
    }
}
