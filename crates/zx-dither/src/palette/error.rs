//! Error type for palette lookups.

use std::fmt;

use crate::color::Rgb;

/// Error returned when a colour cannot be mapped to a platform colour index.
///
/// Only colours from [`ALL`](super::ALL) have an index. Anything else reaching
/// the SCR encoder means an earlier stage produced an off-palette pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The colour is not one of the 15 Spectrum colours.
    Lookup {
        /// The colour that was looked up
        colour: Rgb,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Lookup { colour } => {
                write!(f, "colour {} is not a Spectrum palette colour", colour)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
