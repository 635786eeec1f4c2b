//! Platform colour indices and 3-bit colour codes.

use super::tables::ALL;
use super::PaletteError;
use crate::color::Rgb;

/// 3-bit ink/paper code for each entry of [`ALL`].
///
/// Bright entries share the code of their half-bright counterpart; the
/// BRIGHT attribute bit tells them apart.
pub const COLOUR_CODES: [u8; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 4, 5, 6, 7];

/// Position of `c` in [`ALL`] (0..=14).
///
/// # Errors
///
/// Returns [`PaletteError::Lookup`] when `c` is not a Spectrum colour.
pub fn spectrum_index(c: Rgb) -> Result<u8, PaletteError> {
    ALL.iter()
        .position(|&p| p == c)
        .map(|i| i as u8)
        .ok_or(PaletteError::Lookup { colour: c })
}

/// The 3-bit code written into an attribute byte for `c`.
///
/// # Errors
///
/// Returns [`PaletteError::Lookup`] when `c` is not a Spectrum colour.
pub fn colour_code(c: Rgb) -> Result<u8, PaletteError> {
    spectrum_index(c).map(|i| COLOUR_CODES[i as usize])
}

/// Decode a 3-bit code plus BRIGHT flag back into a colour.
///
/// Only the low three bits of `code` are used.
pub fn colour_from_code(code: u8, bright: bool) -> Rgb {
    let code = (code & 0x07) as usize;
    if bright {
        super::BRIGHT[code]
    } else {
        super::HALF_BRIGHT[code]
    }
}
