//! Spectrum palettes and colour indexing
//!
//! The fixed colour tables every stage quantizes against, plus the mapping
//! from colours to the 3-bit codes stored in attribute bytes.

mod error;
mod index;
mod tables;

pub use error::PaletteError;
pub use index::{colour_code, colour_from_code, spectrum_index, COLOUR_CODES};
pub use tables::{
    gigascreen, is_bright, is_half_bright, ALL, BLACK, BRIGHT, HALF_BRIGHT, REDUCED_HALF_BRIGHT,
    WHITE,
};
