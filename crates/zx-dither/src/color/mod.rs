//! Colour types.
//!
//! - [`Rgb`]: the 8-bit colour every stage reads and writes
//! - [`Hsb`]: hue/saturation/brightness view used for saturation tweaks
//!   and the GigaScreen flicker score

mod hsb;
mod rgb;

pub use hsb::Hsb;
pub use rgb::Rgb;
