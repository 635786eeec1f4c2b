//! 8-bit RGB colour type
//!
//! Every stage of the pipeline works on whole 8-bit channels. Alpha from
//! 32-bit ARGB input is dropped on the way in.

use std::fmt;

/// A colour with 8-bit red, green and blue channels.
///
/// Pixels, palette entries and attribute colours all use this type. Two
/// colours are "the same" only when all three channels match exactly, which
/// is what the attribute and SCR stages rely on when comparing a pixel to a
/// block's ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a packed `0xAARRGGBB` value, ignoring alpha.
    ///
    /// # Example
    /// ```
    /// use zx_dither::Rgb;
    /// assert_eq!(Rgb::from_u32(0xFF00CD00), Rgb::new(0, 0xCD, 0));
    /// ```
    #[inline]
    pub const fn from_u32(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Pack the colour as `0x00RRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Create a colour from signed channel values, clamping each to 0..=255.
    #[inline]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Channels as an array, in R, G, B order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Sum of absolute per-channel differences.
    ///
    /// This is the only distance metric used for palette matching. It is
    /// deliberately unweighted.
    #[inline]
    pub fn manhattan(self, other: Rgb) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }

    /// Sum of the three channels (0..=765).
    #[inline]
    pub fn channel_sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Per-channel integer average, truncating: `(a + b) / 2`.
    #[inline]
    pub fn average(self, other: Rgb) -> Rgb {
        Rgb {
            r: ((self.r as u16 + other.r as u16) / 2) as u8,
            g: ((self.g as u16 + other.g as u16) / 2) as u8,
            b: ((self.b as u16 + other.b as u16) / 2) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}
