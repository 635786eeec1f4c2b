//! Nearest-colour search.
//!
//! Distances are Manhattan (sum of absolute channel differences). The two
//! search variants resolve ties differently and both rules are load-bearing:
//!
//! - [`nearest`] keeps the **last** of equally close entries (`<=`)
//! - [`nearest_excluding`] and [`closest_distance`] keep the **first** (`<`)

use crate::color::Rgb;
use crate::mode::ColourMode;
use crate::palette::{self, BLACK, BRIGHT, WHITE};

/// Channel midpoint used by the prefer-detail heuristic.
const DETAIL_MIDPOINT: u8 = 127;

/// Default channel-sum threshold for monochrome mode.
pub const DEFAULT_BLACK_THRESHOLD: u32 = 384;

/// Find the palette entry closest to `c`.
///
/// With `prefer_detail`, a pixel whose channels are all below the midpoint
/// snaps to the palette's darkest entry and one whose channels are all above
/// it snaps to the lightest. An empty palette returns `c` unchanged.
///
/// # Example
///
/// ```
/// use zx_dither::{quantize, palette, Rgb};
///
/// let c = quantize::nearest(Rgb::new(0xF0, 0x10, 0x10), &palette::ALL, false);
/// assert_eq!(c, Rgb::new(0xFF, 0, 0));
/// ```
pub fn nearest(c: Rgb, palette: &[Rgb], prefer_detail: bool) -> Rgb {
    if prefer_detail {
        if c.r < DETAIL_MIDPOINT && c.g < DETAIL_MIDPOINT && c.b < DETAIL_MIDPOINT {
            return nearest(BLACK, palette, false);
        }
        if c.r > DETAIL_MIDPOINT && c.g > DETAIL_MIDPOINT && c.b > DETAIL_MIDPOINT {
            return nearest(WHITE, palette, false);
        }
    }

    let mut best = c;
    let mut best_distance = u32::MAX;
    for &p in palette {
        let d = c.manhattan(p);
        if d <= best_distance {
            best_distance = d;
            best = p;
        }
    }
    best
}

/// Find the palette entry closest to `c`, skipping `exclude`.
///
/// Falls back to the palette's first entry when every entry is excluded.
/// An empty palette returns `c` unchanged.
pub fn nearest_excluding(c: Rgb, palette: &[Rgb], exclude: Rgb) -> Rgb {
    let Some(&first) = palette.first() else {
        return c;
    };
    let mut best = first;
    let mut best_distance = u32::MAX;
    for &p in palette {
        if p == exclude {
            continue;
        }
        let d = c.manhattan(p);
        if d < best_distance {
            best_distance = d;
            best = p;
        }
    }
    best
}

/// Smallest distance from `c` to any palette entry.
///
/// Returns `u32::MAX` for an empty palette.
#[inline]
pub fn closest_distance(c: Rgb, palette: &[Rgb]) -> u32 {
    palette
        .iter()
        .map(|&p| c.manhattan(p))
        .fold(u32::MAX, |best, d| if d < best { d } else { best })
}

/// Per-pixel quantizer for one colour mode.
///
/// Error diffusion and ordered dithering both quantize through this, so the
/// two families agree exactly on what each colour mode means.
#[derive(Debug, Clone, Copy)]
pub struct PixelQuantizer {
    mode: ColourMode,
    prefer_detail: bool,
    black_threshold: u32,
}

impl PixelQuantizer {
    /// Create a quantizer for `mode`.
    pub fn new(mode: ColourMode, prefer_detail: bool, black_threshold: u32) -> Self {
        Self {
            mode,
            prefer_detail,
            black_threshold,
        }
    }

    /// The colour mode this quantizer implements.
    #[inline]
    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    /// Channel-sum threshold below which monochrome picks black.
    #[inline]
    pub fn black_threshold(&self) -> u32 {
        self.black_threshold
    }

    /// Quantize one colour.
    pub fn quantize(&self, c: Rgb) -> Rgb {
        match self.mode {
            ColourMode::FullPalette => nearest(c, &palette::ALL, self.prefer_detail),
            ColourMode::GigaScreen => nearest(c, palette::gigascreen(), self.prefer_detail),
            ColourMode::Monochrome => {
                if c.channel_sum() < self.black_threshold {
                    BLACK
                } else {
                    BRIGHT[7]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ALL, HALF_BRIGHT};

    #[test]
    fn test_nearest_tie_goes_to_later_entry() {
        // Equidistant from both entries.
        let palette = [Rgb::new(0, 0, 0), Rgb::new(20, 0, 0)];
        assert_eq!(nearest(Rgb::new(10, 0, 0), &palette, false), palette[1]);
    }

    #[test]
    fn test_excluding_tie_goes_to_first_entry() {
        let palette = [Rgb::new(0, 0, 0), Rgb::new(20, 0, 0), Rgb::new(99, 99, 99)];
        let c = nearest_excluding(Rgb::new(10, 0, 0), &palette, palette[2]);
        assert_eq!(c, palette[0]);
    }

    #[test]
    fn test_excluding_skips_colour() {
        let c = nearest_excluding(HALF_BRIGHT[1], &HALF_BRIGHT, HALF_BRIGHT[1]);
        assert_ne!(c, HALF_BRIGHT[1]);
    }

    #[test]
    fn test_excluding_everything_returns_first() {
        let palette = [Rgb::new(5, 5, 5)];
        assert_eq!(nearest_excluding(Rgb::new(200, 0, 0), &palette, palette[0]), palette[0]);
    }

    #[test]
    fn test_empty_palette_returns_input() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(nearest(c, &[], false), c);
        assert_eq!(nearest_excluding(c, &[], c), c);
        assert_eq!(closest_distance(c, &[]), u32::MAX);
    }

    #[test]
    fn test_prefer_detail_extremes() {
        // Dark blue would normally be half-bright blue.
        let dark_blue = Rgb::new(0, 0, 120);
        assert_eq!(nearest(dark_blue, &ALL, false), HALF_BRIGHT[1]);
        assert_eq!(nearest(dark_blue, &ALL, true), BLACK);

        let pale_yellow = Rgb::new(200, 200, 140);
        assert_eq!(nearest(pale_yellow, &ALL, true), WHITE);

        // Mixed channels fall through to the plain search.
        let mixed = Rgb::new(200, 10, 10);
        assert_eq!(nearest(mixed, &ALL, true), nearest(mixed, &ALL, false));
    }

    #[test]
    fn test_prefer_detail_uses_palette_extremes() {
        let white_in_half = nearest(Rgb::new(250, 250, 250), &HALF_BRIGHT, true);
        assert_eq!(white_in_half, HALF_BRIGHT[7]);
    }

    #[test]
    fn test_closest_distance() {
        assert_eq!(closest_distance(Rgb::new(0xCD, 0, 0), &ALL), 0);
        assert_eq!(closest_distance(Rgb::new(0xD0, 0, 0), &ALL), 3);
    }

    #[test]
    fn test_monochrome_threshold() {
        let q = PixelQuantizer::new(ColourMode::Monochrome, false, DEFAULT_BLACK_THRESHOLD);
        assert_eq!(q.quantize(Rgb::new(127, 128, 128)), BLACK);
        assert_eq!(q.quantize(Rgb::new(128, 128, 128)), WHITE);
    }

    #[test]
    fn test_modes_produce_palette_members() {
        let full = PixelQuantizer::new(ColourMode::FullPalette, false, DEFAULT_BLACK_THRESHOLD);
        let giga = PixelQuantizer::new(ColourMode::GigaScreen, false, DEFAULT_BLACK_THRESHOLD);
        let c = Rgb::new(90, 160, 30);
        assert!(ALL.contains(&full.quantize(c)));
        assert!(palette::gigascreen().contains(&giga.quantize(c)));
    }
}
