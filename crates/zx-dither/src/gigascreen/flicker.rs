//! Flicker-aware screen ordering.
//!
//! Swapping a block's two screens leaves the averaged image unchanged but
//! changes which colours the display shows first. The score is a sum of
//! HSB components over the block's colours.

use serde::{Deserialize, Serialize};

use crate::color::{Hsb, Rgb};
use crate::named::Named;
use crate::raster::Raster;

/// HSB component(s) the flicker score adds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HsbOption {
    /// Leave screen order alone.
    #[default]
    None,
    /// Hue only.
    Hue,
    /// Saturation only.
    Saturation,
    /// Brightness only.
    Brightness,
    /// Hue + saturation.
    HueSaturation,
    /// Hue + brightness.
    HueBrightness,
    /// Saturation + brightness.
    SaturationBrightness,
}

impl HsbOption {
    /// This option's contribution for one colour.
    pub fn weight(self, hsb: Hsb) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Hue => hsb.hue,
            Self::Saturation => hsb.saturation,
            Self::Brightness => hsb.brightness,
            Self::HueSaturation => hsb.hue + hsb.saturation,
            Self::HueBrightness => hsb.hue + hsb.brightness,
            Self::SaturationBrightness => hsb.saturation + hsb.brightness,
        }
    }
}

impl Named for HsbOption {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::HueSaturation,
        Self::HueBrightness,
        Self::SaturationBrightness,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
            Self::HueSaturation => "hue-saturation",
            Self::HueBrightness => "hue-brightness",
            Self::SaturationBrightness => "saturation-brightness",
        }
    }
}

impl std::fmt::Display for HsbOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Score of one screen block: `option`'s weight summed over the first four
/// distinct colours in raster order.
pub fn flicker_score(block: &[Rgb], option: HsbOption) -> f32 {
    let mut distinct: Vec<Rgb> = Vec::with_capacity(4);
    for &c in block {
        if !distinct.contains(&c) {
            distinct.push(c);
            if distinct.len() == 4 {
                break;
            }
        }
    }
    distinct.iter().map(|&c| option.weight(Hsb::from(c))).sum()
}

/// Swap whole blocks between the screens so the lower-scoring one is
/// screen 1. Ties keep the current order; [`HsbOption::None`] does nothing.
///
/// Returns the number of blocks swapped.
pub fn reorder(screen1: &mut Raster, screen2: &mut Raster, option: HsbOption) -> usize {
    if option == HsbOption::None {
        return 0;
    }
    let mut swapped = 0;
    for by in 0..screen1.blocks_y() {
        for bx in 0..screen1.blocks_x() {
            let block1 = screen1.block(bx, by);
            let block2 = screen2.block(bx, by);
            if flicker_score(&block2, option) < flicker_score(&block1, option) {
                screen1.set_block(bx, by, &block2);
                screen2.set_block(bx, by, &block1);
                swapped += 1;
            }
        }
    }
    swapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, BRIGHT, HALF_BRIGHT, WHITE};

    #[test]
    fn test_score_counts_first_four_distinct() {
        let block = [WHITE, WHITE, BLACK, WHITE];
        assert!((flicker_score(&block, HsbOption::Brightness) - 1.0).abs() < 1e-6);

        let five = [BRIGHT[1], BRIGHT[2], BRIGHT[3], BRIGHT[4], BRIGHT[5]];
        // Only four colours counted, each brightness 1.
        assert!((flicker_score(&five, HsbOption::Brightness) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_reorder_puts_lower_score_first() {
        let mut s1 = Raster::new(16, 8, BRIGHT[2]);
        let mut s2 = Raster::new(16, 8, HALF_BRIGHT[2]);
        // Second block: already in order.
        for y in 0..8 {
            for x in 8..16 {
                s1.set(x, y, HALF_BRIGHT[4]);
                s2.set(x, y, BRIGHT[4]);
            }
        }

        let swapped = reorder(&mut s1, &mut s2, HsbOption::Brightness);
        assert_eq!(swapped, 1);
        assert_eq!(s1.get(0, 0), HALF_BRIGHT[2]);
        assert_eq!(s2.get(0, 0), BRIGHT[2]);
        assert_eq!(s1.get(8, 0), HALF_BRIGHT[4]);
    }

    #[test]
    fn test_reorder_ties_and_none_keep_order() {
        let mut s1 = Raster::new(8, 8, BRIGHT[2]);
        let mut s2 = Raster::new(8, 8, BRIGHT[4]);
        // Same saturation and brightness.
        assert_eq!(reorder(&mut s1, &mut s2, HsbOption::SaturationBrightness), 0);
        assert_eq!(reorder(&mut s2, &mut s1, HsbOption::None), 0);
        assert_eq!(s1.get(0, 0), BRIGHT[2]);
    }

    #[test]
    fn test_reorder_preserves_average() {
        let mut s1 = Raster::new(8, 16, BRIGHT[6]);
        let mut s2 = Raster::new(8, 16, HALF_BRIGHT[1]);
        s1.set(3, 12, BLACK);
        let before: Vec<Rgb> = s1
            .pixels()
            .iter()
            .zip(s2.pixels())
            .map(|(a, &b)| a.average(b))
            .collect();

        reorder(&mut s1, &mut s2, HsbOption::Hue);

        let after: Vec<Rgb> = s1
            .pixels()
            .iter()
            .zip(s2.pixels())
            .map(|(a, &b)| a.average(b))
            .collect();
        assert_eq!(before, after);
    }
}
