//! Splitting a GigaScreen-dithered raster into two screens.

use crate::raster::{Raster, BLOCK_SIZE};

use super::{GigaScreenAttribute, GigaScreenStrategy};

/// The three rasters produced by [`combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GigaScreenOutput {
    /// What the viewer sees: the average of the two screens.
    pub combined: Raster,
    /// First screen.
    pub screen1: Raster,
    /// Second screen.
    pub screen2: Raster,
}

/// The palette entry with the lowest block score. The first of equally
/// scored entries wins; an empty palette yields `None`.
pub fn choose_attribute<'a>(
    block: &[crate::color::Rgb],
    palette: &'a [GigaScreenAttribute],
) -> Option<&'a GigaScreenAttribute> {
    let mut best = palette.first()?;
    let mut best_score = u32::MAX;
    for attr in palette {
        let score = attr.block_score(block);
        if score < best_score {
            best_score = score;
            best = attr;
        }
    }
    Some(best)
}

/// Fit each whole 8×8 block of `dithered` to the best attribute entry of
/// `strategy` and split it into two screens.
///
/// Pixels outside whole blocks are copied unchanged into all three rasters.
pub fn combine(dithered: &Raster, strategy: GigaScreenStrategy) -> GigaScreenOutput {
    let palette = strategy.palette();
    let mut combined = dithered.clone();
    let mut screen1 = dithered.clone();
    let mut screen2 = dithered.clone();

    for by in 0..dithered.blocks_y() {
        for bx in 0..dithered.blocks_x() {
            let block = dithered.block(bx, by);
            let Some(attr) = choose_attribute(&block, palette) else {
                continue;
            };

            for dy in 0..BLOCK_SIZE {
                for dx in 0..BLOCK_SIZE {
                    let (x, y) = (bx * BLOCK_SIZE + dx, by * BLOCK_SIZE + dy);
                    let combo = attr.closest_combo(block[dy * BLOCK_SIZE + dx]);
                    combined.set(x, y, combo.combined);
                    screen1.set(x, y, combo.screen1);
                    screen2.set(x, y, combo.screen2);
                }
            }
        }
    }

    GigaScreenOutput {
        combined,
        screen1,
        screen2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::{BLACK, BRIGHT, HALF_BRIGHT};

    #[test]
    fn test_combined_is_average_of_screens() {
        let mut raster = Raster::new(16, 8, Rgb::new(0x66, 0, 0));
        for y in 0..8 {
            raster.set(y, y, HALF_BRIGHT[7]);
        }
        let out = combine(&raster, GigaScreenStrategy::HalfBright);

        for (i, &c) in out.combined.pixels().iter().enumerate() {
            let s1 = out.screen1.pixels()[i];
            let s2 = out.screen2.pixels()[i];
            assert_eq!(c, s1.average(s2), "pixel {i}");
        }
    }

    #[test]
    fn test_exact_gigascreen_colour_reproduced() {
        // Half red averaged with black is one of the half-bright entries.
        let target = Rgb::new(0x66, 0, 0);
        let raster = Raster::new(8, 8, target);
        let out = combine(&raster, GigaScreenStrategy::HalfBright);
        assert!(out.combined.pixels().iter().all(|&p| p == target));
        let pair = (out.screen1.get(0, 0), out.screen2.get(0, 0));
        assert!(pair == (BLACK, HALF_BRIGHT[2]) || pair == (HALF_BRIGHT[2], BLACK));
    }

    #[test]
    fn test_screens_use_strategy_subsets() {
        let raster = Raster::new(8, 8, Rgb::new(90, 140, 200));
        let out = combine(&raster, GigaScreenStrategy::Mixed);
        assert!(out.screen1.pixels().iter().all(|c| HALF_BRIGHT.contains(c)));
        assert!(out.screen2.pixels().iter().all(|c| BRIGHT.contains(c)));
    }

    #[test]
    fn test_edge_pixels_copied() {
        let odd = Rgb::new(1, 2, 3);
        let raster = Raster::new(9, 8, odd);
        let out = combine(&raster, GigaScreenStrategy::Bright);
        for r in [&out.combined, &out.screen1, &out.screen2] {
            assert_eq!(r.get(8, 3), odd);
        }
    }

    #[test]
    fn test_choose_attribute_empty_palette() {
        assert!(choose_attribute(&[BLACK], &[]).is_none());
    }
}
