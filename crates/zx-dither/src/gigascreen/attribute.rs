//! Four-colour GigaScreen attribute entries.

use crate::color::Rgb;

/// One displayed colour and the two screen colours that produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourCombo {
    /// Per-channel average of the two screen colours.
    pub combined: Rgb,
    /// Colour shown on screen 1.
    pub screen1: Rgb,
    /// Colour shown on screen 2.
    pub screen2: Rgb,
}

impl ColourCombo {
    /// Pair two screen colours.
    pub fn new(screen1: Rgb, screen2: Rgb) -> Self {
        Self {
            combined: screen1.average(screen2),
            screen1,
            screen2,
        }
    }
}

/// An attribute block across two screens: each screen contributes an ink
/// and a paper, giving four combined colours.
///
/// # Example
///
/// ```
/// use zx_dither::gigascreen::GigaScreenAttribute;
/// use zx_dither::palette::{BLACK, WHITE};
///
/// let attr = GigaScreenAttribute::new(BLACK, WHITE, BLACK, WHITE);
/// assert_eq!(attr.unique_colours().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GigaScreenAttribute {
    combos: [ColourCombo; 4],
}

impl GigaScreenAttribute {
    /// Build the four combinations `(ink1, ink2)`, `(ink1, paper2)`,
    /// `(paper1, ink2)` and `(paper1, paper2)`, in that order.
    pub fn new(ink1: Rgb, paper1: Rgb, ink2: Rgb, paper2: Rgb) -> Self {
        Self {
            combos: [
                ColourCombo::new(ink1, ink2),
                ColourCombo::new(ink1, paper2),
                ColourCombo::new(paper1, ink2),
                ColourCombo::new(paper1, paper2),
            ],
        }
    }

    /// The four combinations in construction order.
    #[inline]
    pub fn combos(&self) -> &[ColourCombo; 4] {
        &self.combos
    }

    /// The four combined colours in construction order.
    pub fn palette(&self) -> [Rgb; 4] {
        self.combos.map(|c| c.combined)
    }

    /// Distinct combined colours, sorted.
    pub fn unique_colours(&self) -> Vec<Rgb> {
        let mut colours = self.palette().to_vec();
        colours.sort_unstable();
        colours.dedup();
        colours
    }

    /// Sum over `block` of each pixel's distance to the nearest combined
    /// colour. Lower is better.
    pub fn block_score(&self, block: &[Rgb]) -> u32 {
        let palette = self.palette();
        block
            .iter()
            .map(|&p| crate::quantize::closest_distance(p, &palette))
            .sum()
    }

    /// The combination whose combined colour is nearest to `c`. The first
    /// of equally near combinations wins.
    pub fn closest_combo(&self, c: Rgb) -> &ColourCombo {
        let mut best = &self.combos[0];
        let mut best_distance = u32::MAX;
        for combo in &self.combos {
            let d = c.manhattan(combo.combined);
            if d < best_distance {
                best_distance = d;
                best = combo;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, BRIGHT, HALF_BRIGHT, WHITE};

    #[test]
    fn test_combo_order_and_averages() {
        let attr = GigaScreenAttribute::new(BLACK, WHITE, HALF_BRIGHT[2], BRIGHT[1]);
        let combos = attr.combos();
        assert_eq!((combos[0].screen1, combos[0].screen2), (BLACK, HALF_BRIGHT[2]));
        assert_eq!((combos[1].screen1, combos[1].screen2), (BLACK, BRIGHT[1]));
        assert_eq!((combos[2].screen1, combos[2].screen2), (WHITE, HALF_BRIGHT[2]));
        assert_eq!((combos[3].screen1, combos[3].screen2), (WHITE, BRIGHT[1]));
        assert_eq!(combos[0].combined, Rgb::new(0x66, 0, 0));
        assert_eq!(combos[3].combined, Rgb::new(0x7F, 0x7F, 0xFF));
    }

    #[test]
    fn test_block_score_zero_for_exact_colours() {
        let attr = GigaScreenAttribute::new(BLACK, WHITE, BLACK, WHITE);
        let grey = Rgb::new(0x7F, 0x7F, 0x7F);
        let block = [BLACK, WHITE, grey, grey];
        assert_eq!(attr.block_score(&block), 0);
        assert_eq!(attr.block_score(&[Rgb::new(0x80, 0x7F, 0x7F)]), 1);
    }

    #[test]
    fn test_closest_combo_ties_go_to_first() {
        // All four combos identical: the first must win.
        let attr = GigaScreenAttribute::new(BLACK, BLACK, BLACK, BLACK);
        let chosen = attr.closest_combo(WHITE);
        assert!(std::ptr::eq(chosen, &attr.combos()[0]));
    }
}
