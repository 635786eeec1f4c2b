//! GigaScreen attribute strategies and their precomputed palettes.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::named::Named;
use crate::palette::{BLACK, BRIGHT, HALF_BRIGHT};

use super::GigaScreenAttribute;

/// Which brightness subset each of the two screens draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GigaScreenStrategy {
    /// Both screens half-bright.
    #[default]
    HalfBright,
    /// Both screens bright.
    Bright,
    /// Screen 1 half-bright, screen 2 bright.
    Mixed,
}

static HALF_BRIGHT_PALETTE: LazyLock<Vec<GigaScreenAttribute>> =
    LazyLock::new(|| build_palette(&HALF_BRIGHT, &HALF_BRIGHT));
static BRIGHT_PALETTE: LazyLock<Vec<GigaScreenAttribute>> =
    LazyLock::new(|| build_palette(&BRIGHT, &BRIGHT));
static MIXED_PALETTE: LazyLock<Vec<GigaScreenAttribute>> =
    LazyLock::new(|| build_palette(&HALF_BRIGHT, &BRIGHT));

/// Unordered (ink, paper) pairs with `ink <= paper` by index, including
/// equal pairs.
fn screen_pairs(colours: &[Rgb]) -> Vec<(Rgb, Rgb)> {
    let mut pairs = Vec::with_capacity(colours.len() * (colours.len() + 1) / 2);
    for (i, &ink) in colours.iter().enumerate() {
        for &paper in &colours[i..] {
            pairs.push((ink, paper));
        }
    }
    pairs
}

/// Every screen-1 pair crossed with every screen-2 pair, dropping entries
/// whose distinct combined colours repeat an earlier entry's.
fn build_palette(screen1: &[Rgb], screen2: &[Rgb]) -> Vec<GigaScreenAttribute> {
    let pairs1 = screen_pairs(screen1);
    let pairs2 = screen_pairs(screen2);
    let mut seen: HashSet<Vec<Rgb>> = HashSet::new();
    let mut palette = Vec::new();
    for &(ink1, paper1) in &pairs1 {
        for &(ink2, paper2) in &pairs2 {
            let attr = GigaScreenAttribute::new(ink1, paper1, ink2, paper2);
            if seen.insert(attr.unique_colours()) {
                palette.push(attr);
            }
        }
    }
    palette
}

impl GigaScreenStrategy {
    /// The strategy's attribute palette, built on first use.
    pub fn palette(self) -> &'static [GigaScreenAttribute] {
        match self {
            Self::HalfBright => &HALF_BRIGHT_PALETTE,
            Self::Bright => &BRIGHT_PALETTE,
            Self::Mixed => &MIXED_PALETTE,
        }
    }

    /// Whether the two screens use different brightness subsets.
    #[inline]
    pub fn is_mixed(self) -> bool {
        self == Self::Mixed
    }

    /// BRIGHT bit for one screen's block.
    ///
    /// Under [`Mixed`](Self::Mixed) the bit follows the pixels, so it stays
    /// right after blocks are swapped between screens.
    pub fn bright_flag(self, block: &[Rgb]) -> bool {
        match self {
            Self::HalfBright => false,
            Self::Bright => true,
            Self::Mixed => block.iter().any(|&c| c != BLACK && BRIGHT.contains(&c)),
        }
    }
}

impl Named for GigaScreenStrategy {
    const ALL: &'static [Self] = &[Self::HalfBright, Self::Bright, Self::Mixed];

    fn name(self) -> &'static str {
        match self {
            Self::HalfBright => "half-bright",
            Self::Bright => "bright",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for GigaScreenStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_pairs_count() {
        let pairs = screen_pairs(&HALF_BRIGHT);
        assert_eq!(pairs.len(), 36);
        assert_eq!(pairs[0], (HALF_BRIGHT[0], HALF_BRIGHT[0]));
        assert_eq!(pairs[35], (HALF_BRIGHT[7], HALF_BRIGHT[7]));
    }

    #[test]
    fn test_palettes_have_unique_colour_sets() {
        for &strategy in GigaScreenStrategy::ALL {
            let palette = strategy.palette();
            assert!(!palette.is_empty());
            assert!(palette.len() <= 36 * 36);
            let sets: HashSet<Vec<Rgb>> = palette.iter().map(|a| a.unique_colours()).collect();
            assert_eq!(sets.len(), palette.len(), "{strategy} has duplicate entries");
        }
    }

    #[test]
    fn test_palette_screens_use_strategy_subsets() {
        for combo in GigaScreenStrategy::Mixed.palette().iter().flat_map(|a| a.combos()) {
            assert!(HALF_BRIGHT.contains(&combo.screen1));
            assert!(BRIGHT.contains(&combo.screen2));
        }
        for combo in GigaScreenStrategy::Bright.palette().iter().flat_map(|a| a.combos()) {
            assert!(BRIGHT.contains(&combo.screen1) && BRIGHT.contains(&combo.screen2));
        }
    }

    #[test]
    fn test_palette_is_memoized() {
        let a = GigaScreenStrategy::HalfBright.palette();
        let b = GigaScreenStrategy::HalfBright.palette();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_bright_flag() {
        let half = [HALF_BRIGHT[1], BLACK];
        let bright = [BLACK, BRIGHT[1]];
        assert!(!GigaScreenStrategy::HalfBright.bright_flag(&bright));
        assert!(GigaScreenStrategy::Bright.bright_flag(&half));
        assert!(!GigaScreenStrategy::Mixed.bright_flag(&half));
        assert!(GigaScreenStrategy::Mixed.bright_flag(&bright));
        assert!(!GigaScreenStrategy::Mixed.bright_flag(&[BLACK; 4]));
    }
}
