//! Attribute favouritism strategies.
//!
//! A block's two colours share one BRIGHT bit, so both must come from the
//! same subset. Each strategy decides which subset wins when they don't.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::named::Named;
use crate::palette::{is_bright, BRIGHT, HALF_BRIGHT, REDUCED_HALF_BRIGHT};
use crate::quantize::{nearest, nearest_excluding};

/// Rule for reconciling a block's two colours into one brightness subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeStrategy {
    /// On disagreement, promote the half-bright colour.
    FavourBright,
    /// On disagreement, demote the bright colour.
    #[default]
    FavourHalfBright,
    /// On disagreement, the more popular colour's subset wins.
    FavourMostPopular,
    /// Always remap both colours into the bright subset.
    ForceBright,
    /// Always remap both colours into the half-bright subset.
    ForceHalfBright,
    /// Always remap both colours into the five-colour reduced subset.
    ForceReducedHalfBright,
}

impl AttributeStrategy {
    /// Correct a (most popular, second most popular) pair.
    ///
    /// Favour rules only act when the colours differ and sit in different
    /// subsets; force rules always remap.
    pub fn enforce(self, popular: Rgb, second: Rgb, prefer_detail: bool) -> (Rgb, Rgb) {
        let pop_bright = is_bright(popular);
        let sec_bright = is_bright(second);
        let disagree = pop_bright != sec_bright && popular != second;

        match self {
            Self::FavourBright if disagree => {
                if sec_bright {
                    (nearest(popular, &BRIGHT, prefer_detail), second)
                } else {
                    (popular, nearest(second, &BRIGHT, prefer_detail))
                }
            }
            Self::FavourHalfBright if disagree => {
                if sec_bright {
                    (popular, nearest(second, &HALF_BRIGHT, prefer_detail))
                } else {
                    (nearest(popular, &HALF_BRIGHT, prefer_detail), second)
                }
            }
            Self::FavourMostPopular if disagree => {
                if pop_bright {
                    (popular, nearest(second, &BRIGHT, prefer_detail))
                } else {
                    (popular, nearest_excluding(second, &HALF_BRIGHT, popular))
                }
            }
            Self::ForceBright => (
                nearest(popular, &BRIGHT, prefer_detail),
                nearest(second, &BRIGHT, prefer_detail),
            ),
            Self::ForceHalfBright => (
                nearest(popular, &HALF_BRIGHT, prefer_detail),
                nearest(second, &HALF_BRIGHT, prefer_detail),
            ),
            Self::ForceReducedHalfBright => (
                nearest(popular, &REDUCED_HALF_BRIGHT, prefer_detail),
                nearest(second, &REDUCED_HALF_BRIGHT, prefer_detail),
            ),
            _ => (popular, second),
        }
    }

    /// Whether a block holding `first` and `second` gets the BRIGHT bit.
    pub fn is_bright_set(self, first: Rgb, second: Rgb) -> bool {
        let first_bright = is_bright(first);
        let second_bright = is_bright(second);
        let disagree = first_bright != second_bright && first != second;

        match self {
            Self::FavourBright if disagree => true,
            Self::FavourHalfBright if disagree => false,
            Self::FavourMostPopular if disagree => first_bright,
            Self::ForceBright => true,
            Self::ForceHalfBright | Self::ForceReducedHalfBright => false,
            _ => first_bright && second_bright,
        }
    }
}

impl Named for AttributeStrategy {
    const ALL: &'static [Self] = &[
        Self::FavourBright,
        Self::FavourHalfBright,
        Self::FavourMostPopular,
        Self::ForceBright,
        Self::ForceHalfBright,
        Self::ForceReducedHalfBright,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::FavourBright => "favour-bright",
            Self::FavourHalfBright => "favour-half-bright",
            Self::FavourMostPopular => "favour-most-popular",
            Self::ForceBright => "force-bright",
            Self::ForceHalfBright => "force-half-bright",
            Self::ForceReducedHalfBright => "force-reduced-half-bright",
        }
    }
}

impl std::fmt::Display for AttributeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{is_half_bright, ALL, BLACK};

    const HALF_RED: Rgb = HALF_BRIGHT[2];
    const BRIGHT_RED: Rgb = BRIGHT[2];
    const HALF_GREEN: Rgb = HALF_BRIGHT[4];
    const BRIGHT_CYAN: Rgb = BRIGHT[5];

    #[test]
    fn test_favour_bright_promotes_half_bright() {
        let (a, b) = AttributeStrategy::FavourBright.enforce(HALF_RED, BRIGHT_CYAN, false);
        assert_eq!((a, b), (BRIGHT_RED, BRIGHT_CYAN));
        let (a, b) = AttributeStrategy::FavourBright.enforce(BRIGHT_CYAN, HALF_RED, false);
        assert_eq!((a, b), (BRIGHT_CYAN, BRIGHT_RED));
    }

    #[test]
    fn test_favour_half_bright_demotes_bright() {
        let (a, b) = AttributeStrategy::FavourHalfBright.enforce(HALF_GREEN, BRIGHT_RED, false);
        assert_eq!((a, b), (HALF_GREEN, HALF_RED));
    }

    #[test]
    fn test_favour_most_popular_follows_first() {
        let (a, b) = AttributeStrategy::FavourMostPopular.enforce(BRIGHT_CYAN, HALF_RED, false);
        assert_eq!((a, b), (BRIGHT_CYAN, BRIGHT_RED));
        let (a, b) = AttributeStrategy::FavourMostPopular.enforce(HALF_GREEN, BRIGHT_RED, false);
        assert_eq!((a, b), (HALF_GREEN, HALF_RED));
    }

    #[test]
    fn test_favour_most_popular_demotion_avoids_popular() {
        // Bright red demotes to half-bright red, which is the popular colour,
        // so the exclusion search picks the next nearest instead.
        let (a, b) = AttributeStrategy::FavourMostPopular.enforce(HALF_RED, BRIGHT_RED, false);
        assert_eq!(a, HALF_RED);
        assert_ne!(b, HALF_RED);
        assert!(is_half_bright(b));
    }

    #[test]
    fn test_agreeing_pairs_untouched_by_favour_rules() {
        for strategy in [
            AttributeStrategy::FavourBright,
            AttributeStrategy::FavourHalfBright,
            AttributeStrategy::FavourMostPopular,
        ] {
            assert_eq!(strategy.enforce(HALF_RED, HALF_GREEN, false), (HALF_RED, HALF_GREEN));
            assert_eq!(strategy.enforce(BRIGHT_RED, BRIGHT_CYAN, false), (BRIGHT_RED, BRIGHT_CYAN));
        }
    }

    #[test]
    fn test_force_rules_remap_both() {
        let (a, b) = AttributeStrategy::ForceBright.enforce(HALF_RED, HALF_GREEN, false);
        assert!(is_bright(a) && is_bright(b));
        let (a, b) = AttributeStrategy::ForceHalfBright.enforce(BRIGHT_RED, BRIGHT_CYAN, false);
        assert!(is_half_bright(a) && is_half_bright(b));
        let (a, b) = AttributeStrategy::ForceReducedHalfBright.enforce(BRIGHT_CYAN, HALF_BRIGHT[3], false);
        assert!(REDUCED_HALF_BRIGHT.contains(&a) && REDUCED_HALF_BRIGHT.contains(&b));
    }

    #[test]
    fn test_every_pair_lands_in_one_subset() {
        for &strategy in AttributeStrategy::ALL {
            for &p in &ALL {
                for &s in &ALL {
                    let (a, b) = strategy.enforce(p, s, false);
                    let same_subset = (is_bright(a) && is_bright(b))
                        || (is_half_bright(a) && is_half_bright(b));
                    assert!(same_subset, "{strategy}: {p} + {s} -> {a} + {b}");
                }
            }
        }
    }

    #[test]
    fn test_is_bright_set() {
        let s = AttributeStrategy::FavourBright;
        assert!(s.is_bright_set(HALF_RED, BRIGHT_CYAN));
        assert!(!s.is_bright_set(HALF_RED, HALF_GREEN));
        assert!(s.is_bright_set(BRIGHT_RED, BRIGHT_CYAN));

        let s = AttributeStrategy::FavourHalfBright;
        assert!(!s.is_bright_set(HALF_RED, BRIGHT_CYAN));
        assert!(s.is_bright_set(BRIGHT_RED, BRIGHT_CYAN));

        let s = AttributeStrategy::FavourMostPopular;
        assert!(s.is_bright_set(BRIGHT_RED, HALF_GREEN));
        assert!(!s.is_bright_set(HALF_GREEN, BRIGHT_RED));

        assert!(AttributeStrategy::ForceBright.is_bright_set(HALF_RED, HALF_RED));
        assert!(!AttributeStrategy::ForceHalfBright.is_bright_set(BRIGHT_RED, BRIGHT_RED));
        assert!(!AttributeStrategy::ForceReducedHalfBright.is_bright_set(BLACK, BLACK));
    }

    #[test]
    fn test_black_counts_as_bright() {
        // Black sits in both subsets; alone it reads as bright.
        assert!(AttributeStrategy::FavourHalfBright.is_bright_set(BLACK, BLACK));
    }
}
