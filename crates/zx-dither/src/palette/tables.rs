//! Fixed Spectrum colour tables.
//!
//! Order matters: nearest-colour ties are resolved by scan position, and the
//! index of a colour inside [`ALL`] is its platform colour index.

use std::sync::LazyLock;

use crate::color::Rgb;

/// Black, shared by both brightness subsets.
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Bright white.
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Half-bright subset (BRIGHT attribute bit clear), in platform index order.
pub const HALF_BRIGHT: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x00, 0x00, 0xCD),
    Rgb::new(0xCD, 0x00, 0x00),
    Rgb::new(0xCD, 0x00, 0xCD),
    Rgb::new(0x00, 0xCD, 0x00),
    Rgb::new(0x00, 0xCD, 0xCD),
    Rgb::new(0xCD, 0xCD, 0x00),
    Rgb::new(0xCD, 0xCD, 0xCD),
];

/// Bright subset (BRIGHT attribute bit set), in platform index order.
pub const BRIGHT: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0xFF, 0x00, 0xFF),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0xFF, 0xFF),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// All 15 distinct primary colours: half-bright 0..=7 then bright 8..=14.
pub const ALL: [Rgb; 15] = [
    HALF_BRIGHT[0],
    HALF_BRIGHT[1],
    HALF_BRIGHT[2],
    HALF_BRIGHT[3],
    HALF_BRIGHT[4],
    HALF_BRIGHT[5],
    HALF_BRIGHT[6],
    HALF_BRIGHT[7],
    BRIGHT[1],
    BRIGHT[2],
    BRIGHT[3],
    BRIGHT[4],
    BRIGHT[5],
    BRIGHT[6],
    BRIGHT[7],
];

/// Reduced half-bright subset: black, blue, red, green and white.
///
/// Every member is also a member of [`HALF_BRIGHT`], so index lookup and
/// SCR encoding work unchanged.
pub const REDUCED_HALF_BRIGHT: [Rgb; 5] = [
    HALF_BRIGHT[0],
    HALF_BRIGHT[1],
    HALF_BRIGHT[2],
    HALF_BRIGHT[4],
    HALF_BRIGHT[7],
];

static GIGASCREEN: LazyLock<Vec<Rgb>> = LazyLock::new(|| {
    let sources: Vec<Rgb> = HALF_BRIGHT.iter().chain(BRIGHT.iter()).copied().collect();
    let mut colours: Vec<Rgb> = Vec::with_capacity(128);
    for &a in &sources {
        for &b in &sources {
            let mixed = a.average(b);
            if !colours.contains(&mixed) {
                colours.push(mixed);
            }
        }
    }
    colours
});

/// The GigaScreen palette: every distinct average of two primary colours.
///
/// Built on first use and shared for the life of the process.
pub fn gigascreen() -> &'static [Rgb] {
    &GIGASCREEN
}

/// Whether `c` belongs to the bright subset. Black counts as bright.
#[inline]
pub fn is_bright(c: Rgb) -> bool {
    BRIGHT.contains(&c)
}

/// Whether `c` belongs to the half-bright subset. Black counts as half-bright.
#[inline]
pub fn is_half_bright(c: Rgb) -> bool {
    HALF_BRIGHT.contains(&c)
}
