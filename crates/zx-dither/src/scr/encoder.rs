//! SCR encoding.
//!
//! Layout: 6144 bitmap bytes followed by 768 attribute bytes. Bitmap rows
//! are stored in thirds of 64 lines; within a third, line 0 of every
//! character row comes first, then line 1, and so on.

use crate::api::ZxError;
use crate::attribute::AttributeStrategy;
use crate::color::Rgb;
use crate::gigascreen::GigaScreenStrategy;
use crate::palette::{colour_code, PaletteError};
use crate::raster::{Raster, BLOCK_SIZE};

/// Screen width in pixels.
pub const SCREEN_WIDTH: usize = 256;
/// Screen height in pixels.
pub const SCREEN_HEIGHT: usize = 192;
/// Attribute columns.
pub const COLUMNS: usize = SCREEN_WIDTH / BLOCK_SIZE;
/// Attribute rows.
pub const ROWS: usize = SCREEN_HEIGHT / BLOCK_SIZE;
/// Bitmap region size in bytes.
pub const BITMAP_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT / 8;
/// Attribute region size in bytes.
pub const ATTRIBUTE_SIZE: usize = COLUMNS * ROWS;
/// Total size of one screen dump.
pub const SCR_SIZE: usize = BITMAP_SIZE + ATTRIBUTE_SIZE;

const THIRD_HEIGHT: usize = 64;

/// How the BRIGHT bit of each block is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightRule {
    /// Ordinary screens: ink and paper go through the attribute strategy.
    Attribute(AttributeStrategy),
    /// One screen of a GigaScreen pair.
    GigaScreen(GigaScreenStrategy),
}

/// Resolved colours of one attribute block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockAttribute {
    /// Colour of set bitmap bits.
    pub ink: Rgb,
    /// Colour of clear bitmap bits.
    pub paper: Rgb,
    /// BRIGHT bit.
    pub bright: bool,
}

impl BlockAttribute {
    /// Read ink and paper from a block of an already reduced raster.
    ///
    /// Ink starts as the top-left pixel and paper as the last pixel that
    /// differs from it. For ordinary screens the two are swapped when ink
    /// covers more of the block, so the majority colour becomes paper.
    pub fn from_block(block: &[Rgb], rule: BrightRule) -> Self {
        let mut ink = block.first().copied().unwrap_or_default();
        let mut paper = ink;
        let mut ink_count = 0;
        let mut paper_count = 0;
        for &c in block {
            if c == ink {
                ink_count += 1;
            } else {
                paper = c;
                paper_count += 1;
            }
        }

        let bright = match rule {
            BrightRule::GigaScreen(strategy) => strategy.bright_flag(block),
            BrightRule::Attribute(strategy) => {
                if ink_count > paper_count {
                    std::mem::swap(&mut ink, &mut paper);
                }
                strategy.is_bright_set(paper, ink)
            }
        };

        Self { ink, paper, bright }
    }

    /// Pack as `ink | paper << 3 | bright << 6`. FLASH is never set.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Lookup`] when ink or paper is not a Spectrum
    /// colour.
    pub fn to_byte(&self) -> Result<u8, PaletteError> {
        let ink = colour_code(self.ink)?;
        let paper = colour_code(self.paper)?;
        Ok(ink | (paper << 3) | ((self.bright as u8) << 6))
    }
}

/// Screen lines in the order their bitmap bytes are stored.
pub fn row_order() -> impl Iterator<Item = usize> {
    (0..SCREEN_HEIGHT).step_by(THIRD_HEIGHT).flat_map(|third| {
        (0..BLOCK_SIZE).flat_map(move |z| (third + z..third + THIRD_HEIGHT).step_by(BLOCK_SIZE))
    })
}

/// Byte offset of the bitmap byte holding pixels `x..x+8` of line `y`.
#[inline]
pub fn bitmap_offset(x: usize, y: usize) -> usize {
    ((y & 0xC0) << 5) | ((y & 0x07) << 8) | ((y & 0x38) << 2) | (x >> 3)
}

/// Per-block attributes for a 256×192 raster, row-major, 32×24 entries.
pub fn block_attributes(raster: &Raster, rule: BrightRule) -> Vec<BlockAttribute> {
    let mut attrs = Vec::with_capacity(raster.blocks_x() * raster.blocks_y());
    for by in 0..raster.blocks_y() {
        for bx in 0..raster.blocks_x() {
            attrs.push(BlockAttribute::from_block(&raster.block(bx, by), rule));
        }
    }
    attrs
}

/// Encode a reduced 256×192 raster as a 6912-byte screen dump.
///
/// # Errors
///
/// - [`ZxError::InvalidDimensions`] when the raster is not 256×192
/// - [`ZxError::Palette`] when a block colour is not a Spectrum colour
pub fn encode(raster: &Raster, rule: BrightRule) -> Result<Vec<u8>, ZxError> {
    if raster.width() != SCREEN_WIDTH || raster.height() != SCREEN_HEIGHT {
        return Err(ZxError::InvalidDimensions {
            width: raster.width(),
            height: raster.height(),
            expected_width: SCREEN_WIDTH,
            expected_height: SCREEN_HEIGHT,
        });
    }

    let attrs = block_attributes(raster, rule);
    let mut out = Vec::with_capacity(SCR_SIZE);

    // Bits go in LSB-first in visiting order, then each byte is mirrored so
    // the leftmost pixel lands in bit 7.
    let mut byte = 0u8;
    let mut bit = 0;
    for y in row_order() {
        let row_attrs = &attrs[(y / BLOCK_SIZE) * COLUMNS..][..COLUMNS];
        for x in 0..SCREEN_WIDTH {
            if raster.get(x, y) == row_attrs[x / BLOCK_SIZE].ink {
                byte |= 1 << bit;
            }
            bit += 1;
            if bit == 8 {
                out.push(byte.reverse_bits());
                byte = 0;
                bit = 0;
            }
        }
    }

    for attr in &attrs {
        out.push(attr.to_byte()?);
    }

    debug_assert_eq!(out.len(), SCR_SIZE);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, BRIGHT, HALF_BRIGHT, WHITE};

    fn favour_half() -> BrightRule {
        BrightRule::Attribute(AttributeStrategy::FavourHalfBright)
    }

    #[test]
    fn test_sizes() {
        assert_eq!(BITMAP_SIZE, 6144);
        assert_eq!(ATTRIBUTE_SIZE, 768);
        assert_eq!(SCR_SIZE, 6912);
    }

    #[test]
    fn test_row_order_matches_address_formula() {
        for (i, y) in row_order().enumerate() {
            assert_eq!(bitmap_offset(0, y), i * COLUMNS, "line {y} visited {i}th");
        }
        assert_eq!(row_order().count(), SCREEN_HEIGHT);
    }

    #[test]
    fn test_row_order_start() {
        let first: Vec<usize> = row_order().take(10).collect();
        assert_eq!(first, vec![0, 8, 16, 24, 32, 40, 48, 56, 1, 9]);
    }

    #[test]
    fn test_rejects_wrong_size() {
        let raster = Raster::new(256, 191, BLACK);
        let err = encode(&raster, favour_half()).unwrap_err();
        assert!(matches!(err, ZxError::InvalidDimensions { height: 191, .. }));
    }

    #[test]
    fn test_leftmost_pixel_is_msb() {
        let mut raster = Raster::new(SCREEN_WIDTH, SCREEN_HEIGHT, HALF_BRIGHT[7]);
        // Pixel (1,0) is the block's only blue; the majority swap makes the
        // white top-left colour paper and blue ink.
        raster.set(1, 0, HALF_BRIGHT[1]);
        let scr = encode(&raster, favour_half()).unwrap();

        // x=1 lands in bit 6.
        assert_eq!(scr[0], 0b0100_0000);
        // Attribute: ink blue (1), paper white (7), not bright.
        assert_eq!(scr[BITMAP_SIZE], 1 | (7 << 3));
    }

    #[test]
    fn test_attribute_byte_layout() {
        let attr = BlockAttribute {
            ink: BRIGHT[2],
            paper: BRIGHT[6],
            bright: true,
        };
        assert_eq!(attr.to_byte(), Ok(0b0111_0010));
    }

    #[test]
    fn test_ink_and_paper_selection() {
        let mut block = [WHITE; 64];
        block[0] = BLACK;
        block[10] = BLACK;
        // Black is the top-left but the minority: no swap.
        let attr = BlockAttribute::from_block(&block, favour_half());
        assert_eq!((attr.ink, attr.paper), (BLACK, WHITE));

        // Black top-left is the majority, so it is swapped into paper.
        let mut block = [BLACK; 64];
        block[5] = WHITE;
        let attr = BlockAttribute::from_block(&block, favour_half());
        assert_eq!((attr.ink, attr.paper), (WHITE, BLACK));
    }

    #[test]
    fn test_solid_block_all_ink() {
        let raster = Raster::new(SCREEN_WIDTH, SCREEN_HEIGHT, HALF_BRIGHT[5]);
        let scr = encode(&raster, favour_half()).unwrap();
        assert!(scr[..BITMAP_SIZE].iter().all(|&b| b == 0xFF));
        assert!(scr[BITMAP_SIZE..].iter().all(|&b| b == 5 | (5 << 3)));
    }

    #[test]
    fn test_unknown_colour_fails() {
        let raster = Raster::new(SCREEN_WIDTH, SCREEN_HEIGHT, Rgb::new(1, 2, 3));
        let err = encode(&raster, favour_half()).unwrap_err();
        assert_eq!(
            err,
            ZxError::Palette(PaletteError::Lookup {
                colour: Rgb::new(1, 2, 3)
            })
        );
    }

    #[test]
    fn test_gigascreen_bright_rule() {
        let mut block = [BLACK; 64];
        block[3] = BRIGHT[4];
        let mixed =
            BlockAttribute::from_block(&block, BrightRule::GigaScreen(GigaScreenStrategy::Mixed));
        assert!(mixed.bright);
        // No majority swap for GigaScreen screens.
        assert_eq!((mixed.ink, mixed.paper), (BLACK, BRIGHT[4]));
        let half = BlockAttribute::from_block(
            &block,
            BrightRule::GigaScreen(GigaScreenStrategy::HalfBright),
        );
        assert!(!half.bright);
    }
}
