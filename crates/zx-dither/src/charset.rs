//! The 96-glyph ROM character set and glyph matching.
//!
//! Glyphs cover codes 0x20..=0x7F. Each is eight row bytes, most significant
//! bit leftmost, with a set bit drawn in ink. Code 0x60 is the pound sign
//! and 0x7F the copyright sign; the rest follow ASCII.

use crate::color::Rgb;
use crate::raster::{Raster, BLOCK_SIZE};

/// Number of glyphs in the set.
pub const GLYPH_COUNT: usize = 96;

/// Character code of the first glyph.
pub const FIRST_CODE: u8 = 0x20;

/// Pixels in one glyph cell.
pub const GLYPH_PIXELS: usize = BLOCK_SIZE * BLOCK_SIZE;

/// ROM glyph bitmaps in character-code order.
#[rustfmt::skip]
pub const GLYPHS: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00], // !
    [0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00], // #
    [0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08], // $
    [0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00], // %
    [0x00, 0x10, 0x28, 0x10, 0x2A, 0x44, 0x3A, 0x00], // &
    [0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // (
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00], // )
    [0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // *
    [0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10], // ,
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // .
    [0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // /
    [0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00], // 0
    [0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00], // 1
    [0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00], // 2
    [0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00], // 3
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00], // 4
    [0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00], // 5
    [0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00], // 6
    [0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00], // 7
    [0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00], // 8
    [0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00], // 9
    [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00], // :
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20], // ;
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00], // <
    [0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00], // =
    [0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00], // >
    [0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00], // ?
    [0x00, 0x3C, 0x4A, 0x56, 0x5E, 0x40, 0x3C, 0x00], // @
    [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00], // A
    [0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00], // B
    [0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00], // C
    [0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00], // D
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00], // E
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00], // F
    [0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00], // G
    [0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00], // H
    [0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00], // I
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00], // J
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00], // K
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00], // L
    [0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00], // M
    [0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00], // N
    [0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // O
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00], // P
    [0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00], // Q
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00], // R
    [0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00], // S
    [0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // T
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // U
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00], // V
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00], // W
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // X
    [0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00], // Y
    [0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00], // Z
    [0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // [
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00], // backslash
    [0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00], // ]
    [0x00, 0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x00], // up arrow
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x00, 0x1C, 0x22, 0x78, 0x20, 0x20, 0x7E, 0x00], // pound
    [0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00], // a
    [0x00, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x3C, 0x00], // b
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x1C, 0x00], // c
    [0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00], // d
    [0x00, 0x00, 0x38, 0x44, 0x78, 0x40, 0x3C, 0x00], // e
    [0x00, 0x0C, 0x10, 0x18, 0x10, 0x10, 0x10, 0x00], // f
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38], // g
    [0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x00], // h
    [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00], // i
    [0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x24, 0x18], // j
    [0x00, 0x20, 0x28, 0x30, 0x30, 0x28, 0x24, 0x00], // k
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0C, 0x00], // l
    [0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00], // m
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00], // n
    [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // o
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40], // p
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x06], // q
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x20, 0x00], // r
    [0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00], // s
    [0x00, 0x10, 0x38, 0x10, 0x10, 0x10, 0x0C, 0x00], // t
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], // u
    [0x00, 0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00], // v
    [0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00], // w
    [0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // x
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38], // y
    [0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00], // z
    [0x00, 0x0E, 0x08, 0x30, 0x08, 0x08, 0x0E, 0x00], // {
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // |
    [0x00, 0x70, 0x10, 0x0C, 0x10, 0x10, 0x70, 0x00], // }
    [0x00, 0x14, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
    [0x3C, 0x42, 0x99, 0xA1, 0xA1, 0x99, 0x42, 0x3C], // copyright
];

/// Text character for glyph `index`.
///
/// ```
/// use zx_dither::charset::glyph_char;
///
/// assert_eq!(glyph_char(0x21), 'A');
/// assert_eq!(glyph_char(0x40), '£');
/// ```
pub fn glyph_char(index: usize) -> char {
    match index {
        0x40 => '£',
        0x5F => '©',
        _ => char::from(FIRST_CODE + (index % GLYPH_COUNT) as u8),
    }
}

/// Whether pixel `i` (row-major within the cell) of glyph `index` is ink.
#[inline]
pub fn glyph_ink(index: usize, i: usize) -> bool {
    let row = GLYPHS[index][i / BLOCK_SIZE];
    row & (0x80 >> (i % BLOCK_SIZE)) != 0
}

/// Number of cell pixels on which glyph `index` agrees with `ink`.
pub fn glyph_score(index: usize, ink: &[bool; GLYPH_PIXELS]) -> u32 {
    ink.iter()
        .enumerate()
        .filter(|&(i, &is_ink)| glyph_ink(index, i) == is_ink)
        .count() as u32
}

/// Index of the glyph agreeing with `ink` on the most pixels. The lowest
/// code wins ties.
pub fn best_glyph(ink: &[bool; GLYPH_PIXELS]) -> usize {
    let mut best = 0;
    let mut best_score = 0;
    for index in 0..GLYPH_COUNT {
        let score = glyph_score(index, ink);
        if score > best_score {
            best_score = score;
            best = index;
        }
    }
    best
}

/// Ink mask of one block: every pixel that is not `paper` counts as ink.
pub fn ink_mask(block: &[Rgb; GLYPH_PIXELS], paper: Rgb) -> [bool; GLYPH_PIXELS] {
    let mut mask = [false; GLYPH_PIXELS];
    for (m, &p) in mask.iter_mut().zip(block) {
        *m = p != paper;
    }
    mask
}

/// Glyph `index` drawn in `ink` on `paper`.
pub fn render_glyph(index: usize, ink: Rgb, paper: Rgb) -> [Rgb; GLYPH_PIXELS] {
    let mut cell = [paper; GLYPH_PIXELS];
    for (i, p) in cell.iter_mut().enumerate() {
        if glyph_ink(index, i) {
            *p = ink;
        }
    }
    cell
}

/// Replace every whole block with its best-matching glyph.
///
/// Pixels equal to `paper` are paper, everything else ink. Pixels outside
/// whole blocks are left alone.
pub fn match_glyphs(raster: &mut Raster, ink: Rgb, paper: Rgb) {
    for by in 0..raster.blocks_y() {
        for bx in 0..raster.blocks_x() {
            let mask = ink_mask(&raster.block(bx, by), paper);
            raster.set_block(bx, by, &render_glyph(best_glyph(&mask), ink, paper));
        }
    }
}

/// Text rendering of `raster`: one character per whole block and one line
/// per block row, each line ending in `\n`.
///
/// ```
/// use zx_dither::{charset, Raster, Rgb};
///
/// let paper = Rgb::new(0xFF, 0xFF, 0xFF);
/// let text = charset::text_dump(&Raster::new(24, 16, paper), paper);
/// assert_eq!(text, "   \n   \n");
/// ```
pub fn text_dump(raster: &Raster, paper: Rgb) -> String {
    let mut text = String::with_capacity((raster.blocks_x() + 1) * raster.blocks_y());
    for by in 0..raster.blocks_y() {
        for bx in 0..raster.blocks_x() {
            let mask = ink_mask(&raster.block(bx, by), paper);
            text.push(glyph_char(best_glyph(&mask)));
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, BRIGHT, WHITE};

    fn mask_of(index: usize) -> [bool; GLYPH_PIXELS] {
        std::array::from_fn(|i| glyph_ink(index, i))
    }

    #[test]
    fn test_glyph_chars_cover_printable_ascii() {
        assert_eq!(glyph_char(0), ' ');
        assert_eq!(glyph_char(0x10), '0');
        assert_eq!(glyph_char(0x41), 'a');
        assert_eq!(glyph_char(0x5E), '~');
        assert_eq!(glyph_char(0x5F), '©');
    }

    #[test]
    fn test_glyph_ink_reads_msb_first() {
        // Top bar of 'T' spans columns 0..=6.
        let t = (b'T' - FIRST_CODE) as usize;
        assert!(glyph_ink(t, 8));
        assert!(glyph_ink(t, 14));
        assert!(!glyph_ink(t, 15));
    }

    #[test]
    fn test_exact_glyph_matches_itself() {
        for index in 0..GLYPH_COUNT {
            let mask = mask_of(index);
            assert_eq!(glyph_score(index, &mask), 64);
            let best = best_glyph(&mask);
            assert_eq!(
                mask_of(best),
                mask,
                "glyph {index} matched a different bitmap"
            );
        }
    }

    #[test]
    fn test_ties_go_to_lowest_code() {
        // An empty cell is matched exactly by space, the first glyph.
        assert_eq!(best_glyph(&[false; GLYPH_PIXELS]), 0);
    }

    #[test]
    fn test_match_glyphs_rewrites_block() {
        let ink = BRIGHT[1];
        let paper = BRIGHT[6];
        let a = (b'A' - FIRST_CODE) as usize;
        let mut raster = Raster::new(8, 8, paper);
        raster.set_block(0, 0, &render_glyph(a, ink, paper));
        // One stray ink pixel still lands on 'A'.
        raster.set(0, 0, ink);

        match_glyphs(&mut raster, ink, paper);
        assert_eq!(raster.block(0, 0), render_glyph(a, ink, paper));
    }

    #[test]
    fn test_text_dump_shape() {
        let mut raster = Raster::new(256, 192, WHITE);
        let h = (b'H' - FIRST_CODE) as usize;
        raster.set_block(3, 0, &render_glyph(h, BLACK, WHITE));

        let text = text_dump(&raster, WHITE);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|l| l.chars().count() == 32));
        assert_eq!(&lines[0][..4], "   H");
    }
}
