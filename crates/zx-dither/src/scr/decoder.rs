//! SCR decoding, for previewing screen dumps.

use crate::color::Rgb;
use crate::palette::colour_from_code;
use crate::raster::{Raster, BLOCK_SIZE};

use super::encoder::{bitmap_offset, BITMAP_SIZE, COLUMNS, SCREEN_HEIGHT, SCREEN_WIDTH, SCR_SIZE};

/// Render a 6912-byte screen dump as a 256×192 raster. FLASH is ignored.
pub fn decode(scr: &[u8; SCR_SIZE]) -> Raster {
    let mut raster = Raster::new(SCREEN_WIDTH, SCREEN_HEIGHT, Rgb::default());
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            let attr = scr[BITMAP_SIZE + (y / BLOCK_SIZE) * COLUMNS + x / BLOCK_SIZE];
            let bright = attr & 0x40 != 0;
            let set = scr[bitmap_offset(x, y)] & (0x80 >> (x % 8)) != 0;
            let code = if set { attr } else { attr >> 3 };
            raster.set(x, y, colour_from_code(code, bright));
        }
    }
    raster
}

/// Render a GigaScreen pair as the averaged image the viewer sees.
pub fn decode_gigascreen(screen1: &[u8; SCR_SIZE], screen2: &[u8; SCR_SIZE]) -> Raster {
    let a = decode(screen1);
    let b = decode(screen2);
    let pixels = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&p, &q)| p.average(q))
        .collect();
    Raster::from_pixels(SCREEN_WIDTH, SCREEN_HEIGHT, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeStrategy;
    use crate::palette::{BRIGHT, HALF_BRIGHT};
    use crate::scr::{encode, BrightRule};

    #[test]
    fn test_decode_reproduces_two_colour_blocks() {
        let mut raster = Raster::new(SCREEN_WIDTH, SCREEN_HEIGHT, HALF_BRIGHT[7]);
        for i in 0..40 {
            raster.set(i * 5 % SCREEN_WIDTH, i * 3 + 7, HALF_BRIGHT[2]);
        }
        let bytes = encode(&raster, BrightRule::Attribute(AttributeStrategy::FavourHalfBright))
            .unwrap();
        let scr: [u8; SCR_SIZE] = bytes.try_into().unwrap();
        assert_eq!(decode(&scr), raster);
    }

    #[test]
    fn test_bright_bit_selects_bright_colours() {
        let mut scr = [0u8; SCR_SIZE];
        scr[BITMAP_SIZE] = 0x40 | (2 << 3);
        let raster = decode(&scr);
        assert_eq!(raster.get(0, 0), BRIGHT[2]);
        assert_eq!(raster.get(8, 0), HALF_BRIGHT[0]);
    }

    #[test]
    fn test_gigascreen_average() {
        let mut s1 = [0u8; SCR_SIZE];
        let s2 = [0u8; SCR_SIZE];
        s1[BITMAP_SIZE] = 7 << 3;
        let raster = decode_gigascreen(&s1, &s2);
        assert_eq!(raster.get(0, 0), Rgb::new(0x66, 0x66, 0x66));
    }
}
