//! Per-block two-colour reduction.

use crate::api::ZxError;
use crate::color::Rgb;
use crate::mode::ColourMode;
use crate::palette::ALL;
use crate::quantize::nearest;
use crate::raster::Raster;

use super::AttributeStrategy;

/// Colour occurrence counts in first-seen order.
pub type Tally = Vec<(Rgb, u32)>;

/// Count each pixel's nearest primary colour.
pub fn tally(pixels: &[Rgb], prefer_detail: bool) -> Tally {
    let mut counts: Tally = Vec::with_capacity(16);
    for &p in pixels {
        let c = nearest(p, &ALL, prefer_detail);
        match counts.iter_mut().find(|(k, _)| *k == c) {
            Some(entry) => entry.1 += 1,
            None => counts.push((c, 1)),
        }
    }
    counts
}

/// Most frequent colour in `tally`, skipping `exclude`.
///
/// Equal counts resolve to the later entry. Returns `exclude` itself when
/// nothing else is left, and `None` only for an empty tally with no
/// exclusion.
pub fn most_popular(tally: &[(Rgb, u32)], exclude: Option<Rgb>) -> Option<Rgb> {
    let mut best = exclude;
    let mut best_count = 0;
    for &(colour, count) in tally {
        if Some(colour) == exclude {
            continue;
        }
        if count >= best_count {
            best = Some(colour);
            best_count = count;
        }
    }
    best
}

/// Reduce every whole 8×8 block to its two corrected dominant colours.
///
/// `raster` must already be quantized. Pixels outside whole blocks are left
/// alone. Each pixel becomes whichever of the pair is nearer, the most
/// popular colour winning ties.
///
/// # Errors
///
/// Returns [`ZxError::UnsupportedMode`] for monochrome and GigaScreen
/// rasters, which carry no per-block attribute pair.
pub fn colour_attributes(
    raster: &mut Raster,
    mode: ColourMode,
    strategy: AttributeStrategy,
    prefer_detail: bool,
) -> Result<(), ZxError> {
    if mode != ColourMode::FullPalette {
        return Err(ZxError::UnsupportedMode {
            operation: "attribute colouring",
            mode,
        });
    }

    for by in 0..raster.blocks_y() {
        for bx in 0..raster.blocks_x() {
            let mut block = raster.block(bx, by);
            let counts = tally(&block, prefer_detail);
            let popular = most_popular(&counts, None).unwrap_or(block[0]);
            let second = most_popular(&counts, Some(popular)).unwrap_or(popular);
            let (first, second) = strategy.enforce(popular, second, prefer_detail);

            for p in block.iter_mut() {
                *p = if p.manhattan(second) < p.manhattan(first) {
                    second
                } else {
                    first
                };
            }
            raster.set_block(bx, by, &block);
        }
    }
    Ok(())
}
