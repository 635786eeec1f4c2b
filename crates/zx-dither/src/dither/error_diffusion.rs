//! In-place error diffusion.

use crate::color::Rgb;
use crate::quantize::PixelQuantizer;
use crate::raster::{Raster, BLOCK_SIZE};

use super::{Dither, DitherOptions, Kernel};

/// Error diffusion driven by a fixed [`Kernel`].
///
/// The raster is rewritten in place. Each neighbour receives its share of
/// the error on top of whatever earlier diffusion already left there,
/// rounded to the nearest integer and clamped to 0..=255.
#[derive(Debug, Clone, Copy)]
pub struct ErrorDiffusion {
    kernel: &'static Kernel,
}

impl ErrorDiffusion {
    /// Create an error-diffusion ditherer for `kernel`.
    pub fn new(kernel: &'static Kernel) -> Self {
        Self { kernel }
    }
}

impl Dither for ErrorDiffusion {
    fn dither(&self, raster: &mut Raster, quantizer: &PixelQuantizer, options: &DitherOptions) {
        diffuse(raster, self.kernel, quantizer, options);
    }
}

/// Core error diffusion loop parameterized by kernel.
pub(crate) fn diffuse(
    raster: &mut Raster,
    kernel: &Kernel,
    quantizer: &PixelQuantizer,
    options: &DitherOptions,
) {
    let width = raster.width();
    let height = raster.height();

    for y in 0..height {
        // Determine scan direction
        let reverse = options.serpentine && y % 2 == 1;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let old = raster.get(x, y);
            let new = quantizer.quantize(old);
            raster.set(x, y, new);

            let error = [
                old.r as f32 - new.r as f32,
                old.g as f32 - new.g as f32,
                old.b as f32 - new.b as f32,
            ];
            if error == [0.0; 3] {
                continue;
            }

            spread_error(raster, kernel, (x, y), error, reverse, options.constrained);
        }
    }
}

/// Add `error` to the kernel neighbours of `(x, y)`.
///
/// `reverse` mirrors the kernel for right-to-left rows. With `constrained`,
/// neighbours outside the 8×8 block of `(x, y)` are skipped.
pub(crate) fn spread_error(
    raster: &mut Raster,
    kernel: &Kernel,
    (x, y): (usize, usize),
    error: [f32; 3],
    reverse: bool,
    constrained: bool,
) {
    let (width, height) = (raster.width(), raster.height());
    let divisor = kernel.divisor as f32;

    for &(dx, dy, weight) in kernel.entries {
        let dx = if reverse { -dx } else { dx };
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        let (nx, ny) = (nx as usize, ny as usize);
        if constrained && (nx / BLOCK_SIZE != x / BLOCK_SIZE || ny / BLOCK_SIZE != y / BLOCK_SIZE)
        {
            continue;
        }

        let factor = weight as f32 / divisor;
        let n = raster.get(nx, ny);
        raster.set(
            nx,
            ny,
            Rgb::from_clamped(
                (n.r as f32 + factor * error[0]).round() as i32,
                (n.g as f32 + factor * error[1]).round() as i32,
                (n.b as f32 + factor * error[2]).round() as i32,
            ),
        );
    }
}
