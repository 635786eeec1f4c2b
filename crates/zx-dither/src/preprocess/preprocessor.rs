//! Pre-dither adjustments.

use crate::color::{Hsb, Rgb};
use crate::raster::Raster;

use super::{resize_nearest, PreprocessOptions, Scaling};

/// Applies [`PreprocessOptions`] in order: scale, contrast, saturation,
/// brightness. Neutral settings are skipped.
///
/// # Example
///
/// ```
/// use zx_dither::{PreprocessOptions, Preprocessor, Raster, Rgb};
///
/// let input = Raster::new(512, 384, Rgb::new(100, 100, 100));
/// let output = Preprocessor::new(PreprocessOptions::new().contrast(2.0)).process(&input);
///
/// assert_eq!((output.width(), output.height()), (256, 192));
/// assert_eq!(output.get(0, 0), Rgb::new(200, 200, 200));
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    /// Create a preprocessor.
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Run every enabled step and return the adjusted raster.
    pub fn process(&self, input: &Raster) -> Raster {
        let opts = &self.options;
        let target = opts.scaling.target(
            input.width(),
            input.height(),
            opts.target_width,
            opts.target_height,
        );
        let mut raster = match target {
            Some((width, height)) => resize_nearest(input, width, height),
            None => input.clone(),
        };

        if opts.contrast != 1.0 {
            map_channels(&mut raster, |v| v * opts.contrast);
        }
        if opts.saturation != 0.0 {
            for p in raster.pixels_mut() {
                *p = adjust_saturation(*p, opts.saturation);
            }
        }
        if opts.brightness != 0.0 {
            map_channels(&mut raster, |v| v + opts.brightness);
        }
        raster
    }
}

fn map_channels(raster: &mut Raster, f: impl Fn(f32) -> f32) {
    for p in raster.pixels_mut() {
        *p = Rgb::from_clamped(
            f(p.r as f32).round() as i32,
            f(p.g as f32).round() as i32,
            f(p.b as f32).round() as i32,
        );
    }
}

/// Shift HSB saturation by `amount`, clamped to 0..=1.
pub fn adjust_saturation(c: Rgb, amount: f32) -> Rgb {
    let mut hsb = Hsb::from(c);
    hsb.saturation = (hsb.saturation + amount).clamp(0.0, 1.0);
    Rgb::from(hsb)
}
