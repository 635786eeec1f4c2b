//! Conversion results.

use serde::Serialize;

use crate::color::Rgb;
use crate::mode::ColourMode;
use crate::raster::Raster;

/// Role of a raster within a [`Conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    /// The image to show.
    Final,
    /// A GigaScreen constituent screen.
    Supporting,
}

/// A quantized raster with its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultImage {
    kind: ResultKind,
    raster: Raster,
}

impl ResultImage {
    /// Tag a raster.
    pub fn new(kind: ResultKind, raster: Raster) -> Self {
        Self { kind, raster }
    }

    /// The raster's role.
    #[inline]
    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    /// The quantized pixels.
    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Consume and return the raster.
    pub fn into_raster(self) -> Raster {
        self.raster
    }
}

/// The output of [`Converter::convert`](crate::Converter::convert).
///
/// # Example
///
/// ```
/// use zx_dither::{ColourMode, Conversion, Raster, ResultKind, Rgb};
///
/// let conversion = Conversion::single(ColourMode::FullPalette, Raster::new(8, 8, Rgb::default()));
///
/// assert_eq!(conversion.final_image().kind(), ResultKind::Final);
/// assert!(conversion.supporting_images().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    mode: ColourMode,
    images: Vec<ResultImage>,
}

impl Conversion {
    /// A conversion with only a final image.
    pub fn single(mode: ColourMode, raster: Raster) -> Self {
        Self {
            mode,
            images: vec![ResultImage::new(ResultKind::Final, raster)],
        }
    }

    /// A GigaScreen conversion: the combined image then both screens.
    pub fn gigascreen(combined: Raster, screen1: Raster, screen2: Raster) -> Self {
        Self {
            mode: ColourMode::GigaScreen,
            images: vec![
                ResultImage::new(ResultKind::Final, combined),
                ResultImage::new(ResultKind::Supporting, screen1),
                ResultImage::new(ResultKind::Supporting, screen2),
            ],
        }
    }

    /// Colour mode the conversion ran in.
    #[inline]
    pub fn colour_mode(&self) -> ColourMode {
        self.mode
    }

    /// The image to show.
    #[inline]
    pub fn final_image(&self) -> &ResultImage {
        &self.images[0]
    }

    /// GigaScreen constituent screens in order, empty for other modes.
    #[inline]
    pub fn supporting_images(&self) -> &[ResultImage] {
        &self.images[1..]
    }

    /// Every image, final first.
    #[inline]
    pub fn images(&self) -> &[ResultImage] {
        &self.images
    }

    /// Pixel count per colour of the final image, most frequent first.
    /// Equal counts are ordered by colour.
    pub fn histogram(&self) -> Vec<(Rgb, usize)> {
        let mut counts: Vec<(Rgb, usize)> = Vec::new();
        for &p in self.final_image().raster().pixels() {
            match counts.iter_mut().find(|(c, _)| *c == p) {
                Some((_, n)) => *n += 1,
                None => counts.push((p, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }
}
