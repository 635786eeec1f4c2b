//! Preprocessing options and configuration.

use serde::{Deserialize, Serialize};

use crate::named::Named;
use crate::scr::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// How the input is resampled before any other step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scaling {
    /// Keep the input size.
    None,
    /// Stretch to the target size.
    #[default]
    Screen,
    /// Target width, height follows the input aspect ratio.
    WidthProportional,
    /// Target height, width follows the input aspect ratio.
    HeightProportional,
}

impl Scaling {
    /// Output size for a `width` × `height` input, or `None` when no
    /// resample is needed.
    ///
    /// Proportional sides are truncated and never drop below 1.
    ///
    /// ```
    /// use zx_dither::Scaling;
    ///
    /// assert_eq!(Scaling::WidthProportional.target(512, 512, 256, 192), Some((256, 256)));
    /// assert_eq!(Scaling::HeightProportional.target(512, 512, 256, 192), Some((192, 192)));
    /// assert_eq!(Scaling::None.target(512, 512, 256, 192), None);
    /// ```
    pub fn target(
        self,
        width: usize,
        height: usize,
        target_width: usize,
        target_height: usize,
    ) -> Option<(usize, usize)> {
        if width == 0 || height == 0 {
            return None;
        }
        match self {
            Self::None => None,
            Self::Screen => Some((target_width, target_height)),
            Self::WidthProportional => {
                Some((target_width, (height * target_width / width).max(1)))
            }
            Self::HeightProportional => {
                Some(((width * target_height / height).max(1), target_height))
            }
        }
    }
}

impl Named for Scaling {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Screen,
        Self::WidthProportional,
        Self::HeightProportional,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Screen => "screen",
            Self::WidthProportional => "width-proportional",
            Self::HeightProportional => "height-proportional",
        }
    }
}

impl std::fmt::Display for Scaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration options for image preprocessing.
///
/// # Defaults
///
/// - Scaling: [`Scaling::Screen`], stretched to 256×192
/// - Contrast: 1.0 (no change)
/// - Brightness: 0.0 (no change)
/// - Saturation: 0.0 (no change)
///
/// # Example
///
/// ```
/// use zx_dither::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .contrast(1.2)
///     .saturation(0.1);
/// assert_eq!(options.scaling, zx_dither::Scaling::Screen);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PreprocessOptions {
    /// Initial resample mode.
    pub scaling: Scaling,

    /// Resample target width, kept exactly by `screen` and
    /// `width-proportional`.
    pub target_width: usize,

    /// Resample target height, kept exactly by `screen` and
    /// `height-proportional`.
    pub target_height: usize,

    /// Channel multiplier.
    ///
    /// - 1.0 = no change
    /// - 1.5 = high contrast
    pub contrast: f32,

    /// Added to every channel after the other adjustments.
    pub brightness: f32,

    /// Added to HSB saturation, which is then clamped to 0..=1.
    pub saturation: f32,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            scaling: Scaling::Screen,
            target_width: SCREEN_WIDTH,
            target_height: SCREEN_HEIGHT,
            contrast: 1.0,
            brightness: 0.0,
            saturation: 0.0,
        }
    }
}

impl PreprocessOptions {
    /// Create new preprocessing options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial resample mode.
    #[inline]
    pub fn scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set the resample target size.
    #[inline]
    pub fn target_size(mut self, width: usize, height: usize) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    /// Set the contrast multiplier.
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Set the brightness offset.
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the saturation offset.
    #[inline]
    pub fn saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }
}
