//! Dithering options and configuration.

/// Configuration options shared by both dither families.
///
/// # Defaults
///
/// - Serpentine scanning: disabled
/// - Constrained diffusion: disabled
/// - Ordered intensity: 1.0
///
/// # Example
///
/// ```
/// use zx_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .serpentine(true)
///     .constrained(true);
/// assert!(options.serpentine);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherOptions {
    /// Scan odd rows right-to-left with mirrored kernel offsets.
    ///
    /// Error diffusion only. Default: `false`
    pub serpentine: bool,

    /// Keep diffused error inside the 8×8 block that produced it.
    ///
    /// Error diffusion only. Default: `false`
    pub constrained: bool,

    /// Scale of the ordered-dither threshold offsets.
    ///
    /// Ordered dithering only. Default: `1.0`
    pub intensity: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            serpentine: false,
            constrained: false,
            intensity: 1.0,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Set constrained (block-local) error diffusion.
    #[inline]
    pub fn constrained(mut self, enabled: bool) -> Self {
        self.constrained = enabled;
        self
    }

    /// Set ordered-dither intensity.
    #[inline]
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}
