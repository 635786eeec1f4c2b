//! Image preprocessing before dithering.
//!
//! 1. **Scale**: nearest-neighbour resample, by default stretched to
//!    256×192, optionally keeping the aspect ratio on one side
//! 2. **Contrast**: multiply every channel
//! 3. **Saturation**: shift HSB saturation
//! 4. **Brightness**: add to every channel
//!
//! Every step clamps channels to 0..=255.

mod options;
mod preprocessor;
mod resize;

pub use options::{PreprocessOptions, Scaling};
pub use preprocessor::{adjust_saturation, Preprocessor};
pub use resize::resize_nearest;
