//! Test fixtures: input images and configs.

use std::path::{Path, PathBuf};

use zx_dither::{Raster, Rgb};
use zx_screen::models::AppConfig;
use zx_screen::services::encode_png;

/// Full screen size
pub const SCREEN: (usize, usize) = (256, 192);

/// Horizontal red ramp over a vertical blue ramp
pub fn gradient(width: usize, height: usize) -> Raster {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Rgb::new(
                (x * 255 / width.max(1)) as u8,
                96,
                (y * 255 / height.max(1)) as u8,
            )
        })
        .collect();
    Raster::from_pixels(width, height, pixels)
}

/// Write `raster` as `<dir>/<name>.png` and return the path
pub fn write_input(dir: &Path, name: &str, raster: &Raster) -> PathBuf {
    let path = dir.join(format!("{name}.png"));
    std::fs::write(&path, encode_png(raster).expect("encode input")).expect("write input");
    path
}

/// Config writing every output kind
pub fn all_outputs_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.output.scr = true;
    config.output.report = true;
    config.output.preview = true;
    config
}

/// Sample config file exercising every section
pub const SAMPLE_YAML: &str = r#"
conversion:
  dither: bayer-four-by-four
  colour-mode: gigascreen
  giga-strategy: mixed
  hsb-option: hue-saturation
  serpentine: true
  intensity: 0.5
preprocess:
  scaling: width-proportional
  saturation: 0.2
  brightness: -8
output:
  scr: true
  report: false
"#;
