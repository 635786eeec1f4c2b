//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;
use zx_dither::{palette, scr, Raster, SCR_SIZE};
use zx_screen::services::read_png;

/// Assert the file is a PNG of the given size and return its pixels
pub fn assert_png_file(path: &Path, width: usize, height: usize) -> Raster {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.len() >= 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n",
        "Expected PNG signature in {}",
        path.display()
    );
    let raster = read_png(path).expect("decode PNG");
    assert_eq!(
        (raster.width(), raster.height()),
        (width, height),
        "Unexpected size for {}",
        path.display()
    );
    raster
}

/// Assert every pixel is one of the 15 primary colours
pub fn assert_primary_colours(raster: &Raster) {
    for (i, p) in raster.pixels().iter().enumerate() {
        assert!(palette::ALL.contains(p), "Pixel {i} is {p}, not a primary colour");
    }
}

/// Assert the file is a single SCR dump and return it decoded
pub fn assert_scr_file(path: &Path) -> Raster {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected SCR at {}: {e}", path.display()));
    assert_eq!(bytes.len(), SCR_SIZE, "Unexpected SCR size");
    let screen: &[u8; SCR_SIZE] = bytes.as_slice().try_into().expect("SCR size");
    scr::decode(screen)
}
