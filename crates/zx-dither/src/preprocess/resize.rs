//! Nearest-neighbour resampling.

use crate::raster::Raster;

/// Resample to `new_width` × `new_height` by picking, for each target pixel,
/// source pixel `(dx * src_w / dst_w, dy * src_h / dst_h)`.
///
/// Returns a copy when the size already matches.
pub fn resize_nearest(raster: &Raster, new_width: usize, new_height: usize) -> Raster {
    let (width, height) = (raster.width(), raster.height());
    if width == new_width && height == new_height {
        return raster.clone();
    }
    if width == 0 || height == 0 {
        return Raster::new(new_width, new_height, Default::default());
    }

    let mut pixels = Vec::with_capacity(new_width * new_height);
    for dy in 0..new_height {
        let sy = dy * height / new_height;
        for dx in 0..new_width {
            let sx = dx * width / new_width;
            pixels.push(raster.get(sx, sy));
        }
    }
    Raster::from_pixels(new_width, new_height, pixels)
}
