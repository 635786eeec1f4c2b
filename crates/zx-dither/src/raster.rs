//! Owned pixel raster.
//!
//! [`Raster`] is the single mutable buffer that flows through the pipeline.
//! Each stage takes it by value or by exclusive reference; nothing aliases it.

use crate::color::Rgb;

/// Side length of an attribute block in pixels.
pub const BLOCK_SIZE: usize = 8;

/// A row-major grid of [`Rgb`] pixels.
///
/// # Example
///
/// ```
/// use zx_dither::{Raster, Rgb};
///
/// let mut raster = Raster::new(16, 8, Rgb::new(0, 0, 0));
/// raster.set(3, 2, Rgb::new(0xFF, 0xFF, 0xFF));
///
/// assert_eq!(raster.blocks_x(), 2);
/// assert_eq!(raster.get(3, 2), Rgb::new(0xFF, 0xFF, 0xFF));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a raster filled with one colour.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wrap existing row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics unless `pixels.len() == width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a raster from packed `0xAARRGGBB` values. Alpha is dropped.
    pub fn from_argb(width: usize, height: usize, argb: &[u32]) -> Self {
        Self::from_pixels(width, height, argb.iter().map(|&v| Rgb::from_u32(v)).collect())
    }

    /// Build a raster from tightly packed 8-bit RGB triples.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Self {
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: Rgb) {
        self.pixels[y * self.width + x] = c;
    }

    /// Number of whole attribute blocks across.
    #[inline]
    pub fn blocks_x(&self) -> usize {
        self.width / BLOCK_SIZE
    }

    /// Number of whole attribute blocks down.
    #[inline]
    pub fn blocks_y(&self) -> usize {
        self.height / BLOCK_SIZE
    }

    /// The 64 pixels of block `(bx, by)` in raster order.
    pub fn block(&self, bx: usize, by: usize) -> [Rgb; BLOCK_SIZE * BLOCK_SIZE] {
        let mut out = [Rgb::default(); BLOCK_SIZE * BLOCK_SIZE];
        for dy in 0..BLOCK_SIZE {
            let start = (by * BLOCK_SIZE + dy) * self.width + bx * BLOCK_SIZE;
            out[dy * BLOCK_SIZE..(dy + 1) * BLOCK_SIZE]
                .copy_from_slice(&self.pixels[start..start + BLOCK_SIZE]);
        }
        out
    }

    /// Write 64 pixels back into block `(bx, by)`.
    pub fn set_block(&mut self, bx: usize, by: usize, block: &[Rgb; BLOCK_SIZE * BLOCK_SIZE]) {
        for dy in 0..BLOCK_SIZE {
            let start = (by * BLOCK_SIZE + dy) * self.width + bx * BLOCK_SIZE;
            self.pixels[start..start + BLOCK_SIZE]
                .copy_from_slice(&block[dy * BLOCK_SIZE..(dy + 1) * BLOCK_SIZE]);
        }
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, `width * height * 3` long.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            rgb.extend_from_slice(&p.channels());
        }
        rgb
    }
}
