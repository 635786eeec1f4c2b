use std::io::Cursor;
use std::path::Path;

use zx_dither::Raster;

use crate::error::ConvertError;

/// Decode PNG bytes into an RGB raster.
///
/// Palette, 16-bit and low-bit-depth images are normalized to 8-bit
/// channels. Greyscale is expanded to RGB and alpha is dropped.
pub fn decode_png(bytes: &[u8]) -> Result<Raster, ConvertError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ConvertError::Decode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];
    let (width, height) = (info.width as usize, info.height as usize);

    let rgb: Vec<u8> = match info.color_type {
        png::ColorType::Rgb => data.to_vec(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0]])
            .collect(),
        other => {
            return Err(ConvertError::UnsupportedPng(format!(
                "colour type {other:?} after normalization"
            )))
        }
    };

    if rgb.len() != width * height * 3 {
        return Err(ConvertError::Decode(format!(
            "expected {} bytes of pixel data, got {}",
            width * height * 3,
            rgb.len()
        )));
    }
    Ok(Raster::from_rgb_bytes(width, height, &rgb))
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<Raster, ConvertError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode a raster as an 8-bit RGB PNG.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width() as u32, raster.height() as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(&raster.to_rgb_bytes())
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
