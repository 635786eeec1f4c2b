use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use zx_dither::{
    ColourMode, Conversion, ConversionOptions, Converter, PreprocessOptions, Raster,
};

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::services::png_io::{encode_png, read_png};

/// Pixel count of one colour in the final image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColourCount {
    /// Colour as `#RRGGBB`
    pub colour: String,
    pub pixels: usize,
}

/// Summary of one conversion, written as `<stem>.json` on request
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub options: ConversionOptions,
    pub preprocess: PreprocessOptions,
    /// Every file written, report excluded
    pub outputs: Vec<PathBuf>,
    /// Final image colours, most frequent first
    pub histogram: Vec<ColourCount>,
    /// Size of the `.scr` output, when one was written
    pub scr_bytes: Option<usize>,
}

/// Converts PNG files to Spectrum previews and SCR dumps
pub struct ConversionService {
    config: AppConfig,
    converter: Converter,
}

impl ConversionService {
    pub fn new(config: AppConfig) -> Self {
        let mut options = config.conversion.clone();
        options.export_screen |= config.output.scr;
        let converter = Converter::new(options).with_preprocess(config.preprocess.clone());
        Self { config, converter }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the core pipeline on an in-memory raster
    pub fn convert_raster(&self, input: &Raster) -> Result<Conversion, ConvertError> {
        let start = Instant::now();
        let prepared = self.converter.preprocess(input);
        tracing::debug!(
            width = prepared.width(),
            height = prepared.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Preprocessed"
        );

        let start = Instant::now();
        let conversion = self.converter.convert(prepared)?;
        tracing::debug!(
            mode = %conversion.colour_mode(),
            dither = %self.converter.options().dither,
            images = conversion.images().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Converted"
        );
        Ok(conversion)
    }

    /// Render a finished conversion as ROM glyph text
    pub fn encode_text(&self, conversion: &Conversion) -> String {
        self.converter.encode_text(conversion)
    }

    /// Encode a finished conversion as SCR bytes
    pub fn encode_scr(&self, conversion: &Conversion) -> Result<Vec<u8>, ConvertError> {
        Ok(self.converter.encode_scr(conversion)?)
    }

    /// Convert `input` and write the configured outputs.
    ///
    /// Files go to `output_dir`, else the configured directory, else next
    /// to the input.
    pub fn convert_file(
        &self,
        input: &Path,
        output_dir: Option<&Path>,
    ) -> Result<ConversionReport, ConvertError> {
        let raster = read_png(input)?;
        tracing::debug!(
            path = %input.display(),
            width = raster.width(),
            height = raster.height(),
            "Decoded input"
        );

        let conversion = self.convert_raster(&raster)?;

        let dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| self.config.output.dir.clone())
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        std::fs::create_dir_all(&dir)?;
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("screen")
            .to_string();

        let mut outputs = Vec::new();

        if self.config.output.preview {
            let path = dir.join(format!("{stem}.png"));
            write_file(&path, &encode_png(conversion.final_image().raster())?)?;
            outputs.push(path);

            if conversion.colour_mode() == ColourMode::GigaScreen {
                for (i, image) in conversion.supporting_images().iter().enumerate() {
                    let path = dir.join(format!("{stem}-screen{}.png", i + 1));
                    write_file(&path, &encode_png(image.raster())?)?;
                    outputs.push(path);
                }
            }
        }

        let mut scr_bytes = None;
        if self.config.output.scr {
            let scr = self.encode_scr(&conversion)?;
            let path = dir.join(format!("{stem}.scr"));
            write_file(&path, &scr)?;
            scr_bytes = Some(scr.len());
            outputs.push(path);
        }

        if self.config.output.text {
            let path = dir.join(format!("{stem}.txt"));
            write_file(&path, self.converter.encode_text(&conversion).as_bytes())?;
            outputs.push(path);
        }

        let report = ConversionReport {
            input: input.to_path_buf(),
            width: raster.width(),
            height: raster.height(),
            options: self.converter.options().clone(),
            preprocess: self.converter.preprocess_options().clone(),
            outputs,
            histogram: conversion
                .histogram()
                .into_iter()
                .map(|(c, pixels)| ColourCount {
                    colour: c.to_string(),
                    pixels,
                })
                .collect(),
            scr_bytes,
        };

        if self.config.output.report {
            let path = dir.join(format!("{stem}.json"));
            write_file(&path, serde_json::to_string_pretty(&report)?.as_bytes())?;
        }

        Ok(report)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zx_dither::{GigaScreenStrategy, Rgb};

    #[test]
    fn test_scr_output_enables_export_screen() {
        let mut config = AppConfig::default();
        config.output.scr = true;
        config.conversion.giga_strategy = GigaScreenStrategy::Mixed;
        let service = ConversionService::new(config);
        assert!(service.converter.options().export_screen);
        assert!(service.converter.options().reorders_screens());
    }

    #[test]
    fn test_convert_raster_scales_to_screen() {
        let service = ConversionService::new(AppConfig::default());
        let conversion = service
            .convert_raster(&Raster::new(64, 48, Rgb::new(30, 60, 200)))
            .unwrap();
        let raster = conversion.final_image().raster();
        assert_eq!((raster.width(), raster.height()), (256, 192));
        assert_eq!(service.encode_scr(&conversion).unwrap().len(), 6912);
        assert_eq!(service.encode_text(&conversion).lines().count(), 24);
    }
}
