use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zx_dither::{ConversionOptions, PreprocessOptions};

use crate::error::ConfigError;

/// Default config file name used by `init` and the status page
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dithering, colour mode and attribute settings
    pub conversion: ConversionOptions,

    /// Scale, contrast, brightness and saturation applied before dithering
    pub preprocess: PreprocessOptions,

    /// Which files a conversion writes
    pub output: OutputSettings,
}

/// Output file selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output directory (defaults to the input file's directory)
    pub dir: Option<PathBuf>,

    /// Write `<stem>.scr`
    pub scr: bool,

    /// Write `<stem>.json`
    pub report: bool,

    /// Write `<stem>.txt`, one ROM glyph character per attribute block
    pub text: bool,

    /// Write `<stem>.png` (and the two screens in GigaScreen mode)
    pub preview: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: None,
            scr: false,
            report: false,
            text: false,
            preview: true,
        }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration, falling back to defaults on any failure.
    ///
    /// With no path, defaults are used silently.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    dither = %config.conversion.dither,
                    colour_mode = %config.conversion.colour_mode,
                    "Loaded configuration"
                );
                config
            }
            Err(e @ ConfigError::Read { .. }) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Config file path from `--config` or the `CONFIG_FILE` environment variable.
    pub fn resolve_path(cli: Option<PathBuf>) -> Option<PathBuf> {
        cli.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use zx_dither::{ColourMode, DitherAlgorithm, GigaScreenStrategy};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.conversion, ConversionOptions::default());
        assert_eq!(config.preprocess.scaling, zx_dither::Scaling::Screen);
        assert!(config.output.preview);
        assert!(!config.output.scr);
        assert!(config.output.dir.is_none());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
conversion:
  dither: floyd-steinberg
  colour-mode: gigascreen
  giga-strategy: mixed
preprocess:
  contrast: 1.2
output:
  scr: true
  text: true
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.conversion.dither, DitherAlgorithm::FloydSteinberg);
        assert_eq!(config.conversion.colour_mode, ColourMode::GigaScreen);
        assert_eq!(config.conversion.giga_strategy, GigaScreenStrategy::Mixed);
        assert!((config.preprocess.contrast - 1.2).abs() < f32::EPSILON);
        assert!(config.output.scr);
        assert!(config.output.text);
        assert!(config.output.preview);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_enum_name_is_error() {
        let result = AppConfig::from_yaml("conversion:\n  dither: sharpen\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = AppConfig::default();
        config.conversion.colour_mode = ColourMode::Monochrome;
        config.conversion.mono_paper = 5;
        config.output.dir = Some(PathBuf::from("out"));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("colour-mode: monochrome"));
        assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_path_prefers_cli() {
        let path = AppConfig::resolve_path(Some(PathBuf::from("cli.yaml")));
        assert_eq!(path, Some(PathBuf::from("cli.yaml")));
    }
}
