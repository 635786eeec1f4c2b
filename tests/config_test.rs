//! Config file loading as the CLI sees it.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zx_dither::{ColourMode, DitherAlgorithm, GigaScreenStrategy, HsbOption, Scaling};
use zx_screen::error::ConfigError;
use zx_screen::models::AppConfig;
use zx_screen::services::ConversionService;

#[test]
fn test_sample_config_parses() {
    let config = AppConfig::from_yaml(SAMPLE_YAML).unwrap();

    assert_eq!(config.conversion.dither, DitherAlgorithm::BayerFourByFour);
    assert_eq!(config.conversion.colour_mode, ColourMode::GigaScreen);
    assert_eq!(config.conversion.giga_strategy, GigaScreenStrategy::Mixed);
    assert_eq!(config.conversion.hsb_option, HsbOption::HueSaturation);
    assert!(config.conversion.serpentine);
    assert_eq!(config.conversion.intensity, 0.5);
    assert_eq!(config.preprocess.brightness, -8.0);
    assert_eq!(config.preprocess.scaling, Scaling::WidthProportional);
    assert!(config.output.scr);
    assert!(!config.output.report);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, SAMPLE_YAML).unwrap();

    let config = AppConfig::load(Some(&path));
    assert_eq!(config.conversion.colour_mode, ColourMode::GigaScreen);
}

#[test]
fn test_parse_failure_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "conversion: [not, a, map]\n").unwrap();

    assert!(matches!(AppConfig::from_file(&path), Err(ConfigError::Parse(_))));
    assert_eq!(AppConfig::load(Some(&path)), AppConfig::default());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = AppConfig::from_yaml("conversion:\n  shimmer: 3\n  serpentine: true\n").unwrap();
    let mut expected = AppConfig::default();
    expected.conversion.serpentine = true;
    assert_eq!(config, expected);
}

#[test]
fn test_default_yaml_round_trips() {
    let yaml = AppConfig::default().to_yaml().unwrap();
    assert!(yaml.contains("dither: atkinson"));
    assert!(yaml.contains("attribute: favour-half-bright"));
    assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), AppConfig::default());
}

#[test]
fn test_sample_config_converts_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "cfg", &gradient(320, 240));

    let config = AppConfig::from_yaml(SAMPLE_YAML).unwrap();
    let service = ConversionService::new(config);
    assert!(service.config().output.scr);
    let report = service.convert_file(&input, None).unwrap();

    assert_eq!(report.scr_bytes, Some(2 * zx_dither::SCR_SIZE));
    assert_png_file(&dir.path().join("cfg-screen1.png"), 256, 192);
}
