//! Colour mode selection.

use serde::{Deserialize, Serialize};

use crate::named::Named;

/// How pixels are quantized and which post-pass handles attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourMode {
    /// 15-colour palette with two colours per 8×8 attribute block.
    #[default]
    FullPalette,
    /// Averaged colours of two alternating screens.
    #[serde(rename = "gigascreen")]
    GigaScreen,
    /// Black/white by channel-sum threshold, then tinted with ink and paper.
    Monochrome,
}

impl Named for ColourMode {
    const ALL: &'static [Self] = &[Self::FullPalette, Self::GigaScreen, Self::Monochrome];

    fn name(self) -> &'static str {
        match self {
            Self::FullPalette => "full-palette",
            Self::GigaScreen => "gigascreen",
            Self::Monochrome => "monochrome",
        }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for &mode in ColourMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.name()));
            assert_eq!(ColourMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(ColourMode::from_name("GigaScreen"), Some(ColourMode::GigaScreen));
        assert_eq!(ColourMode::from_name("sepia"), None);
    }
}
