//! Color output formats and the color value handed to form state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::services::color::convert_color;

/// Textual representation a color field emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb` passthrough
    #[default]
    Hex,
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`
    Rgb,
    /// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`
    Hsl,
}

impl ColorFormat {
    /// All formats, in display order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Lowercase name used in configuration files and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(ConfigError::InvalidColorFormat(s.to_string())),
        }
    }
}

/// A color with its canonical hex source, optional alpha, and output format.
///
/// The hex string is the single source of truth; [`ColorValue::render`]
/// derives the displayed/stored text from it at conversion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    /// Canonical `#rrggbb` (or `#rgb`) source
    pub hex: String,
    /// Opacity in [0, 1], when alpha output is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Output format
    #[serde(default)]
    pub format: ColorFormat,
}

impl ColorValue {
    /// Creates an opaque color value in hex format.
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            alpha: None,
            format: ColorFormat::Hex,
        }
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the alpha channel.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Renders the value in its output format.
    #[must_use]
    pub fn render(&self) -> String {
        convert_color(&self.hex, self.format, self.alpha)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("hex".parse::<ColorFormat>().unwrap(), ColorFormat::Hex);
        assert_eq!("RGB".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        assert_eq!(" hsl ".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(ConfigError::InvalidColorFormat("cmyk".to_string()))
        );
    }

    #[test]
    fn test_format_serde_lowercase() {
        let json = serde_json::to_string(&ColorFormat::Hsl).unwrap();
        assert_eq!(json, "\"hsl\"");
        let parsed: ColorFormat = serde_json::from_str("\"rgb\"").unwrap();
        assert_eq!(parsed, ColorFormat::Rgb);
    }

    #[test]
    fn test_color_value_render() {
        let value = ColorValue::new("#ff0000").with_format(ColorFormat::Rgb);
        assert_eq!(value.render(), "rgb(255, 0, 0)");

        let value = value.with_alpha(0.5);
        assert_eq!(value.to_string(), "rgba(255, 0, 0, 0.5)");

        // Hex output ignores alpha
        let value = ColorValue::new("#123abc").with_alpha(0.2);
        assert_eq!(value.render(), "#123abc");
    }
}
