//! Color conversion from a canonical hex string to hex, RGB, or HSL text.
//!
//! None of these functions fail: input that cannot be converted is echoed
//! back unchanged. Call [`is_valid_hex_color`] first where rejection matters.

// Rounded HSL components are small non-negative values
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{ColorFormat, RgbColor};

/// Matches `#RRGGBB` or `#RGB`
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex color pattern is valid")
});

/// Returns true iff `s` is `#` followed by exactly 6 or 3 hex digits.
///
/// # Examples
///
/// ```
/// use fieldkit::services::color::is_valid_hex_color;
///
/// assert!(is_valid_hex_color("#ff0000"));
/// assert!(is_valid_hex_color("#fff"));
/// assert!(!is_valid_hex_color("ff0000"));
/// assert!(!is_valid_hex_color("#ggg000"));
/// ```
#[must_use]
pub fn is_valid_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// Expands `#rgb` to `#rrggbb`. Any other input is returned unchanged.
#[must_use]
pub fn expand_short_hex(hex: &str) -> String {
    match hex.strip_prefix('#') {
        Some(digits) if digits.len() == 3 && digits.chars().all(|c| c.is_ascii_hexdigit()) => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            out
        }
        _ => hex.to_string(),
    }
}

/// Clamps alpha into [0, 1]; NaN is treated as fully opaque.
fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

/// Checks a user-supplied alpha; unlike conversion, this does not clamp.
///
/// # Errors
///
/// Returns [`ConfigError::AlphaOutOfRange`] for NaN or values outside [0, 1].
pub fn validate_alpha(alpha: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(ConfigError::AlphaOutOfRange(alpha.to_string()))
    }
}

/// Parses exactly six hex digits with an optional leading `#`.
///
/// The short form is left to [`expand_short_hex`].
fn parse_full_hex(hex: &str) -> Option<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    RgbColor::from_hex(digits).ok()
}

/// Renders `rgb(R, G, B)`, or `rgba(R, G, B, A)` when alpha is given.
///
/// Accepts 6 hex digits with or without a leading `#`; anything else,
/// including the 3 digit form, is returned unchanged.
#[must_use]
pub fn hex_to_rgb(hex: &str, alpha: Option<f64>) -> String {
    let Some(color) = parse_full_hex(hex) else {
        debug!(input = hex, "not a hex color, passing through");
        return hex.to_string();
    };

    match alpha {
        Some(a) => format!(
            "rgba({}, {}, {}, {})",
            color.r,
            color.g,
            color.b,
            clamp_alpha(a)
        ),
        None => format!("rgb({}, {}, {})", color.r, color.g, color.b),
    }
}

/// Renders `hsl(H, S%, L%)`, or `hsla(H, S%, L%, A)` when alpha is given.
///
/// Components are rounded to the nearest integer. Input other than 6 hex
/// digits (optionally after `#`) is returned unchanged.
#[must_use]
pub fn hex_to_hsl(hex: &str, alpha: Option<f64>) -> String {
    let Some(color) = parse_full_hex(hex) else {
        debug!(input = hex, "not a hex color, passing through");
        return hex.to_string();
    };

    let hsl = color.to_hsl();
    let h = hsl.h.round() as u16;
    let s = (hsl.s * 100.0).round() as u8;
    let l = (hsl.l * 100.0).round() as u8;

    match alpha {
        Some(a) => format!("hsla({h}, {s}%, {l}%, {})", clamp_alpha(a)),
        None => format!("hsl({h}, {s}%, {l}%)"),
    }
}

/// Converts a hex color into the requested output format.
///
/// - Input not starting with `#` (including the empty string) is returned unchanged.
/// - `Hex` output returns the input unchanged; alpha has no hex representation here.
/// - `#rgb` input is expanded before RGB/HSL conversion.
///
/// # Examples
///
/// ```
/// use fieldkit::models::ColorFormat;
/// use fieldkit::services::color::convert_color;
///
/// assert_eq!(convert_color("#ff0000", ColorFormat::Rgb, None), "rgb(255, 0, 0)");
/// assert_eq!(convert_color("#ff0000", ColorFormat::Hsl, None), "hsl(0, 100%, 50%)");
/// assert_eq!(convert_color("#ff0000", ColorFormat::Rgb, Some(0.5)), "rgba(255, 0, 0, 0.5)");
/// assert_eq!(convert_color("not-a-color", ColorFormat::Rgb, None), "not-a-color");
/// ```
#[must_use]
pub fn convert_color(hex: &str, format: ColorFormat, alpha: Option<f64>) -> String {
    if !hex.starts_with('#') {
        return hex.to_string();
    }

    match format {
        ColorFormat::Hex => hex.to_string(),
        ColorFormat::Rgb => hex_to_rgb(&expand_short_hex(hex), alpha),
        ColorFormat::Hsl => hex_to_hsl(&expand_short_hex(hex), alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_hex_color() {
        assert!(is_valid_hex_color("#ff0000"));
        assert!(is_valid_hex_color("#FFF"));
        assert!(is_valid_hex_color("#AbC123"));
        assert!(!is_valid_hex_color("ff0000"));
        assert!(!is_valid_hex_color("#ggg000"));
        assert!(!is_valid_hex_color("#ffff"));
        assert!(!is_valid_hex_color("#ff00001"));
        assert!(!is_valid_hex_color(""));
        assert!(!is_valid_hex_color(" #ff0000"));
    }

    #[test]
    fn test_expand_short_hex() {
        assert_eq!(expand_short_hex("#fff"), "#ffffff");
        assert_eq!(expand_short_hex("#1A2"), "#11AA22");
        assert_eq!(expand_short_hex("#123456"), "#123456");
        assert_eq!(expand_short_hex("#xyz"), "#xyz");
        assert_eq!(expand_short_hex("fff"), "fff");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#00ff7f", None), "rgb(0, 255, 127)");
        assert_eq!(hex_to_rgb("00ff7f", None), "rgb(0, 255, 127)");
        assert_eq!(hex_to_rgb("#000000", Some(1.0)), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgb("#000000", Some(0.25)), "rgba(0, 0, 0, 0.25)");
    }

    #[test]
    fn test_hex_to_rgb_clamps_alpha() {
        assert_eq!(hex_to_rgb("#ffffff", Some(1.7)), "rgba(255, 255, 255, 1)");
        assert_eq!(hex_to_rgb("#ffffff", Some(-0.3)), "rgba(255, 255, 255, 0)");
        assert_eq!(hex_to_rgb("#ffffff", Some(f64::NAN)), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_hex_to_rgb_passthrough() {
        assert_eq!(hex_to_rgb("#12345", None), "#12345");
        assert_eq!(hex_to_rgb("red", Some(0.5)), "red");
    }

    #[test]
    fn test_short_hex_needs_expanding_first() {
        assert_eq!(hex_to_rgb("fff", None), "fff");
        assert_eq!(hex_to_rgb("#fff", Some(0.5)), "#fff");
        assert_eq!(hex_to_hsl("#f00", None), "#f00");
        assert_eq!(hex_to_rgb(&expand_short_hex("#fff"), None), "rgb(255, 255, 255)");
        assert_eq!(hex_to_hsl(&expand_short_hex("#f00"), None), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_hex_to_hsl() {
        assert_eq!(hex_to_hsl("#ff0000", None), "hsl(0, 100%, 50%)");
        assert_eq!(hex_to_hsl("#00ff00", None), "hsl(120, 100%, 50%)");
        assert_eq!(hex_to_hsl("#0000ff", None), "hsl(240, 100%, 50%)");
        assert_eq!(hex_to_hsl("#ffffff", None), "hsl(0, 0%, 100%)");
        assert_eq!(hex_to_hsl("#000000", None), "hsl(0, 0%, 0%)");
        assert_eq!(hex_to_hsl("#808080", None), "hsl(0, 0%, 50%)");
        assert_eq!(hex_to_hsl("#2196f3", None), "hsl(207, 90%, 54%)");
        assert_eq!(hex_to_hsl("#ff0000", Some(0.5)), "hsla(0, 100%, 50%, 0.5)");
    }

    #[test]
    fn test_convert_color_dispatch() {
        assert_eq!(convert_color("#ff0000", ColorFormat::Rgb, None), "rgb(255, 0, 0)");
        assert_eq!(convert_color("#ff0000", ColorFormat::Hsl, None), "hsl(0, 100%, 50%)");
        assert_eq!(
            convert_color("#ff0000", ColorFormat::Rgb, Some(0.5)),
            "rgba(255, 0, 0, 0.5)"
        );
    }

    #[test]
    fn test_convert_color_hex_passthrough_ignores_alpha() {
        assert_eq!(convert_color("#123abc", ColorFormat::Hex, None), "#123abc");
        assert_eq!(convert_color("#123abc", ColorFormat::Hex, Some(0.3)), "#123abc");
        assert_eq!(convert_color("#fff", ColorFormat::Hex, None), "#fff");
    }

    #[test]
    fn test_convert_color_expands_short_hex() {
        assert_eq!(convert_color("#fff", ColorFormat::Rgb, None), "rgb(255, 255, 255)");
        assert_eq!(convert_color("#f00", ColorFormat::Hsl, None), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_convert_color_non_hex_passthrough() {
        assert_eq!(convert_color("not-a-color", ColorFormat::Rgb, None), "not-a-color");
        assert_eq!(convert_color("", ColorFormat::Hsl, Some(0.5)), "");
        assert_eq!(
            convert_color("rgb(1, 2, 3)", ColorFormat::Hsl, None),
            "rgb(1, 2, 3)"
        );
        assert_eq!(convert_color("#zzzzzz", ColorFormat::Rgb, None), "#zzzzzz");
    }

    #[test]
    fn test_validate_alpha() {
        assert_eq!(validate_alpha(0.0), Ok(0.0));
        assert_eq!(validate_alpha(1.0), Ok(1.0));
        assert_eq!(
            validate_alpha(1.5),
            Err(ConfigError::AlphaOutOfRange("1.5".to_string()))
        );
        assert!(validate_alpha(f64::NAN).is_err());
    }
}
