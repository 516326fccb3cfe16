//! Color values and conversions between hex, RGB and HSL notations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Hex color must start with '#': {0}")]
    MissingHash(String),

    #[error("Hex color must have exactly 6 digits: {0}")]
    InvalidLength(String),

    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as `#RRGGBB` with uppercase digits.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Applies `f` to each channel.
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Parses a `#RRGGBB` string.
///
/// Both digit cases are accepted. Anything else is rejected rather than
/// coerced, so a bad value never turns into a silent black or NaN channel.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;

    if digits.len() != 6 {
        return Err(ColorError::InvalidLength(hex.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }

    let channel = |offset: usize| {
        u8::from_str_radix(&digits[offset..offset + 2], 16)
            .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Converts RGB to HSL using normalized channels.
///
/// Lightness is the midpoint of the max and min channel; saturation depends
/// on whether lightness is above one half; hue comes from the max channel
/// sector. All three are rounded to the nearest integer.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: ((sector * 60.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// A single resolved color in every notation the API exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTriple {
    pub hex: String,
    pub rgb: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub hsl: String,
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl From<Rgb> for ColorTriple {
    fn from(rgb: Rgb) -> Self {
        let hsl = rgb.to_hsl();
        Self {
            hex: rgb.to_hex(),
            rgb: rgb.to_string(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            hsl: hsl.to_string(),
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

impl FromStr for ColorTriple {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_parses_both_cases() {
        assert_eq!(hex_to_rgb("#F57D31").unwrap(), Rgb::new(245, 125, 49));
        assert_eq!(hex_to_rgb("#f57d31").unwrap(), Rgb::new(245, 125, 49));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert!(matches!(
            hex_to_rgb("F57D31"),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            hex_to_rgb("#F57D3"),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            hex_to_rgb("#F57D3100"),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            hex_to_rgb("#G57D31"),
            Err(ColorError::InvalidDigit(_))
        ));
        assert!(matches!(
            hex_to_rgb("#+F7D31"),
            Err(ColorError::InvalidDigit(_))
        ));
        // Multi-byte characters must not panic on slicing.
        assert!(hex_to_rgb("#ééé").is_err());
    }

    #[test]
    fn test_hex_round_trip_all_channel_values() {
        for v in 0..=255u8 {
            let rgb = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(hex_to_rgb(&rgb.to_hex()).unwrap(), rgb);
        }
    }

    #[test]
    fn test_rgb_to_hex_is_uppercase_and_padded() {
        assert_eq!(rgb_to_hex(0, 10, 255), "#000AFF");
    }

    #[test]
    fn test_rgb_to_hsl_extremes() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0, s: 0, l: 100 });
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(255, 0, 255), Hsl { h: 300, s: 100, l: 50 });
    }

    #[test]
    fn test_rgb_to_hsl_fire() {
        assert_eq!(rgb_to_hsl(245, 125, 49), Hsl { h: 23, s: 91, l: 58 });
    }

    #[test]
    fn test_color_triple_from_hex() {
        let triple: ColorTriple = "#f57d31".parse().unwrap();
        assert_eq!(triple.hex, "#F57D31");
        assert_eq!(triple.rgb, "rgb(245, 125, 49)");
        assert_eq!((triple.r, triple.g, triple.b), (245, 125, 49));
        assert_eq!(triple.hsl, "hsl(23, 91%, 58%)");
    }
}
