//! Packed ARGB colours.
//!
//! Every pixel buffer in softdesk stores one `u32` per pixel laid out as
//! `0xAARRGGBB`. [`Color`] is a thin typed wrapper over that word so theme
//! palettes and configuration can name colours without losing the exact bit
//! pattern the blitter writes.
//!
//! ```
//! use softdesk_core::types::Color;
//! use std::str::FromStr;
//!
//! let red = Color::from_str("#ff0000").unwrap();
//! assert_eq!(red.packed(), 0xFFFF0000);
//! assert!(red.is_opaque());
//! assert_eq!(Color::from_hex("#0000ff80").unwrap().alpha(), 0x80);
//! ```

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Error type for colour string parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#` or contains non-ASCII characters.
    #[error("Invalid hex color string format: '{0}'. Expected #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.")]
    InvalidHexFormat(String),

    /// A component is not a valid hexadecimal number.
    #[error("Invalid hex digit in '{input_str}': {source}")]
    InvalidHexDigit {
        input_str: String,
        #[source]
        source: ParseIntError,
    },

    /// Wrong number of digits after `#`.
    #[error("Invalid hex color string length: '{0}'. Expected 3, 4, 6, or 8 characters after '#'.")]
    InvalidHexLength(String),
}

/// A colour packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::from_rgba8(r, g, b, 0xFF)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// `(r, g, b, a)` channel bytes.
    pub const fn rgba8(self) -> (u8, u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8, (self.0 >> 24) as u8)
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    pub fn from_hex(hex_str: &str) -> Result<Self, ColorParseError> {
        let input = match hex_str.strip_prefix('#') {
            Some(rest) if rest.is_ascii() => rest,
            _ => return Err(ColorParseError::InvalidHexFormat(hex_str.to_string())),
        };

        let component = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|e| ColorParseError::InvalidHexDigit {
                input_str: s.to_string(),
                source: e,
            })
        };
        // Single hex digit, widened to a full byte (`f` -> `ff`).
        let nibble = |s: &str| component(s).map(|v| (v << 4) | v);

        match input.len() {
            3 => Ok(Color::from_rgb8(nibble(&input[0..1])?, nibble(&input[1..2])?, nibble(&input[2..3])?)),
            4 => Ok(Color::from_rgba8(
                nibble(&input[0..1])?,
                nibble(&input[1..2])?,
                nibble(&input[2..3])?,
                nibble(&input[3..4])?,
            )),
            6 => Ok(Color::from_rgb8(component(&input[0..2])?, component(&input[2..4])?, component(&input[4..6])?)),
            8 => Ok(Color::from_rgba8(
                component(&input[0..2])?,
                component(&input[2..4])?,
                component(&input[4..6])?,
                component(&input[6..8])?,
            )),
            _ => Err(ColorParseError::InvalidHexLength(hex_str.to_string())),
        }
    }

    /// `#rrggbbaa`, lowercase.
    pub fn to_hex_with_alpha(self) -> String {
        let (r, g, b, a) = self.rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s.trim())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_with_alpha())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_with_alpha())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(SerdeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#f00", 0xFFFF0000)]
    #[case("#F008", 0x88FF0000)]
    #[case("#12ab9C", 0xFF12AB9C)]
    #[case("#0000ff80", 0x800000FF)]
    fn test_color_from_hex(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(Color::from_hex(input).unwrap().packed(), expected);
    }

    #[test]
    fn test_color_from_hex_errors() {
        assert!(matches!(Color::from_hex("ff0000"), Err(ColorParseError::InvalidHexFormat(_))));
        assert!(matches!(Color::from_hex("#ff00"), Ok(_)));
        assert!(matches!(Color::from_hex("#ff000"), Err(ColorParseError::InvalidHexLength(_))));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHexDigit { .. })));
        assert!(matches!(Color::from_hex("#ü00"), Err(ColorParseError::InvalidHexFormat(_))));
    }

    #[test]
    fn test_color_channels() {
        let c = Color::from_rgba8(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.packed(), 0x44112233);
        assert_eq!(c.rgba8(), (0x11, 0x22, 0x33, 0x44));
        assert!(!c.is_opaque());
        assert!(c.with_alpha(0xFF).is_opaque());
        assert_eq!(c.with_alpha(0xFF).packed(), 0xFF112233);
    }

    #[test]
    fn test_color_display_round_trips_through_from_str() {
        let c = Color(0x80102030);
        assert_eq!(c.to_string(), "#10203080");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color(0xFF336699)).unwrap();
        assert_eq!(json, "\"#336699ff\"");
        let back: Color = serde_json::from_str("\"#369\"").unwrap();
        assert_eq!(back, Color(0xFF336699));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
