use std::fmt;

use crate::common::error::{Error, Result};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use chartml::common::RGBColor;
///
/// let red = RGBColor::new(255, 0, 0);
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// assert_eq!(red.to_hex(), "FF0000");
/// assert_eq!(blue.b, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a six digit hex string (`RRGGBB`, optional `#`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Color value written to `<a:srgbClr val=".."/>`.
///
/// The documented contract is an `RRGGBB` triplet, but [`HexColor::new`]
/// stores the string unchanged. Use [`HexColor::parse_strict`] to opt into
/// validation.
///
/// # Examples
///
/// ```rust
/// use chartml::common::HexColor;
///
/// let loose = HexColor::new("ff00aa");
/// assert_eq!(loose.as_str(), "ff00aa");
///
/// assert!(HexColor::parse_strict("FF00AA").is_ok());
/// assert!(HexColor::parse_strict("red").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Wrap a color string without validating it.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse a color, requiring exactly six hex digits.
    ///
    /// The stored value is upper-cased so `ff0000` and `FF0000` serialize the same.
    pub fn parse_strict(value: &str) -> Result<Self> {
        RGBColor::from_hex(value)
            .filter(|_| !value.starts_with('#'))
            .map(Self::from)
            .ok_or_else(|| Error::invalid_value("color", value, "expected six hex digits RRGGBB"))
    }

    /// The raw color string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RGBColor> for HexColor {
    fn from(color: RGBColor) -> Self {
        Self(color.to_hex())
    }
}

impl From<&str> for HexColor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HexColor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(RGBColor::from_hex("#00FF7f"), Some(RGBColor::new(0, 255, 127)));
        assert_eq!(RGBColor::from_hex("00FF7"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("+F0000"), None);
    }

    #[test]
    fn test_permissive_color_keeps_input() {
        assert_eq!(HexColor::new("not a color").as_str(), "not a color");
        assert_eq!(HexColor::from("00ff00").to_string(), "00ff00");
    }

    #[test]
    fn test_strict_color_normalizes_case() {
        let color = HexColor::parse_strict("ff8000").unwrap();
        assert_eq!(color.as_str(), "FF8000");
    }

    #[test]
    fn test_strict_color_rejects_bad_input() {
        for bad in ["", "#FF0000", "FF00", "FF00001", "ZZZZZZ"] {
            let err = HexColor::parse_strict(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidValue { .. }), "{bad} accepted");
        }
    }

    #[test]
    fn test_from_rgb() {
        assert_eq!(HexColor::from(RGBColor::new(1, 2, 255)).as_str(), "0102FF");
    }
}
