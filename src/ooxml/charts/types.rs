//! Chart value types.
//!
//! Closed vocabularies and bounded values used by series styling. Each type
//! knows its own `val` attribute form so the writers never format them by hand.

use std::fmt;
use std::str::FromStr;

use crate::common::error::{Error, Result};

/// Marker symbol for line series.
///
/// Mirrors `ST_MarkerStyle` plus a [`MarkerSymbol::Default`] sentinel, which
/// means "let the consuming application pick" and is expressed by leaving the
/// `<c:marker>` element out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkerSymbol {
    /// Renderer chooses the symbol
    #[default]
    Default,
    /// Automatic marker
    Auto,
    /// Circle marker
    Circle,
    /// Dash marker
    Dash,
    /// Diamond marker
    Diamond,
    /// Dot marker
    Dot,
    /// No marker
    None,
    /// Picture marker
    Picture,
    /// Plus marker
    Plus,
    /// Square marker
    Square,
    /// Star marker
    Star,
    /// Triangle marker
    Triangle,
    /// X marker
    X,
}

impl MarkerSymbol {
    /// Every recognized symbol, sentinel first.
    pub const ALL: [MarkerSymbol; 13] = [
        Self::Default,
        Self::Auto,
        Self::Circle,
        Self::Dash,
        Self::Diamond,
        Self::Dot,
        Self::None,
        Self::Picture,
        Self::Plus,
        Self::Square,
        Self::Star,
        Self::Triangle,
        Self::X,
    ];

    /// Returns the token for this symbol.
    ///
    /// For every variant except [`MarkerSymbol::Default`] this is the XML value.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Auto => "auto",
            Self::Circle => "circle",
            Self::Dash => "dash",
            Self::Diamond => "diamond",
            Self::Dot => "dot",
            Self::None => "none",
            Self::Picture => "picture",
            Self::Plus => "plus",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::X => "x",
        }
    }

    /// Whether this is the renderer-default sentinel.
    #[inline]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl FromStr for MarkerSymbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.xml_value() == s)
            .ok_or_else(|| {
                Error::invalid_value("marker_symbol", s, "not a recognized marker symbol")
            })
    }
}

impl fmt::Display for MarkerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_value())
    }
}

/// Marker size in points.
///
/// Always written as its canonical decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerSize(u32);

impl MarkerSize {
    /// Size used when none is configured.
    pub const DEFAULT: MarkerSize = MarkerSize(4);

    /// Create a marker size.
    #[inline]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    /// The numeric size.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for MarkerSize {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for MarkerSize {
    #[inline]
    fn from(size: u32) -> Self {
        Self(size)
    }
}

impl fmt::Display for MarkerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = itoa::Buffer::new();
        f.write_str(buffer.format(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_symbol_round_trips_tokens() {
        for symbol in MarkerSymbol::ALL {
            assert_eq!(symbol.xml_value().parse::<MarkerSymbol>().unwrap(), symbol);
        }
    }

    #[test]
    fn test_marker_symbol_rejects_unknown() {
        for bad in ["Circle", "triangles", "", " circle", "arrow"] {
            assert!(bad.parse::<MarkerSymbol>().is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_marker_symbol_default() {
        assert_eq!(MarkerSymbol::default(), MarkerSymbol::Default);
        assert!(MarkerSymbol::Default.is_default());
        assert!(!MarkerSymbol::Auto.is_default());
    }

    #[test]
    fn test_marker_size_display() {
        assert_eq!(MarkerSize::default().to_string(), "4");
        assert_eq!(MarkerSize::new(0).to_string(), "0");
        assert_eq!(MarkerSize::new(u32::MAX).to_string(), "4294967295");
    }
}
