//! Common types and utilities shared across the chart writers.
//!
//! Errors, XML escaping and color values live here so that the OOXML
//! modules only deal with markup structure.

// Submodule declarations
pub mod error;
pub mod style;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{HexColor, RGBColor};
