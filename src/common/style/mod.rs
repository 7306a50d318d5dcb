//! Common style and formatting types.
//!
//! This module provides the color value types used by chart styling.

// Submodule declarations
pub mod color;

// Re-exports
pub use color::{HexColor, RGBColor};
