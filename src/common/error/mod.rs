//! Unified error types for chartml.
//!
//! This module provides the single error type returned by series mutators,
//! options parsing and the chart writer.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
