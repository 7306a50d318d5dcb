//! chartml - DrawingML chart markup for Office Open XML documents
//!
//! This library renders chart series into the `c:` (DrawingML chart)
//! vocabulary used inside `.xlsx`, `.docx` and `.pptx` chart parts. It is
//! one node of a larger document model (workbook, worksheet, chart,
//! series): the caller owns the chart part and asks each series to append
//! its markup.
//!
//! # Features
//!
//! - **Line series**: color, markers, smoothing, category labels and values
//! - **Validated configuration**: typed builders, or loosely typed options
//!   (including YAML documents) validated at the boundary
//! - **Append-only output**: markup is written into any [`ooxml::XmlSink`]
//!   (a `String`, a byte buffer, or anything implementing the trait)
//!
//! # Example
//!
//! ```rust
//! use chartml::ooxml::charts::{LineSeries, MarkerSymbol};
//!
//! let mut series = LineSeries::new(0).with_color("FF0000");
//! series.set_option("show_marker", true)?;
//! series.set_option("marker_symbol", "circle")?;
//! series.set_option("marker_size", 6)?;
//! assert_eq!(series.marker_symbol(), MarkerSymbol::Circle);
//!
//! let mut xml = String::new();
//! series.to_xml_string(&mut xml);
//! assert!(xml.contains(r#"<c:marker><c:symbol val="circle"/><c:size val="6"/></c:marker>"#));
//! # Ok::<(), chartml::Error>(())
//! ```

/// Shared errors, XML escaping and color values
pub mod common;

/// OOXML (Office Open XML) markup writers
///
/// This module provides the DrawingML chart series writers.
pub mod ooxml;

/// Opt-in `tracing` subscriber setup
pub mod telemetry;

// Re-export commonly used types for convenience
pub use common::{Error, HexColor, Result};
pub use ooxml::charts::{
    AxisDataSource, LineSeries, LineSeriesOptions, MarkerSize, MarkerSymbol, NumericDataSource,
};
