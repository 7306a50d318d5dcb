//! Office Open XML (OOXML) markup writers.
//!
//! Only DrawingML chart markup is produced here; packaging the resulting
//! parts into a `.xlsx`/`.docx`/`.pptx` container is left to the caller.
pub mod charts;

// Re-export commonly used chart types
pub use charts::{LineSeries, LineSeriesOptions, XmlSink};
