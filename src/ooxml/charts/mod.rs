//! Chart support for Office Open XML formats.
//!
//! This module renders line chart series (`<c:ser>` inside `<c:lineChart>`)
//! for DrawingML chart parts. It includes:
//!
//! - Value types for marker symbols, marker sizes and colors
//! - Category and value data sources
//! - The [`LineSeries`] model with validated configuration
//! - An [`XmlSink`] abstraction the markup is appended to
//!
//! # Example
//!
//! ```rust
//! use chartml::ooxml::charts::{AxisDataSource, LineSeries, MarkerSymbol, NumericDataSource};
//!
//! let series = LineSeries::new(0)
//!     .with_title("Q1 Sales")
//!     .with_color("4472C4")
//!     .with_markers(MarkerSymbol::Circle, 6)
//!     .with_marker_color("ED7D31")
//!     .with_labels(AxisDataSource::from_values(vec![
//!         "Jan".to_string(),
//!         "Feb".to_string(),
//!         "Mar".to_string(),
//!     ]))
//!     .with_data(NumericDataSource::from_values(vec![100.0, 150.0, 200.0]));
//!
//! let mut xml_output = Vec::new();
//! chartml::ooxml::charts::writer::write_line_series(&mut xml_output, &series)?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod data_source;
pub mod line_series;
pub mod models;
pub mod options;
pub mod series;
pub mod sink;
pub mod types;
pub mod validation;
pub mod writer;

pub use data_source::{AxisDataSource, DataSource, DataSourceKind, NumericDataSource, XmlFragment};
pub use line_series::LineSeries;
pub use models::{DataSourceRef, RichText, TitleText};
pub use options::LineSeriesOptions;
pub use series::SeriesCommon;
pub use sink::XmlSink;
pub use types::{MarkerSize, MarkerSymbol};
pub use validation::OptionValue;
