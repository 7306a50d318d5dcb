//! Construction options for line series.
//!
//! Options can be filled in directly or loaded from a YAML document (JSON
//! documents parse too, being YAML). Loosely typed keys are kept as
//! [`OptionValue`] here and validated when the series is built, so a bad
//! value is reported with the key it came from.
//!
//! ```rust
//! use chartml::ooxml::charts::{LineSeries, LineSeriesOptions};
//!
//! let options = LineSeriesOptions::from_yaml(
//!     "title: Revenue\nshow_marker: true\nmarker_symbol: circle\nmarker_size: 6\n",
//! )?;
//! let series = LineSeries::from_options(options)?;
//! assert_eq!(series.marker_size().get(), 6);
//! # Ok::<(), chartml::common::Error>(())
//! ```

use serde::Deserialize;

use crate::common::error::{Error, Result};
use crate::ooxml::charts::validation::OptionValue;

/// Options recognized when building a [`LineSeries`](super::LineSeries).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineSeriesOptions {
    /// Series index (`c:idx`)
    pub index: u32,
    /// Legend order (`c:order`); defaults to `index`
    pub order: Option<u32>,
    /// Literal title, or the cached text when `title_ref` is set
    pub title: Option<String>,
    /// Cell reference holding the title
    pub title_ref: Option<String>,
    /// Line color, written as given
    pub color: Option<String>,
    /// Whether markers are drawn (boolean)
    pub show_marker: Option<OptionValue>,
    /// Marker symbol token
    pub marker_symbol: Option<OptionValue>,
    /// Marker color, written as given
    pub marker_color: Option<String>,
    /// Marker size (non-negative integer)
    pub marker_size: Option<OptionValue>,
    /// Whether the line is smoothed (boolean)
    pub smooth: Option<OptionValue>,
    /// Literal category labels, or the cached labels when `labels_ref` is set
    pub labels: Option<Vec<String>>,
    /// Cell range holding the category labels
    pub labels_ref: Option<String>,
    /// Literal values, or the cached values when `data_ref` is set
    pub data: Option<Vec<f64>>,
    /// Cell range holding the values
    pub data_ref: Option<String>,
    /// Number format for the values
    pub format_code: Option<String>,
}

impl LineSeriesOptions {
    /// Create empty options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse line series options: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let options = LineSeriesOptions::from_yaml("{}").unwrap();
        assert_eq!(options, LineSeriesOptions::new());
    }

    #[test]
    fn test_yaml_scalars_keep_their_types() {
        let options = LineSeriesOptions::from_yaml(
            "index: 3\nshow_marker: true\nmarker_size: 6\nmarker_symbol: diamond\nsmooth: false\n",
        )
        .unwrap();
        assert_eq!(options.index, 3);
        assert_eq!(options.show_marker, Some(OptionValue::Bool(true)));
        assert_eq!(options.marker_size, Some(OptionValue::Int(6)));
        assert_eq!(
            options.marker_symbol,
            Some(OptionValue::Text("diamond".to_string()))
        );
        assert_eq!(options.smooth, Some(OptionValue::Bool(false)));
    }

    #[test]
    fn test_yaml_sequences() {
        let options = LineSeriesOptions::from_yaml(
            "labels: [Jan, Feb]\ndata: [1, 2.5]\ndata_ref: Sheet1!$B$2:$B$3\n",
        )
        .unwrap();
        assert_eq!(options.labels, Some(vec!["Jan".to_string(), "Feb".to_string()]));
        assert_eq!(options.data, Some(vec![1.0, 2.5]));
        assert_eq!(options.data_ref.as_deref(), Some("Sheet1!$B$2:$B$3"));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = LineSeriesOptions::from_yaml("marker_shape: circle\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
