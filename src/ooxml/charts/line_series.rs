//! Line chart series.
//!
//! A [`LineSeries`] carries the styling of one line in a `<c:lineChart>`:
//! line color, marker glyph, smoothing, plus its category labels and values.
//! Serialization appends a complete `<c:ser>` element to an [`XmlSink`] in
//! the element order `CT_LineSer` requires:
//!
//! ```text
//! idx, order, tx?, spPr?, marker?, cat?, val?, smooth
//! ```
//!
//! # Example
//!
//! ```rust
//! use chartml::ooxml::charts::{LineSeries, MarkerSymbol, NumericDataSource};
//!
//! let series = LineSeries::new(0)
//!     .with_title("Temperature")
//!     .with_color("FF0000")
//!     .with_markers(MarkerSymbol::Circle, 6)
//!     .with_data(NumericDataSource::from_values(vec![12.0, 14.5, 13.0]));
//!
//! let mut xml = String::new();
//! series.to_xml_string(&mut xml);
//! assert!(xml.starts_with(r#"<c:ser><c:idx val="0"/>"#));
//! assert!(xml.ends_with(r#"<c:smooth val="0"/></c:ser>"#));
//! ```

use tracing::trace;

use crate::common::error::{Error, Result};
use crate::common::style::HexColor;
use crate::common::xml::escape_xml;
use crate::ooxml::charts::data_source::{
    AxisDataSource, DataSource, DataSourceKind, NumericDataSource, XmlFragment,
};
use crate::ooxml::charts::models::{DataSourceRef, TitleText};
use crate::ooxml::charts::options::LineSeriesOptions;
use crate::ooxml::charts::series::SeriesCommon;
use crate::ooxml::charts::sink::{XmlSink, write_val_element};
use crate::ooxml::charts::types::{MarkerSize, MarkerSymbol};
use crate::ooxml::charts::validation::{
    OptionValue, validate_boolean, validate_data_source, validate_marker_symbol,
    validate_string, validate_unsigned_int,
};

/// Line width for a colored series, in EMUs.
const LINE_WIDTH_EMU: &str = "28800";

/// A series in a line chart.
///
/// Instances are not synchronized; share one across threads only behind a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    common: SeriesCommon,
    color: Option<HexColor>,
    show_marker: bool,
    marker_symbol: MarkerSymbol,
    marker_color: Option<HexColor>,
    marker_size: MarkerSize,
    smooth: bool,
    labels: Option<AxisDataSource>,
    data: Option<NumericDataSource>,
}

impl LineSeries {
    /// Create a line series with default styling: no color, markers hidden,
    /// default symbol, size 4, straight segments, no labels or data.
    pub fn new(index: u32) -> Self {
        Self::from_common(SeriesCommon::new(index))
    }

    fn from_common(common: SeriesCommon) -> Self {
        Self {
            common,
            color: None,
            show_marker: false,
            marker_symbol: MarkerSymbol::Default,
            marker_color: None,
            marker_size: MarkerSize::DEFAULT,
            smooth: false,
            labels: None,
            data: None,
        }
    }

    /// Build a series from loosely typed options.
    ///
    /// Every option goes through the same validation as [`LineSeries::set_option`];
    /// the first invalid value aborts construction.
    pub fn from_options(options: LineSeriesOptions) -> Result<Self> {
        let mut common = SeriesCommon::new(options.index);
        common.order = options.order;
        common.title = match (options.title_ref, options.title) {
            (Some(formula), cached) => Some(TitleText::Reference {
                source: DataSourceRef::new(formula),
                cached,
            }),
            (None, Some(text)) => Some(TitleText::from_string(text)),
            (None, None) => None,
        };

        let mut series = Self::from_common(common);
        series.color = options.color.map(HexColor::new);
        series.marker_color = options.marker_color.map(HexColor::new);

        if let Some(ref value) = options.show_marker {
            series.show_marker = validate_boolean("show_marker", value)?;
        }
        if let Some(ref value) = options.marker_symbol {
            series.marker_symbol = validate_marker_symbol("marker_symbol", value)?;
        }
        if let Some(ref value) = options.marker_size {
            series.marker_size = validate_unsigned_int("marker_size", value)?;
        }
        if let Some(ref value) = options.smooth {
            series.smooth = validate_boolean("smooth", value)?;
        }

        series.labels = match (options.labels_ref, options.labels) {
            (Some(formula), cached) => {
                Some(AxisDataSource::from_ref(formula).with_cached_values(cached.unwrap_or_default()))
            },
            (None, Some(values)) => Some(AxisDataSource::from_values(values)),
            (None, None) => None,
        };

        series.data = match (options.data_ref, options.data) {
            (Some(formula), cached) => {
                Some(NumericDataSource::from_ref(formula).with_cached_values(cached.unwrap_or_default()))
            },
            (None, Some(values)) => Some(NumericDataSource::from_values(values)),
            (None, None) => None,
        };
        if let (Some(data), Some(format_code)) = (series.data.as_mut(), options.format_code) {
            data.format_code = Some(format_code);
        }

        Ok(series)
    }

    /// Set the series title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<TitleText>) -> Self {
        self.common.title = Some(title.into());
        self
    }

    /// Set the legend order.
    #[inline]
    pub fn with_order(mut self, order: u32) -> Self {
        self.common.order = Some(order);
        self
    }

    /// Set the line color.
    #[inline]
    pub fn with_color(mut self, color: impl Into<HexColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Show markers with the given symbol and size.
    #[inline]
    pub fn with_markers(mut self, symbol: MarkerSymbol, size: impl Into<MarkerSize>) -> Self {
        self.show_marker = true;
        self.marker_symbol = symbol;
        self.marker_size = size.into();
        self
    }

    /// Set the marker fill and outline color.
    #[inline]
    pub fn with_marker_color(mut self, color: impl Into<HexColor>) -> Self {
        self.marker_color = Some(color.into());
        self
    }

    /// Enable or disable smoothing.
    #[inline]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Set category labels.
    #[inline]
    pub fn with_labels(mut self, labels: AxisDataSource) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set values.
    #[inline]
    pub fn with_data(mut self, data: NumericDataSource) -> Self {
        self.data = Some(data);
        self
    }

    /// Shared series fields (index, order, title).
    #[inline]
    pub fn common(&self) -> &SeriesCommon {
        &self.common
    }

    /// Series index.
    #[inline]
    pub fn index(&self) -> u32 {
        self.common.index
    }

    /// Series title.
    #[inline]
    pub fn title(&self) -> Option<&TitleText> {
        self.common.title.as_ref()
    }

    /// Line color.
    #[inline]
    pub fn color(&self) -> Option<&HexColor> {
        self.color.as_ref()
    }

    /// Whether markers are shown.
    #[inline]
    pub fn show_marker(&self) -> bool {
        self.show_marker
    }

    /// Marker symbol.
    #[inline]
    pub fn marker_symbol(&self) -> MarkerSymbol {
        self.marker_symbol
    }

    /// Marker color.
    #[inline]
    pub fn marker_color(&self) -> Option<&HexColor> {
        self.marker_color.as_ref()
    }

    /// Marker size.
    #[inline]
    pub fn marker_size(&self) -> MarkerSize {
        self.marker_size
    }

    /// Whether the line is smoothed.
    #[inline]
    pub fn smooth(&self) -> bool {
        self.smooth
    }

    /// Category labels.
    #[inline]
    pub fn labels(&self) -> Option<&AxisDataSource> {
        self.labels.as_ref()
    }

    /// Values.
    #[inline]
    pub fn data(&self) -> Option<&NumericDataSource> {
        self.data.as_ref()
    }

    /// Set the series title.
    pub fn set_title(&mut self, title: Option<TitleText>) {
        self.common.title = title;
    }

    /// Set or clear the line color. Not validated.
    pub fn set_color(&mut self, color: Option<HexColor>) {
        self.color = color;
    }

    /// Show or hide markers.
    pub fn set_show_marker(&mut self, show: bool) {
        self.show_marker = show;
    }

    /// Set the marker symbol.
    pub fn set_marker_symbol(&mut self, symbol: MarkerSymbol) {
        self.marker_symbol = symbol;
    }

    /// Set the marker size.
    pub fn set_marker_size(&mut self, size: impl Into<MarkerSize>) {
        self.marker_size = size.into();
    }

    /// Set or clear the marker color. Not validated.
    pub fn set_marker_color(&mut self, color: Option<HexColor>) {
        self.marker_color = color;
    }

    /// Enable or disable smoothing.
    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    /// Replace the values.
    ///
    /// Fails with [`Error::TypeMismatch`] unless `source` is numeric; the
    /// current values are kept in that case.
    pub fn set_data(&mut self, source: impl Into<DataSource>) -> Result<()> {
        let source = source.into();
        validate_data_source("Series.data", DataSourceKind::Numeric, &source)?;
        if let DataSource::Numeric(data) = source {
            self.data = Some(data);
        }
        Ok(())
    }

    /// Replace the category labels.
    ///
    /// Fails with [`Error::TypeMismatch`] unless `source` is an axis source;
    /// the current labels are kept in that case.
    pub fn set_labels(&mut self, source: impl Into<DataSource>) -> Result<()> {
        let source = source.into();
        validate_data_source("Series.labels", DataSourceKind::Axis, &source)?;
        if let DataSource::Axis(labels) = source {
            self.labels = Some(labels);
        }
        Ok(())
    }

    /// Set a styling option from a loosely typed value.
    ///
    /// Recognized keys are `color`, `show_marker`, `marker_symbol`,
    /// `marker_size`, `marker_color` and `smooth`. The value is validated
    /// before anything is assigned, so on error the series is unchanged.
    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) -> Result<()> {
        let value = value.into();
        match key {
            "color" => self.color = Some(HexColor::new(validate_string(key, &value)?)),
            "show_marker" => self.show_marker = validate_boolean(key, &value)?,
            "marker_symbol" => self.marker_symbol = validate_marker_symbol(key, &value)?,
            "marker_size" => self.marker_size = validate_unsigned_int(key, &value)?,
            "marker_color" => {
                self.marker_color = Some(HexColor::new(validate_string(key, &value)?))
            },
            "smooth" => self.smooth = validate_boolean(key, &value)?,
            _ => return Err(Error::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    /// Append this series' `<c:ser>` element to `sink` and hand the sink back.
    ///
    /// Reads state only; calling it repeatedly yields identical output.
    pub fn to_xml_string<'a, S: XmlSink + ?Sized>(&self, sink: &'a mut S) -> &'a mut S {
        trace!(index = self.common.index, "serializing line series");

        self.common.write_framed(sink, |sink| {
            if let Some(ref color) = self.color {
                let color = escape_xml(color.as_str());
                sink.write_fragments(&[
                    r#"<c:spPr><a:solidFill><a:srgbClr val=""#,
                    &color,
                    r#""/></a:solidFill><a:ln w=""#,
                    LINE_WIDTH_EMU,
                    r#""><a:solidFill><a:srgbClr val=""#,
                    &color,
                    r#""/></a:solidFill></a:ln><a:round/></c:spPr>"#,
                ]);
            }

            self.write_marker(sink);

            if let Some(ref labels) = self.labels {
                labels.write_xml(sink);
            }
            if let Some(ref data) = self.data {
                data.write_xml(sink);
            }

            write_val_element(sink, "c:smooth", if self.smooth { "1" } else { "0" });
        });

        sink
    }

    /// Render this series into a new string.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256);
        self.to_xml_string(&mut xml);
        xml
    }

    // Hidden markers are spelled out as symbol "none". The default symbol
    // writes no marker element at all, leaving the glyph to the renderer.
    fn write_marker<S: XmlSink + ?Sized>(&self, sink: &mut S) {
        if !self.show_marker {
            sink.write_fragment(r#"<c:marker><c:symbol val="none"/></c:marker>"#);
            return;
        }
        if self.marker_symbol.is_default() {
            return;
        }

        let size = self.marker_size.to_string();
        sink.write_fragment("<c:marker>");
        write_val_element(sink, "c:symbol", self.marker_symbol.xml_value());
        write_val_element(sink, "c:size", &size);

        if let Some(ref color) = self.marker_color {
            let color = escape_xml(color.as_str());
            sink.write_fragments(&[
                r#"<c:spPr><a:solidFill><a:srgbClr val=""#,
                &color,
                r#""/></a:solidFill><a:ln><a:solidFill><a:srgbClr val=""#,
                &color,
                r#""/></a:solidFill></a:ln></c:spPr>"#,
            ]);
        }

        sink.write_fragment("</c:marker>");
    }
}
