//! Series data sources.
//!
//! A line series draws its category labels from an [`AxisDataSource`]
//! (`<c:cat>`) and its values from a [`NumericDataSource`] (`<c:val>`). Both
//! either point at a cell range, optionally with the cached cell contents, or
//! carry literal values.

use std::fmt;

use crate::common::xml::escape_xml;
use crate::ooxml::charts::models::DataSourceRef;
use crate::ooxml::charts::sink::{XmlSink, write_val_element};

/// Something that can append its own markup to a sink.
pub trait XmlFragment {
    /// Append this element's markup.
    fn write_xml<S: XmlSink + ?Sized>(&self, sink: &mut S);
}

/// Category labels for a series.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDataSource {
    /// Optional reference to cell range
    pub source_ref: Option<DataSourceRef>,
    /// Cached string values
    pub values: Vec<String>,
}

impl AxisDataSource {
    /// Create a label source from literal values.
    #[inline]
    pub fn from_values(values: Vec<String>) -> Self {
        Self {
            source_ref: None,
            values,
        }
    }

    /// Create a label source with a reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self {
            source_ref: Some(DataSourceRef::new(formula)),
            values: Vec::new(),
        }
    }

    /// Add cached values.
    #[inline]
    pub fn with_cached_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}

impl XmlFragment for AxisDataSource {
    fn write_xml<S: XmlSink + ?Sized>(&self, sink: &mut S) {
        sink.write_fragment("<c:cat>");

        if let Some(ref source_ref) = self.source_ref {
            sink.write_fragments(&["<c:strRef><c:f>", &escape_xml(&source_ref.formula), "</c:f>"]);
            if !self.values.is_empty() {
                sink.write_fragment("<c:strCache>");
                write_points(sink, self.values.iter().map(|v| escape_xml(v)));
                sink.write_fragment("</c:strCache>");
            }
            sink.write_fragment("</c:strRef>");
        } else if !self.values.is_empty() {
            sink.write_fragment("<c:strLit>");
            write_points(sink, self.values.iter().map(|v| escape_xml(v)));
            sink.write_fragment("</c:strLit>");
        }

        sink.write_fragment("</c:cat>");
    }
}

/// Values for a series.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericDataSource {
    /// Optional reference to cell range
    pub source_ref: Option<DataSourceRef>,
    /// Cached numeric values
    pub values: Vec<f64>,
    /// Format code for display
    pub format_code: Option<String>,
}

impl NumericDataSource {
    /// Create a value source from literal values.
    #[inline]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            source_ref: None,
            values,
            format_code: None,
        }
    }

    /// Create a value source with a reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self {
            source_ref: Some(DataSourceRef::new(formula)),
            values: Vec::new(),
            format_code: None,
        }
    }

    /// Set the format code.
    #[inline]
    pub fn with_format_code(mut self, format_code: impl Into<String>) -> Self {
        self.format_code = Some(format_code.into());
        self
    }

    /// Add cached values.
    #[inline]
    pub fn with_cached_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    fn write_cache_body<S: XmlSink + ?Sized>(&self, sink: &mut S) {
        let format_code = self.format_code.as_deref().unwrap_or("General");
        sink.write_fragments(&["<c:formatCode>", &escape_xml(format_code), "</c:formatCode>"]);
        write_points(sink, self.values.iter().map(|v| v.to_string()));
    }
}

impl XmlFragment for NumericDataSource {
    fn write_xml<S: XmlSink + ?Sized>(&self, sink: &mut S) {
        sink.write_fragment("<c:val>");

        if let Some(ref source_ref) = self.source_ref {
            sink.write_fragments(&["<c:numRef><c:f>", &escape_xml(&source_ref.formula), "</c:f>"]);
            if !self.values.is_empty() {
                sink.write_fragment("<c:numCache>");
                self.write_cache_body(sink);
                sink.write_fragment("</c:numCache>");
            }
            sink.write_fragment("</c:numRef>");
        } else if !self.values.is_empty() {
            sink.write_fragment("<c:numLit>");
            self.write_cache_body(sink);
            sink.write_fragment("</c:numLit>");
        }

        sink.write_fragment("</c:val>");
    }
}

/// Write `ptCount` followed by one `pt` per value.
fn write_points<S, I, T>(sink: &mut S, values: I)
where
    S: XmlSink + ?Sized,
    I: ExactSizeIterator<Item = T>,
    T: AsRef<str>,
{
    let mut count = itoa::Buffer::new();
    write_val_element(sink, "c:ptCount", count.format(values.len()));

    for (i, value) in values.enumerate() {
        let mut idx = itoa::Buffer::new();
        sink.write_fragments(&[
            r#"<c:pt idx=""#,
            idx.format(i),
            r#""><c:v>"#,
            value.as_ref(),
            "</c:v></c:pt>",
        ]);
    }
}

/// The two kinds of data source a series accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    /// Category labels
    Axis,
    /// Numeric values
    Numeric,
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Axis => "AxisDataSource",
            Self::Numeric => "NumericDataSource",
        })
    }
}

/// Either kind of data source, for assignments checked at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Category labels
    Axis(AxisDataSource),
    /// Numeric values
    Numeric(NumericDataSource),
}

impl DataSource {
    /// Which kind of source this is.
    #[inline]
    pub const fn kind(&self) -> DataSourceKind {
        match self {
            Self::Axis(_) => DataSourceKind::Axis,
            Self::Numeric(_) => DataSourceKind::Numeric,
        }
    }
}

impl From<AxisDataSource> for DataSource {
    fn from(source: AxisDataSource) -> Self {
        Self::Axis(source)
    }
}

impl From<NumericDataSource> for DataSource {
    fn from(source: NumericDataSource) -> Self {
        Self::Numeric(source)
    }
}

impl XmlFragment for DataSource {
    fn write_xml<S: XmlSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Axis(source) => source.write_xml(sink),
            Self::Numeric(source) => source.write_xml(sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragment: &impl XmlFragment) -> String {
        let mut out = String::new();
        fragment.write_xml(&mut out);
        out
    }

    #[test]
    fn test_axis_literal() {
        let labels = AxisDataSource::from_values(vec!["Jan".to_string(), "A&B".to_string()]);
        assert_eq!(
            render(&labels),
            concat!(
                r#"<c:cat><c:strLit><c:ptCount val="2"/>"#,
                r#"<c:pt idx="0"><c:v>Jan</c:v></c:pt>"#,
                r#"<c:pt idx="1"><c:v>A&amp;B</c:v></c:pt>"#,
                r#"</c:strLit></c:cat>"#
            )
        );
    }

    #[test]
    fn test_axis_reference_with_cache() {
        let labels = AxisDataSource::from_ref("Sheet1!$A$2:$A$3")
            .with_cached_values(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(
            render(&labels),
            concat!(
                r#"<c:cat><c:strRef><c:f>Sheet1!$A$2:$A$3</c:f><c:strCache><c:ptCount val="2"/>"#,
                r#"<c:pt idx="0"><c:v>x</c:v></c:pt><c:pt idx="1"><c:v>y</c:v></c:pt>"#,
                r#"</c:strCache></c:strRef></c:cat>"#
            )
        );
    }

    #[test]
    fn test_axis_reference_without_cache() {
        let labels = AxisDataSource::from_ref("'Q&A'!$A$1");
        assert_eq!(
            render(&labels),
            r#"<c:cat><c:strRef><c:f>&apos;Q&amp;A&apos;!$A$1</c:f></c:strRef></c:cat>"#
        );
    }

    #[test]
    fn test_empty_sources_write_bare_elements() {
        assert_eq!(render(&AxisDataSource::from_values(vec![])), "<c:cat></c:cat>");
        assert_eq!(render(&NumericDataSource::from_values(vec![])), "<c:val></c:val>");
    }

    #[test]
    fn test_numeric_literal() {
        let data = NumericDataSource::from_values(vec![1.0, 2.5, -3.0]);
        assert_eq!(
            render(&data),
            concat!(
                r#"<c:val><c:numLit><c:formatCode>General</c:formatCode><c:ptCount val="3"/>"#,
                r#"<c:pt idx="0"><c:v>1</c:v></c:pt>"#,
                r#"<c:pt idx="1"><c:v>2.5</c:v></c:pt>"#,
                r#"<c:pt idx="2"><c:v>-3</c:v></c:pt>"#,
                r#"</c:numLit></c:val>"#
            )
        );
    }

    #[test]
    fn test_numeric_reference_with_format() {
        let data = NumericDataSource::from_ref("Sheet1!$B$2")
            .with_format_code("0.00")
            .with_cached_values(vec![0.25]);
        assert_eq!(
            render(&data),
            concat!(
                r#"<c:val><c:numRef><c:f>Sheet1!$B$2</c:f><c:numCache>"#,
                r#"<c:formatCode>0.00</c:formatCode><c:ptCount val="1"/>"#,
                r#"<c:pt idx="0"><c:v>0.25</c:v></c:pt>"#,
                r#"</c:numCache></c:numRef></c:val>"#
            )
        );
    }

    #[test]
    fn test_data_source_dispatch() {
        let source = DataSource::from(NumericDataSource::from_values(vec![7.0]));
        assert_eq!(source.kind(), DataSourceKind::Numeric);
        assert!(render(&source).starts_with("<c:val>"));
        assert_eq!(DataSourceKind::Axis.to_string(), "AxisDataSource");
    }
}
