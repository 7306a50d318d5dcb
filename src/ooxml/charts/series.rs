//! Shared series framing.
//!
//! Every chart series is written as
//! `<c:ser><c:idx/><c:order/>[<c:tx>]...</c:ser>`; chart-type specific
//! series supply the elements in between through [`SeriesCommon::write_framed`].

use crate::common::xml::escape_xml;
use crate::ooxml::charts::models::TitleText;
use crate::ooxml::charts::sink::{XmlSink, write_val_element};

/// Fields common to every series.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesCommon {
    /// Series index (for rendering order)
    pub index: u32,
    /// Series order (for legend order); falls back to `index`
    pub order: Option<u32>,
    /// Series title
    pub title: Option<TitleText>,
}

impl SeriesCommon {
    /// Create a new series base with index.
    #[inline]
    pub fn new(index: u32) -> Self {
        Self {
            index,
            order: None,
            title: None,
        }
    }

    /// Set the series title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<TitleText>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the legend order.
    #[inline]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Legend order actually written.
    #[inline]
    pub fn effective_order(&self) -> u32 {
        self.order.unwrap_or(self.index)
    }

    /// Write the series frame, calling `body` between the title and `</c:ser>`.
    pub fn write_framed<S, F>(&self, sink: &mut S, body: F)
    where
        S: XmlSink + ?Sized,
        F: FnOnce(&mut S),
    {
        let mut index = itoa::Buffer::new();
        let mut order = itoa::Buffer::new();

        sink.write_fragment("<c:ser>");
        write_val_element(sink, "c:idx", index.format(self.index));
        write_val_element(sink, "c:order", order.format(self.effective_order()));

        if let Some(ref title) = self.title {
            write_series_title(sink, title);
        }

        body(&mut *sink);

        sink.write_fragment("</c:ser>");
    }
}

fn write_series_title<S: XmlSink + ?Sized>(sink: &mut S, title: &TitleText) {
    sink.write_fragment("<c:tx>");
    match title {
        TitleText::Literal(rich_text) => {
            sink.write_fragments(&["<c:v>", &escape_xml(&rich_text.text), "</c:v>"]);
        },
        TitleText::Reference { source, cached } => {
            sink.write_fragments(&["<c:strRef><c:f>", &escape_xml(&source.formula), "</c:f>"]);
            if let Some(text) = cached {
                sink.write_fragments(&[
                    r#"<c:strCache><c:ptCount val="1"/><c:pt idx="0"><c:v>"#,
                    &escape_xml(text),
                    "</c:v></c:pt></c:strCache>",
                ]);
            }
            sink.write_fragment("</c:strRef>");
        },
    }
    sink.write_fragment("</c:tx>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(series: &SeriesCommon, body: &str) -> String {
        let mut out = String::new();
        series.write_framed(&mut out, |sink| sink.write_fragment(body));
        out
    }

    #[test]
    fn test_frame_without_title() {
        assert_eq!(
            render(&SeriesCommon::new(2), "<body/>"),
            r#"<c:ser><c:idx val="2"/><c:order val="2"/><body/></c:ser>"#
        );
    }

    #[test]
    fn test_explicit_order() {
        let series = SeriesCommon::new(0).with_order(5);
        assert_eq!(series.effective_order(), 5);
        assert!(render(&series, "").contains(r#"<c:order val="5"/>"#));
    }

    #[test]
    fn test_literal_title_is_escaped() {
        let series = SeriesCommon::new(0).with_title("R&D <2024>");
        assert_eq!(
            render(&series, ""),
            concat!(
                r#"<c:ser><c:idx val="0"/><c:order val="0"/>"#,
                r#"<c:tx><c:v>R&amp;D &lt;2024&gt;</c:v></c:tx></c:ser>"#
            )
        );
    }

    #[test]
    fn test_reference_title_with_cache() {
        let series =
            SeriesCommon::new(1).with_title(TitleText::from_ref_cached("Sheet1!$B$1", "Sales"));
        assert_eq!(
            render(&series, ""),
            concat!(
                r#"<c:ser><c:idx val="1"/><c:order val="1"/><c:tx><c:strRef>"#,
                r#"<c:f>Sheet1!$B$1</c:f><c:strCache><c:ptCount val="1"/>"#,
                r#"<c:pt idx="0"><c:v>Sales</c:v></c:pt></c:strCache>"#,
                r#"</c:strRef></c:tx></c:ser>"#
            )
        );
    }

    #[test]
    fn test_reference_title_without_cache() {
        let series = SeriesCommon::new(0).with_title(TitleText::from_ref("Sheet1!$C$1"));
        assert!(render(&series, "").contains("<c:tx><c:strRef><c:f>Sheet1!$C$1</c:f></c:strRef></c:tx>"));
    }
}
