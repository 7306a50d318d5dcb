//! Chart XML writer.
//!
//! Flushes series markup to any [`std::io::Write`]. The enclosing
//! `<c:lineChart>` and chart part are assembled by the caller.

use std::io::Write;

use crate::ooxml::charts::line_series::LineSeries;

/// Write a single line series.
pub fn write_line_series<W: Write>(writer: &mut W, series: &LineSeries) -> std::io::Result<()> {
    let mut xml = String::with_capacity(512);
    series.to_xml_string(&mut xml);
    writer.write_all(xml.as_bytes())
}

/// Write several line series back to back, in slice order.
pub fn write_line_series_list<W: Write>(
    writer: &mut W,
    series: &[LineSeries],
) -> std::io::Result<()> {
    let mut xml = String::with_capacity(512 * series.len());
    for s in series {
        s.to_xml_string(&mut xml);
    }
    writer.write_all(xml.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::types::MarkerSymbol;

    #[test]
    fn test_write_line_series_matches_string_output() {
        let series = LineSeries::new(0).with_markers(MarkerSymbol::Diamond, 5);
        let mut out = Vec::new();
        write_line_series(&mut out, &series).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), series.to_xml());
    }

    #[test]
    fn test_write_list_keeps_order() {
        let series = [LineSeries::new(0), LineSeries::new(1)];
        let mut out = Vec::new();
        write_line_series_list(&mut out, &series).unwrap();
        let xml = String::from_utf8(out).unwrap();
        let first = xml.find(r#"<c:idx val="0"/>"#).unwrap();
        let second = xml.find(r#"<c:idx val="1"/>"#).unwrap();
        assert!(first < second);
        assert_eq!(xml.matches("<c:ser>").count(), 2);
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = write_line_series(&mut Broken, &LineSeries::new(0)).unwrap_err();
        assert_eq!(err.to_string(), "closed");
    }
}
