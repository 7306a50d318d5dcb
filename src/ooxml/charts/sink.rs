//! Output sinks for chart markup.
//!
//! Chart fragments are appended piece by piece to whatever the caller is
//! assembling the part in. A sink only ever grows: writers never read back
//! or clear what is already there.

/// Destination for markup fragments.
pub trait XmlSink {
    /// Append a fragment.
    fn write_fragment(&mut self, fragment: &str);

    /// Append several fragments in order.
    #[inline]
    fn write_fragments(&mut self, fragments: &[&str]) {
        for fragment in fragments {
            self.write_fragment(fragment);
        }
    }
}

impl XmlSink for String {
    #[inline]
    fn write_fragment(&mut self, fragment: &str) {
        self.push_str(fragment);
    }
}

impl XmlSink for Vec<u8> {
    #[inline]
    fn write_fragment(&mut self, fragment: &str) {
        self.extend_from_slice(fragment.as_bytes());
    }
}

impl<S: XmlSink + ?Sized> XmlSink for &mut S {
    #[inline]
    fn write_fragment(&mut self, fragment: &str) {
        (**self).write_fragment(fragment);
    }
}

/// Write `<{tag} val="{value}"/>`.
#[inline]
pub(crate) fn write_val_element<S: XmlSink + ?Sized>(sink: &mut S, tag: &str, value: &str) {
    sink.write_fragments(&["<", tag, r#" val=""#, value, r#""/>"#]);
}
