use std::borrow::Cow;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const XML_SPECIALS: [&str; 5] = ["&", "<", ">", "\"", "'"];
const XML_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(XML_SPECIALS)
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for use in text content or attribute values.
///
/// Input without any special characters is borrowed as-is, so hex colors,
/// marker tokens and plain labels pass through without allocating.
///
/// # Examples
///
/// ```
/// use chartml::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("FF0000"), "FF0000");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if XML_ESCAPER.is_match(s) {
        Cow::Owned(XML_ESCAPER.replace_all(s, &XML_ENTITIES))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_xml("Sheet1!$A$1:$A$3"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_ampersand_not_double_escaped() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }
}
