//! Chart data models shared by series and data sources.

/// A reference to a data source (cell range formula).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceRef {
    /// Formula reference (e.g., "Sheet1!$A$1:$A$10")
    pub formula: String,
}

impl DataSourceRef {
    /// Create a new data source reference.
    #[inline]
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }
}

/// Literal text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    /// Text content
    pub text: String,
}

impl RichText {
    /// Create a new rich text.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Series title source (can be from formula or literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleText {
    /// Literal text
    Literal(RichText),
    /// Reference to a cell, with the cell's text cached when known
    Reference {
        /// Cell holding the title
        source: DataSourceRef,
        /// Cached cell text
        cached: Option<String>,
    },
}

impl TitleText {
    /// Create from a string.
    #[inline]
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::Literal(RichText::new(text))
    }

    /// Create from a formula reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self::Reference {
            source: DataSourceRef::new(formula),
            cached: None,
        }
    }

    /// Create from a formula reference with its cached text.
    #[inline]
    pub fn from_ref_cached(formula: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Reference {
            source: DataSourceRef::new(formula),
            cached: Some(text.into()),
        }
    }
}

impl From<&str> for TitleText {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}

impl From<String> for TitleText {
    fn from(text: String) -> Self {
        Self::from_string(text)
    }
}
