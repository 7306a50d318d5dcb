//! Unified error types for chartml.
//!
//! Every fallible operation in the crate reports through [`Error`]: value
//! validation performed by series mutators, structural checks on data source
//! assignment, options parsing, and I/O when a fragment is flushed to a writer.
use thiserror::Error;

/// Main error type for chartml operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value failed validation for the named field
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// A value of the wrong structural type was assigned to the named field
    #[error("Type mismatch for {field}: expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },

    /// Option key not recognized by the series
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Options document could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::InvalidValue`].
    pub(crate) fn invalid_value(
        field: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for chartml operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = Error::invalid_value("show_marker", "\"yes\"", "expected a boolean");
        assert_eq!(
            err.to_string(),
            "Invalid value for show_marker: \"yes\" (expected a boolean)"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            field: "Series.data".to_string(),
            expected: "NumericDataSource".to_string(),
            got: "AxisDataSource".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch for Series.data: expected NumericDataSource, got AxisDataSource"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::other("disk full");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
