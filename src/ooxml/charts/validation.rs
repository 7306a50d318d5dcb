//! Boundary validators for series options.
//!
//! Options arrive loosely typed (from a YAML/JSON document or from
//! [`LineSeries::set_option`](super::LineSeries::set_option)). Each validator
//! turns an [`OptionValue`] into the typed value the series stores, or fails
//! with [`Error::InvalidValue`] naming the field and the offending input.
//! Validators have no side effects; callers assign only after success.

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::common::error::{Error, Result};
use crate::ooxml::charts::data_source::{DataSource, DataSourceKind};
use crate::ooxml::charts::types::{MarkerSize, MarkerSymbol};

/// A dynamically typed option value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// String scalar
    Text(String),
}

impl OptionValue {
    /// Short name of the value's type, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn reject(field: &str, value: &OptionValue, reason: &str) -> Error {
    debug!(field, value = %value, reason, "rejected option value");
    Error::invalid_value(field, value, reason)
}

/// Require a boolean.
pub fn validate_boolean(field: &str, value: &OptionValue) -> Result<bool> {
    match value {
        OptionValue::Bool(b) => Ok(*b),
        other => Err(reject(field, other, "expected a boolean")),
    }
}

/// Require a non-negative integer that fits a marker size.
pub fn validate_unsigned_int(field: &str, value: &OptionValue) -> Result<MarkerSize> {
    match value {
        OptionValue::Int(n) => u32::try_from(*n)
            .map(MarkerSize::new)
            .map_err(|_| reject(field, value, "expected a non-negative integer")),
        other => Err(reject(field, other, "expected a non-negative integer")),
    }
}

/// Require one of the recognized marker symbol tokens.
pub fn validate_marker_symbol(field: &str, value: &OptionValue) -> Result<MarkerSymbol> {
    match value {
        OptionValue::Text(token) => token
            .parse()
            .map_err(|_| reject(field, value, "not a recognized marker symbol")),
        other => Err(reject(field, other, "expected a marker symbol token")),
    }
}

/// Require a string (used for the unvalidated color options).
pub fn validate_string(field: &str, value: &OptionValue) -> Result<String> {
    match value {
        OptionValue::Text(s) => Ok(s.clone()),
        other => Err(reject(field, other, "expected a string")),
    }
}

/// Require a data source of the given kind.
///
/// This is a structural check, distinct from the value validators: it fails
/// with [`Error::TypeMismatch`].
pub fn validate_data_source(
    field: &str,
    expected: DataSourceKind,
    source: &DataSource,
) -> Result<()> {
    let got = source.kind();
    if got == expected {
        return Ok(());
    }
    debug!(field, expected = %expected, got = %got, "rejected data source");
    Err(Error::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}
