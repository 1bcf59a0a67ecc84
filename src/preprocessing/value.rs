//! Heterogeneous list items.

use crate::constants::MISSING_MARKERS;
use crate::error::{Error, Result};
use crate::preprocessing::literal::parse_literal;
use serde::Serialize;

/// A single item in a list being preprocessed.
///
/// Command-line arguments arrive as [`Value::Str`]; numeric operations
/// produce [`Value::Float`] or [`Value::Int`]; parsed list literals may hold
/// any variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Nested list.
    List(Vec<Self>),
}

impl Value {
    /// Whether this value counts as missing.
    ///
    /// Missing values are `Null`, a NaN float, the empty string, and the
    /// strings `nan` / `none` in any letter case.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float(f) => f.is_nan(),
            Self::Str(s) => {
                s.is_empty() || MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m))
            }
            Self::Bool(_) | Self::Int(_) | Self::List(_) => false,
        }
    }

    /// Wrap raw strings as [`Value::Str`].
    pub fn from_strings<S: AsRef<str>>(values: &[S]) -> Vec<Self> {
        values.iter().map(|s| Self::Str(s.as_ref().to_string())).collect()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// Parse a list literal such as `['a', None]` or `["a", null]`.
///
/// Python-style and JSON spellings are both accepted, so `repr` and `json`
/// output parse back. Anything that is not a list is rejected.
pub fn parse_list_literal(literal: &str) -> Result<Vec<Value>> {
    let parsed = parse_literal(literal).map_err(|e| Error::InvalidListLiteral {
        literal: literal.to_string(),
        source: e,
    })?;

    match parsed {
        Value::List(items) => Ok(items),
        _ => Err(Error::UnsupportedListLiteral {
            literal: literal.to_string(),
            reason: "expected a list such as [1, 2]".to_string(),
        }),
    }
}
