//! Output type definitions.

use crate::preprocessing::Value;
use serde::{Deserialize, Serialize};

/// The result of running one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A list of values.
    List(Vec<Value>),
    /// A single piece of text.
    Text(String),
}

impl Output {
    /// Build a list output from anything convertible into values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Supported output formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Python-literal style list, e.g. `['a', 1.0]`.
    #[default]
    Repr,
    /// JSON array or string.
    Json,
    /// One item per line.
    Lines,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repr => write!(f, "repr"),
            Self::Json => write!(f, "json"),
            Self::Lines => write!(f, "lines"),
        }
    }
}
