//! Configuration type definitions.

use crate::constants::{DEFAULT_FILL_VALUE, clip, normalize};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default command options.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for command options not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Replacement for missing values (`clean fill-missing`).
    pub fill_value: f64,

    /// Lower bound of the normalization target range.
    pub new_min: f64,

    /// Upper bound of the normalization target range.
    pub new_max: f64,

    /// Lower clipping bound.
    pub clip_min: f64,

    /// Upper clipping bound.
    pub clip_max: f64,

    /// Stopwords used when `--stopwords` is not given.
    pub stopwords: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            fill_value: DEFAULT_FILL_VALUE,
            new_min: normalize::NEW_MIN,
            new_max: normalize::NEW_MAX,
            clip_min: clip::MIN,
            clip_max: clip::MAX,
            stopwords: Vec::new(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: OutputFormat,
}
