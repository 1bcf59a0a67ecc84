//! Error types for prepkit.

/// Result type alias for prepkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for prepkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to read a values file.
    #[error("failed to read input file '{path}'")]
    InputRead {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of a values file is not a usable number.
    #[error("invalid number on line {line} of '{path}': {reason}")]
    InvalidInputNumber {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// 1-based line number.
        line: usize,
        /// Why the value was rejected.
        reason: String,
    },

    /// A numeric input was NaN or infinite.
    #[error("value at position {index} is not a finite number: {value}")]
    NonFiniteValue {
        /// 0-based position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A numeric parameter was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Lower bound greater than upper bound.
    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A list literal could not be parsed.
    #[error("invalid list literal '{literal}'")]
    InvalidListLiteral {
        /// The literal as given.
        literal: String,
        /// Underlying parse error.
        #[source]
        source: crate::preprocessing::LiteralError,
    },

    /// A list literal parsed, but is not a list.
    #[error("unsupported list literal '{literal}': {reason}")]
    UnsupportedListLiteral {
        /// The literal as given.
        literal: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonOutput {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
