//! Application-wide constants.
//!
//! Built-in defaults live here so the CLI, the config file and the docs
//! agree on them.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "prepkit";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default replacement for missing values.
pub const DEFAULT_FILL_VALUE: f64 = 0.0;

/// Default target range for min-max normalization.
pub mod normalize {
    /// Lower bound of the target range.
    pub const NEW_MIN: f64 = 0.0;
    /// Upper bound of the target range.
    pub const NEW_MAX: f64 = 1.0;
}

/// Default clipping bounds.
pub mod clip {
    /// Lower clipping bound.
    pub const MIN: f64 = 0.0;
    /// Upper clipping bound.
    pub const MAX: f64 = 1.0;
}

/// String spellings treated as missing, compared case-insensitively.
///
/// The empty string is always missing as well.
pub const MISSING_MARKERS: &[&str] = &["nan", "none"];
