//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    for (name, value) in [
        ("fill_value", defaults.fill_value),
        ("new_min", defaults.new_min),
        ("new_max", defaults.new_max),
        ("clip_min", defaults.clip_min),
        ("clip_max", defaults.clip_max),
    ] {
        if !value.is_finite() {
            return Err(Error::ConfigValidation {
                message: format!("{name} must be a finite number, got {value}"),
            });
        }
    }

    if defaults.clip_min > defaults.clip_max {
        return Err(Error::ConfigValidation {
            message: format!(
                "clip_min ({}) must not be greater than clip_max ({})",
                defaults.clip_min, defaults.clip_max
            ),
        });
    }

    if let Some(word) = defaults.stopwords.iter().find(|w| w.trim().is_empty()) {
        return Err(Error::ConfigValidation {
            message: format!("stopwords must not contain blank entries, got {word:?}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_non_finite_fill_value() {
        let mut config = Config::default();
        config.defaults.fill_value = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_inverted_clip_range() {
        let mut config = Config::default();
        config.defaults.clip_min = 5.0;
        config.defaults.clip_max = 1.0;
        let result = validate_config(&config);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_validate_inverted_normalize_range_is_allowed() {
        let mut config = Config::default();
        config.defaults.new_min = 1.0;
        config.defaults.new_max = 0.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_blank_stopword() {
        let mut config = Config::default();
        config.defaults.stopwords = vec!["the".to_string(), " ".to_string()];
        assert!(validate_config(&config).is_err());
    }
}
