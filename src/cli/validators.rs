//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

/// Parse a finite float, rejecting NaN and infinities.
pub fn parse_finite_float(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() {
        return Err(format!("'{s}' is not a finite number"));
    }

    Ok(value)
}
