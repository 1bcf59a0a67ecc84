//! Numeric scaling and conversion.
//!
//! Every function taking `f64` input rejects NaN and infinities up front, so
//! results are always finite.

use crate::error::{Error, Result};

/// Min-max normalize `values` into `[new_min, new_max]`.
///
/// Empty input gives empty output. When all values are equal there is no
/// spread to scale, and every output is `new_min`.
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub fn normalize(values: &[f64], new_min: f64, new_max: f64) -> Result<Vec<f64>> {
    ensure_finite_parameter("new_min", new_min)?;
    ensure_finite_parameter("new_max", new_max)?;
    ensure_finite(values)?;

    let Some((v_min, v_max)) = bounds(values) else {
        return Ok(Vec::new());
    };

    if v_min == v_max {
        return Ok(vec![new_min; values.len()]);
    }

    let span = v_max - v_min;
    let target = new_max - new_min;
    Ok(values
        .iter()
        .map(|v| new_min + (v - v_min) * target / span)
        .collect())
}

/// Z-score standardize `values` using the population standard deviation.
///
/// Zero deviation yields all zeros.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn standardize(values: &[f64]) -> Result<Vec<f64>> {
    ensure_finite(values)?;

    if values.is_empty() {
        return Ok(Vec::new());
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Ok(vec![0.0; values.len()]);
    }

    Ok(values.iter().map(|v| (v - mean) / std_dev).collect())
}

/// Clamp every value into `[min, max]`.
pub fn clip(values: &[f64], min: f64, max: f64) -> Result<Vec<f64>> {
    ensure_finite_parameter("min", min)?;
    ensure_finite_parameter("max", max)?;
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    ensure_finite(values)?;

    Ok(values.iter().map(|v| v.clamp(min, max)).collect())
}

/// Convert numeric strings to integers, truncating toward zero.
///
/// Strings that do not parse as a finite number, or whose value does not
/// fit in an `i64`, are skipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn to_integers<S: AsRef<str>>(values: &[S]) -> Vec<i64> {
    let range = i64::MIN as f64..i64::MAX as f64;

    values
        .iter()
        .filter_map(|s| s.as_ref().trim().parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .map(f64::trunc)
        .filter(|t| range.contains(t))
        .map(|t| t as i64)
        .collect()
}

/// Natural logarithm of the strictly positive values.
///
/// Zero and negative values are dropped from the result.
pub fn log_transform(values: &[f64]) -> Result<Vec<f64>> {
    ensure_finite(values)?;

    Ok(values
        .iter()
        .filter(|v| **v > 0.0)
        .map(|v| v.ln())
        .collect())
}

/// Minimum and maximum of a non-empty slice.
fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn ensure_finite_parameter(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteParameter { name, value })
    }
}
