//! Missing-value and duplicate handling.

use crate::preprocessing::Value;
use std::collections::HashSet;
use std::hash::Hash;

/// Drop missing values, keeping the order of the rest.
///
/// See [`Value::is_missing`] for what counts as missing.
pub fn remove_missing(values: &[Value]) -> Vec<Value> {
    values.iter().filter(|v| !v.is_missing()).cloned().collect()
}

/// Replace every missing value with `fill`.
pub fn fill_missing(values: &[Value], fill: &Value) -> Vec<Value> {
    values
        .iter()
        .map(|v| if v.is_missing() { fill.clone() } else { v.clone() })
        .collect()
}

/// Remove duplicates, keeping the first occurrence of each value.
pub fn remove_duplicates<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}
