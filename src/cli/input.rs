//! Values files.
//!
//! A values file holds one value per line. `-` reads standard input.

use crate::cli::validators::parse_finite_float;
use crate::cli::{NumbersArgs, ValuesArgs};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one value per line.
///
/// Trailing `\r` is stripped so CRLF files behave. Blank lines are kept as
/// empty values, which the clean commands treat as missing.
///
/// # Errors
/// - Returns error if file cannot be read
/// - Returns error if file contains invalid UTF-8
pub fn read_values(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        return read_lines(std::io::stdin().lock(), path);
    }

    let file = File::open(path).map_err(|e| Error::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_lines(BufReader::new(file), path)
}

fn read_lines(reader: impl BufRead, path: &Path) -> Result<Vec<String>> {
    let mut values = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::InputRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        values.push(line.strip_suffix('\r').unwrap_or(&line).to_string());
    }

    tracing::debug!("Read {} value(s) from {}", values.len(), path.display());
    Ok(values)
}

/// Read one finite number per line. Blank lines are skipped.
pub fn read_numbers(path: &Path) -> Result<Vec<f64>> {
    read_values(path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_finite_float(line).map_err(|reason| Error::InvalidInputNumber {
                path: path.to_path_buf(),
                line: i + 1,
                reason,
            })
        })
        .collect()
}

/// Command-line values followed by any values from `--input`.
pub fn collect_values(args: &ValuesArgs) -> Result<Vec<String>> {
    let mut values = args.values.clone();
    if let Some(path) = &args.input {
        values.extend(read_values(path)?);
    }
    Ok(values)
}

/// Command-line numbers followed by any numbers from `--input`.
pub fn collect_numbers(args: &NumbersArgs) -> Result<Vec<f64>> {
    let mut numbers = args.values.clone();
    if let Some(path) = &args.input {
        numbers.extend(read_numbers(path)?);
    }
    Ok(numbers)
}
