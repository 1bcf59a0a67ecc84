//! Transform command execution.

use crate::cli::input::{collect_numbers, collect_values};
use crate::cli::{CleanAction, NumericAction, StructAction, TextAction, TransformCommand};
use crate::config::DefaultsConfig;
use crate::error::{Error, Result};
use crate::output::Output;
use crate::preprocessing::{
    Value, clip, fill_missing, flatten, log_transform, normalize, parse_list_literal,
    remove_duplicates, remove_missing, remove_punctuation, remove_stopwords, shuffle, standardize,
    to_integers, tokenize,
};
use tracing::debug;

/// Run a transform command.
///
/// Options missing from the command line fall back to `defaults`.
pub fn execute(command: &TransformCommand, defaults: &DefaultsConfig) -> Result<Output> {
    match command {
        TransformCommand::Clean { action } => execute_clean(action, defaults),
        TransformCommand::Numeric { action } => execute_numeric(action, defaults),
        TransformCommand::Text { action } => Ok(execute_text(action, defaults)),
        TransformCommand::Struct { action } => execute_struct(action),
    }
}

fn execute_clean(action: &CleanAction, defaults: &DefaultsConfig) -> Result<Output> {
    match action {
        CleanAction::RemoveMissing { values } => {
            let values = Value::from_strings(&collect_values(values)?);
            debug!("Removing missing values from {} value(s)", values.len());
            Ok(Output::List(remove_missing(&values)))
        }
        CleanAction::FillMissing { values, fill_value } => {
            let fill = fill_value.unwrap_or(defaults.fill_value);
            if !fill.is_finite() {
                return Err(Error::NonFiniteParameter {
                    name: "fill_value",
                    value: fill,
                });
            }
            let values = Value::from_strings(&collect_values(values)?);
            debug!("Filling missing values in {} value(s) with {fill}", values.len());
            Ok(Output::List(fill_missing(&values, &Value::Float(fill))))
        }
    }
}

fn execute_numeric(action: &NumericAction, defaults: &DefaultsConfig) -> Result<Output> {
    match action {
        NumericAction::Normalize {
            numbers,
            new_min,
            new_max,
        } => {
            let new_min = new_min.unwrap_or(defaults.new_min);
            let new_max = new_max.unwrap_or(defaults.new_max);
            let numbers = collect_numbers(numbers)?;
            debug!(
                "Normalizing {} value(s) into [{new_min}, {new_max}]",
                numbers.len()
            );
            Ok(Output::list(normalize(&numbers, new_min, new_max)?))
        }
        NumericAction::Standardize { numbers } => {
            let numbers = collect_numbers(numbers)?;
            debug!("Standardizing {} value(s)", numbers.len());
            Ok(Output::list(standardize(&numbers)?))
        }
        NumericAction::Clip { numbers, min, max } => {
            let min = min.unwrap_or(defaults.clip_min);
            let max = max.unwrap_or(defaults.clip_max);
            let numbers = collect_numbers(numbers)?;
            debug!("Clipping {} value(s) to [{min}, {max}]", numbers.len());
            Ok(Output::list(clip(&numbers, min, max)?))
        }
        NumericAction::ToIntegers { values } => {
            let values = collect_values(values)?;
            let integers = to_integers(&values);
            if integers.len() < values.len() {
                debug!(
                    "Skipped {} non-numeric value(s)",
                    values.len() - integers.len()
                );
            }
            Ok(Output::list(integers))
        }
        NumericAction::LogTransform { numbers } => {
            let numbers = collect_numbers(numbers)?;
            debug!("Log-transforming {} value(s)", numbers.len());
            Ok(Output::list(log_transform(&numbers)?))
        }
    }
}

fn execute_text(action: &TextAction, defaults: &DefaultsConfig) -> Output {
    match action {
        TextAction::Tokenize { text } => Output::list(tokenize(text)),
        TextAction::RemovePunctuation { text } => Output::Text(remove_punctuation(text)),
        TextAction::RemoveStopwords { text, stopwords } => {
            let stopwords = if stopwords.is_empty() {
                &defaults.stopwords
            } else {
                stopwords
            };
            debug!("Removing {} stopword(s)", stopwords.len());
            Output::Text(remove_stopwords(text, stopwords))
        }
    }
}

fn execute_struct(action: &StructAction) -> Result<Output> {
    match action {
        StructAction::Shuffle { values, seed } => {
            let values = Value::from_strings(&collect_values(values)?);
            debug!("Shuffling {} value(s), seed {seed:?}", values.len());
            Ok(Output::List(shuffle(&values, *seed)))
        }
        StructAction::Flatten { lists } => {
            let lists = lists
                .iter()
                .map(|literal| parse_list_literal(literal))
                .collect::<Result<Vec<_>>>()?;
            Ok(Output::List(flatten(&lists)))
        }
        StructAction::Unique { values } => {
            let values = collect_values(values)?;
            Ok(Output::list(remove_duplicates(&values)))
        }
    }
}
