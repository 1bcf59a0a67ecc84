//! CLI argument definitions.

use crate::cli::validators::parse_finite_float;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Clean, scale and reshape small data sets from the command line.
#[derive(Debug, Parser)]
#[command(name = "prepkit")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output format (default: repr, or the configured format).
    #[arg(short, long, global = true, value_enum, env = "PREPKIT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to the configuration file.
    #[arg(long, global = true, env = "PREPKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: info, -vv: debug, -vvv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Data transformations.
    #[command(flatten)]
    Transform(TransformCommand),

    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Data transformation groups.
#[derive(Debug, Subcommand)]
pub enum TransformCommand {
    /// Data cleaning operations.
    Clean {
        /// Cleaning operation to perform.
        #[command(subcommand)]
        action: CleanAction,
    },
    /// Numeric data operations.
    Numeric {
        /// Numeric operation to perform.
        #[command(subcommand)]
        action: NumericAction,
    },
    /// Text processing operations.
    Text {
        /// Text operation to perform.
        #[command(subcommand)]
        action: TextAction,
    },
    /// Data structure operations.
    Struct {
        /// Structure operation to perform.
        #[command(subcommand)]
        action: StructAction,
    },
}

/// Cleaning operations.
#[derive(Debug, Subcommand)]
pub enum CleanAction {
    /// Remove missing values (empty, "nan", "none").
    RemoveMissing {
        /// Values to clean.
        #[command(flatten)]
        values: ValuesArgs,
    },
    /// Replace missing values with a fill value.
    FillMissing {
        /// Values to clean.
        #[command(flatten)]
        values: ValuesArgs,
        /// Replacement for missing values (default: 0).
        #[arg(long, value_parser = parse_finite_float, allow_negative_numbers = true)]
        fill_value: Option<f64>,
    },
}

/// Numeric operations.
#[derive(Debug, Subcommand)]
pub enum NumericAction {
    /// Min-max normalization.
    Normalize {
        /// Numbers to normalize.
        #[command(flatten)]
        numbers: NumbersArgs,
        /// Lower bound of the target range (default: 0).
        #[arg(long, value_parser = parse_finite_float, allow_negative_numbers = true)]
        new_min: Option<f64>,
        /// Upper bound of the target range (default: 1).
        #[arg(long, value_parser = parse_finite_float, allow_negative_numbers = true)]
        new_max: Option<f64>,
    },
    /// Z-score standardization.
    Standardize {
        /// Numbers to standardize.
        #[command(flatten)]
        numbers: NumbersArgs,
    },
    /// Clip values to a range.
    Clip {
        /// Numbers to clip.
        #[command(flatten)]
        numbers: NumbersArgs,
        /// Lower clipping bound (default: 0).
        #[arg(long, value_parser = parse_finite_float, allow_negative_numbers = true)]
        min: Option<f64>,
        /// Upper clipping bound (default: 1).
        #[arg(long, value_parser = parse_finite_float, allow_negative_numbers = true)]
        max: Option<f64>,
    },
    /// Convert numeric strings to integers, dropping the rest.
    ToIntegers {
        /// Strings to convert.
        #[command(flatten)]
        values: ValuesArgs,
    },
    /// Natural log of the positive values.
    LogTransform {
        /// Numbers to transform.
        #[command(flatten)]
        numbers: NumbersArgs,
    },
}

/// Text operations.
#[derive(Debug, Subcommand)]
pub enum TextAction {
    /// Split into lower-case word tokens.
    Tokenize {
        /// Text to tokenize.
        text: String,
    },
    /// Replace punctuation with spaces, keeping letters, digits and whitespace.
    RemovePunctuation {
        /// Text to clean.
        text: String,
    },
    /// Remove stopwords (case insensitive).
    RemoveStopwords {
        /// Text to clean.
        text: String,
        /// Stopword to remove (repeatable).
        #[arg(short, long = "stopwords")]
        stopwords: Vec<String>,
    },
}

/// Structure operations.
#[derive(Debug, Subcommand)]
pub enum StructAction {
    /// Shuffle values, optionally with a seed for reproducibility.
    Shuffle {
        /// Values to shuffle.
        #[command(flatten)]
        values: ValuesArgs,
        /// Random seed.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Flatten list literals such as "[1,2]" "[3,4]" into one list.
    Flatten {
        /// JSON array literals.
        lists: Vec<String>,
    },
    /// Remove duplicate values, keeping first occurrences.
    Unique {
        /// Values to deduplicate.
        #[command(flatten)]
        values: ValuesArgs,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Free-form values from the command line and an optional file.
#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// Values to process.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read more values from a file, one per line ("-" for stdin).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Numbers from the command line and an optional file.
#[derive(Debug, Args)]
pub struct NumbersArgs {
    /// Numbers to process.
    #[arg(value_parser = parse_finite_float, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Read more numbers from a file, one per line ("-" for stdin).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
