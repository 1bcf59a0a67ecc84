//! CLI argument parsing and command handling.

mod args;
pub mod input;
pub mod transform;
mod validators;

pub use args::{
    CleanAction, Cli, Command, ConfigAction, GlobalArgs, NumbersArgs, NumericAction, StructAction,
    TextAction, TransformCommand, ValuesArgs,
};
