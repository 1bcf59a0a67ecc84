//! Output writer trait definition.

use crate::error::Result;
use crate::output::Output;

/// Trait for rendering command results.
pub trait OutputWriter {
    /// Write one command result.
    fn write_output(&mut self, output: &Output) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}
