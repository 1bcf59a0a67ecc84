//! Output format writers.

mod json;
mod lines;
pub mod repr;
mod types;
mod writer;

pub use json::JsonWriter;
pub use lines::LinesWriter;
pub use repr::ReprWriter;
pub use types::{Output, OutputFormat};
pub use writer::OutputWriter;

use std::io::Write;

/// Create the writer for `format` on top of `sink`.
pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    sink: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Repr => Box::new(ReprWriter::new(sink)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Lines => Box::new(LinesWriter::new(sink)),
    }
}
