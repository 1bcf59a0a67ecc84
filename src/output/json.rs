//! JSON output writer.

use crate::error::{Error, Result};
use crate::output::{Output, OutputWriter};
use std::io::Write;

/// JSON format output writer.
///
/// Lists become a JSON array, text becomes a JSON string. Each result is
/// one line.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_output(&mut self, output: &Output) -> Result<()> {
        let result = match output {
            Output::List(items) => serde_json::to_writer(&mut self.writer, items),
            Output::Text(text) => serde_json::to_writer(&mut self.writer, text),
        };
        result.map_err(|e| Error::JsonOutput { source: e })?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
