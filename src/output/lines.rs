//! Line-per-item output writer.

use crate::error::Result;
use crate::output::repr::{format_float, format_list};
use crate::output::{Output, OutputWriter};
use crate::preprocessing::Value;
use std::io::Write;

/// Writes each list item on its own line, strings unquoted.
///
/// Handy for piping into `sort`, `uniq` or another `prepkit --input -`.
pub struct LinesWriter<W: Write> {
    writer: W,
}

impl<W: Write> LinesWriter<W> {
    /// Create a new lines writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for LinesWriter<W> {
    fn write_output(&mut self, output: &Output) -> Result<()> {
        match output {
            Output::List(items) => {
                for item in items {
                    writeln!(self.writer, "{}", plain(item))?;
                }
            }
            Output::Text(text) => writeln!(self.writer, "{text}")?,
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Str(s) => s.clone(),
        Value::List(items) => format_list(items),
    }
}
