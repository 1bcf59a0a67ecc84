//! Python-literal style output writer.
//!
//! Lists print the way a Python REPL would echo them: `['1', 999.0, '3']`.
//! Text results print verbatim.

use crate::error::Result;
use crate::output::{Output, OutputWriter};
use crate::preprocessing::Value;
use std::fmt::Write as _;
use std::io::Write;

/// `repr` format output writer.
pub struct ReprWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReprWriter<W> {
    /// Create a new repr writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for ReprWriter<W> {
    fn write_output(&mut self, output: &Output) -> Result<()> {
        match output {
            Output::List(items) => writeln!(self.writer, "{}", format_list(items))?,
            Output::Text(text) => writeln!(self.writer, "{text}")?,
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Format a list of values as a bracketed, comma-separated literal.
pub fn format_list(items: &[Value]) -> String {
    let parts: Vec<String> = items.iter().map(format_value).collect();
    format!("[{}]", parts.join(", "))
}

/// Format one value as a literal.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Str(s) => quote(s),
        Value::List(items) => format_list(items),
    }
}

/// Format a float so it always reads as a float.
///
/// Integral values keep a trailing `.0`; very large or very small
/// magnitudes switch to exponent notation with a signed, two-digit
/// exponent (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let debug = format!("{value:?}");
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };

    let (sign, digits) = exponent
        .strip_prefix('-')
        .map_or(('+', exponent), |rest| ('-', rest));
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Quote a string, preferring single quotes.
fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if !is_printable(c) => push_code_point(&mut quoted, c),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// Whether `c` prints as itself inside a quoted string.
///
/// Control, separator and format characters are escaped; the plain space
/// is the only whitespace that is printed raw.
fn is_printable(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace() || is_format(c))
}

const fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

fn push_code_point(quoted: &mut String, c: char) {
    let code = u32::from(c);
    let _ = match code {
        0..=0xff => write!(quoted, "\\x{code:02x}"),
        0x100..=0xffff => write!(quoted, "\\u{code:04x}"),
        _ => write!(quoted, "\\U{code:08x}"),
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(999.0), "999.0");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(-1.5), "-1.5");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_float_exponent() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(2e100), "2e+100");
    }

    #[test]
    fn test_format_list_mixed() {
        let items = vec![
            Value::from("1"),
            Value::Float(999.0),
            Value::from("3"),
            Value::Null,
            Value::Bool(true),
            Value::List(vec![Value::Int(4)]),
        ];
        assert_eq!(format_list(&items), "['1', 999.0, '3', None, True, [4]]");
    }

    #[test]
    fn test_format_list_empty() {
        assert_eq!(format_list(&[]), "[]");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("a'b\"c"), "'a\\'b\"c'");
        assert_eq!(quote("tab\there"), "'tab\\there'");
        assert_eq!(quote("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn test_quote_escapes_non_printable() {
        assert_eq!(quote("a\u{a0}b"), "'a\\xa0b'");
        assert_eq!(quote("zero\u{200b}width"), "'zero\\u200bwidth'");
        assert_eq!(quote("\u{1b}[0m"), "'\\x1b[0m'");
        assert_eq!(quote("\u{e0041}"), "'\\U000e0041'");
        assert_eq!(quote("\u{2028}"), "'\\u2028'");
        assert_eq!(quote("caf\u{e9} \u{1f600}"), "'caf\u{e9} \u{1f600}'");
    }

    #[test]
    fn test_repr_writer() {
        let mut buffer = Vec::new();
        {
            let mut writer = ReprWriter::new(&mut buffer);
            writer
                .write_output(&Output::list(["hello", "world"]))
                .unwrap();
            writer
                .write_output(&Output::Text("plain text".to_string()))
                .unwrap();
            writer.finalize().unwrap();
        }
        let contents = String::from_utf8(buffer).unwrap();
        assert_eq!(contents, "['hello', 'world']\nplain text\n");
    }
}
