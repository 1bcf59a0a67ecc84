//! List literal parsing.
//!
//! Accepts the literals that `repr` output produces (`['a', None, 1.5]`)
//! as well as JSON arrays (`["a", null, 1.5]`), so results can be piped
//! back into `struct flatten`.

use crate::preprocessing::Value;
use std::iter::Peekable;
use std::str::CharIndices;

/// Where and why a literal failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct LiteralError {
    /// Byte offset of the offending character.
    pub position: usize,
    /// What went wrong.
    pub message: String,
}

/// Parse one literal value, rejecting trailing input.
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser::new(input);
    let value = parser.value()?;
    parser.skip_whitespace();
    match parser.chars.peek() {
        None => Ok(value),
        Some(&(position, c)) => Err(LiteralError {
            position,
            message: format!("unexpected '{c}' after value"),
        }),
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    fn error(&mut self, message: impl Into<String>) -> LiteralError {
        LiteralError {
            position: self.position(),
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.chars.peek().map(|&(_, c)| c) {
            Some('[') => self.list(),
            Some(quote @ ('\'' | '"')) => self.string(quote).map(Value::Str),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_alphabetic() => self.keyword(),
            Some('{') => Err(self.error("dicts are not supported")),
            Some('(') => Err(self.error("tuples are not supported")),
            Some(c) => Err(self.error(format!("unexpected '{c}'"))),
            None => Err(self.error("expected a value")),
        }
    }

    fn list(&mut self) -> Result<Value, LiteralError> {
        self.chars.next();
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.chars.next_if(|&(_, c)| c == ']').is_some() {
                return Ok(Value::List(items));
            }

            items.push(self.value()?);

            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => {}
                Some((_, ']')) => return Ok(Value::List(items)),
                Some((position, c)) => {
                    return Err(LiteralError {
                        position,
                        message: format!("expected ',' or ']', found '{c}'"),
                    });
                }
                None => return Err(self.error("unterminated list")),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, LiteralError> {
        self.chars.next();
        let mut text = String::new();

        loop {
            match self.chars.next() {
                Some((_, c)) if c == quote => return Ok(text),
                Some((position, '\\')) => text.push(self.escape(position)?),
                Some((_, c)) => text.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn escape(&mut self, start: usize) -> Result<char, LiteralError> {
        let Some((_, c)) = self.chars.next() else {
            return Err(self.error("unterminated string"));
        };

        let escaped = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            '\\' | '\'' | '"' | '/' => c,
            'x' => self.code_point(start, 2)?,
            'u' => self.code_point(start, 4)?,
            'U' => self.code_point(start, 8)?,
            other => {
                return Err(LiteralError {
                    position: start,
                    message: format!("unknown escape '\\{other}'"),
                });
            }
        };
        Ok(escaped)
    }

    fn code_point(&mut self, start: usize, digits: usize) -> Result<char, LiteralError> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.chars.next_if(|&(_, c)| c.is_ascii_hexdigit()) {
                Some((_, c)) => hex.push(c),
                None => {
                    return Err(LiteralError {
                        position: start,
                        message: format!("escape needs {digits} hex digits"),
                    });
                }
            }
        }

        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| LiteralError {
                position: start,
                message: format!("invalid code point \\{hex}"),
            })
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.position();
        while self
            .chars
            .next_if(|&(_, c)| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_'))
            .is_some()
        {}
        let end = self.position();
        let text = self.input[start..end].replace('_', "");

        let is_float = text.contains(['.', 'e', 'E']);
        let parsed = if is_float {
            None
        } else {
            text.parse::<i64>().ok().map(Value::Int)
        };

        parsed
            .or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(Value::Float)
            })
            .ok_or_else(|| LiteralError {
                position: start,
                message: format!("invalid number '{}'", &self.input[start..end]),
            })
    }

    fn keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.position();
        while self
            .chars
            .next_if(|&(_, c)| c.is_alphanumeric() || c == '_')
            .is_some()
        {}
        let end = self.position();

        match &self.input[start..end] {
            "None" | "null" => Ok(Value::Null),
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            word => Err(LiteralError {
                position: start,
                message: format!("unknown name '{word}'"),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn list(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    #[test]
    fn test_python_style_literal() {
        let value = parse_literal("['a', None, True, False, 1, -2.5, [3]]").unwrap();
        assert_eq!(
            value,
            list(vec![
                Value::from("a"),
                Value::Null,
                Value::Bool(true),
                Value::Bool(false),
                Value::Int(1),
                Value::Float(-2.5),
                list(vec![Value::Int(3)]),
            ])
        );
    }

    #[test]
    fn test_json_literal() {
        let value = parse_literal(r#"["a", null, true, 1e3]"#).unwrap();
        assert_eq!(
            value,
            list(vec![
                Value::from("a"),
                Value::Null,
                Value::Bool(true),
                Value::Float(1000.0),
            ])
        );
    }

    #[test]
    fn test_trailing_comma_and_whitespace() {
        let value = parse_literal("  [ 1 , 2 , ]  ").unwrap();
        assert_eq!(value, list(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn test_string_escapes() {
        let value = parse_literal(r#"["it's", 'a\'b', 'tab\there', '\xa0\u200b', '\\']"#).unwrap();
        assert_eq!(
            value,
            list(vec![
                Value::from("it's"),
                Value::from("a'b"),
                Value::from("tab\there"),
                Value::from("\u{a0}\u{200b}"),
                Value::from("\\"),
            ])
        );
    }

    #[test]
    fn test_scalar_parses() {
        assert_eq!(parse_literal("42").unwrap(), Value::Int(42));
        assert_eq!(parse_literal("'x'").unwrap(), Value::from("x"));
    }

    #[test]
    fn test_large_integer_falls_back_to_float() {
        assert_eq!(
            parse_literal("100000000000000000000").unwrap(),
            Value::Float(1e20)
        );
    }

    #[test]
    fn test_errors() {
        let err = parse_literal("[1, 2").unwrap_err();
        assert_eq!(err.message, "unterminated list");

        let err = parse_literal("['a").unwrap_err();
        assert_eq!(err.message, "unterminated string");

        let err = parse_literal("[1 2]").unwrap_err();
        assert_eq!(err.position, 3);

        let err = parse_literal("[nope]").unwrap_err();
        assert_eq!(err.message, "unknown name 'nope'");

        let err = parse_literal("[{'a': 1}]").unwrap_err();
        assert_eq!(err.message, "dicts are not supported");

        assert!(parse_literal("[1] x").is_err());
        assert!(parse_literal("[1.2.3]").is_err());
        assert!(parse_literal("").is_err());
    }
}
