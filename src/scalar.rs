//! Scalar formatting, quoting, and parsing.
//!
//! A scalar renders to a single *token*: `null`, `true`/`false`, the
//! preserved numeral text, or a string — bare when unambiguous, otherwise
//! wrapped in single quotes. Inside quotes a literal quote is doubled
//! (`''`), and a literal newline becomes the two-character sequence `\n`
//! (raw line breaks are reserved for structure). Parsing exactly inverts
//! formatting: a quoted token is always a string, a bare token is
//! re-recognized as null/bool/number/string.
//!
//! Quoting is conservative: any string that could be mistaken for another
//! scalar, for structure (headers, list markers), or that would not survive
//! delimiter splitting, gets quoted.

use crate::error::DecodeError;
use crate::value::{Number, Value};

pub(crate) const QUOTE: char = '\'';

/// True if a bare token would enter the number-recognition path: first char
/// a digit, or a sign followed by a digit. Such tokens must either be valid
/// numerals or hard errors, so strings shaped like this are always quoted.
pub(crate) fn looks_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'-') | Some(b'+') => bytes.get(1).is_some_and(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// True if `s` contains a colon followed by whitespace or at the end of the
/// token, which is the shape the header parser recognizes as key syntax.
fn colon_ambiguous(s: &str) -> bool {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b':' {
            match bytes.get(i + 1) {
                None | Some(b' ') | Some(b'\t') => return true,
                _ => {}
            }
        }
    }
    false
}

/// Whether a string value must be quoted to survive a round trip.
pub(crate) fn needs_quoting(s: &str, delimiter: char) -> bool {
    if s.is_empty() {
        return true;
    }
    if s != s.trim() {
        return true;
    }
    if s == "null" || s == "true" || s == "false" {
        return true;
    }
    if looks_numeric(s) {
        return true;
    }
    if s.contains(delimiter)
        || s.contains(QUOTE)
        || s.contains('\n')
        || s.contains('\r')
        || s.contains('\\')
    {
        return true;
    }
    if colon_ambiguous(s) {
        return true;
    }
    // List-marker and header look-alikes at the start of a line.
    matches!(s.as_bytes()[0], b'-' | b'[' | b'{')
}

/// Whether an object key must be quoted. Keys are stricter than values:
/// a bare key may not contain any character the header parser treats as
/// structure.
pub(crate) fn key_needs_quoting(s: &str, delimiter: char) -> bool {
    if needs_quoting(s, delimiter) {
        return true;
    }
    s.contains([':', '[', ']', '{', '}'])
}

/// Appends `s` as a quoted token.
pub(crate) fn quote_into(s: &str, out: &mut String) {
    out.push(QUOTE);
    for ch in s.chars() {
        match ch {
            QUOTE => {
                out.push(QUOTE);
                out.push(QUOTE);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push(QUOTE);
}

/// Appends the token rendering of a string value.
pub(crate) fn format_string(s: &str, delimiter: char, out: &mut String) {
    if needs_quoting(s, delimiter) {
        quote_into(s, out);
    } else {
        out.push_str(s);
    }
}

/// Appends the token rendering of an object key or tabular column name.
pub(crate) fn format_key(s: &str, delimiter: char, out: &mut String) {
    if key_needs_quoting(s, delimiter) {
        quote_into(s, out);
    } else {
        out.push_str(s);
    }
}

/// Appends the token rendering of a scalar value. Callers guarantee the
/// value is not an array or object.
pub(crate) fn format_scalar(value: &Value, delimiter: char, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(n.as_str()),
        Value::String(s) => format_string(s, delimiter, out),
        Value::Array(_) | Value::Object(_) => unreachable!("composite passed to format_scalar"),
    }
}

/// Reads a quoted token starting at the opening quote. Returns the decoded
/// string and the unconsumed remainder after the closing quote.
pub(crate) fn read_quoted(input: &str, line: usize) -> Result<(String, &str), DecodeError> {
    debug_assert!(input.starts_with(QUOTE));
    let mut result = String::new();
    let mut chars = input[1..].char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            QUOTE => {
                // Doubled quote is a literal quote; a lone quote terminates.
                let rest = &input[1 + i + 1..];
                if rest.starts_with(QUOTE) {
                    result.push(QUOTE);
                    chars.next();
                } else {
                    return Ok((result, rest));
                }
            }
            '\\' => match chars.next() {
                Some((_, 'n')) => result.push('\n'),
                Some((_, 'r')) => result.push('\r'),
                Some((_, 't')) => result.push('\t'),
                Some((_, '\\')) => result.push('\\'),
                Some((_, other)) => {
                    return Err(DecodeError::scalar(
                        line,
                        format!("invalid escape sequence `\\{other}`"),
                    ))
                }
                None => {
                    return Err(DecodeError::scalar(line, "unterminated escape sequence"));
                }
            },
            _ => result.push(ch),
        }
    }

    Err(DecodeError::scalar(line, "unterminated quoted string"))
}

/// Parses one complete scalar token (already trimmed, already split out of
/// any delimiter-joined context).
pub(crate) fn parse_scalar(token: &str, line: usize) -> Result<Value, DecodeError> {
    if token.starts_with(QUOTE) {
        let (s, rest) = read_quoted(token, line)?;
        if !rest.is_empty() {
            return Err(DecodeError::scalar(
                line,
                format!("unexpected characters after closing quote: `{rest}`"),
            ));
        }
        // A quoted token is a string unconditionally, never re-read as
        // null/bool/number.
        return Ok(Value::String(s));
    }

    match token {
        "null" => Ok(Value::Null),
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        "" => Err(DecodeError::scalar(
            line,
            "empty token (the empty string must be quoted)",
        )),
        _ => {
            if looks_numeric(token) {
                // A numeric-looking token must be a valid numeral; trailing
                // garbage is a hard error, not a string.
                Number::from_literal(token).map(Value::Number).ok_or_else(|| {
                    DecodeError::scalar(line, format!("malformed number `{token}`"))
                })
            } else {
                Ok(Value::String(token.to_string()))
            }
        }
    }
}

/// Splits a delimiter-joined line into raw field slices, honoring quoting:
/// a delimiter inside a quoted field does not split, and a doubled quote
/// does not close the field.
pub(crate) fn split_fields<'a>(
    input: &'a str,
    delimiter: char,
    line: usize,
) -> Result<Vec<&'a str>, DecodeError> {
    let mut fields = Vec::new();
    let mut field_start = 0;
    let mut in_quotes = false;
    let mut chars = input.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if in_quotes {
            match ch {
                QUOTE => {
                    if chars.peek().is_some_and(|&(_, next)| next == QUOTE) {
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                '\\' => {
                    chars.next();
                }
                _ => {}
            }
        } else if ch == QUOTE {
            in_quotes = true;
        } else if ch == delimiter {
            fields.push(&input[field_start..i]);
            field_start = i + ch.len_utf8();
        }
    }

    if in_quotes {
        return Err(DecodeError::scalar(line, "unterminated quoted string"));
    }

    fields.push(&input[field_start..]);
    Ok(fields)
}

/// Trims the ASCII spaces the encoder may place around a field without
/// touching tabs, which can be the active delimiter.
pub(crate) fn trim_field(field: &str) -> &str {
    field.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(s: &str) -> String {
        let mut out = String::new();
        format_string(s, ',', &mut out);
        out
    }

    #[test]
    fn bare_strings_stay_bare() {
        assert_eq!(fmt("hello"), "hello");
        assert_eq!(fmt("hello world"), "hello world");
        assert_eq!(fmt("a:b"), "a:b");
        assert_eq!(fmt("abc123"), "abc123");
    }

    #[test]
    fn quoting_triggers() {
        assert_eq!(fmt(""), "''");
        assert_eq!(fmt("x,y"), "'x,y'");
        assert_eq!(fmt("null"), "'null'");
        assert_eq!(fmt("true"), "'true'");
        assert_eq!(fmt("42"), "'42'");
        assert_eq!(fmt("12abc"), "'12abc'");
        assert_eq!(fmt(" padded "), "' padded '");
        assert_eq!(fmt("a: b"), "'a: b'");
        assert_eq!(fmt("ends:"), "'ends:'");
        assert_eq!(fmt("- item"), "'- item'");
        assert_eq!(fmt("[3]"), "'[3]'");
    }

    #[test]
    fn quote_escaping() {
        assert_eq!(fmt("it's"), "'it''s'");
        assert_eq!(fmt("a\nb"), "'a\\nb'");
        assert_eq!(fmt("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn parse_inverts_format() {
        for s in ["hello", "", "x,y", "null", "42", "it's", "a\nb", "a\\b", " hi "] {
            let mut out = String::new();
            format_string(s, ',', &mut out);
            assert_eq!(
                parse_scalar(&out, 1).unwrap(),
                Value::String(s.to_string()),
                "round trip of {s:?}"
            );
        }
    }

    #[test]
    fn bare_token_recognition() {
        assert_eq!(parse_scalar("null", 1).unwrap(), Value::Null);
        assert_eq!(parse_scalar("true", 1).unwrap(), Value::Bool(true));
        assert_eq!(
            parse_scalar("1.50", 1).unwrap(),
            Value::Number(Number::from_literal("1.50").unwrap())
        );
        assert_eq!(
            parse_scalar("Null", 1).unwrap(),
            Value::String("Null".to_string())
        );
    }

    #[test]
    fn quoted_token_is_always_string() {
        assert_eq!(
            parse_scalar("'null'", 1).unwrap(),
            Value::String("null".to_string())
        );
        assert_eq!(
            parse_scalar("'42'", 1).unwrap(),
            Value::String("42".to_string())
        );
    }

    #[test]
    fn malformed_numbers_are_errors() {
        assert!(matches!(
            parse_scalar("12abc", 1),
            Err(DecodeError::ScalarSyntaxError { .. })
        ));
        assert!(matches!(
            parse_scalar("+1", 1),
            Err(DecodeError::ScalarSyntaxError { .. })
        ));
    }

    #[test]
    fn empty_bare_token_is_an_error() {
        assert!(matches!(
            parse_scalar("", 1),
            Err(DecodeError::ScalarSyntaxError { .. })
        ));
    }

    #[test]
    fn malformed_quoting_is_an_error() {
        assert!(parse_scalar("'open", 1).is_err());
        assert!(parse_scalar("'a'b", 1).is_err());
        assert!(parse_scalar("'bad\\q'", 1).is_err());
    }

    #[test]
    fn split_respects_quotes() {
        let fields = split_fields("1,'a,b',3", ',', 1).unwrap();
        assert_eq!(fields, vec!["1", "'a,b'", "3"]);

        let fields = split_fields("'it''s',2", ',', 1).unwrap();
        assert_eq!(fields, vec!["'it''s'", "2"]);

        assert!(split_fields("'open,3", ',', 1).is_err());
    }

    #[test]
    fn split_single_field() {
        assert_eq!(split_fields("only", ',', 1).unwrap(), vec!["only"]);
        assert_eq!(split_fields("", ',', 1).unwrap(), vec![""]);
    }
}
