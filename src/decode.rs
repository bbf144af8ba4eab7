//! TOON decoding.
//!
//! A single forward pass over the input lines, driven by a stack of open
//! frames. Each frame records the structure being filled (object entries,
//! tabular rows, or list items) and the exact column its content lines live
//! at. A line whose indentation matches an open frame is dispatched to that
//! frame; a deeper or in-between indentation is an error; a shallower one
//! closes frames until one matches. Closing a frame attaches its finished
//! value to the frame below it, or to the document root.
//!
//! ## Usage
//!
//! ```rust
//! use toon_codec::{decode, toon};
//!
//! let text = "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
//! let value = decode(text).unwrap();
//!
//! assert_eq!(
//!     value,
//!     toon!({
//!         "users": [
//!             { "id": 1, "name": "Alice", "role": "admin" },
//!             { "id": 2, "name": "Bob", "role": "user" }
//!         ]
//!     })
//! );
//! ```

use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::scalar::{parse_scalar, read_quoted, split_fields, trim_field, QUOTE};
use crate::{Map, Value};

/// Column offset of list-item content past its `- ` marker.
const DASH_WIDTH: usize = 2;

/// Decodes TOON text with default options (2-space indent, comma delimiter).
///
/// Empty input (or input with only blank lines) decodes to the empty object.
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying the 1-based line number of the first
/// violation found.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes TOON text with explicit options.
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying the 1-based line number of the first
/// violation found.
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Value, DecodeError> {
    let mut decoder = Decoder {
        indent_width: options.indent_width,
        delimiter: options.delimiter.as_char(),
        stack: Vec::new(),
        root: None,
    };
    for (index, raw) in text.lines().enumerate() {
        decoder.feed(index + 1, raw)?;
    }
    decoder.finish()
}

/// One open structure being filled.
enum Frame {
    /// An object collecting `key: value` entries at `indent`. `pending_key`
    /// holds the key of a child frame currently open above this one.
    Object {
        indent: usize,
        entries: Map,
        pending_key: Option<String>,
    },
    /// A tabular array collecting delimiter-joined rows at `indent`.
    Table {
        indent: usize,
        header_line: usize,
        columns: Vec<String>,
        expected: usize,
        rows: Vec<Value>,
    },
    /// A list array collecting `- ` items at `indent`.
    Block {
        indent: usize,
        header_line: usize,
        expected: usize,
        items: Vec<Value>,
    },
}

#[derive(Clone, Copy)]
enum FrameKind {
    Object,
    Table,
    Block,
}

impl Frame {
    fn indent(&self) -> usize {
        match self {
            Frame::Object { indent, .. }
            | Frame::Table { indent, .. }
            | Frame::Block { indent, .. } => *indent,
        }
    }

    fn kind(&self) -> FrameKind {
        match self {
            Frame::Object { .. } => FrameKind::Object,
            Frame::Table { .. } => FrameKind::Table,
            Frame::Block { .. } => FrameKind::Block,
        }
    }
}

/// What an object entry line does once parsed: either it completes a value
/// on its own line, or it opens a child frame for the following lines.
enum Step {
    Insert(Value),
    Open(Frame),
}

struct Decoder {
    indent_width: usize,
    delimiter: char,
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl Decoder {
    fn feed(&mut self, line: usize, raw: &str) -> Result<(), DecodeError> {
        if raw.trim().is_empty() {
            return Ok(());
        }

        let mut indent = 0;
        for ch in raw.chars() {
            match ch {
                ' ' => indent += 1,
                '\t' => {
                    return Err(DecodeError::indentation(line, "tab character in indentation"))
                }
                _ => break,
            }
        }
        let content = raw[indent..].trim_end_matches(' ');

        // Close frames until one opens at exactly this column.
        while let Some(open) = self.stack.last().map(Frame::indent) {
            if open == indent {
                break;
            }
            if open < indent {
                return Err(DecodeError::indentation(
                    line,
                    format!("indentation of {indent} matches no open block"),
                ));
            }
            self.close_top()?;
        }

        match self.stack.last().map(Frame::kind) {
            None => self.start_root(line, indent, content),
            Some(FrameKind::Object) => self.object_line(line, indent, content),
            Some(FrameKind::Table) => self.table_row(line, content),
            Some(FrameKind::Block) => self.block_item(line, indent, content),
        }
    }

    fn finish(mut self) -> Result<Value, DecodeError> {
        while !self.stack.is_empty() {
            self.close_top()?;
        }
        Ok(self.root.unwrap_or_else(|| Value::Object(Map::new())))
    }

    /// Pops the top frame, checks its declared count, and attaches its value
    /// to the new top (or the root).
    fn close_top(&mut self) -> Result<(), DecodeError> {
        let Some(frame) = self.stack.pop() else {
            return Ok(());
        };
        let value = match frame {
            Frame::Object { entries, .. } => Value::Object(entries),
            Frame::Table {
                header_line,
                expected,
                rows,
                ..
            } => {
                if rows.len() != expected {
                    return Err(DecodeError::LengthMismatch {
                        line: header_line,
                        expected,
                        found: rows.len(),
                    });
                }
                Value::Array(rows)
            }
            Frame::Block {
                header_line,
                expected,
                items,
                ..
            } => {
                if items.len() != expected {
                    return Err(DecodeError::LengthMismatch {
                        line: header_line,
                        expected,
                        found: items.len(),
                    });
                }
                Value::Array(items)
            }
        };

        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Object {
                entries,
                pending_key,
                ..
            }) => {
                if let Some(key) = pending_key.take() {
                    entries.insert(key, value);
                }
            }
            Some(Frame::Block { items, .. }) => items.push(value),
            // Tables hold rows only; no child frame ever opens under one.
            Some(Frame::Table { .. }) => {}
        }
        Ok(())
    }

    /// Handles the first content line, which fixes the document's root kind.
    fn start_root(&mut self, line: usize, indent: usize, content: &str) -> Result<(), DecodeError> {
        if self.root.is_some() {
            return Err(DecodeError::header(
                line,
                "unexpected content after the document root",
            ));
        }
        if indent != 0 {
            return Err(DecodeError::indentation(
                line,
                "the first line must not be indented",
            ));
        }

        if content.starts_with('[') {
            if let Some(value) = self.bare_array(line, 0, content)? {
                self.root = Some(value);
            }
            Ok(())
        } else if entry_shaped(content) {
            self.stack.push(Frame::Object {
                indent: 0,
                entries: Map::new(),
                pending_key: None,
            });
            self.object_line(line, 0, content)
        } else {
            self.root = Some(parse_scalar(content, line)?);
            Ok(())
        }
    }

    /// Handles one `key: ...` line inside an object frame.
    fn object_line(&mut self, line: usize, indent: usize, content: &str) -> Result<(), DecodeError> {
        let head = parse_entry_head(content, self.delimiter, line)?;

        if let Some(Frame::Object { entries, .. }) = self.stack.last() {
            if entries.contains_key(&head.key) {
                return Err(DecodeError::DuplicateKey {
                    line,
                    key: head.key,
                });
            }
        }

        let child_indent = indent + self.indent_width;
        let step = match head.array {
            None => {
                if head.rest.is_empty() {
                    Step::Open(Frame::Object {
                        indent: child_indent,
                        entries: Map::new(),
                        pending_key: None,
                    })
                } else {
                    Step::Insert(parse_scalar(head.rest, line)?)
                }
            }
            Some(ArrayHead {
                len,
                columns: Some(columns),
            }) => {
                if !head.rest.is_empty() {
                    return Err(DecodeError::header(
                        line,
                        "unexpected content after a table header",
                    ));
                }
                Step::Open(Frame::Table {
                    indent: child_indent,
                    header_line: line,
                    columns,
                    expected: len,
                    rows: Vec::new(),
                })
            }
            Some(ArrayHead { len, columns: None }) => {
                if head.rest.is_empty() {
                    if len == 0 {
                        Step::Insert(Value::Array(Vec::new()))
                    } else {
                        Step::Open(Frame::Block {
                            indent: child_indent,
                            header_line: line,
                            expected: len,
                            items: Vec::new(),
                        })
                    }
                } else {
                    Step::Insert(Value::Array(parse_inline_list(
                        head.rest,
                        len,
                        self.delimiter,
                        line,
                    )?))
                }
            }
        };

        match step {
            Step::Insert(value) => {
                if let Some(Frame::Object { entries, .. }) = self.stack.last_mut() {
                    entries.insert(head.key, value);
                }
            }
            Step::Open(frame) => {
                if let Some(Frame::Object { pending_key, .. }) = self.stack.last_mut() {
                    *pending_key = Some(head.key);
                }
                self.stack.push(frame);
            }
        }
        Ok(())
    }

    /// Handles one delimiter-joined row inside a table frame.
    fn table_row(&mut self, line: usize, content: &str) -> Result<(), DecodeError> {
        let delimiter = self.delimiter;
        let Some(Frame::Table {
            columns,
            expected,
            rows,
            ..
        }) = self.stack.last_mut()
        else {
            return Ok(());
        };

        if rows.len() == *expected {
            return Err(DecodeError::LengthMismatch {
                line,
                expected: *expected,
                found: *expected + 1,
            });
        }

        let fields = split_fields(content, delimiter, line)?;
        if fields.len() != columns.len() {
            return Err(DecodeError::ColumnMismatch {
                line,
                expected: columns.len(),
                found: fields.len(),
            });
        }

        let mut row = Map::with_capacity(columns.len());
        for (column, field) in columns.iter().zip(fields) {
            row.insert(column.clone(), parse_scalar(trim_field(field), line)?);
        }
        rows.push(Value::Object(row));
        Ok(())
    }

    /// Handles one `- ` item line inside a block frame.
    fn block_item(&mut self, line: usize, indent: usize, content: &str) -> Result<(), DecodeError> {
        {
            let Some(Frame::Block {
                expected, items, ..
            }) = self.stack.last()
            else {
                return Ok(());
            };
            if items.len() == *expected {
                return Err(DecodeError::LengthMismatch {
                    line,
                    expected: *expected,
                    found: *expected + 1,
                });
            }
        }

        // A lone dash is the empty-object item.
        if content == "-" {
            if let Some(Frame::Block { items, .. }) = self.stack.last_mut() {
                items.push(Value::Object(Map::new()));
            }
            return Ok(());
        }

        let Some(body) = content.strip_prefix("- ") else {
            return Err(DecodeError::header(line, "expected a `- ` list item"));
        };
        // Item content behaves as if indented past the dash marker.
        let item_indent = indent + DASH_WIDTH;

        if body.starts_with('[') {
            if let Some(value) = self.bare_array(line, item_indent, body)? {
                if let Some(Frame::Block { items, .. }) = self.stack.last_mut() {
                    items.push(value);
                }
            }
            Ok(())
        } else if entry_shaped(body) {
            // Object item: the dash line carries its first entry; further
            // entries arrive at the virtual indent.
            self.stack.push(Frame::Object {
                indent: item_indent,
                entries: Map::new(),
                pending_key: None,
            });
            self.object_line(line, item_indent, body)
        } else {
            let value = parse_scalar(body, line)?;
            if let Some(Frame::Block { items, .. }) = self.stack.last_mut() {
                items.push(value);
            }
            Ok(())
        }
    }

    /// Parses a keyless array header (`[N]...`) at root or item position.
    /// Returns the finished array for inline and empty forms, or `None`
    /// after opening a frame for the following lines.
    fn bare_array(
        &mut self,
        line: usize,
        col: usize,
        content: &str,
    ) -> Result<Option<Value>, DecodeError> {
        let (head, after) = parse_array_suffix(content, self.delimiter, line)?;
        let rest = expect_colon(after, line)?;
        let child_indent = col + self.indent_width;

        match head.columns {
            Some(columns) => {
                if !rest.is_empty() {
                    return Err(DecodeError::header(
                        line,
                        "unexpected content after a table header",
                    ));
                }
                self.stack.push(Frame::Table {
                    indent: child_indent,
                    header_line: line,
                    columns,
                    expected: head.len,
                    rows: Vec::new(),
                });
                Ok(None)
            }
            None if rest.is_empty() => {
                if head.len == 0 {
                    Ok(Some(Value::Array(Vec::new())))
                } else {
                    self.stack.push(Frame::Block {
                        indent: child_indent,
                        header_line: line,
                        expected: head.len,
                        items: Vec::new(),
                    });
                    Ok(None)
                }
            }
            None => Ok(Some(Value::Array(parse_inline_list(
                rest,
                head.len,
                self.delimiter,
                line,
            )?))),
        }
    }
}

/// The parsed shape of an `[N]` / `[N]{cols}` header suffix.
struct ArrayHead {
    len: usize,
    columns: Option<Vec<String>>,
}

/// The parsed shape of a `key...:` entry line.
struct EntryHead<'a> {
    key: String,
    array: Option<ArrayHead>,
    rest: &'a str,
}

/// True if item or root content reads as a `key:` entry rather than a bare
/// scalar: a colon followed by whitespace or end of line (outside quotes),
/// or a quoted key followed by `:` or `[`. Strings that would satisfy this
/// are always quoted by the encoder, so header recognition wins.
fn entry_shaped(content: &str) -> bool {
    if content.starts_with(QUOTE) {
        match read_quoted(content, 0) {
            Ok((_, rest)) => rest.starts_with([':', '[']),
            Err(_) => false,
        }
    } else {
        let bytes = content.as_bytes();
        bytes
            .iter()
            .enumerate()
            .any(|(i, &b)| b == b':' && matches!(bytes.get(i + 1), None | Some(b' ')))
    }
}

fn parse_entry_head<'a>(
    content: &'a str,
    delimiter: char,
    line: usize,
) -> Result<EntryHead<'a>, DecodeError> {
    let (key, after_key) = if content.starts_with(QUOTE) {
        read_quoted(content, line)?
    } else {
        match content.find([':', '[']) {
            Some(0) => return Err(DecodeError::header(line, "missing key before `:`")),
            Some(i) => (trim_field(&content[..i]).to_string(), &content[i..]),
            None => return Err(DecodeError::header(line, "expected a `key:` line")),
        }
    };

    let (array, after) = if after_key.starts_with('[') {
        let (head, rest) = parse_array_suffix(after_key, delimiter, line)?;
        (Some(head), rest)
    } else {
        (None, after_key)
    };

    let rest = expect_colon(after, line)?;
    Ok(EntryHead { key, array, rest })
}

fn parse_array_suffix<'a>(
    s: &'a str,
    delimiter: char,
    line: usize,
) -> Result<(ArrayHead, &'a str), DecodeError> {
    let close = s
        .find(']')
        .ok_or_else(|| DecodeError::header(line, "unterminated `[` in array header"))?;
    let digits = &s[1..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::header(
            line,
            format!("invalid array length `{digits}`"),
        ));
    }
    let len: usize = digits
        .parse()
        .map_err(|_| DecodeError::header(line, format!("array length `{digits}` out of range")))?;

    let mut rest = &s[close + 1..];
    let columns = if rest.starts_with('{') {
        let end = find_brace_end(rest)
            .ok_or_else(|| DecodeError::header(line, "unterminated `{` in table header"))?;
        let inside = &rest[1..end];
        rest = &rest[end + 1..];
        Some(parse_columns(inside, delimiter, line)?)
    } else {
        None
    };

    Ok((ArrayHead { len, columns }, rest))
}

/// Finds the closing `}` of a column list, skipping quoted column names.
fn find_brace_end(s: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut chars = s.char_indices().skip(1).peekable();
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
        } else if ch == '}' {
            return Some(i);
        }
    }
    None
}

fn parse_columns(
    inside: &str,
    delimiter: char,
    line: usize,
) -> Result<Vec<String>, DecodeError> {
    if trim_field(inside).is_empty() {
        return Err(DecodeError::header(line, "empty column list"));
    }
    let fields = split_fields(inside, delimiter, line)?;
    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let token = trim_field(field);
        let name = if token.starts_with(QUOTE) {
            let (name, remainder) = read_quoted(token, line)?;
            if !remainder.is_empty() {
                return Err(DecodeError::scalar(
                    line,
                    format!("unexpected characters after closing quote: `{remainder}`"),
                ));
            }
            name
        } else if token.is_empty() {
            return Err(DecodeError::header(line, "empty column name"));
        } else {
            token.to_string()
        };
        if columns.contains(&name) {
            return Err(DecodeError::DuplicateKey { line, key: name });
        }
        columns.push(name);
    }
    Ok(columns)
}

/// Requires a `:` followed by a space or end of line, returning the trimmed
/// remainder. A colon glued to other text is not header syntax.
fn expect_colon<'a>(s: &'a str, line: usize) -> Result<&'a str, DecodeError> {
    match s.strip_prefix(':') {
        Some(rest) if rest.is_empty() => Ok(""),
        Some(rest) if rest.starts_with(' ') => Ok(trim_field(rest)),
        _ => Err(DecodeError::header(line, "expected `:` at end of header")),
    }
}

fn parse_inline_list(
    rest: &str,
    expected: usize,
    delimiter: char,
    line: usize,
) -> Result<Vec<Value>, DecodeError> {
    let fields = split_fields(rest, delimiter, line)?;
    if fields.len() != expected {
        return Err(DecodeError::LengthMismatch {
            line,
            expected,
            found: fields.len(),
        });
    }
    fields
        .iter()
        .map(|field| parse_scalar(trim_field(field), line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{toon, Delimiter};

    #[test]
    fn empty_input_is_empty_object() {
        assert_eq!(decode("").unwrap(), toon!({}));
        assert_eq!(decode("\n\n").unwrap(), toon!({}));
        assert_eq!(decode("   \n").unwrap(), toon!({}));
    }

    #[test]
    fn scalar_roots() {
        assert_eq!(decode("42").unwrap(), toon!(42));
        assert_eq!(decode("null").unwrap(), toon!(null));
        assert_eq!(decode("'42'").unwrap(), toon!("42"));
        assert_eq!(decode("hello world").unwrap(), toon!("hello world"));
    }

    #[test]
    fn flat_object() {
        let value = decode("name: Alice\nage: 30\nactive: true").unwrap();
        assert_eq!(value, toon!({ "name": "Alice", "age": 30, "active": true }));
    }

    #[test]
    fn key_order_is_preserved() {
        let value = decode("b: 1\na: 2").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn nested_objects() {
        let value = decode("outer:\n  inner:\n    leaf: 1").unwrap();
        assert_eq!(value, toon!({ "outer": { "inner": { "leaf": 1 } } }));
    }

    #[test]
    fn childless_key_is_empty_object() {
        let value = decode("meta:\nnext: 1").unwrap();
        assert_eq!(value, toon!({ "meta": {}, "next": 1 }));

        let value = decode("meta:").unwrap();
        assert_eq!(value, toon!({ "meta": {} }));
    }

    #[test]
    fn tabular_array() {
        let value = decode("users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user").unwrap();
        assert_eq!(
            value,
            toon!({
                "users": [
                    { "id": 1, "name": "Alice", "role": "admin" },
                    { "id": 2, "name": "Bob", "role": "user" }
                ]
            })
        );
    }

    #[test]
    fn inline_list() {
        let value = decode("tags[3]: a,b,c").unwrap();
        assert_eq!(value, toon!({ "tags": ["a", "b", "c"] }));
    }

    #[test]
    fn empty_array() {
        assert_eq!(decode("items[0]:").unwrap(), toon!({ "items": [] }));
        assert_eq!(decode("[0]:").unwrap(), toon!([]));
    }

    #[test]
    fn root_arrays() {
        assert_eq!(decode("[3]: 1,2,3").unwrap(), toon!([1, 2, 3]));
        assert_eq!(
            decode("[1]{a}:\n  1").unwrap(),
            toon!([{ "a": 1 }])
        );
        assert_eq!(
            decode("[2]:\n  - 1\n  - x: 2").unwrap(),
            toon!([1, { "x": 2 }])
        );
    }

    #[test]
    fn block_items() {
        let value = decode("rows[2]:\n  - a: 1\n  - a: 1\n    b: 2").unwrap();
        assert_eq!(value, toon!({ "rows": [{ "a": 1 }, { "a": 1, "b": 2 }] }));
    }

    #[test]
    fn lone_dash_is_empty_object_item() {
        let value = decode("items[2]:\n  -\n  - 1").unwrap();
        assert_eq!(value, toon!({ "items": [{}, 1] }));
    }

    #[test]
    fn nested_array_item() {
        let value = decode("mix[3]:\n  - 1\n  - a: 2\n  - [2]: 3,4").unwrap();
        assert_eq!(value, toon!({ "mix": [1, { "a": 2 }, [3, 4]] }));
    }

    #[test]
    fn object_item_with_nested_children() {
        let text = "items[1]:\n  - name: x\n    child:\n      leaf: 1";
        let value = decode(text).unwrap();
        assert_eq!(
            value,
            toon!({ "items": [{ "name": "x", "child": { "leaf": 1 } }] })
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let value = decode("a: 1\n\n\nb: 2\n").unwrap();
        assert_eq!(value, toon!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn number_text_survives() {
        let value = decode("price: 1.50").unwrap();
        let Value::Number(n) = &value.as_object().unwrap()["price"] else {
            panic!("expected number");
        };
        assert_eq!(n.as_str(), "1.50");
    }

    #[test]
    fn quoted_scalars_decode_to_strings() {
        let value = decode("a: 'null'\nb: '1,2'\nc: 'it''s'").unwrap();
        assert_eq!(value, toon!({ "a": "null", "b": "1,2", "c": "it's" }));
    }

    #[test]
    fn quoted_keys() {
        let value = decode("'x[0]': 1\n'a: b': 2").unwrap();
        assert_eq!(value, toon!({ "x[0]": 1, "a: b": 2 }));
    }

    #[test]
    fn indentation_errors() {
        assert!(matches!(
            decode("a:\n   b: 1"),
            Err(DecodeError::IndentationError { line: 2, .. })
        ));
        assert!(matches!(
            decode("\ta: 1"),
            Err(DecodeError::IndentationError { line: 1, .. })
        ));
        assert!(matches!(
            decode("a: 1\n  b: 2"),
            Err(DecodeError::IndentationError { line: 2, .. })
        ));
    }

    #[test]
    fn length_mismatches() {
        assert!(matches!(
            decode("tags[2]: a,b,c"),
            Err(DecodeError::LengthMismatch {
                line: 1,
                expected: 2,
                found: 3
            })
        ));
        // Too few rows reports the header line.
        assert!(matches!(
            decode("users[2]{id}:\n  1"),
            Err(DecodeError::LengthMismatch {
                line: 1,
                expected: 2,
                found: 1
            })
        ));
        // Too many rows reports the extra row's line.
        assert!(matches!(
            decode("users[1]{id}:\n  1\n  2"),
            Err(DecodeError::LengthMismatch { line: 3, .. })
        ));
        assert!(matches!(
            decode("items[2]:\n  - 1"),
            Err(DecodeError::LengthMismatch { line: 1, .. })
        ));
    }

    #[test]
    fn column_mismatch() {
        assert!(matches!(
            decode("users[1]{id,name}:\n  1"),
            Err(DecodeError::ColumnMismatch {
                line: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn duplicate_keys() {
        assert!(matches!(
            decode("a: 1\na: 2"),
            Err(DecodeError::DuplicateKey { line: 2, .. })
        ));
        assert!(matches!(
            decode("t[1]{id,id}:\n  1,2"),
            Err(DecodeError::DuplicateKey { line: 1, .. })
        ));
    }

    #[test]
    fn header_syntax_errors() {
        assert!(matches!(
            decode("a: 1\nnot an entry"),
            Err(DecodeError::HeaderSyntaxError { line: 2, .. })
        ));
        assert!(matches!(
            decode("a[x]:"),
            Err(DecodeError::HeaderSyntaxError { line: 1, .. })
        ));
        assert!(matches!(
            decode("a[2: 1,2"),
            Err(DecodeError::HeaderSyntaxError { line: 1, .. })
        ));
        // Content after a completed scalar root.
        assert!(matches!(
            decode("42\nmore"),
            Err(DecodeError::HeaderSyntaxError { line: 2, .. })
        ));
    }

    #[test]
    fn scalar_syntax_errors() {
        assert!(matches!(
            decode("n: 12abc"),
            Err(DecodeError::ScalarSyntaxError { line: 1, .. })
        ));
        assert!(matches!(
            decode("s: 'open"),
            Err(DecodeError::ScalarSyntaxError { line: 1, .. })
        ));
    }

    #[test]
    fn pipe_delimiter() {
        let options = DecodeOptions::new().with_delimiter(Delimiter::Pipe);
        let value = decode_with_options("tags[2]: a|b", &options).unwrap();
        assert_eq!(value, toon!({ "tags": ["a", "b"] }));

        // With a pipe delimiter, commas are plain characters.
        let value = decode_with_options("tags[1]: a,b", &options).unwrap();
        assert_eq!(value, toon!({ "tags": ["a,b"] }));
    }

    #[test]
    fn wide_indent() {
        let options = DecodeOptions::new().with_indent_width(4);
        let value = decode_with_options("outer:\n    inner: 1", &options).unwrap();
        assert_eq!(value, toon!({ "outer": { "inner": 1 } }));
    }
}
