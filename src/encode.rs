//! TOON encoding.
//!
//! Walks a [`Value`] top-down and emits indented text, delegating array
//! layout to the detector in [`layout`](crate::layout) and scalar rendering
//! to the formatter in [`scalar`](crate::scalar). Purely a string-producing
//! transform: no side effects, deterministic for a given input and options.
//!
//! ## Usage
//!
//! ```rust
//! use toon_codec::{encode, toon};
//!
//! let value = toon!({
//!     "users": [
//!         { "id": 1, "name": "Alice", "role": "admin" },
//!         { "id": 2, "name": "Bob", "role": "user" }
//!     ]
//! });
//!
//! let text = encode(&value).unwrap();
//! assert_eq!(text, "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user");
//! ```

use crate::error::EncodeError;
use crate::layout::{classify, ArrayLayout};
use crate::options::EncodeOptions;
use crate::scalar::{format_key, format_scalar};
use crate::{Map, Value};

/// Nesting-depth guard. The owned tree cannot alias, so hitting this bound
/// means the producing layer built something pathological.
const MAX_DEPTH: usize = 1000;

/// Width of the `- ` list-item marker; item content is indented past it.
const DASH_WIDTH: usize = 2;

/// Encodes a value with default options (2-space indent, comma delimiter).
///
/// # Errors
///
/// Returns [`EncodeError::CyclicReference`] if nesting exceeds the depth
/// guard.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encodes a value with explicit options.
///
/// # Errors
///
/// Returns [`EncodeError::CyclicReference`] if nesting exceeds the depth
/// guard.
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> Result<String, EncodeError> {
    let mut encoder = Encoder {
        out: String::with_capacity(256),
        indent_width: options.indent_width,
        delimiter: options.delimiter.as_char(),
    };
    encoder.write_root(value)?;
    Ok(encoder.out)
}

struct Encoder {
    out: String,
    indent_width: usize,
    delimiter: char,
}

impl Encoder {
    fn write_root(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Object(map) => {
                for (i, (key, child)) in map.iter().enumerate() {
                    if i > 0 {
                        self.newline_indent(0);
                    }
                    self.write_entry(key, child, 0, 1)?;
                }
            }
            Value::Array(arr) => self.write_array(None, arr, 0, 1)?,
            scalar => format_scalar(scalar, self.delimiter, &mut self.out),
        }
        Ok(())
    }

    /// Writes one `key: ...` entry. The cursor is already at `col`.
    fn write_entry(
        &mut self,
        key: &str,
        value: &Value,
        col: usize,
        depth: usize,
    ) -> Result<(), EncodeError> {
        match value {
            Value::Array(arr) => self.write_array(Some(key), arr, col, depth),
            Value::Object(map) => {
                format_key(key, self.delimiter, &mut self.out);
                self.out.push(':');
                self.write_object_body(map, col, depth)
            }
            scalar => {
                format_key(key, self.delimiter, &mut self.out);
                self.out.push_str(": ");
                format_scalar(scalar, self.delimiter, &mut self.out);
                Ok(())
            }
        }
    }

    /// Writes an object's entries one level below `col`. An empty object
    /// contributes no lines at all, so `key:` with no children decodes back
    /// to the empty object.
    fn write_object_body(&mut self, map: &Map, col: usize, depth: usize) -> Result<(), EncodeError> {
        self.check_depth(depth)?;
        let child_col = col + self.indent_width;
        for (key, value) in map.iter() {
            self.newline_indent(child_col);
            self.write_entry(key, value, child_col, depth + 1)?;
        }
        Ok(())
    }

    /// Writes an array header (with `key` prefix if given) and its body.
    fn write_array(
        &mut self,
        key: Option<&str>,
        arr: &[Value],
        col: usize,
        depth: usize,
    ) -> Result<(), EncodeError> {
        self.check_depth(depth)?;
        if let Some(key) = key {
            format_key(key, self.delimiter, &mut self.out);
        }

        match classify(arr) {
            ArrayLayout::Empty => self.out.push_str("[0]:"),
            ArrayLayout::Inline => {
                self.out.push('[');
                self.out.push_str(&arr.len().to_string());
                self.out.push_str("]: ");
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        self.out.push(self.delimiter);
                    }
                    format_scalar(element, self.delimiter, &mut self.out);
                }
            }
            ArrayLayout::Tabular { columns } => {
                self.out.push('[');
                self.out.push_str(&arr.len().to_string());
                self.out.push_str("]{");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        self.out.push(self.delimiter);
                    }
                    format_key(column, self.delimiter, &mut self.out);
                }
                self.out.push_str("}:");

                let row_col = col + self.indent_width;
                for element in arr {
                    // classify guarantees every element is a flat object in
                    // the shared key order.
                    let Value::Object(row) = element else {
                        continue;
                    };
                    self.newline_indent(row_col);
                    for (i, value) in row.values().enumerate() {
                        if i > 0 {
                            self.out.push(self.delimiter);
                        }
                        format_scalar(value, self.delimiter, &mut self.out);
                    }
                }
            }
            ArrayLayout::Block => {
                self.out.push('[');
                self.out.push_str(&arr.len().to_string());
                self.out.push_str("]:");

                let item_col = col + self.indent_width;
                for element in arr {
                    self.newline_indent(item_col);
                    self.write_block_item(element, item_col, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    /// Writes one `- ` list item. The cursor is at `col` (the dash column);
    /// item content behaves as if indented `DASH_WIDTH` past the dash.
    fn write_block_item(
        &mut self,
        item: &Value,
        col: usize,
        depth: usize,
    ) -> Result<(), EncodeError> {
        let content_col = col + DASH_WIDTH;
        match item {
            Value::Object(map) if map.is_empty() => {
                // A lone dash is the empty-object item.
                self.out.push('-');
                Ok(())
            }
            Value::Object(map) => {
                self.out.push_str("- ");
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        self.newline_indent(content_col);
                    }
                    self.write_entry(key, value, content_col, depth)?;
                }
                Ok(())
            }
            Value::Array(arr) => {
                self.out.push_str("- ");
                self.write_array(None, arr, content_col, depth)
            }
            scalar => {
                self.out.push_str("- ");
                format_scalar(scalar, self.delimiter, &mut self.out);
                Ok(())
            }
        }
    }

    fn newline_indent(&mut self, col: usize) {
        self.out.push('\n');
        for _ in 0..col {
            self.out.push(' ');
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), EncodeError> {
        if depth > MAX_DEPTH {
            Err(EncodeError::CyclicReference(MAX_DEPTH))
        } else {
            Ok(())
        }
    }
}
