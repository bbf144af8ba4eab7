//! Configuration options for the codec.
//!
//! Both directions take an options struct: [`EncodeOptions`] controls layout
//! of the produced text, [`DecodeOptions`] tells the parser what layout to
//! expect. `decode` with default options inverts `encode` with default
//! options; a non-default delimiter or indent width must be supplied to both
//! sides.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode_with_options, Delimiter, EncodeOptions, toon};
//!
//! let value = toon!({ "tags": ["a", "b"] });
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! let text = encode_with_options(&value, &options).unwrap();
//! assert_eq!(text, "tags[2]: a|b");
//! ```

/// Delimiter separating tabular row fields and inline list values.
///
/// - **Comma**: default, most compact
/// - **Tab**: TSV-like output
/// - **Pipe**: readable for markdown-style tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// The delimiter as a single character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The delimiter as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Options for [`encode_with_options`](crate::encode_with_options).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level. Default 2.
    pub indent_width: usize,
    /// Field delimiter for tabular rows and inline scalar lists.
    pub delimiter: Delimiter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent_width: 2,
            delimiter: Delimiter::default(),
        }
    }
}

impl EncodeOptions {
    /// Default options: comma delimiter, 2-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Options for [`decode_with_options`](crate::decode_with_options).
///
/// Mirrors [`EncodeOptions`] so that text produced with non-default encode
/// options can be decoded back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Spaces per nesting level the input is expected to use. Default 2.
    pub indent_width: usize,
    /// Field delimiter the input is expected to use.
    pub delimiter: Delimiter,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent_width: 2,
            delimiter: Delimiter::default(),
        }
    }
}

impl DecodeOptions {
    /// Default options: comma delimiter, 2-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}
