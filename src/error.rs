//! Error types for TOON encoding and decoding.
//!
//! The codec never recovers from a structural inconsistency internally: every
//! detected violation surfaces immediately as a typed error, with no silent
//! coercion (a malformed number token is a hard error, never quietly treated
//! as a string). Translating these into user-facing messages is the caller's
//! job; the codec has no user-facing behavior of its own.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, DecodeError};
//!
//! let err = decode("items[3]:\n  - 1\n  - 2").unwrap_err();
//! assert!(matches!(err, DecodeError::LengthMismatch { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced while encoding a [`Value`](crate::Value) to TOON text,
/// or while converting a native type into a `Value` via serde.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The producing layer handed the codec something outside the value
    /// model: a non-finite float, a non-string map key, or a serde shape
    /// with no TOON representation.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Traversal exceeded the nesting-depth guard. The owned tree is acyclic
    /// by construction, so in practice this only fires on pathological depth
    /// from a misbehaving producer.
    #[error("cyclic reference suspected: nesting depth exceeded {0}")]
    CyclicReference(usize),
}

/// Errors produced while decoding TOON text back into a
/// [`Value`](crate::Value). Every variant carries the 1-based line number of
/// the offending input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A line's leading indentation matches no open block, or the
    /// indentation contains tab characters.
    #[error("indentation error at line {line}: {msg}")]
    IndentationError { line: usize, msg: String },

    /// A line that must be a `key:` header (object position) does not parse
    /// as one, or a header is structurally malformed.
    #[error("header syntax error at line {line}: {msg}")]
    HeaderSyntaxError { line: usize, msg: String },

    /// The declared element count `[N]` does not match the number of rows,
    /// items, or inline values actually present.
    #[error("length mismatch at line {line}: declared {expected}, found {found}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A tabular row has a different number of fields than the header
    /// declares columns.
    #[error("column mismatch at line {line}: header has {expected} columns, row has {found} fields")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The same key appeared twice in one object, or twice in one tabular
    /// header.
    #[error("duplicate key `{key}` at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// A scalar token is malformed: unterminated quote, bad escape sequence,
    /// or a numeric-looking token with trailing garbage.
    #[error("scalar syntax error at line {line}: {msg}")]
    ScalarSyntaxError { line: usize, msg: String },
}

impl DecodeError {
    pub(crate) fn indentation(line: usize, msg: impl Into<String>) -> Self {
        DecodeError::IndentationError {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn header(line: usize, msg: impl Into<String>) -> Self {
        DecodeError::HeaderSyntaxError {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn scalar(line: usize, msg: impl Into<String>) -> Self {
        DecodeError::ScalarSyntaxError {
            line,
            msg: msg.into(),
        }
    }

    /// The line number the error was reported at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            DecodeError::IndentationError { line, .. }
            | DecodeError::HeaderSyntaxError { line, .. }
            | DecodeError::LengthMismatch { line, .. }
            | DecodeError::ColumnMismatch { line, .. }
            | DecodeError::DuplicateKey { line, .. }
            | DecodeError::ScalarSyntaxError { line, .. } => *line,
        }
    }
}

impl serde::ser::Error for EncodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        EncodeError::UnsupportedType(msg.to_string())
    }
}

// Type mismatches reported by `Deserialize` impls during `from_value` have no
// source line; they surface as scalar errors at line 0.
impl serde::de::Error for DecodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        DecodeError::ScalarSyntaxError {
            line: 0,
            msg: msg.to_string(),
        }
    }
}
