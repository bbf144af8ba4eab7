//! TOON Text Grammar
//!
//! This module documents the line-oriented text format produced and consumed
//! by this crate.
//!
//! # Overview
//!
//! TOON (Token-Oriented Object Notation) is an indentation-based notation for
//! JSON-like data. It removes the braces, brackets, and most of the quotes of
//! JSON, and collapses uniform arrays of objects into compact tables.
//!
//! # Objects
//!
//! An object is a run of `key: value` lines at one indentation level:
//!
//! ```text
//! name: Alice
//! age: 30
//! address:
//!   city: Paris
//!   zip: '75001'
//! ```
//!
//! **Rules**:
//! - Nested objects indent one level deeper (default 2 spaces per level)
//! - A `key:` line with nothing after the colon and no deeper lines below it
//!   is the **empty object**
//! - Key order is significant: it is preserved through a round trip, and two
//!   objects with the same entries in different order are different values
//! - A key repeated within one object is an error, never a silent overwrite
//! - Keys are unquoted unless they contain the delimiter, a quote, `:`, `[`,
//!   `]`, `{`, `}`, or would otherwise be ambiguous as a bare string
//!
//! # Scalars
//!
//! | Type    | Syntax                    | Example          |
//! |---------|---------------------------|------------------|
//! | Null    | `null`                    | `value: null`    |
//! | Boolean | `true` or `false`         | `active: true`   |
//! | Number  | strict decimal numeral    | `price: 1.50`    |
//! | String  | bare or `'single-quoted'` | `name: Alice`    |
//!
//! Numbers follow the grammar `-? digits ('.' digits)? ([eE] [+-]? digits)?`
//! and are preserved **verbatim**: `1.50` round-trips as `1.50`, `007` as
//! `007`. A leading `+` is rejected. A bare token that starts like a number
//! but is not a valid numeral (`12abc`) is a hard error, never a string.
//!
//! # Strings and Quoting
//!
//! Strings are bare by default. A string is wrapped in single quotes when it
//! is empty, has leading or trailing whitespace, spells `null`/`true`/`false`,
//! starts like a number, contains the active delimiter, a quote, a newline,
//! a carriage return, or a backslash, contains a colon followed by whitespace
//! or at the end, or starts with `-`, `[`, or `{`.
//!
//! Inside quotes, a literal quote is written **doubled**:
//!
//! ```text
//! note: 'it''s fine'
//! ```
//!
//! and line breaks are written as two-character escapes, since raw newlines
//! are reserved for structure:
//!
//! | Escape | Meaning         |
//! |--------|-----------------|
//! | `''`   | literal `'`     |
//! | `\n`   | newline         |
//! | `\r`   | carriage return |
//! | `\\`   | backslash       |
//! | `\t`   | tab (accepted on input) |
//!
//! Any other `\x` sequence is an error. A quoted token always decodes to a
//! string: `'null'` and `'42'` stay strings.
//!
//! # Arrays
//!
//! Every array header carries the element count. The layout depends on the
//! elements.
//!
//! ## Inline (all elements scalar)
//!
//! ```text
//! tags[3]: a,b,c
//! ```
//!
//! ## Tabular (uniform flat objects)
//!
//! When every element is an object with the same keys in the same order and
//! only scalar values, the array flattens into a table:
//!
//! ```text
//! users[2]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//! ```
//!
//! The header fixes the column order; every row must have exactly that many
//! fields. The element count and the row count must agree.
//!
//! ## Block (everything else)
//!
//! Mixed or nested elements render one `- ` item per line:
//!
//! ```text
//! items[3]:
//!   - 1
//!   - name: Alice
//!     role: admin
//!   - [2]: 3,4
//! ```
//!
//! An object item carries its first entry on the dash line; further entries
//! align under it (dash column + 2). A lone `-` is the empty-object item.
//!
//! ## Empty
//!
//! ```text
//! items[0]:
//! ```
//!
//! # Delimiters
//!
//! The field delimiter for inline lists and table rows is comma by default;
//! tab and pipe are available through the options. The same delimiter must
//! be configured for encoding and decoding.
//!
//! # Document Roots
//!
//! A document is an object (the default), an array (the first line is a bare
//! `[N]...` header), or a single scalar line. Empty input is the empty
//! object. Content after a completed root is an error.
//!
//! # Indentation
//!
//! Indentation is spaces only; a tab in the indentation region is an error.
//! Every line must sit exactly at the level of an open block. Blank lines
//! are ignored.

// This module contains only documentation; no implementation code
