//! # toon-codec
//!
//! A bidirectional codec between JSON-like [`Value`] trees and TOON
//! (Token-Oriented Object Notation), a compact line-oriented text format.
//!
//! ## What is TOON?
//!
//! TOON is a human-readable data format that strips away the braces,
//! brackets, and most of the quotes of JSON, and collapses uniform arrays of
//! objects into CSV-style tables. It targets contexts where token count
//! matters, such as prompts for Large Language Models.
//!
//! ## Key Features
//!
//! - **Tabular Arrays**: Uniform object arrays serialize as compact tables
//!   with a shared header
//! - **Lossless Round Trips**: Key order and numeral text (`1.50` stays
//!   `1.50`) survive encode/decode
//! - **Serde Compatible**: Works with `#[derive(Serialize, Deserialize)]`
//!   types via [`to_string`] and [`from_str`]
//! - **Typed Errors**: Structural violations surface as [`EncodeError`] /
//!   [`DecodeError`] with line numbers, never silent coercion
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Working with Dynamic Values
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
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
//! assert_eq!(decode(&text).unwrap(), value);
//! ```
//!
//! ## Format
//!
//! The full text grammar is documented in the [`grammar`] module.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grammar;
mod layout;
pub mod macros;
pub mod map;
pub mod options;
mod scalar;
pub mod ser;
pub mod value;

pub use decode::{decode, decode_with_options};
pub use encode::{encode, encode_with_options};
pub use error::{DecodeError, EncodeError};
pub use map::Map;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

pub use de::from_value;
pub use ser::to_value;

use serde::{de::DeserializeOwned, Serialize};

/// Serializes any `T: Serialize` to a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an [`EncodeError`] if the value has no TOON representation, such
/// as a non-finite float or a map with non-string keys.
pub fn to_string<T>(value: &T) -> Result<String, EncodeError>
where
    T: Serialize + ?Sized,
{
    encode(&to_value(value)?)
}

/// Serializes any `T: Serialize` to a TOON string with explicit options.
///
/// # Errors
///
/// Returns an [`EncodeError`] if the value has no TOON representation.
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String, EncodeError>
where
    T: Serialize + ?Sized,
{
    encode_with_options(&to_value(value)?, options)
}

/// Deserializes a value of type `T` from TOON text with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a [`DecodeError`] if the input is not valid TOON or does not
/// match the shape of `T`.
pub fn from_str<T>(text: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    from_value(decode(text)?)
}

/// Deserializes a value of type `T` from TOON text with explicit options.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the input is not valid TOON or does not
/// match the shape of `T`.
pub fn from_str_with_options<T>(text: &str, options: &DecodeOptions) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    from_value(decode_with_options(text, options)?)
}
