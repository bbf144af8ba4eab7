//! Dynamic value representation for TOON data.
//!
//! [`Value`] is the closed tree type the codec transforms: null, booleans,
//! numbers, strings, arrays, and insertion-ordered objects. The tree has no
//! back-references; both codec directions produce a fresh, fully independent
//! tree and never mutate their input.
//!
//! [`Number`] preserves the decimal numeral **verbatim** as text, so that a
//! round trip does not alter `1.50` into `1.5`. The integer/float distinction
//! is derived from the presence of a fractional or exponent part.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{Number, Value};
//!
//! let n = Number::from_literal("1.50").unwrap();
//! assert!(n.is_float());
//! assert_eq!(n.as_str(), "1.50");
//!
//! let v = Value::from(42);
//! assert!(v.is_number());
//! assert_eq!(v.as_i64(), Some(42));
//! ```

use crate::Map;
use num_bigint::BigInt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any TOON value.
///
/// Equality is structural: two objects are equal iff they hold identical
/// key/value pairs in identical order; two arrays are equal iff their
/// elements are pairwise equal in order; two numbers are equal iff their
/// preserved numeral text is identical.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// An arbitrary-precision decimal numeral, preserved as text.
///
/// The stored text always matches the strict numeral grammar:
/// `-? digits ( '.' digits )? ( [eE] [+-]? digits )?`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Number {
    text: String,
}

/// Strict numeral grammar check. Leading zeros are accepted (the source
/// text is preserved verbatim, so `007` round-trips as `007`); a leading
/// `+` is not.
pub(crate) fn is_valid_numeral(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

impl Number {
    /// Builds a `Number` from numeral text, validating it against the strict
    /// grammar. The text is preserved verbatim for round-tripping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Number;
    ///
    /// assert!(Number::from_literal("1.50").is_some());
    /// assert!(Number::from_literal("-2e10").is_some());
    /// assert!(Number::from_literal("12abc").is_none());
    /// assert!(Number::from_literal("+1").is_none());
    /// ```
    #[must_use]
    pub fn from_literal(text: &str) -> Option<Self> {
        if is_valid_numeral(text) {
            Some(Number {
                text: text.to_string(),
            })
        } else {
            None
        }
    }

    /// Builds a `Number` from a finite float. Returns `None` for NaN and
    /// infinities, which have no numeral representation.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            // Rust's Display for f64 never uses exponent notation, so the
            // result always matches the numeral grammar.
            Some(Number {
                text: value.to_string(),
            })
        } else {
            None
        }
    }

    /// The preserved numeral text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the numeral has no fractional or exponent part.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        !self.text.contains(['.', 'e', 'E'])
    }

    /// Returns `true` if the numeral has a fractional or exponent part.
    #[must_use]
    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }

    /// The numeral as an `i64`, if it is an integer in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.text.parse().ok()
        } else {
            None
        }
    }

    /// The numeral as a `u64`, if it is a non-negative integer in range.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.text.parse().ok()
        } else {
            None
        }
    }

    /// The numeral as an `f64` (lossy for long numerals).
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.text.parse().unwrap_or(f64::NAN)
    }

    /// The numeral as an arbitrary-precision integer, for integer numerals
    /// outside the `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Number;
    ///
    /// let n = Number::from_literal("123456789012345678901234567890").unwrap();
    /// assert_eq!(n.as_i64(), None);
    /// assert!(n.as_bigint().is_some());
    /// ```
    #[must_use]
    pub fn as_bigint(&self) -> Option<BigInt> {
        if self.is_integer() {
            self.text.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number { text: value.to_string() }
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a scalar (anything but array/object).
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer numeral in `i64` range, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for Value {
    /// Non-finite floats have no numeral form and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(value as f64)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::EncodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_i64().ok_or_else(|| {
            crate::EncodeError::UnsupportedType(format!("expected integer, found {:?}", value))
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::EncodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| {
            crate::EncodeError::UnsupportedType(format!("expected number, found {:?}", value))
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::EncodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| {
            crate::EncodeError::UnsupportedType(format!("expected bool, found {:?}", value))
        })
    }
}

impl TryFrom<Value> for String {
    type Error = crate::EncodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::EncodeError::UnsupportedType(format!(
                "expected string, found {:?}",
                other
            ))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    serializer.serialize_i64(i)
                } else if let Some(u) = n.as_u64() {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_f64(n.as_f64())
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid TOON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
                Number::from_f64(value)
                    .map(Value::Number)
                    .ok_or_else(|| E::custom("non-finite float has no TOON representation"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeral_grammar() {
        for ok in ["0", "42", "-7", "1.50", "007", "-0.5", "2e10", "1.5E-3", "3e+2"] {
            assert!(is_valid_numeral(ok), "{ok} should be valid");
        }
        for bad in ["", "-", "+1", "1.", ".5", "1e", "1e+", "12abc", "1.2.3", "0x10", "NaN"] {
            assert!(!is_valid_numeral(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn number_preserves_text() {
        let n = Number::from_literal("1.50").unwrap();
        assert_eq!(n.as_str(), "1.50");
        assert_ne!(n, Number::from_literal("1.5").unwrap());
        assert_eq!(n.to_string(), "1.50");
    }

    #[test]
    fn integer_float_distinction() {
        assert!(Number::from_literal("42").unwrap().is_integer());
        assert!(Number::from_literal("4.2").unwrap().is_float());
        assert!(Number::from_literal("1e3").unwrap().is_float());
        assert_eq!(Number::from_literal("42").unwrap().as_i64(), Some(42));
        assert_eq!(Number::from_literal("4.2").unwrap().as_i64(), None);
    }

    #[test]
    fn bigint_accessor() {
        let n = Number::from_literal("99999999999999999999999").unwrap();
        assert_eq!(n.as_i64(), None);
        let big = n.as_bigint().unwrap();
        assert_eq!(big.to_string(), "99999999999999999999999");
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert_eq!(Number::from_f64(1.5).unwrap().as_str(), "1.5");
    }

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Number(Number::from(42i64)));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_eq!(Value::from(f64::NAN), Value::Null);
    }

    #[test]
    fn structural_equality_is_order_sensitive() {
        let mut a = Map::new();
        a.insert("x".to_string(), Value::from(1));
        a.insert("y".to_string(), Value::from(2));

        let mut b = Map::new();
        b.insert("y".to_string(), Value::from(2));
        b.insert("x".to_string(), Value::from(1));

        assert_ne!(Value::Object(a), Value::Object(b));
    }
}
