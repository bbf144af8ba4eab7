//! Array layout detection.
//!
//! Every array picks one of three renderings. A uniform array of flat
//! objects flattens into a CSV-style tabular block — the layout that
//! minimizes token count, so it wins whenever it is structurally possible.
//! An all-scalar array renders as one delimiter-joined line. Everything
//! else falls back to one structural block per element.

use crate::{Map, Value};

/// The rendering strategy chosen for an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArrayLayout<'a> {
    /// Zero elements: `key[0]:` with no following lines.
    Empty,
    /// All elements scalar: `key[N]: v1,v2,...` on one line, any length.
    Inline,
    /// Uniform flat objects: header `key[N]{k1,k2}:` plus one row per
    /// element. Column order is the shared key order.
    Tabular { columns: Vec<&'a str> },
    /// Anything else: `key[N]:` plus one `- ` item per element.
    Block,
}

/// Decides how an array renders.
///
/// Tabular requires length >= 1, every element an object, every object
/// sharing exactly the same keys **in the same order**, and every direct
/// value a scalar. Key-set comparison is order-sensitive because the header
/// fixes one column order for every row.
pub(crate) fn classify(elements: &[Value]) -> ArrayLayout<'_> {
    if elements.is_empty() {
        return ArrayLayout::Empty;
    }

    if elements.iter().all(Value::is_scalar) {
        return ArrayLayout::Inline;
    }

    if let Some(columns) = uniform_columns(elements) {
        return ArrayLayout::Tabular { columns };
    }

    ArrayLayout::Block
}

fn uniform_columns(elements: &[Value]) -> Option<Vec<&str>> {
    let first = match &elements[0] {
        Value::Object(obj) => obj,
        _ => return None,
    };
    // A zero-column table header is not expressible; arrays of empty
    // objects fall back to block items.
    if first.is_empty() || !flat(first) {
        return None;
    }

    let columns: Vec<&str> = first.keys().map(String::as_str).collect();

    for element in &elements[1..] {
        match element {
            Value::Object(obj) => {
                if obj.len() != columns.len() || !flat(obj) {
                    return None;
                }
                if !obj.keys().map(String::as_str).eq(columns.iter().copied()) {
                    return None;
                }
            }
            _ => return None,
        }
    }

    Some(columns)
}

fn flat(obj: &Map) -> bool {
    obj.values().all(Value::is_scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn empty_is_never_tabular() {
        assert_eq!(classify(&[]), ArrayLayout::Empty);
    }

    #[test]
    fn scalars_inline_regardless_of_length() {
        let arr = toon!([1, "two", null, true]);
        let elements = arr.as_array().unwrap();
        assert_eq!(classify(elements), ArrayLayout::Inline);

        let one = toon!([1]);
        assert_eq!(classify(one.as_array().unwrap()), ArrayLayout::Inline);
    }

    #[test]
    fn uniform_flat_objects_go_tabular() {
        let arr = toon!([
            { "id": 1, "name": "Alice" },
            { "id": 2, "name": "Bob" }
        ]);
        let elements = arr.as_array().unwrap();
        assert_eq!(
            classify(elements),
            ArrayLayout::Tabular {
                columns: vec!["id", "name"]
            }
        );
    }

    #[test]
    fn single_object_is_tabular() {
        let arr = toon!([{ "id": 1 }]);
        assert_eq!(
            classify(arr.as_array().unwrap()),
            ArrayLayout::Tabular {
                columns: vec!["id"]
            }
        );
    }

    #[test]
    fn heterogeneous_key_sets_block() {
        let arr = toon!([{ "a": 1 }, { "a": 1, "b": 2 }]);
        assert_eq!(classify(arr.as_array().unwrap()), ArrayLayout::Block);
    }

    #[test]
    fn key_order_matters() {
        let arr = toon!([
            { "a": 1, "b": 2 },
            { "b": 2, "a": 1 }
        ]);
        assert_eq!(classify(arr.as_array().unwrap()), ArrayLayout::Block);
    }

    #[test]
    fn nested_composites_block() {
        let arr = toon!([
            { "id": 1, "tags": [1, 2] },
            { "id": 2, "tags": [3] }
        ]);
        assert_eq!(classify(arr.as_array().unwrap()), ArrayLayout::Block);
    }

    #[test]
    fn mixed_scalars_and_objects_block() {
        let arr = toon!([1, { "a": 2 }]);
        assert_eq!(classify(arr.as_array().unwrap()), ArrayLayout::Block);
    }

    #[test]
    fn empty_objects_block() {
        let arr = toon!([{}, {}]);
        assert_eq!(classify(arr.as_array().unwrap()), ArrayLayout::Block);
    }
}
