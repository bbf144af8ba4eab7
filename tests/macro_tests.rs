//! Tests for the `toon!` literal macro.

use toon_codec::{encode, toon, Map, Number, Value};

#[test]
fn primitives() {
    assert_eq!(toon!(null), Value::Null);
    assert_eq!(toon!(true), Value::Bool(true));
    assert_eq!(toon!(42), Value::Number(Number::from(42)));
    assert_eq!(toon!("hi"), Value::String("hi".to_string()));
}

#[test]
fn expressions_in_fallback_position() {
    let n = 6 * 7;
    assert_eq!(toon!(n), Value::Number(Number::from(42)));

    let s = format!("a{}", "b");
    assert_eq!(toon!(s), Value::String("ab".to_string()));
}

#[test]
fn collections() {
    assert_eq!(toon!([]), Value::Array(vec![]));
    assert_eq!(toon!({}), Value::Object(Map::new()));

    let value = toon!({
        "name": "Alice",
        "tags": ["x", "y"],
        "nested": { "ok": true }
    });
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["tags"].as_array().unwrap().len(), 2);
    assert_eq!(obj["nested"].as_object().unwrap()["ok"], Value::Bool(true));
}

#[test]
fn insertion_order_is_kept() {
    let value = toon!({ "z": 1, "m": 2, "a": 3 });
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "m", "a"]);
}

#[test]
fn macro_values_encode_directly() {
    let value = toon!({ "pair": [1, 2] });
    assert_eq!(encode(&value).unwrap(), "pair[2]: 1,2");
}

#[test]
fn trailing_commas_are_accepted() {
    let value = toon!({
        "a": 1,
        "b": [1, 2,],
    });
    assert_eq!(value.as_object().unwrap().len(), 2);
}
