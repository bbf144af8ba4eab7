//! Property-based round-trip checks across generated inputs: the serde
//! surface for common Rust types, and the `Value` tree surface for arbitrary
//! documents.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use toon_codec::{decode, encode, from_str, to_string, Map, Value};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(text) => match from_str::<T>(&text) {
            Ok(back) => *value == back,
            Err(e) => {
                eprintln!("deserialize failed: {e}");
                eprintln!("encoded text was: {text}");
                false
            }
        },
        Err(e) => {
            eprintln!("serialize failed: {e}");
            false
        }
    }
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in "[ -~]{0,24}") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_string_with_control_chars(s in ".{0,16}") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_string(v in prop::collection::vec("[ -~]{0,10}", 0..10)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }

    // Arbitrary documents: the decoded tree equals the encoded tree, and
    // re-encoding the decoded tree reproduces the text byte for byte.
    #[test]
    fn prop_value_round_trip(value in value_strategy()) {
        let text = encode(&value).unwrap();
        let back = decode(&text).unwrap();
        prop_assert_eq!(&back, &value, "text was: {}", text);
        prop_assert_eq!(encode(&back).unwrap(), text);
    }
}
