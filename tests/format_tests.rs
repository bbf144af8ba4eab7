//! Exact-text fixtures for the encoder and decoder at the `Value` level.
//! Each case pins both directions: the encoded bytes and the decoded tree.

use toon_codec::{decode, encode, toon, DecodeError, Value};

fn round_trip(value: &Value) -> String {
    let text = encode(value).unwrap();
    assert_eq!(&decode(&text).unwrap(), value, "decode(encode(v)) != v");
    text
}

#[test]
fn users_table() {
    let value = toon!({
        "users": [
            { "id": 1, "name": "Alice", "role": "admin" },
            { "id": 2, "name": "Bob", "role": "user" }
        ]
    });
    assert_eq!(
        round_trip(&value),
        "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user"
    );
}

#[test]
fn hikes_document() {
    let value = toon!({
        "trip": {
            "name": "Alps",
            "days": 3
        },
        "hikes": [
            { "peak": "Matterhorn", "km": 12.5 },
            { "peak": "Eiger", "km": 9.8 }
        ],
        "gear": ["rope", "tent"]
    });
    assert_eq!(
        round_trip(&value),
        "trip:\n\
         \x20\x20name: Alps\n\
         \x20\x20days: 3\n\
         hikes[2]{peak,km}:\n\
         \x20\x20Matterhorn,12.5\n\
         \x20\x20Eiger,9.8\n\
         gear[2]: rope,tent"
    );
}

#[test]
fn empty_collections() {
    assert_eq!(round_trip(&toon!({})), "");
    assert_eq!(round_trip(&toon!([])), "[0]:");
    assert_eq!(round_trip(&toon!({ "items": [] })), "items[0]:");
    assert_eq!(round_trip(&toon!({ "meta": {} })), "meta:");
}

#[test]
fn scalar_roots() {
    assert_eq!(round_trip(&toon!(null)), "null");
    assert_eq!(round_trip(&toon!(true)), "true");
    assert_eq!(round_trip(&toon!(42)), "42");
    assert_eq!(round_trip(&toon!("plain text")), "plain text");
    assert_eq!(round_trip(&toon!("42")), "'42'");
}

#[test]
fn numerals_are_preserved_verbatim() {
    let value = decode("a: 1.50\nb: 007\nc: -2e10").unwrap();
    assert_eq!(encode(&value).unwrap(), "a: 1.50\nb: 007\nc: -2e10");
}

#[test]
fn quoting_fixtures() {
    let value = toon!({
        "empty": "",
        "reserved": "null",
        "numeric": "12",
        "comma": "a,b",
        "colon": "a: b",
        "glued": "a:b",
        "dash": "- x",
        "quote": "it's",
        "newline": "a\nb"
    });
    assert_eq!(
        round_trip(&value),
        "empty: ''\n\
         reserved: 'null'\n\
         numeric: '12'\n\
         comma: 'a,b'\n\
         colon: 'a: b'\n\
         glued: a:b\n\
         dash: '- x'\n\
         quote: 'it''s'\n\
         newline: 'a\\nb'"
    );
}

#[test]
fn quoted_keys_fixture() {
    let value = toon!({ "a key": 1, "x[0]": 2, "": 3 });
    assert_eq!(round_trip(&value), "a key: 1\n'x[0]': 2\n'': 3");
}

#[test]
fn non_uniform_array_falls_back_to_block() {
    let value = toon!({
        "rows": [
            { "a": 1 },
            { "a": 1, "b": 2 },
            7,
            [1, 2],
            {}
        ]
    });
    assert_eq!(
        round_trip(&value),
        "rows[5]:\n\
         \x20\x20- a: 1\n\
         \x20\x20- a: 1\n\
         \x20\x20\x20\x20b: 2\n\
         \x20\x20- 7\n\
         \x20\x20- [2]: 1,2\n\
         \x20\x20-"
    );
}

#[test]
fn key_order_changes_the_layout() {
    // Same key sets, different order: not tabular.
    let value = toon!({
        "rows": [
            { "a": 1, "b": 2 },
            { "b": 2, "a": 1 }
        ]
    });
    let text = round_trip(&value);
    assert!(text.starts_with("rows[2]:\n"));
}

#[test]
fn nested_values_inside_items_block_the_table() {
    let value = toon!({
        "rows": [
            { "id": 1, "tags": [1] },
            { "id": 2, "tags": [2] }
        ]
    });
    assert_eq!(
        round_trip(&value),
        "rows[2]:\n\
         \x20\x20- id: 1\n\
         \x20\x20\x20\x20tags[1]: 1\n\
         \x20\x20- id: 2\n\
         \x20\x20\x20\x20tags[1]: 2"
    );
}

#[test]
fn deep_nesting_round_trip() {
    let value = toon!({
        "a": {
            "b": [
                { "c": [1, 2], "d": { "e": "x" } }
            ]
        }
    });
    round_trip(&value);
}

#[test]
fn decode_rejects_wrong_counts() {
    assert!(matches!(
        decode("tags[3]: a,b"),
        Err(DecodeError::LengthMismatch { .. })
    ));
    assert!(matches!(
        decode("users[2]{id}:\n  1\n  2\n  3"),
        Err(DecodeError::LengthMismatch { .. })
    ));
    assert!(matches!(
        decode("users[1]{id,name}:\n  1,Alice,extra"),
        Err(DecodeError::ColumnMismatch { .. })
    ));
}

#[test]
fn decode_rejects_structural_noise() {
    assert!(matches!(
        decode("a:\n bad: 1"),
        Err(DecodeError::IndentationError { .. })
    ));
    assert!(matches!(
        decode("a: 1\n\tb: 2"),
        Err(DecodeError::IndentationError { .. })
    ));
    assert!(matches!(
        decode("[0]:\nleftover: 1"),
        Err(DecodeError::HeaderSyntaxError { .. })
    ));
}

#[test]
fn decode_error_lines_are_accurate() {
    let err = decode("a: 1\nb: 2\nc: 12abc").unwrap_err();
    assert_eq!(err.line(), 3);

    let err = decode("a: 1\n\n\nb: 'open").unwrap_err();
    assert_eq!(err.line(), 4);
}
