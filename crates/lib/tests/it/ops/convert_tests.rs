//! Construction and export tests: JSON, delimited strings, ranges

use catena::{Container, JsonOptions, Key, Value, container, ops};

use crate::helpers::*;

#[test]
fn test_json_round_trip() {
    let c = container! {
        "users" => users(),
        "count" => 4,
        "ratio" => 0.5,
        "active" => true,
        "note" => Value::Null,
        "unicode" => "naïve",
    };
    for options in [JsonOptions::default(), JsonOptions::unescaped()] {
        let json = ops::to_json(&c, options).unwrap();
        assert_eq!(ops::from_json(&json).unwrap(), c, "{json}");
    }
}

#[test]
fn test_pretty_json() {
    let json = ops::to_json(
        &container! {"a" => 1},
        JsonOptions {
            pretty: true,
            ..JsonOptions::default()
        },
    )
    .unwrap();
    assert_eq!(json, "{\n  \"a\": 1\n}");
}

#[test]
fn test_from_json_errors() {
    let err = ops::from_json("\"just text\"").unwrap_err();
    assert!(err.is_type_error());
    let err = ops::from_json("[1, 2").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(err.is_usage_error());
}

#[test]
fn test_string_round_trip() {
    let c = container!["alpha", "beta", "gamma"];
    let joined = ops::to_string(&c, ", ").unwrap();
    assert_eq!(joined, "alpha, beta, gamma");
    assert_eq!(ops::from_string(&joined, ", ").unwrap(), c);
}

#[test]
fn test_ranges() {
    assert_eq!(ops::from_range(1, 4, 1).unwrap(), container![1, 2, 3, 4]);
    assert_eq!(ops::from_range(4, 1, 1).unwrap(), container![4, 3, 2, 1]);
    assert_eq!(ops::from_range(-2, 2, 2).unwrap(), container![-2, 0, 2]);
    assert!(ops::from_range(1, 2, 0).unwrap_err().is_usage_error());
}

#[test]
fn test_json_field_coding_per_row() {
    let rows = container![
        container! {"id" => 1, "tags" => container!["a"]},
        container! {"id" => 2, "tags" => container![]},
    ];
    let fields = [Key::from("tags")];
    let encoded = catena::dispatch::apply_container(&rows, 1, |row| {
        ops::json_encode_fields(row, &fields, JsonOptions::default())
    })
    .unwrap();
    assert_eq!(at(&encoded, &["0", "tags"]), Some(Value::from(r#"["a"]"#)));
    assert_eq!(at(&encoded, &["1", "tags"]), Some(Value::from("[]")));

    let decoded: Container = catena::dispatch::apply_container(&encoded, 1, |row| {
        ops::json_decode_fields(row, &fields)
    })
    .unwrap();
    assert_eq!(decoded, rows);
}
