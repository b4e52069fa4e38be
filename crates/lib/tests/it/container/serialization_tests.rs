//! Serde support for containers

use catena::{Container, Value, container};

#[test]
fn test_lists_serialize_as_arrays() {
    let c = container![1, "two", Value::Null, true, 2.5];
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"[1,"two",null,true,2.5]"#);
}

#[test]
fn test_maps_serialize_as_objects_in_order() {
    let c = container! {"z" => 1, "a" => container! {"k" => "v"}, 5 => false};
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"z":1,"a":{"k":"v"},"5":false}"#);
}

#[test]
fn test_sparse_integer_keys_serialize_as_object() {
    let c = container! {0 => "a", 2 => "b"};
    assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"0":"a","2":"b"}"#);
}

#[test]
fn test_deserialize_round_trip() {
    let c = container! {
        "name" => "x",
        "tags" => container!["a", "b"],
        "nested" => container! {"deep" => container! {"n" => 1}},
        "ratio" => 0.25,
    };
    let json = serde_json::to_string(&c).unwrap();
    let back: Container = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_deserialize_rejects_scalar_container() {
    assert!(serde_json::from_str::<Container>("3").is_err());
    let value: Value = serde_json::from_str("3").unwrap();
    assert_eq!(value, Value::Int(3));
}

#[test]
fn test_huge_unsigned_becomes_float() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert!(matches!(value, Value::Float(_)));
}
