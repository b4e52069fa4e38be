//! Query and key casing tests

use catena::{JsonOptions, Key, KeyCase, Value, container, ops};

use crate::helpers::*;

#[test]
fn test_membership_is_strict() {
    let c = container!["1", 2, true];
    assert!(ops::has_value(&c, &Value::from(2)));
    assert!(!ops::has_value(&c, &Value::from(1)));
    assert_eq!(ops::search(&c, &Value::from(true)), Some(Key::Int(2)));
    assert_eq!(ops::search(&c, &Value::from("2")), None);
}

#[test]
fn test_key_queries() {
    let row = container! {"name" => "alice", "age" => 34};
    assert!(ops::has_key(&row, "name"));
    assert!(ops::has_all_keys(&row, &[Key::from("name"), Key::from("age")]));
    assert!(!ops::has_all_keys(&row, &[Key::from("name"), Key::from("email")]));
    assert!(!ops::is_list(&row));
    assert!(ops::is_list(&container![1, 2]));
    assert!(ops::is_empty(&container![]));
}

#[test]
fn test_find_over_rows() {
    let rows = users();
    let older = |row: &Value, _: &Key| {
        row.as_container()
            .and_then(|r| r.get("age"))
            .and_then(Value::as_int)
            .is_some_and(|age| age > 40)
    };
    assert_eq!(ops::find_key(&rows, older), Some(Key::Int(2)));
    let found = ops::find(&rows, older).unwrap();
    assert_eq!(
        found.as_container().and_then(|r| r.get("name")),
        Some(&Value::from("carol"))
    );
    assert_eq!(ops::find(&rows, |_, _| false), None);
}

#[test]
fn test_reduce_concatenates_in_order() {
    let names = ops::column(&users(), "name");
    let joined = ops::reduce(&names, String::new(), |mut acc, value, _| {
        acc.push_str(value.as_text().unwrap_or_default());
        acc
    });
    assert_eq!(joined, "alicebobcaroldave");
}

#[test]
fn test_convert_keys_every_case() {
    let row = container! {"userName" => 1};
    let expected = [
        (KeyCase::Camel, "userName"),
        (KeyCase::Pascal, "UserName"),
        (KeyCase::Snake, "user_name"),
        (KeyCase::Kebab, "user-name"),
        (KeyCase::ScreamSnake, "USER_NAME"),
        (KeyCase::ScreamKebab, "USER-NAME"),
    ];
    for (case, key) in expected {
        assert_keys(&ops::convert_keys(&row, case), &[key]);
    }
}

#[test]
fn test_converted_numeric_keys_survive_json() {
    let c = container! {"_5" => "five", "n" => 1};
    let out = ops::keys_to_snake_case(&c);
    assert_eq!(ops::get(&out, "5"), Value::from("five"));
    let json = ops::to_json(&out, JsonOptions::default()).unwrap();
    assert_eq!(ops::from_json(&json).unwrap(), out);
}
