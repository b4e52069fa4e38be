//! Key/value transform tests

use catena::{Key, Value, container, ops};

use crate::helpers::*;

#[test]
fn test_filter_then_reject_asymmetry() {
    let c = container![0, 1, 2, Value::Null, "", "x"];
    let kept = ops::filter(&c, |v, _| v.clone());
    assert_eq!(kept, container! {1 => 1, 2 => 2, 5 => "x"});

    // Predicate returns the value itself: only a literal `false` would survive
    let rejected = ops::reject(&c, |v, _| v.clone());
    assert!(rejected.is_empty());

    // With a boolean predicate, reject is the complement of filter
    let even = |v: &Value, _: &Key| v.as_int().is_some_and(|n| n % 2 == 0);
    let numbers = container![1, 2, 3, 4];
    assert_eq!(ops::filter(&numbers, even), container! {1 => 2, 3 => 4});
    assert_eq!(ops::reject(&numbers, even), container! {0 => 1, 2 => 3});
}

#[test]
fn test_key_filters() {
    let c = container! {"keep_a" => 1, "drop_b" => 2, "keep_c" => 3};
    let kept = ops::filter_keys(&c, |k| k.as_str().is_some_and(|s| s.starts_with("keep")));
    assert_keys(&kept, &["keep_a", "keep_c"]);
    let rejected = ops::reject_keys(&c, |k| k.as_str().is_some_and(|s| s.starts_with("keep")));
    assert_keys(&rejected, &["drop_b"]);
}

#[test]
fn test_value_filters_are_strict() {
    let c = container![1, "1", 2, 1.0];
    let only_int_one = ops::filter_values(&c, &[Value::Int(1)]);
    assert_eq!(only_int_one, container![1]);
    let without = ops::reject_values(&c, &[Value::Int(1), Value::Int(2)]);
    assert_eq!(without, container! {1 => "1", 3 => 1.0});
}

#[test]
fn test_map_key_value() {
    let c = container! {"a" => 1, "b" => 2};
    let swapped = ops::map_key_value(&c, |k, v| (format!("{k}{v}"), k.to_string()));
    assert_eq!(swapped, container! {"a1" => "a", "b2" => "b"});
}

#[test]
fn test_keys_values_reindex() {
    let c = container! {"x" => 10, 4 => 20};
    assert_eq!(ops::keys(&c), container!["x", 4]);
    assert_eq!(ops::values(&c), container![10, 20]);
    assert_eq!(ops::reindex(&c), container![10, 20]);
}

#[test]
fn test_rename_keys_keeps_position() {
    let c = container! {"a" => 1, "b" => 2, "c" => 3};
    let renamed = ops::rename_keys(&c, &[(Key::from("b"), Key::from("beta"))]);
    assert_keys(&renamed, &["a", "beta", "c"]);
}

#[test]
fn test_column_skips_rows_without_field() {
    let mut rows = users();
    rows.push(container! {"nick" => "eve"});
    rows.push(5);
    assert_eq!(
        ops::column(&rows, "name"),
        container!["alice", "bob", "carol", "dave"]
    );
}

#[test]
fn test_only_and_except_keys() {
    let c = container! {"a" => 1, "b" => 2, "c" => 3};
    let keys = [Key::from("c"), Key::from("a")];
    // Container order wins over the order of the key list
    assert_keys(&ops::only_keys(&c, &keys), &["a", "c"]);
    assert_keys(&ops::except_keys(&c, &keys), &["b"]);
}

#[test]
fn test_sorting() {
    let c = container! {"x" => 3, "y" => 1, "z" => 2};
    assert_eq!(ops::sort(&c), container![1, 2, 3]);
    assert_eq!(ops::sort_by(&c, |a, b| b.compare(a)), container![3, 2, 1]);

    let keyed = container! {"b" => 1, "a" => 2, 3 => 0};
    // Integer keys order before string keys
    assert_keys(&ops::sort_keys(&keyed), &["3", "a", "b"]);
}

#[test]
fn test_sort_by_is_stable() {
    let rows = users();
    let by_role = ops::sort_by(&rows, |a, b| {
        let role = |v: &Value| ops::get(v.as_container().unwrap(), "role");
        role(a).compare(&role(b))
    });
    assert_eq!(
        ops::column(&by_role, "name"),
        container!["alice", "carol", "bob", "dave"]
    );
}

#[test]
fn test_fill_keys_and_flip() {
    let keys = container!["a", "b"];
    assert_eq!(
        ops::fill_keys(&keys, 0).unwrap(),
        container! {"a" => 0, "b" => 0}
    );
    assert_eq!(
        ops::flip(&container!["a", "b", "a"]).unwrap(),
        container! {"a" => 2, "b" => 1}
    );
}

#[test]
fn test_unique_rows_keep_first_key() {
    let rows = container! {
        "x" => container! {"a" => 1},
        "y" => container! {"a" => 1},
        "z" => container! {"a" => 2},
    };
    assert_keys(&ops::unique(&rows), &["x", "z"]);
}
