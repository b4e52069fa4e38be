//! Chain facade integration tests
//!
//! Tests the stateful wrapper: transform chaining, depth consumption, and
//! the different return shapes of queries and extractors.

use catena::{Chain, Container, JsonOptions, Key, KeyCase, Value, container};

use crate::helpers::*;

#[test]
fn test_transform_chain() {
    let mut chain = Chain::new(users());
    chain
        .filter(|row, _| {
            row.as_container().and_then(|r| r.get("role")) == Some(&Value::from("admin"))
        })
        .unwrap()
        .column("name")
        .unwrap()
        .reindex()
        .unwrap();
    assert_eq!(chain.container(), &container!["alice", "carol"]);
}

#[test]
fn test_elems_applies_one_level_down() {
    let mut chain = Chain::new(users());
    chain.elems().only_keys(&[Key::from("name")]).unwrap();
    assert_eq!(
        chain.into_inner(),
        container![
            container! {"name" => "alice"},
            container! {"name" => "bob"},
            container! {"name" => "carol"},
            container! {"name" => "dave"},
        ]
    );
}

#[test]
fn test_depth_consumed_by_each_call() {
    let mut chain = Chain::new(nested());
    chain.elems().elems().reverse(false).unwrap();
    assert_eq!(chain.depth(), 0);
    assert_eq!(at(chain.container(), &["a", "b"]), Some(Value::from(container![3, 2, 1])));

    // Next call runs at the top level again
    chain.keys().unwrap();
    assert_eq!(chain.container(), &container!["a", "d"]);
}

#[test]
fn test_at_depth_sets_depth() {
    let mut chain = Chain::new(nested());
    let sums = chain.at_depth(2).math_sum().unwrap();
    assert_eq!(
        sums,
        Value::from(container! {
            "a" => container! {"b" => 6, "c" => 4},
            "d" => container! {"e" => Value::Null},
        })
    );
}

#[test]
fn test_failed_call_still_consumes_depth() {
    let mut chain = Chain::new(container![1, 2, 3]);
    let err = chain.elems().sort().unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(chain.depth(), 0);
    // The container was left untouched
    assert_eq!(chain.container(), &container![1, 2, 3]);
}

#[test]
fn test_queries_at_depth_zero() {
    let mut chain = Chain::new(container! {"a" => 1, "b" => 2});
    assert_eq!(chain.count().unwrap(), Value::Int(2));
    assert_eq!(chain.has_key("a").unwrap(), Value::Bool(true));
    assert_eq!(chain.search(2).unwrap(), Value::from("b"));
    assert_eq!(chain.find_key(|v, _| v.as_int() == Some(9)).unwrap(), Value::Null);
    assert_eq!(chain.get_or_else("z", "d").unwrap(), Value::from("d"));
    assert!(chain.get_or_exception("z").unwrap_err().is_not_found());
    assert_eq!(
        chain
            .reduce(0, |acc, v, _| Value::Int(acc.as_int().unwrap_or(0) + v.as_int().unwrap_or(0)))
            .unwrap(),
        Value::Int(3)
    );
}

#[test]
fn test_extractors_at_depth_collect_values() {
    let mut chain = Chain::new(container![
        container![1, 2, 3, 4],
        container!["a", "b", "c"],
    ]);
    let removed = chain.elems().splice_head(2, "new").unwrap();
    assert_eq!(
        removed,
        Value::from(container![container![1, 2], container!["a", "b"]])
    );
    assert_eq!(
        chain.container(),
        &container![container!["new", 3, 4], container!["new", "c"]]
    );

    let lengths = chain.elems().push(&[Value::from("end")]).unwrap();
    assert_eq!(lengths, Value::from(container![4, 3]));

    let shifted = chain.elems().shift().unwrap();
    assert_eq!(shifted, Value::from(container!["new", "new"]));
}

#[test]
fn test_group_then_count_per_group() {
    let mut chain = Chain::new(users());
    chain.group_by_field("role").unwrap();
    let counts = chain.elems().count().unwrap();
    assert_eq!(
        counts,
        Value::from(container! {"admin" => 2, "dev" => 1, "ops" => 1})
    );
}

#[test]
fn test_group_to_struct_in_chain() {
    let mut chain = Chain::new(container![1, 2, 3, 4]);
    chain
        .group_to_struct(|v, _| v.as_int().map(|n| n % 2 == 0))
        .unwrap();
    let first = chain.container().get(0).and_then(Value::as_container).unwrap();
    assert_eq!(first.get("key"), Some(&Value::Bool(false)));
    assert_eq!(first.get("items"), Some(&Value::from(container![1, 3])));
}

#[test]
fn test_constructors_and_exports() {
    let chain = Chain::from_range(1, 3, 1).unwrap();
    assert_eq!(chain.to_delimited("-").unwrap(), "1-2-3");

    let chain = Chain::from_string("x,y", ",").unwrap();
    assert_eq!(chain.to_json(JsonOptions::default()).unwrap(), r#"["x","y"]"#);

    let mut chain = Chain::from_json(r#"{"user_name": "a", "nested": {"inner_key": 1}}"#).unwrap();
    chain.convert_keys(KeyCase::Pascal).unwrap();
    assert_keys(chain.container(), &["UserName", "Nested"]);
    // Only the top level was converted
    assert_eq!(
        at(chain.container(), &["Nested", "inner_key"]),
        Some(Value::Int(1))
    );

    let empty: Chain = Container::new().into();
    assert_eq!(empty, Chain::default());
}

#[test]
fn test_json_fields_in_chain() {
    let mut chain = Chain::new(container![container! {"meta" => r#"{"a":1}"#}]);
    chain
        .elems()
        .json_decode_fields(&[Key::from("meta")])
        .unwrap();
    assert_eq!(
        at(chain.container(), &["0", "meta", "a"]),
        Some(Value::Int(1))
    );
}
