//! Grouping and uniqueness tests

use catena::{Group, Key, Value, container, ops};

use crate::helpers::*;

fn field(name: &'static str) -> impl Fn(&Value, &Key) -> Value {
    move |row: &Value, _: &Key| {
        row.as_container()
            .map(|row| ops::get(row, name))
            .unwrap_or_default()
    }
}

#[test]
fn test_group_by_field_buckets_in_first_occurrence_order() {
    let groups = ops::group_by_field(&users(), "role").unwrap();
    assert_keys(&groups, &["admin", "dev", "ops"]);
    let admins = groups.get("admin").and_then(Value::as_container).unwrap();
    assert_eq!(
        ops::column(admins, "name"),
        container!["alice", "carol"]
    );
    // Bucket lists are reindexed
    assert!(admins.is_list());
}

#[test]
fn test_group_by_matches_group_by_field() {
    let rows = users();
    assert_eq!(
        ops::group_by(&rows, field("role")).unwrap(),
        ops::group_by_field(&rows, "role").unwrap()
    );
}

#[test]
fn test_group_by_field_rejects_scalars_with_path() {
    let rows = container! {"first" => container! {"role" => "x"}, "second" => 3};
    let err = ops::group_by_field(&rows, "role").unwrap_err();
    assert!(err.is_type_error());
    assert!(err.to_string().contains("second"), "{err}");
}

#[test]
fn test_group_to_struct_with_container_keys() {
    let rows = container![
        container! {"id" => 1, "loc" => container! {"x" => 0, "y" => 1}},
        container! {"id" => 2, "loc" => container! {"y" => 1, "x" => 0}},
        container! {"id" => 3, "loc" => container! {"x" => 5, "y" => 5}},
    ];
    let groups = ops::group_to_struct(&rows, field("loc"));
    assert_eq!(groups.len(), 2);
    // The first occurrence provides the group key
    assert_eq!(groups[0].key, Value::from(container! {"x" => 0, "y" => 1}));
    assert_eq!(ops::column(&groups[0].items, "id"), container![1, 2]);
    assert_eq!(ops::column(&groups[1].items, "id"), container![3]);
}

#[test]
fn test_group_renders_as_container() {
    let group = Group {
        key: Value::from("k"),
        items: container![1],
    };
    assert_eq!(
        Value::from(group),
        Value::from(container! {"key" => "k", "items" => container![1]})
    );
}

#[test]
fn test_unique_by_stability() {
    let rows = container! {
        "a" => container! {"val" => 1},
        "b" => container! {"val" => 2},
        "c" => container! {"val" => 1},
        "d" => container! {"val" => 3},
    };
    let unique = ops::unique_by(&rows, field("val"));
    assert_keys(&unique, &["a", "b", "d"]);
    assert_eq!(unique.get("a"), rows.get("a"));
}

#[test]
fn test_count_by_role() {
    let counts = ops::count_by(&users(), field("role")).unwrap();
    assert_eq!(counts, container! {"admin" => 2, "dev" => 1, "ops" => 1});
}
