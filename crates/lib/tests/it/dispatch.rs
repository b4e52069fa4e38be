//! Depth dispatch integration tests
//!
//! The same operation applied through the dispatcher at depth N must equal
//! applying it by hand to every container N levels down.

use catena::{Container, Value, container, dispatch, ops};

use crate::helpers::*;

fn add_five(leaf: &Container) -> catena::Result<Container> {
    Ok(ops::map(leaf, |v, _| v.as_int().unwrap_or(0) + 5))
}

#[test]
fn test_depth_transparency() {
    let c = container! {"a" => container! {"b" => container![1, 2, 3]}};
    let out = dispatch::apply_container(&c, 2, add_five).unwrap();
    assert_eq!(out, container! {"a" => container! {"b" => container![6, 7, 8]}});
}

#[test]
fn test_dispatch_matches_manual_application() {
    let c = nested();
    let via_dispatch = dispatch::apply_container(&c, 2, add_five).unwrap();

    let mut manual = Container::new();
    for (outer_key, outer) in c.iter() {
        let mut rebuilt = Container::new();
        for (inner_key, leaf) in outer.as_container().unwrap().iter() {
            rebuilt.insert(inner_key.clone(), add_five(leaf.as_container().unwrap()).unwrap());
        }
        manual.insert(outer_key.clone(), rebuilt);
    }
    assert_eq!(via_dispatch, manual);
}

#[test]
fn test_outer_order_preserved() {
    let c = container! {"z" => container![1], "a" => container![2], "m" => container![3]};
    let out = dispatch::apply(&c, 1, |leaf| Ok(ops::count(leaf))).unwrap();
    let out = out.as_container().unwrap();
    assert_keys(out, &["z", "a", "m"]);
}

#[test]
fn test_depth_beyond_nesting_is_an_error() {
    let c = container![container![1, 2]];
    let err = dispatch::apply_container(&c, 2, add_five).unwrap_err();
    assert!(err.is_usage_error());
    assert!(err.is_type_error());
    assert!(err.to_string().contains("'0.0'"), "{err}");
}

#[test]
fn test_leaf_error_aborts_walk() {
    let c = container![container![1], container![], container![2]];
    let err = dispatch::apply(&c, 1, ops::first_or_exception).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_mutating_walk_collects_flat_list() {
    let mut c = container! {
        "x" => container! {"p" => container![1, 2, 3], "q" => container![4, 5]},
        "y" => container! {"r" => container![6]},
    };
    let removed = dispatch::collect_mut(&mut c, 2, |leaf| Ok(ops::shift(leaf))).unwrap();
    assert_eq!(removed, vec![Value::Int(1), Value::Int(4), Value::Int(6)]);
    assert_eq!(
        c,
        container! {
            "x" => container! {"p" => container![2, 3], "q" => container![5]},
            "y" => container! {"r" => container![]},
        }
    );
}

#[test]
fn test_accumulator_grows_by_leaf_count() {
    let mut c = container![container![1, 2], container![3, 4], container![5, 6]];
    let mut acc = vec![Value::from("existing")];
    dispatch::apply_mut_collecting(&mut c, 1, &mut acc, |leaf| {
        Ok(Value::from(ops::splice_tail(leaf, 1, Value::Null)))
    })
    .unwrap();
    assert_eq!(acc.len(), 4);
    assert_eq!(acc[3], Value::from(container![6]));
}

#[test]
fn test_depth_zero_is_plain_call() {
    let c = container![3, 1, 2];
    assert_eq!(
        dispatch::apply_container(&c, 0, |leaf| Ok(ops::sort(leaf))).unwrap(),
        container![1, 2, 3]
    );
    assert_eq!(dispatch::apply(&c, 0, |leaf| Ok(ops::math_sum(leaf))).unwrap(), Value::Int(6));
}
