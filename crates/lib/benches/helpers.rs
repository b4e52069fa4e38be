//! Shared fixtures for benchmarks

use catena::{Container, Key, Value, container};

/// A list of `rows` records with a repeating `group` field.
pub fn rows(rows: usize) -> Container {
    (0..rows)
        .map(|i| {
            Value::from(container! {
                "id" => i,
                "group" => format!("g{}", i % 16),
                "score" => i * 7 % 100,
                "user_name" => format!("user_{i}"),
            })
        })
        .collect()
}

/// `outer` containers each holding a list of `inner` integers.
pub fn nested_lists(outer: usize, inner: usize) -> Container {
    (0..outer)
        .map(|_| Value::from((0..inner).map(Value::from).collect::<Container>()))
        .collect()
}

/// One row with `width` snake_case keys.
pub fn wide_row(width: usize) -> Container {
    (0..width)
        .map(|i| (Key::from(format!("some_field_name_{i}")), Value::from(i)))
        .collect()
}
