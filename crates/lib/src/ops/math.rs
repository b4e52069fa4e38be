//! Numeric aggregation.
//!
//! Only numeric values take part: integers, floats and text that parses as a
//! number. Everything else is skipped, and an aggregate over nothing numeric
//! is `Value::Null`. Integers stay integers unless a float is involved.

use std::cmp::Ordering;

use crate::container::{Container, Key, Number, Value};

/// Smallest numeric value.
pub fn math_min(container: &Container) -> Value {
    extremum(container.values().filter_map(Value::as_number), Ordering::Less)
}

/// Largest numeric value.
pub fn math_max(container: &Container) -> Value {
    extremum(container.values().filter_map(Value::as_number), Ordering::Greater)
}

/// Sum of the numeric values. Integer overflow falls back to a float sum.
pub fn math_sum(container: &Container) -> Value {
    let mut numbers = container.values().filter_map(Value::as_number).peekable();
    if numbers.peek().is_none() {
        return Value::Null;
    }
    let mut total = Number::Int(0);
    for number in numbers {
        total = match (total, number) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or(Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        };
    }
    total.into()
}

/// Arithmetic mean of the numeric values, always a float.
pub fn math_avg(container: &Container) -> Value {
    let (sum, count) = container
        .values()
        .filter_map(Value::as_number)
        .fold((0.0, 0usize), |(sum, count), n| (sum + n.as_f64(), count + 1));
    if count == 0 {
        Value::Null
    } else {
        Value::Float(sum / count as f64)
    }
}

/// Smallest number among the projected values.
pub fn min_by<F, R>(container: &Container, f: F) -> Value
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    extremum(project(container, f), Ordering::Less)
}

/// Largest number among the projected values.
pub fn max_by<F, R>(container: &Container, f: F) -> Value
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    extremum(project(container, f), Ordering::Greater)
}

/// Smallest value of `field` across container rows.
///
/// Rows that are not containers, lack the field or hold a non-numeric value
/// there are skipped.
pub fn min_by_field(container: &Container, field: impl Into<Key>) -> Value {
    extremum(field_numbers(container, field.into()), Ordering::Less)
}

/// Largest value of `field` across container rows.
pub fn max_by_field(container: &Container, field: impl Into<Key>) -> Value {
    extremum(field_numbers(container, field.into()), Ordering::Greater)
}

fn project<F, R>(container: &Container, mut f: F) -> impl Iterator<Item = Number>
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    container
        .iter()
        .filter_map(move |(key, value)| Into::<Value>::into(f(value, key)).as_number())
}

fn field_numbers(container: &Container, field: Key) -> impl Iterator<Item = Number> {
    container
        .values()
        .filter_map(move |row| row.as_container()?.get(&field)?.as_number())
}

/// Keeps the first number that no later number beats in direction `wanted`.
fn extremum(numbers: impl Iterator<Item = Number>, wanted: Ordering) -> Value {
    numbers
        .reduce(|best, n| if n.compare(best) == wanted { n } else { best })
        .map_or(Value::Null, Value::from)
}
