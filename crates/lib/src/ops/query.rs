//! Predicates and searches that return scalars.

use crate::container::{Container, Key, Value};

/// Number of entries.
pub fn count(container: &Container) -> usize {
    container.len()
}

/// True when the keys are exactly `0..len` in order.
pub fn is_list(container: &Container) -> bool {
    container.is_list()
}

/// True when the container has no entries.
pub fn is_empty(container: &Container) -> bool {
    container.is_empty()
}

pub fn has_key(container: &Container, key: impl Into<Key>) -> bool {
    container.contains_key(key)
}

/// True when some value is strictly equal to `needle`.
pub fn has_value(container: &Container, needle: &Value) -> bool {
    container.values().any(|value| value == needle)
}

pub fn has_all_keys(container: &Container, keys: &[Key]) -> bool {
    keys.iter().all(|key| container.contains_key(key))
}

/// First value whose predicate result is truthy.
pub fn find<F, R>(container: &Container, mut predicate: F) -> Option<Value>
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    container
        .iter()
        .find(|&(key, value)| super::truthy(predicate(value, key)))
        .map(|(_, value)| value.clone())
}

/// Key of the first value whose predicate result is truthy.
pub fn find_key<F, R>(container: &Container, mut predicate: F) -> Option<Key>
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    container
        .iter()
        .find(|&(key, value)| super::truthy(predicate(value, key)))
        .map(|(key, _)| key.clone())
}

/// Key of the first value strictly equal to `needle`.
pub fn search(container: &Container, needle: &Value) -> Option<Key> {
    container
        .iter()
        .find(|&(_, value)| value == needle)
        .map(|(key, _)| key.clone())
}

/// Folds the entries in order, starting from `init`.
pub fn reduce<F, A>(container: &Container, init: A, mut f: F) -> A
where
    F: FnMut(A, &Value, &Key) -> A,
{
    container
        .iter()
        .fold(init, |acc, (key, value)| f(acc, value, key))
}
