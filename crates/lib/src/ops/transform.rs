//! Key/value transforms.
//!
//! All functions here borrow their input and return a new container. Unless
//! a function says it reindexes, surviving entries keep their keys and their
//! relative order.

use std::cmp::Ordering;

use crate::{
    Result,
    container::{Container, Key, Value},
};

/// Transforms every value, keeping keys and order.
pub fn map<F, V>(container: &Container, mut f: F) -> Container
where
    F: FnMut(&Value, &Key) -> V,
    V: Into<Value>,
{
    container
        .iter()
        .map(|(key, value)| (key.clone(), Into::<Value>::into(f(value, key))))
        .collect()
}

/// Rewrites every key, keeping values and order.
///
/// When two entries map to the same key the later one wins, stored at the
/// position where that key first appeared.
pub fn map_keys<F, K>(container: &Container, mut f: F) -> Container
where
    F: FnMut(&Key, &Value) -> K,
    K: Into<Key>,
{
    container
        .iter()
        .map(|(key, value)| (Into::<Key>::into(f(key, value)), value.clone()))
        .collect()
}

/// Rewrites every entry into a new `(key, value)` pair.
pub fn map_key_value<F, K, V>(container: &Container, mut f: F) -> Container
where
    F: FnMut(&Key, &Value) -> (K, V),
    K: Into<Key>,
    V: Into<Value>,
{
    container
        .iter()
        .map(|(key, value)| {
            let (key, value) = f(key, value);
            (Into::<Key>::into(key), Into::<Value>::into(value))
        })
        .collect()
}

/// Keeps the entries whose predicate result is truthy.
pub fn filter<F, R>(container: &Container, mut predicate: F) -> Container
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    retain_cloned(container, |key, value| super::truthy(predicate(value, key)))
}

/// Keeps the entries whose key predicate result is truthy.
pub fn filter_keys<F, R>(container: &Container, mut predicate: F) -> Container
where
    F: FnMut(&Key) -> R,
    R: Into<Value>,
{
    retain_cloned(container, |key, _| super::truthy(predicate(key)))
}

/// Keeps the entries whose value is strictly equal to one of `allowed`.
pub fn filter_values(container: &Container, allowed: &[Value]) -> Container {
    retain_cloned(container, |_, value| allowed.contains(value))
}

/// Keeps an entry iff its predicate returns `Bool(false)`.
///
/// Every other result drops the entry, falsy ones like `Null`, `0` and `""`
/// included, so this is not the complement of [`filter`].
///
/// ```
/// use catena::{Value, container, ops};
///
/// let c = container![1, 2, 3, 4];
/// assert_eq!(ops::reject(&c, |v, _| v.as_int() > Some(2)), container![1, 2]);
///
/// let mixed = container![Value::Null, "foo", false];
/// // Only the element for which the predicate yields `false` survives
/// assert_eq!(ops::reject(&mixed, |v, _| v.clone()), container! {2 => false});
/// ```
pub fn reject<F, R>(container: &Container, mut predicate: F) -> Container
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    retain_cloned(container, |key, value| super::is_false(predicate(value, key)))
}

/// Keeps the entries whose key predicate returns exactly `false`.
pub fn reject_keys<F, R>(container: &Container, mut predicate: F) -> Container
where
    F: FnMut(&Key) -> R,
    R: Into<Value>,
{
    retain_cloned(container, |key, _| super::is_false(predicate(key)))
}

/// Drops the entries whose value is strictly equal to one of `denied`.
pub fn reject_values(container: &Container, denied: &[Value]) -> Container {
    retain_cloned(container, |_, value| !denied.contains(value))
}

/// Returns the keys as a list.
pub fn keys(container: &Container) -> Container {
    container.keys().cloned().map(Value::from).collect()
}

/// Returns the values as a list.
pub fn values(container: &Container) -> Container {
    container.reindexed()
}

/// Swaps keys and values. Later duplicates overwrite earlier ones.
pub fn flip(container: &Container) -> Result<Container> {
    let mut out = Container::with_capacity(container.len());
    for (key, value) in container.iter() {
        out.insert(Key::try_from(value)?, key.clone());
    }
    Ok(out)
}

/// Reverses the order of entries.
///
/// String keys are always kept; integer keys are renumbered unless
/// `preserve_keys` is set.
pub fn reverse(container: &Container, preserve_keys: bool) -> Container {
    let mut out = Container::with_capacity(container.len());
    for (key, value) in container.iter().rev() {
        if preserve_keys {
            out.insert(key.clone(), value.clone());
        } else {
            out.merge_entry(key.clone(), value.clone());
        }
    }
    out
}

/// Drops all keys, numbering the values `0..`.
pub fn reindex(container: &Container) -> Container {
    container.reindexed()
}

/// Renames keys according to `(from, to)` pairs; other keys are untouched.
pub fn rename_keys(container: &Container, renames: &[(Key, Key)]) -> Container {
    map_keys(container, |key, _| {
        renames
            .iter()
            .find(|(from, _)| from == key)
            .map_or_else(|| key.clone(), |(_, to)| to.clone())
    })
}

/// Plucks `field` from every container element, as a list.
///
/// Elements that are not containers or lack the field are skipped.
pub fn column(container: &Container, field: impl Into<Key>) -> Container {
    let field: Key = field.into();
    container
        .values()
        .filter_map(|row| row.as_container()?.get(&field).cloned())
        .collect()
}

/// Keeps only the listed keys, in the container's order.
pub fn only_keys(container: &Container, keys: &[Key]) -> Container {
    retain_cloned(container, |key, _| keys.contains(key))
}

/// Drops the listed keys.
pub fn except_keys(container: &Container, keys: &[Key]) -> Container {
    retain_cloned(container, |key, _| !keys.contains(key))
}

/// Removes strictly-equal duplicate values; the first occurrence and its key
/// survive.
pub fn unique(container: &Container) -> Container {
    let mut seen: Vec<&Value> = Vec::new();
    container
        .iter()
        .filter(|&(_, value)| {
            if seen.contains(&value) {
                false
            } else {
                seen.push(value);
                true
            }
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Sorts values by [`Value::compare`] and reindexes.
pub fn sort(container: &Container) -> Container {
    sort_by(container, Value::compare)
}

/// Sorts values with a comparator and reindexes. The sort is stable.
pub fn sort_by<F>(container: &Container, mut compare: F) -> Container
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    let mut values: Vec<&Value> = container.values().collect();
    values.sort_by(|a, b| compare(*a, *b));
    values.into_iter().cloned().collect()
}

/// Sorts entries by key, keeping the key of every value.
pub fn sort_keys(container: &Container) -> Container {
    let mut entries: Vec<(&Key, &Value)> = container.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Pads the container to `size` entries with `value`.
///
/// A positive size pads at the end, a negative one at the front. Integer keys
/// are renumbered, string keys kept. Nothing is added when the container is
/// already at least `|size|` long.
pub fn pad(container: &Container, size: i64, value: impl Into<Value>) -> Container {
    let value: Value = value.into();
    let missing = (size.unsigned_abs() as usize).saturating_sub(container.len());
    let mut out = Container::with_capacity(container.len() + missing);
    if size < 0 {
        for _ in 0..missing {
            out.push(value.clone());
        }
    }
    for (key, existing) in container.iter() {
        out.merge_entry(key.clone(), existing.clone());
    }
    if size > 0 {
        for _ in 0..missing {
            out.push(value.clone());
        }
    }
    out
}

/// Uses the values of `keys` as keys, each mapped to `value`.
pub fn fill_keys(keys: &Container, value: impl Into<Value>) -> Result<Container> {
    let value: Value = value.into();
    let mut out = Container::with_capacity(keys.len());
    for key in keys.values() {
        out.insert(Key::try_from(key)?, value.clone());
    }
    Ok(out)
}

fn retain_cloned<F>(container: &Container, mut keep: F) -> Container
where
    F: FnMut(&Key, &Value) -> bool,
{
    container
        .iter()
        .filter(|&(key, value)| keep(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
