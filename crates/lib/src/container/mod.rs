//! The ordered container data model.
//!
//! [`Container`] is the universal data type every operation works on: an
//! insertion-ordered mapping from [`Key`] to [`Value`]. It doubles as a list
//! (keys `0..len`) and as an associative map (string keys), and values can be
//! containers themselves, which is what gives the depth dispatcher something
//! to descend into.
//!
//! # Usage
//!
//! ```
//! use catena::{Container, Key, Value, container};
//!
//! let mut list = container![1, 2, 3];
//! assert!(list.is_list());
//! list.push(4);
//! assert_eq!(list.len(), 4);
//!
//! let user = container! {"name" => "Alice", "tags" => container!["admin"]};
//! assert!(!user.is_list());
//! assert_eq!(user.get("name"), Some(&Value::from("Alice")));
//! assert_eq!(user.keys().next(), Some(&Key::from("name")));
//! ```

use std::fmt;

use indexmap::IndexMap;
use tracing::warn;

pub mod key;
mod serialization;
pub mod value;

pub use key::Key;
pub use value::{Number, Value};

/// Builds a [`Container`] literal.
///
/// `container![a, b, c]` builds a list, `container!{"k" => v, ...}` builds an
/// associative container. Keys and values go through `From` conversions.
#[macro_export]
macro_rules! container {
    () => {
        $crate::Container::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut container = $crate::Container::new();
        $(
            container.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        container
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut container = $crate::Container::new();
        $(
            container.push($crate::Value::from($value));
        )+
        container
    }};
}

/// An insertion-ordered mapping from [`Key`] to [`Value`].
///
/// Besides the entries, a container remembers the next free integer key used
/// by [`Container::push`]: one past the largest integer key ever inserted
/// (never negative). Removing entries does not lower it, except
/// [`Container::pop`], which recomputes it.
///
/// Equality is strict: two containers are equal when they hold the same
/// entries in the same order. See [`Value::structurally_eq`] for an
/// order-insensitive comparison.
#[derive(Debug, Clone, Default)]
pub struct Container {
    entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl Container {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Builds a list from values, keyed `0..`
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().map(Into::into).collect()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true iff the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_int() == Some(i as i64))
    }

    /// Returns the next integer key [`Container::push`] would use
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    /// Gets a value by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Returns true if the key is present
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Sets a value, returning the previous one.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Int(n) = key {
            if n >= self.next_index {
                self.next_index = n.saturating_add(1);
            }
        }
        self.entries.insert(key, value.into())
    }

    /// Appends a value under the next free integer key, returning that key.
    ///
    /// Once `i64::MAX` is in use there is no next key: the value is dropped
    /// with a warning and `None` is returned.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Int(self.next_index);
        if self.entries.contains_key(&key) {
            warn!(%key, "Integer key space exhausted, value not appended");
            return None;
        }
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Removes a key, preserving the order of the remaining entries
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Removes and returns the first entry
    pub fn shift_first(&mut self) -> Option<(Key, Value)> {
        self.entries.shift_remove_index(0)
    }

    /// Removes and returns the last entry, recomputing the next free index
    pub fn pop(&mut self) -> Option<(Key, Value)> {
        let popped = self.entries.pop();
        self.next_index = self
            .entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |n| n.saturating_add(1).max(0));
        popped
    }

    /// Keeps only the entries matching the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&Key, &Value) -> bool) {
        self.entries.retain(|key, value| keep(key, value));
    }

    /// Returns the first entry
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Returns the last entry
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last()
    }

    /// Returns the entry at a position, ignoring keys
    pub fn nth(&self, index: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(index)
    }

    /// Returns an iterator over key-value pairs in order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Returns a mutable iterator over key-value pairs in order
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&Key, &mut Value)> + ExactSizeIterator {
        self.entries.iter_mut()
    }

    /// Returns an iterator over the keys in order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.keys()
    }

    /// Returns an iterator over the values in order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.values()
    }

    /// Consumes the container, returning its values in order
    pub fn into_values(self) -> impl DoubleEndedIterator<Item = Value> + ExactSizeIterator {
        self.entries.into_values()
    }

    /// Adds an entry with associative-array merge rules: string keys are
    /// inserted (overwriting in place), integer keys get a fresh index.
    pub fn merge_entry(&mut self, key: Key, value: Value) {
        match key {
            Key::Str(_) => {
                self.insert(key, value);
            }
            Key::Int(_) => {
                self.push(value);
            }
        }
    }

    /// Returns a copy with integer keys renumbered from 0 and string keys kept
    pub fn renumbered(&self) -> Container {
        let mut out = Container::with_capacity(self.len());
        for (key, value) in self.iter() {
            out.merge_entry(key.clone(), value.clone());
        }
        out
    }

    /// Returns the values as a list keyed `0..len`
    pub fn reindexed(&self) -> Container {
        self.values().cloned().collect()
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list() {
            write!(f, "[")?;
            for (i, value) in self.values().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")
        } else {
            write!(f, "{{")?;
            for (i, (key, value)) in self.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            write!(f, "}}")
        }
    }
}

impl FromIterator<Value> for Container {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut container = Container::new();
        for value in iter {
            container.push(value);
        }
        container
    }
}

impl FromIterator<(Key, Value)> for Container {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl Extend<(Key, Value)> for Container {
    fn extend<T: IntoIterator<Item = (Key, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V: Into<Value>> From<Vec<V>> for Container {
    fn from(values: Vec<V>) -> Self {
        Container::from_values(values)
    }
}
