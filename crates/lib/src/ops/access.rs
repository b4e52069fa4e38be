//! Element accessors.
//!
//! Every accessor is one [`lookup`] parametrized by *where* to look
//! ([`Locator`]) and *what to do* when nothing is there ([`Absent`]). The
//! twelve named functions below are thin wrappers kept for readability at
//! call sites.
//!
//! ```
//! use catena::{Value, container, ops};
//!
//! let c = container! {"a" => 1, "b" => 2};
//! assert_eq!(ops::get(&c, "a"), Value::Int(1));
//! assert_eq!(ops::get(&c, "z"), Value::Null);
//! assert_eq!(ops::last_or_else(&c, 0), Value::Int(2));
//! assert!(ops::by_number_or_exception(&c, 5).unwrap_err().is_not_found());
//! ```

use std::fmt;

use crate::{
    Result,
    container::{Container, Key, Value},
    errors::CollectionError,
};

/// Where an accessor looks.
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    /// The entry under a key
    Key(Key),
    /// The first entry in iteration order
    First,
    /// The last entry in iteration order
    Last,
    /// The entry at a position, ignoring keys. Negative positions count from
    /// the end, `-1` being the last entry.
    Number(i64),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Key(key) => write!(f, "Key '{key}'"),
            Locator::First => f.write_str("First element"),
            Locator::Last => f.write_str("Last element"),
            Locator::Number(n) => write!(f, "Element number {n}"),
        }
    }
}

/// What an accessor does when the located element does not exist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Absent {
    /// Return `Value::Null`
    #[default]
    Null,
    /// Return the given value
    Default(Value),
    /// Fail with [`CollectionError::NotFound`]
    Error,
}

/// Looks up one element.
///
/// A present element is returned even when it is `Null`; `absent` only
/// applies when the key or position does not exist.
pub fn lookup(container: &Container, locator: &Locator, absent: Absent) -> Result<Value> {
    if let Some(value) = locate(container, locator) {
        return Ok(value.clone());
    }
    match absent {
        Absent::Null => Ok(Value::Null),
        Absent::Default(value) => Ok(value),
        Absent::Error => Err(CollectionError::NotFound {
            what: locator.to_string(),
        }
        .into()),
    }
}

fn locate<'a>(container: &'a Container, locator: &Locator) -> Option<&'a Value> {
    match locator {
        Locator::Key(key) => container.get(key),
        Locator::First => container.first().map(|(_, value)| value),
        Locator::Last => container.last().map(|(_, value)| value),
        Locator::Number(n) => {
            let index = if *n < 0 {
                container.len().checked_sub(n.unsigned_abs() as usize)?
            } else {
                usize::try_from(*n).ok()?
            };
            container.nth(index).map(|(_, value)| value)
        }
    }
}

/// Value under `key`, or `Null`.
pub fn get(container: &Container, key: impl Into<Key>) -> Value {
    lookup(container, &Locator::Key(key.into()), Absent::Null).unwrap_or_default()
}

/// Value under `key`, or `default`.
pub fn get_or_else(container: &Container, key: impl Into<Key>, default: impl Into<Value>) -> Value {
    lookup(
        container,
        &Locator::Key(key.into()),
        Absent::Default(default.into()),
    )
    .unwrap_or_default()
}

/// Value under `key`, or a not-found error.
pub fn get_or_exception(container: &Container, key: impl Into<Key>) -> Result<Value> {
    lookup(container, &Locator::Key(key.into()), Absent::Error)
}

/// First value, or `Null` when empty.
pub fn first(container: &Container) -> Value {
    lookup(container, &Locator::First, Absent::Null).unwrap_or_default()
}

/// First value, or `default` when empty.
pub fn first_or_else(container: &Container, default: impl Into<Value>) -> Value {
    lookup(container, &Locator::First, Absent::Default(default.into())).unwrap_or_default()
}

/// First value, or a not-found error when empty.
pub fn first_or_exception(container: &Container) -> Result<Value> {
    lookup(container, &Locator::First, Absent::Error)
}

/// Last value, or `Null` when empty.
pub fn last(container: &Container) -> Value {
    lookup(container, &Locator::Last, Absent::Null).unwrap_or_default()
}

/// Last value, or `default` when empty.
pub fn last_or_else(container: &Container, default: impl Into<Value>) -> Value {
    lookup(container, &Locator::Last, Absent::Default(default.into())).unwrap_or_default()
}

/// Last value, or a not-found error when empty.
pub fn last_or_exception(container: &Container) -> Result<Value> {
    lookup(container, &Locator::Last, Absent::Error)
}

/// Element at a position, ignoring keys.
pub fn by_number(container: &Container, n: i64) -> Value {
    lookup(container, &Locator::Number(n), Absent::Null).unwrap_or_default()
}

/// Like [`by_number`], with `default` for a missing position.
pub fn by_number_or_else(container: &Container, n: i64, default: impl Into<Value>) -> Value {
    lookup(container, &Locator::Number(n), Absent::Default(default.into())).unwrap_or_default()
}

/// Like [`by_number`], failing with not-found for a missing position.
pub fn by_number_or_exception(container: &Container, n: i64) -> Result<Value> {
    lookup(container, &Locator::Number(n), Absent::Error)
}
