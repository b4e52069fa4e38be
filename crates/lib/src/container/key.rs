//! Container keys.
//!
//! A key is either an integer (positional/list semantics) or a string
//! (associative semantics). Strings holding the canonical decimal form of an
//! integer are normalized to integer keys, so `"3"` and `3` address the same
//! slot, the way associative arrays treat them.

use std::fmt;

use super::value::Value;
use crate::errors::CollectionError;

/// A key of a [`Container`](super::Container).
///
/// Integer keys order before string keys; within a variant the natural
/// ordering applies. This ordering is only used by key sorting, never to
/// decide iteration order.
///
/// ```
/// # use catena::Key;
/// assert_eq!(Key::from("42"), Key::Int(42));
/// assert_eq!(Key::from("042"), Key::Str("042".to_string()));
/// assert_eq!(Key::from("name").to_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Positional key
    Int(i64),
    /// Associative key
    Str(String),
}

impl Key {
    /// Normalizes a string into a key.
    pub fn parse(s: impl Into<String>) -> Self {
        let s = s.into();
        match canonical_int(&s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s),
        }
    }

    /// Returns true for integer keys
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true for string keys
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// Attempts to read the key as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Attempts to read the key as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }
}

/// Parses `s` only if it is exactly how the integer would be printed.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::parse(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// Converts a value into a key the way associative arrays coerce offsets:
/// booleans become 0/1, null becomes the empty string, floats are truncated.
impl TryFrom<&Value> for Key {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Str(String::new())),
            Value::Bool(b) => Ok(Key::Int(*b as i64)),
            Value::Int(n) => Ok(Key::Int(*n)),
            Value::Float(x) => Ok(Key::Int(x.trunc() as i64)),
            Value::Text(s) => Ok(Key::parse(s.as_str())),
            Value::Container(_) => Err(CollectionError::TypeMismatch {
                expected: "key-like value".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
