//! Value types stored in containers.
//!
//! [`Value`] is the element type of every [`Container`]. Values are either
//! scalars (null, booleans, integers, floats, text) or nested containers.
//!
//! Three notions of comparison exist and each operation documents which one
//! it uses:
//!
//! - **Strict equality** (`==`): same variant and same content. Containers
//!   compare entry by entry in iteration order. `Int(1)` never equals
//!   `Float(1.0)` or `Text("1")`.
//! - **Structural equality** ([`Value::structurally_eq`]): deep equality where
//!   containers compare as maps, ignoring key order. [`Value::fingerprint`]
//!   produces a string identity that agrees with it, for hashing.
//! - **Ordering** ([`Value::compare`]): a total order used by sorting helpers.

use std::{cmp::Ordering, fmt};

use super::{Container, Key};
use crate::errors::CollectionError;

/// Values that can be stored in a [`Container`].
///
/// `Value` implements `PartialEq` with primitive types for ergonomic
/// comparisons:
///
/// ```
/// # use catena::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(number == "42"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/absent value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Nested container
    Container(Container),
}

/// A numeric reading of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the number as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// Compares two numbers, exactly for two integers.
    pub fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(n) => Value::Int(n),
            Number::Float(x) => Value::Float(x),
        }
    }
}

impl Value {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is a nested container
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// Returns true if this value is not a container
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Container(_) => "container",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a container (returns immutable reference)
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable container reference
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Consumes the value, returning the container it holds
    pub fn into_container(self) -> Option<Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Reads the value as a number.
    ///
    /// Integers and floats are numeric, and so is text that parses as one
    /// (surrounding whitespace allowed). Everything else is not.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(x) => Some(Number::Float(*x)),
            Value::Text(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<i64>() {
                    Some(Number::Int(n))
                } else {
                    s.parse::<f64>()
                        .ok()
                        .filter(|x| x.is_finite())
                        .map(Number::Float)
                }
            }
            _ => None,
        }
    }

    /// Boolean reading used by predicates.
    ///
    /// Null, `false`, `0`, `0.0`, `""`, `"0"` and the empty container are
    /// falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Text(s) => !(s.is_empty() || s == "0"),
            Value::Container(c) => !c.is_empty(),
        }
    }

    /// Deep equality where containers compare as maps (key order ignored).
    pub fn structurally_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Container(a), Value::Container(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.get(key)
                            .is_some_and(|other_value| value.structurally_eq(other_value))
                    })
            }
            (a, b) => a == b,
        }
    }

    /// Canonical string identity of the value.
    ///
    /// Two values have the same fingerprint iff they are structurally equal.
    /// The encoding is type-tagged, so `1`, `1.0` and `"1"` all differ.
    pub fn fingerprint(&self) -> String {
        let mut out = String::new();
        self.write_fingerprint(&mut out);
        out
    }

    fn write_fingerprint(&self, out: &mut String) {
        match self {
            Value::Null => out.push('n'),
            Value::Bool(b) => out.push_str(if *b { "b1" } else { "b0" }),
            Value::Int(n) => {
                out.push('i');
                out.push_str(&n.to_string());
            }
            Value::Float(x) => {
                // -0.0 == 0.0, so they must share an identity
                let x = if *x == 0.0 { 0.0 } else { *x };
                out.push('f');
                out.push_str(&format!("{x:?}"));
            }
            Value::Text(s) => write_text_fingerprint(s, out),
            Value::Container(c) => {
                let mut entries: Vec<_> = c.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                out.push('{');
                for (key, value) in entries {
                    match key {
                        Key::Int(n) => {
                            out.push('i');
                            out.push_str(&n.to_string());
                        }
                        Key::Str(s) => write_text_fingerprint(s, out),
                    }
                    out.push('=');
                    value.write_fingerprint(out);
                    out.push(';');
                }
                out.push('}');
            }
        }
    }

    /// Total ordering used by sorting and extremum helpers.
    ///
    /// Null sorts lowest, then booleans, numbers (integers and floats
    /// compared numerically), text, and containers. Containers compare by
    /// length first, then value by value in iteration order.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                match (self.as_number(), other.as_number()) {
                    (Some(a), Some(b)) => a.compare(b),
                    _ => Ordering::Equal,
                }
            }
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Container(a), Value::Container(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.values()
                    .zip(b.values())
                    .map(|(x, y)| x.compare(y))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
            Value::Container(_) => 4,
        }
    }
}

fn write_text_fingerprint(s: &str, out: &mut String) {
    // Length prefix keeps delimiters inside text from colliding
    out.push('s');
    out.push_str(&s.len().to_string());
    out.push(':');
    out.push_str(s);
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Container(c) => write!(f, "{c}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Container> for Value {
    fn from(value: Container) -> Self {
        Value::Container(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(n) => Value::Int(n),
            Key::Str(s) => Value::Text(s),
        }
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Container(value.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<&Value> for Container {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Container(c) => Ok(c.clone()),
            _ => Err(CollectionError::TypeMismatch {
                expected: "container".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| CollectionError::TypeMismatch {
            expected: "int".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| CollectionError::TypeMismatch {
                expected: "text".to_string(),
                actual: value.type_name().to_string(),
            })
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Container> for Value {
    fn eq(&self, other: &Container) -> bool {
        self.as_container() == Some(other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
