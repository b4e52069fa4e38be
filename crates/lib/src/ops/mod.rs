//! The operation catalogue.
//!
//! Every operation is a plain function over a [`Container`](crate::Container).
//! Transforms borrow their input and return a fresh container; the few
//! mutating primitives (`splice*`, `shift`, `pop`, `push`, `unshift`) take
//! `&mut Container`, shrink or grow it in place and return what they
//! extracted. Calling these functions directly is the value-returning calling
//! convention; [`Chain`](crate::Chain) wraps the same functions behind a
//! stateful, depth-aware facade.
//!
//! Callbacks receive `(value, key)` and may return anything convertible into
//! a [`Value`](crate::Value); predicates are read through
//! [`Value::is_truthy`](crate::Value::is_truthy), except [`reject`], which
//! keeps an element only when the predicate returns exactly `false`.
//!
//! # Modules
//!
//! - [`access`] - `get` / `first` / `last` / `by_number` with null, default or
//!   error on absence
//! - [`aggregate`] - grouping and uniqueness by projected keys
//! - [`case`] - key casing conversion
//! - [`convert`] - construction from and export to JSON, strings and ranges
//! - [`json_fields`] - JSON encoding/decoding of selected fields
//! - [`math`] - numeric aggregation
//! - [`query`] - predicates and searches returning scalars
//! - [`structure`] - append/prepend, slicing, splicing, chunking, flattening
//! - [`transform`] - key/value mapping, filtering, sorting

pub mod access;
pub mod aggregate;
pub mod case;
pub mod convert;
pub mod json_fields;
pub mod math;
pub mod query;
pub mod structure;
pub mod transform;

pub use access::*;
pub use aggregate::*;
pub use case::*;
pub use convert::*;
pub use json_fields::*;
pub use math::*;
pub use query::*;
pub use structure::*;
pub use transform::*;

use crate::container::Value;

/// Reads a callback result as a predicate outcome.
pub(crate) fn truthy(result: impl Into<Value>) -> bool {
    result.into().is_truthy()
}

/// True only for a callback result of exactly `false`.
pub(crate) fn is_false(result: impl Into<Value>) -> bool {
    matches!(result.into(), Value::Bool(false))
}
