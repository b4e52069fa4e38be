//! Structural operations: append/prepend, merging, slicing, splicing,
//! chunking and flattening.
//!
//! Merging follows associative-array rules throughout: string keys are
//! inserted (an existing key is overwritten in place), integer keys are
//! appended under a fresh index. The mutating primitives renumber the integer
//! keys of the container they shrink or grow and keep its string keys.
//!
//! ```
//! use catena::{Value, container, ops};
//!
//! let items = [Value::from(3), Value::from(container![4, 5])];
//! assert_eq!(ops::append(&container![1, 2], &items), container![1, 2, 3, container![4, 5]]);
//! assert_eq!(ops::append_merge(&container![1, 2], &items), container![1, 2, 3, 4, 5]);
//!
//! let mut source = container![1, 2, 3, 4];
//! let removed = ops::splice_head(&mut source, 2, "item");
//! assert_eq!(removed, container![1, 2]);
//! assert_eq!(source, container!["item", 3, 4]);
//! ```

use std::ops::Range;

use tracing::trace;

use super::convert;
use crate::{
    Result,
    container::{Container, Key, Value},
    errors::CollectionError,
};

/// Appends each item as a single element.
pub fn append(container: &Container, items: &[Value]) -> Container {
    let mut out = container.clone();
    for item in items {
        out.push(item.clone());
    }
    out
}

/// Prepends the items, in order, as single elements.
///
/// The result's integer keys are renumbered from 0; string keys are kept.
pub fn prepend(container: &Container, items: &[Value]) -> Container {
    let mut out = Container::with_capacity(container.len() + items.len());
    for item in items {
        out.push(item.clone());
    }
    extend_merged(&mut out, container);
    out
}

/// Appends the items, spreading any item that is itself a container.
pub fn append_merge(container: &Container, items: &[Value]) -> Container {
    let mut out = container.renumbered();
    for item in items {
        spread_into(&mut out, item);
    }
    out
}

/// Prepends the items, spreading any item that is itself a container.
pub fn prepend_merge(container: &Container, items: &[Value]) -> Container {
    let mut out = Container::new();
    for item in items {
        spread_into(&mut out, item);
    }
    extend_merged(&mut out, container);
    out
}

/// Decodes `json` and merges the result after the container's entries.
pub fn append_merge_from_json(container: &Container, json: &str) -> Result<Container> {
    Ok(merge(container, &convert::from_json(json)?))
}

/// Decodes `json` and merges the result before the container's entries.
pub fn prepend_merge_from_json(container: &Container, json: &str) -> Result<Container> {
    Ok(merge(&convert::from_json(json)?, container))
}

/// Splits `text` on `delimiter` and appends the parts.
pub fn append_merge_from_string(
    container: &Container,
    text: &str,
    delimiter: &str,
) -> Result<Container> {
    Ok(merge(container, &convert::from_string(text, delimiter)?))
}

/// Splits `text` on `delimiter` and prepends the parts.
pub fn prepend_merge_from_string(
    container: &Container,
    text: &str,
    delimiter: &str,
) -> Result<Container> {
    Ok(merge(&convert::from_string(text, delimiter)?, container))
}

/// Merges two containers: `b`'s string keys overwrite or extend `a`, its
/// integer-keyed values are appended. Integer keys of `a` are renumbered.
pub fn merge(a: &Container, b: &Container) -> Container {
    let mut out = a.renumbered();
    extend_merged(&mut out, b);
    out
}

/// Extracts a slice by position.
///
/// A negative `offset` counts from the end. `length` of `None` runs to the
/// end, a negative length stops that many entries before the end. Integer
/// keys are renumbered unless `preserve_keys` is set; string keys are always
/// kept.
pub fn slice(
    container: &Container,
    offset: i64,
    length: Option<i64>,
    preserve_keys: bool,
) -> Container {
    let range = slice_range(container.len(), offset, length);
    let mut out = Container::with_capacity(range.len());
    for (key, value) in container.iter().skip(range.start).take(range.len()) {
        if preserve_keys {
            out.insert(key.clone(), value.clone());
        } else {
            out.merge_entry(key.clone(), value.clone());
        }
    }
    out
}

/// Splits the container into chunks of at most `size` entries.
pub fn chunk_by_size(
    container: &Container,
    size: usize,
    preserve_keys: bool,
) -> Result<Container> {
    if size < 1 {
        return Err(
            CollectionError::invalid_argument("chunk_by_size", "size must be at least 1").into(),
        );
    }
    let mut chunks = Container::new();
    let mut offset = 0;
    while offset < container.len() {
        chunks.push(take_chunk(container, offset, size, preserve_keys));
        offset += size;
    }
    Ok(chunks)
}

/// Splits the container into exactly `count` chunks whose sizes differ by
/// at most one, larger chunks first.
///
/// Trailing chunks are empty when `count` exceeds the number of entries.
pub fn chunk_by_count(
    container: &Container,
    count: usize,
    preserve_keys: bool,
) -> Result<Container> {
    if count < 1 {
        return Err(
            CollectionError::invalid_argument("chunk_by_count", "count must be at least 1").into(),
        );
    }
    let mut chunks = Container::with_capacity(count);
    let mut offset = 0;
    for chunks_left in (1..=count).rev() {
        let size = (container.len() - offset).div_ceil(chunks_left);
        trace!(offset, size, chunks_left, "Taking chunk");
        chunks.push(take_chunk(container, offset, size, preserve_keys));
        offset += size;
    }
    Ok(chunks)
}

/// Inlines nested containers up to `depth` levels; the result is a list.
///
/// Non-container elements pass through unchanged. Depth 0 only reindexes.
pub fn flatten(container: &Container, depth: usize) -> Container {
    let mut out = Container::new();
    flatten_into(&mut out, container, depth);
    out
}

/// Inlines nested containers at every level.
pub fn flatten_all(container: &Container) -> Container {
    flatten(container, usize::MAX)
}

fn flatten_into(out: &mut Container, container: &Container, depth: usize) {
    for value in container.values() {
        match value {
            Value::Container(inner) if depth > 0 => flatten_into(out, inner, depth - 1),
            other => {
                out.push(other.clone());
            }
        }
    }
}

/// Builds a container from a list of keys and a list of values.
pub fn combine(keys: &Container, values: &Container) -> Result<Container> {
    if keys.len() != values.len() {
        return Err(CollectionError::invalid_argument(
            "combine",
            format!("{} keys for {} values", keys.len(), values.len()),
        )
        .into());
    }
    let mut out = Container::with_capacity(keys.len());
    for (key, value) in keys.values().zip(values.values()) {
        out.insert(Key::try_from(key)?, value.clone());
    }
    Ok(out)
}

/// Removes a positional range and inserts `replacement` in its place,
/// returning the removed entries.
///
/// `offset` and `length` follow [`slice`]. A container replacement is
/// spread (values only), `Null` inserts nothing, and any other value is
/// inserted as one element. Integer keys of both the source and the
/// returned slice are renumbered; string keys are kept.
pub fn splice(
    container: &mut Container,
    offset: i64,
    length: Option<i64>,
    replacement: impl Into<Value>,
) -> Container {
    let range = slice_range(container.len(), offset, length);
    let replacement: Value = replacement.into();
    let original = std::mem::take(container);
    let original_len = original.len();
    let mut removed = Container::with_capacity(range.len());

    for (position, (key, value)) in original.into_iter().enumerate() {
        if position == range.start {
            insert_replacement(container, &replacement);
        }
        if range.contains(&position) {
            removed.merge_entry(key, value);
        } else {
            container.merge_entry(key, value);
        }
    }
    // Insertion point at the very end
    if range.start == original_len {
        insert_replacement(container, &replacement);
    }
    removed
}

/// Removes `length` entries from the front, inserting `replacement` there.
pub fn splice_head(
    container: &mut Container,
    length: i64,
    replacement: impl Into<Value>,
) -> Container {
    splice(container, 0, Some(length), replacement)
}

/// Removes `|length|` entries from the back, inserting `replacement` there.
pub fn splice_tail(
    container: &mut Container,
    length: i64,
    replacement: impl Into<Value>,
) -> Container {
    let len = container.len();
    let take = usize::try_from(length.unsigned_abs()).unwrap_or(usize::MAX).min(len);
    splice(container, (len - take) as i64, None, replacement)
}

/// Removes and returns the first value, or `Null` when empty.
pub fn shift(container: &mut Container) -> Value {
    let Some((_, value)) = container.shift_first() else {
        return Value::Null;
    };
    *container = container.renumbered();
    value
}

/// Removes and returns the last value, or `Null` when empty.
pub fn pop(container: &mut Container) -> Value {
    container.pop().map(|(_, value)| value).unwrap_or_default()
}

/// Prepends values in place, returning the new length.
pub fn unshift(container: &mut Container, items: &[Value]) -> usize {
    *container = prepend(container, items);
    container.len()
}

/// Appends values in place, returning the new length.
pub fn push(container: &mut Container, items: &[Value]) -> usize {
    for item in items {
        container.push(item.clone());
    }
    container.len()
}

/// Resolves `offset`/`length` against a container of `len` entries.
fn slice_range(len: usize, offset: i64, length: Option<i64>) -> Range<usize> {
    let len_i = len as i64;
    let start = if offset < 0 {
        (len_i + offset).max(0)
    } else {
        offset.min(len_i)
    };
    let end = match length {
        None => len_i,
        Some(length) if length < 0 => (len_i + length).max(start),
        Some(length) => start.saturating_add(length).min(len_i),
    };
    start as usize..end as usize
}

fn take_chunk(container: &Container, offset: usize, size: usize, preserve_keys: bool) -> Value {
    let mut chunk = Container::with_capacity(size);
    for (key, value) in container.iter().skip(offset).take(size) {
        if preserve_keys {
            chunk.insert(key.clone(), value.clone());
        } else {
            chunk.push(value.clone());
        }
    }
    Value::Container(chunk)
}

fn extend_merged(out: &mut Container, from: &Container) {
    for (key, value) in from.iter() {
        out.merge_entry(key.clone(), value.clone());
    }
}

fn spread_into(out: &mut Container, item: &Value) {
    match item {
        Value::Container(inner) => extend_merged(out, inner),
        scalar => {
            out.push(scalar.clone());
        }
    }
}

fn insert_replacement(container: &mut Container, replacement: &Value) {
    match replacement {
        Value::Null => {}
        Value::Container(values) => {
            for value in values.values() {
                container.push(value.clone());
            }
        }
        single => {
            container.push(single.clone());
        }
    }
}
