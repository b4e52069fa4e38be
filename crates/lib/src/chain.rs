//! The stateful chain facade.
//!
//! A [`Chain`] holds one container and a pending depth. [`Chain::elems`]
//! raises the pending depth by one; the next operation is dispatched at that
//! depth and resets it to 0, whether it succeeds or fails.
//!
//! Methods come in three shapes:
//!
//! - **Transforms** replace the held container with the operation's result
//!   and return `&mut Self` for further chaining.
//! - **Queries** leave the container alone and return a [`Value`]. Above
//!   depth 0 the value is a container mirroring the walked structure.
//! - **Extractors** (`splice*`, `shift`, `pop`, `push`, `unshift`) mutate the
//!   held container in place. At depth 0 they return the extracted value;
//!   deeper, a list of the values extracted from every leaf, in walk order.
//!
//! ```
//! use catena::{Chain, Value, container};
//!
//! let mut chain = Chain::new(container![container![1, 2, 3], container![4, 5]]);
//! let popped = chain.elems().pop()?;
//! assert_eq!(popped, Value::from(container![3, 5]));
//! assert_eq!(chain.container(), &container![container![1, 2], container![4]]);
//!
//! // The depth was consumed by `pop`
//! assert_eq!(chain.count()?, Value::Int(2));
//! # Ok::<(), catena::Error>(())
//! ```

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    Result,
    casing::KeyCase,
    container::{Container, Key, Value},
    dispatch,
    ops::{self, JsonOptions},
};

/// A container plus the depth the next operation will be applied at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    container: Container,
    depth: usize,
}

impl From<Container> for Chain {
    fn from(container: Container) -> Self {
        Self::new(container)
    }
}

impl Chain {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            depth: 0,
        }
    }

    /// Starts a chain from a JSON object or array.
    pub fn from_json(json: &str) -> Result<Self> {
        ops::from_json(json).map(Self::new)
    }

    /// Starts a chain from the parts of a delimited string.
    pub fn from_string(text: &str, delimiter: &str) -> Result<Self> {
        ops::from_string(text, delimiter).map(Self::new)
    }

    /// Starts a chain from an inclusive integer range.
    pub fn from_range(start: i64, end: i64, step: i64) -> Result<Self> {
        ops::from_range(start, end, step).map(Self::new)
    }

    /// Routes the next operation one level deeper.
    pub fn elems(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Sets the depth of the next operation.
    pub fn at_depth(&mut self, depth: usize) -> &mut Self {
        self.depth = depth;
        self
    }

    /// The depth the next operation will be applied at.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn into_inner(self) -> Container {
        self.container
    }

    pub fn to_json(&self, options: JsonOptions) -> Result<String> {
        ops::to_json(&self.container, options)
    }

    /// Joins the held values with `delimiter`.
    pub fn to_delimited(&self, delimiter: &str) -> Result<String> {
        ops::to_string(&self.container, delimiter)
    }

    fn transform<F>(&mut self, method: &'static str, op: F) -> Result<&mut Self>
    where
        F: FnMut(&Container) -> Result<Container>,
    {
        let depth = std::mem::take(&mut self.depth);
        debug!(method, depth, "Chaining transform");
        self.container = dispatch::apply_container(&self.container, depth, op)?;
        Ok(self)
    }

    fn query<F, R>(&mut self, method: &'static str, op: F) -> Result<Value>
    where
        F: FnMut(&Container) -> Result<R>,
        R: Into<Value>,
    {
        let depth = std::mem::take(&mut self.depth);
        debug!(method, depth, "Chaining query");
        dispatch::apply(&self.container, depth, op)
    }

    fn extract<F, R>(&mut self, method: &'static str, mut op: F) -> Result<Value>
    where
        F: FnMut(&mut Container) -> R,
        R: Into<Value>,
    {
        let depth = std::mem::take(&mut self.depth);
        debug!(method, depth, "Chaining extraction");
        if depth == 0 {
            return Ok(op(&mut self.container).into());
        }
        let extracted = dispatch::collect_mut(&mut self.container, depth, |leaf| {
            Ok(Into::<Value>::into(op(leaf)))
        })?;
        Ok(Value::Container(extracted.into_iter().collect()))
    }

    // Key/value transforms

    pub fn map<F, V>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> V,
        V: Into<Value>,
    {
        self.transform("map", |leaf| Ok(ops::map(leaf, &mut f)))
    }

    pub fn map_keys<F, K>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&Key, &Value) -> K,
        K: Into<Key>,
    {
        self.transform("map_keys", |leaf| Ok(ops::map_keys(leaf, &mut f)))
    }

    pub fn map_key_value<F, K, V>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&Key, &Value) -> (K, V),
        K: Into<Key>,
        V: Into<Value>,
    {
        self.transform("map_key_value", |leaf| {
            Ok(ops::map_key_value(leaf, &mut f))
        })
    }

    pub fn filter<F, R>(&mut self, mut predicate: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.transform("filter", |leaf| Ok(ops::filter(leaf, &mut predicate)))
    }

    pub fn filter_keys<F, R>(&mut self, mut predicate: F) -> Result<&mut Self>
    where
        F: FnMut(&Key) -> R,
        R: Into<Value>,
    {
        self.transform("filter_keys", |leaf| {
            Ok(ops::filter_keys(leaf, &mut predicate))
        })
    }

    pub fn filter_values(&mut self, allowed: &[Value]) -> Result<&mut Self> {
        self.transform("filter_values", |leaf| Ok(ops::filter_values(leaf, allowed)))
    }

    /// Keeps the entries whose predicate returns exactly `false`.
    pub fn reject<F, R>(&mut self, mut predicate: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.transform("reject", |leaf| Ok(ops::reject(leaf, &mut predicate)))
    }

    pub fn reject_keys<F, R>(&mut self, mut predicate: F) -> Result<&mut Self>
    where
        F: FnMut(&Key) -> R,
        R: Into<Value>,
    {
        self.transform("reject_keys", |leaf| {
            Ok(ops::reject_keys(leaf, &mut predicate))
        })
    }

    pub fn reject_values(&mut self, denied: &[Value]) -> Result<&mut Self> {
        self.transform("reject_values", |leaf| Ok(ops::reject_values(leaf, denied)))
    }

    pub fn keys(&mut self) -> Result<&mut Self> {
        self.transform("keys", |leaf| Ok(ops::keys(leaf)))
    }

    pub fn values(&mut self) -> Result<&mut Self> {
        self.transform("values", |leaf| Ok(ops::values(leaf)))
    }

    pub fn flip(&mut self) -> Result<&mut Self> {
        self.transform("flip", ops::flip)
    }

    pub fn reverse(&mut self, preserve_keys: bool) -> Result<&mut Self> {
        self.transform("reverse", |leaf| Ok(ops::reverse(leaf, preserve_keys)))
    }

    pub fn reindex(&mut self) -> Result<&mut Self> {
        self.transform("reindex", |leaf| Ok(ops::reindex(leaf)))
    }

    pub fn rename_keys(&mut self, renames: &[(Key, Key)]) -> Result<&mut Self> {
        self.transform("rename_keys", |leaf| Ok(ops::rename_keys(leaf, renames)))
    }

    pub fn column(&mut self, field: impl Into<Key>) -> Result<&mut Self> {
        let field: Key = field.into();
        self.transform("column", |leaf| Ok(ops::column(leaf, &field)))
    }

    pub fn only_keys(&mut self, keys: &[Key]) -> Result<&mut Self> {
        self.transform("only_keys", |leaf| Ok(ops::only_keys(leaf, keys)))
    }

    pub fn except_keys(&mut self, keys: &[Key]) -> Result<&mut Self> {
        self.transform("except_keys", |leaf| Ok(ops::except_keys(leaf, keys)))
    }

    pub fn unique(&mut self) -> Result<&mut Self> {
        self.transform("unique", |leaf| Ok(ops::unique(leaf)))
    }

    pub fn sort(&mut self) -> Result<&mut Self> {
        self.transform("sort", |leaf| Ok(ops::sort(leaf)))
    }

    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.transform("sort_by", |leaf| Ok(ops::sort_by(leaf, &mut compare)))
    }

    pub fn sort_keys(&mut self) -> Result<&mut Self> {
        self.transform("sort_keys", |leaf| Ok(ops::sort_keys(leaf)))
    }

    pub fn pad(&mut self, size: i64, value: impl Into<Value>) -> Result<&mut Self> {
        let value: Value = value.into();
        self.transform("pad", |leaf| Ok(ops::pad(leaf, size, value.clone())))
    }

    /// Replaces the held values with keys, each mapped to `value`.
    pub fn fill_keys(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        let value: Value = value.into();
        self.transform("fill_keys", |leaf| ops::fill_keys(leaf, value.clone()))
    }

    /// Uses the held values as keys for `values`.
    pub fn combine(&mut self, values: &Container) -> Result<&mut Self> {
        self.transform("combine", |leaf| ops::combine(leaf, values))
    }

    // Structure

    pub fn append(&mut self, items: &[Value]) -> Result<&mut Self> {
        self.transform("append", |leaf| Ok(ops::append(leaf, items)))
    }

    pub fn prepend(&mut self, items: &[Value]) -> Result<&mut Self> {
        self.transform("prepend", |leaf| Ok(ops::prepend(leaf, items)))
    }

    pub fn append_merge(&mut self, items: &[Value]) -> Result<&mut Self> {
        self.transform("append_merge", |leaf| Ok(ops::append_merge(leaf, items)))
    }

    pub fn prepend_merge(&mut self, items: &[Value]) -> Result<&mut Self> {
        self.transform("prepend_merge", |leaf| Ok(ops::prepend_merge(leaf, items)))
    }

    pub fn append_merge_from_json(&mut self, json: &str) -> Result<&mut Self> {
        self.transform("append_merge_from_json", |leaf| {
            ops::append_merge_from_json(leaf, json)
        })
    }

    pub fn prepend_merge_from_json(&mut self, json: &str) -> Result<&mut Self> {
        self.transform("prepend_merge_from_json", |leaf| {
            ops::prepend_merge_from_json(leaf, json)
        })
    }

    pub fn append_merge_from_string(&mut self, text: &str, delimiter: &str) -> Result<&mut Self> {
        self.transform("append_merge_from_string", |leaf| {
            ops::append_merge_from_string(leaf, text, delimiter)
        })
    }

    pub fn prepend_merge_from_string(&mut self, text: &str, delimiter: &str) -> Result<&mut Self> {
        self.transform("prepend_merge_from_string", |leaf| {
            ops::prepend_merge_from_string(leaf, text, delimiter)
        })
    }

    pub fn merge(&mut self, other: &Container) -> Result<&mut Self> {
        self.transform("merge", |leaf| Ok(ops::merge(leaf, other)))
    }

    pub fn slice(
        &mut self,
        offset: i64,
        length: Option<i64>,
        preserve_keys: bool,
    ) -> Result<&mut Self> {
        self.transform("slice", |leaf| {
            Ok(ops::slice(leaf, offset, length, preserve_keys))
        })
    }

    pub fn chunk_by_size(&mut self, size: usize, preserve_keys: bool) -> Result<&mut Self> {
        self.transform("chunk_by_size", |leaf| {
            ops::chunk_by_size(leaf, size, preserve_keys)
        })
    }

    pub fn chunk_by_count(&mut self, count: usize, preserve_keys: bool) -> Result<&mut Self> {
        self.transform("chunk_by_count", |leaf| {
            ops::chunk_by_count(leaf, count, preserve_keys)
        })
    }

    pub fn flatten(&mut self, depth: usize) -> Result<&mut Self> {
        self.transform("flatten", |leaf| Ok(ops::flatten(leaf, depth)))
    }

    pub fn flatten_all(&mut self) -> Result<&mut Self> {
        self.transform("flatten_all", |leaf| Ok(ops::flatten_all(leaf)))
    }

    // Aggregation

    pub fn group_by<F, R>(&mut self, mut projector: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.transform("group_by", |leaf| ops::group_by(leaf, &mut projector))
    }

    pub fn group_by_field(&mut self, field: impl Into<Key>) -> Result<&mut Self> {
        let field: Key = field.into();
        self.transform("group_by_field", |leaf| ops::group_by_field(leaf, &field))
    }

    /// Replaces the container with a list of `{"key": .., "items": [..]}`
    /// groups.
    pub fn group_to_struct<F, R>(&mut self, mut projector: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.transform("group_to_struct", |leaf| {
            Ok(ops::group_to_struct(leaf, &mut projector)
                .into_iter()
                .map(Value::from)
                .collect())
        })
    }

    pub fn unique_by<F, R>(&mut self, mut projector: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.transform("unique_by", |leaf| Ok(ops::unique_by(leaf, &mut projector)))
    }

    pub fn count_by<F, R>(&mut self, mut projector: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.transform("count_by", |leaf| ops::count_by(leaf, &mut projector))
    }

    // Key casing

    pub fn convert_keys(&mut self, case: KeyCase) -> Result<&mut Self> {
        self.transform("convert_keys", |leaf| Ok(ops::convert_keys(leaf, case)))
    }

    pub fn keys_to_camel_case(&mut self) -> Result<&mut Self> {
        self.convert_keys(KeyCase::Camel)
    }

    pub fn keys_to_pascal_case(&mut self) -> Result<&mut Self> {
        self.convert_keys(KeyCase::Pascal)
    }

    pub fn keys_to_snake_case(&mut self) -> Result<&mut Self> {
        self.convert_keys(KeyCase::Snake)
    }

    pub fn keys_to_kebab_case(&mut self) -> Result<&mut Self> {
        self.convert_keys(KeyCase::Kebab)
    }

    pub fn keys_to_scream_snake_case(&mut self) -> Result<&mut Self> {
        self.convert_keys(KeyCase::ScreamSnake)
    }

    pub fn keys_to_scream_kebab_case(&mut self) -> Result<&mut Self> {
        self.convert_keys(KeyCase::ScreamKebab)
    }

    // JSON fields

    pub fn json_encode_fields(
        &mut self,
        fields: &[Key],
        options: JsonOptions,
    ) -> Result<&mut Self> {
        self.transform("json_encode_fields", |leaf| {
            ops::json_encode_fields(leaf, fields, options)
        })
    }

    pub fn json_decode_fields(&mut self, fields: &[Key]) -> Result<&mut Self> {
        self.transform("json_decode_fields", |leaf| {
            ops::json_decode_fields(leaf, fields)
        })
    }

    // Queries

    pub fn count(&mut self) -> Result<Value> {
        self.query("count", |leaf| Ok(ops::count(leaf)))
    }

    pub fn is_list(&mut self) -> Result<Value> {
        self.query("is_list", |leaf| Ok(ops::is_list(leaf)))
    }

    pub fn is_empty(&mut self) -> Result<Value> {
        self.query("is_empty", |leaf| Ok(ops::is_empty(leaf)))
    }

    pub fn has_key(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key: Key = key.into();
        self.query("has_key", |leaf| Ok(ops::has_key(leaf, &key)))
    }

    pub fn has_value(&mut self, needle: impl Into<Value>) -> Result<Value> {
        let needle: Value = needle.into();
        self.query("has_value", |leaf| Ok(ops::has_value(leaf, &needle)))
    }

    pub fn has_all_keys(&mut self, keys: &[Key]) -> Result<Value> {
        self.query("has_all_keys", |leaf| Ok(ops::has_all_keys(leaf, keys)))
    }

    /// First value whose predicate is truthy, or `Null`.
    pub fn find<F, R>(&mut self, mut predicate: F) -> Result<Value>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.query("find", |leaf| Ok(ops::find(leaf, &mut predicate)))
    }

    /// Key of the first value whose predicate is truthy, or `Null`.
    pub fn find_key<F, R>(&mut self, mut predicate: F) -> Result<Value>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.query("find_key", |leaf| Ok(ops::find_key(leaf, &mut predicate)))
    }

    pub fn search(&mut self, needle: impl Into<Value>) -> Result<Value> {
        let needle: Value = needle.into();
        self.query("search", |leaf| Ok(ops::search(leaf, &needle)))
    }

    pub fn reduce<F>(&mut self, init: impl Into<Value>, mut f: F) -> Result<Value>
    where
        F: FnMut(Value, &Value, &Key) -> Value,
    {
        let init: Value = init.into();
        self.query("reduce", |leaf| Ok(ops::reduce(leaf, init.clone(), &mut f)))
    }

    // Accessors

    pub fn get(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key: Key = key.into();
        self.query("get", |leaf| Ok(ops::get(leaf, &key)))
    }

    pub fn get_or_else(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Result<Value> {
        let key: Key = key.into();
        let default: Value = default.into();
        self.query("get_or_else", |leaf| {
            Ok(ops::get_or_else(leaf, &key, default.clone()))
        })
    }

    pub fn get_or_exception(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key: Key = key.into();
        self.query("get_or_exception", |leaf| ops::get_or_exception(leaf, &key))
    }

    pub fn first(&mut self) -> Result<Value> {
        self.query("first", |leaf| Ok(ops::first(leaf)))
    }

    pub fn first_or_else(&mut self, default: impl Into<Value>) -> Result<Value> {
        let default: Value = default.into();
        self.query("first_or_else", |leaf| {
            Ok(ops::first_or_else(leaf, default.clone()))
        })
    }

    pub fn first_or_exception(&mut self) -> Result<Value> {
        self.query("first_or_exception", ops::first_or_exception)
    }

    pub fn last(&mut self) -> Result<Value> {
        self.query("last", |leaf| Ok(ops::last(leaf)))
    }

    pub fn last_or_else(&mut self, default: impl Into<Value>) -> Result<Value> {
        let default: Value = default.into();
        self.query("last_or_else", |leaf| {
            Ok(ops::last_or_else(leaf, default.clone()))
        })
    }

    pub fn last_or_exception(&mut self) -> Result<Value> {
        self.query("last_or_exception", ops::last_or_exception)
    }

    pub fn by_number(&mut self, n: i64) -> Result<Value> {
        self.query("by_number", |leaf| Ok(ops::by_number(leaf, n)))
    }

    pub fn by_number_or_else(&mut self, n: i64, default: impl Into<Value>) -> Result<Value> {
        let default: Value = default.into();
        self.query("by_number_or_else", |leaf| {
            Ok(ops::by_number_or_else(leaf, n, default.clone()))
        })
    }

    pub fn by_number_or_exception(&mut self, n: i64) -> Result<Value> {
        self.query("by_number_or_exception", |leaf| {
            ops::by_number_or_exception(leaf, n)
        })
    }

    // Math

    pub fn math_min(&mut self) -> Result<Value> {
        self.query("math_min", |leaf| Ok(ops::math_min(leaf)))
    }

    pub fn math_max(&mut self) -> Result<Value> {
        self.query("math_max", |leaf| Ok(ops::math_max(leaf)))
    }

    pub fn math_sum(&mut self) -> Result<Value> {
        self.query("math_sum", |leaf| Ok(ops::math_sum(leaf)))
    }

    pub fn math_avg(&mut self) -> Result<Value> {
        self.query("math_avg", |leaf| Ok(ops::math_avg(leaf)))
    }

    pub fn min_by<F, R>(&mut self, mut f: F) -> Result<Value>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.query("min_by", |leaf| Ok(ops::min_by(leaf, &mut f)))
    }

    pub fn max_by<F, R>(&mut self, mut f: F) -> Result<Value>
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.query("max_by", |leaf| Ok(ops::max_by(leaf, &mut f)))
    }

    pub fn min_by_field(&mut self, field: impl Into<Key>) -> Result<Value> {
        let field: Key = field.into();
        self.query("min_by_field", |leaf| Ok(ops::min_by_field(leaf, &field)))
    }

    pub fn max_by_field(&mut self, field: impl Into<Key>) -> Result<Value> {
        let field: Key = field.into();
        self.query("max_by_field", |leaf| Ok(ops::max_by_field(leaf, &field)))
    }

    // Extraction

    /// Removes a positional range, inserting `replacement` in its place.
    /// Returns the removed entries.
    pub fn splice(
        &mut self,
        offset: i64,
        length: Option<i64>,
        replacement: impl Into<Value>,
    ) -> Result<Value> {
        let replacement: Value = replacement.into();
        self.extract("splice", |leaf| {
            ops::splice(leaf, offset, length, replacement.clone())
        })
    }

    pub fn splice_head(&mut self, length: i64, replacement: impl Into<Value>) -> Result<Value> {
        let replacement: Value = replacement.into();
        self.extract("splice_head", |leaf| {
            ops::splice_head(leaf, length, replacement.clone())
        })
    }

    pub fn splice_tail(&mut self, length: i64, replacement: impl Into<Value>) -> Result<Value> {
        let replacement: Value = replacement.into();
        self.extract("splice_tail", |leaf| {
            ops::splice_tail(leaf, length, replacement.clone())
        })
    }

    pub fn shift(&mut self) -> Result<Value> {
        self.extract("shift", ops::shift)
    }

    pub fn pop(&mut self) -> Result<Value> {
        self.extract("pop", ops::pop)
    }

    /// Prepends `items` in place, returning the new length.
    pub fn unshift(&mut self, items: &[Value]) -> Result<Value> {
        self.extract("unshift", |leaf| ops::unshift(leaf, items))
    }

    /// Appends `items` in place, returning the new length.
    pub fn push(&mut self, items: &[Value]) -> Result<Value> {
        self.extract("push", |leaf| ops::push(leaf, items))
    }
}
