//! Grouping and uniqueness by projected keys.
//!
//! Each function runs every element through a projector `(value, key)` and
//! buckets or deduplicates by the projection. [`group_by`], [`group_by_field`]
//! and [`count_by`] need projections usable as container keys. The other two
//! accept any projection, nested containers included, and compare them
//! structurally through [`Value::fingerprint`]: two projections land in the
//! same bucket iff they are deeply equal, regardless of the key order of any
//! containers inside them.
//!
//! ```
//! use catena::{container, ops};
//!
//! let rows = container! {
//!     "a" => container! {"val" => 1},
//!     "b" => container! {"val" => 2},
//!     "c" => container! {"val" => 1},
//! };
//! let unique = ops::unique_by(&rows, |row, _| ops::get(row.as_container().unwrap(), "val"));
//! assert_eq!(unique.keys().map(ToString::to_string).collect::<Vec<_>>(), ["a", "b"]);
//! ```

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::{
    Result,
    container::{Container, Key, Value},
    errors::CollectionError,
};

/// One bucket produced by [`group_to_struct`].
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The projection shared by every item of the group
    pub key: Value,
    /// The original elements, in encounter order, keyed `0..`
    pub items: Container,
}

impl From<Group> for Value {
    /// Renders the group as `{"key": .., "items": [..]}`.
    fn from(group: Group) -> Self {
        let mut out = Container::with_capacity(2);
        out.insert("key", group.key);
        out.insert("items", group.items);
        Value::Container(out)
    }
}

/// Buckets elements under their projected key.
///
/// Buckets appear in order of first occurrence; each holds the original
/// elements as a list. Projections must be key-like (not containers).
pub fn group_by<F, R>(container: &Container, mut projector: F) -> Result<Container>
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    let mut groups = Container::new();
    for (key, value) in container.iter() {
        let projected: Value = projector(value, key).into();
        add_to_bucket(&mut groups, Key::try_from(&projected)?, value);
    }
    Ok(groups)
}

/// Buckets container rows by the value of one of their fields.
///
/// Rows missing the field are grouped under the empty-string key. Every
/// element must be a container.
pub fn group_by_field(container: &Container, field: impl Into<Key>) -> Result<Container> {
    let field: Key = field.into();
    let mut groups = Container::new();
    for (key, value) in container.iter() {
        let row = value
            .as_container()
            .ok_or_else(|| CollectionError::NotAContainer {
                path: key.to_string(),
                actual: value.type_name().to_string(),
            })?;
        let bucket = match row.get(&field) {
            Some(projected) => Key::try_from(projected)?,
            None => Key::Str(String::new()),
        };
        add_to_bucket(&mut groups, bucket, value);
    }
    Ok(groups)
}

/// Groups elements by an arbitrary projection.
///
/// Groups are returned in order of first occurrence of their key.
pub fn group_to_struct<F, R>(container: &Container, mut projector: F) -> Vec<Group>
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (key, value) in container.iter() {
        let projected: Value = projector(value, key).into();
        let fingerprint = projected.fingerprint();
        let slot = *index.entry(fingerprint).or_insert_with(|| {
            groups.push(Group {
                key: projected,
                items: Container::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(value.clone());
    }
    trace!(groups = groups.len(), "Grouped by structural key");
    groups
}

/// Keeps the first element for each distinct projection, with its key.
pub fn unique_by<F, R>(container: &Container, mut projector: F) -> Container
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    let mut seen: HashSet<String> = HashSet::new();
    container
        .iter()
        .filter(|&(key, value)| {
            let projected: Value = projector(value, key).into();
            seen.insert(projected.fingerprint())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Counts elements per projected key.
pub fn count_by<F, R>(container: &Container, mut projector: F) -> Result<Container>
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    let mut counts = Container::new();
    for (key, value) in container.iter() {
        let projected: Value = projector(value, key).into();
        let bucket = Key::try_from(&projected)?;
        let count = counts.get(&bucket).and_then(Value::as_int).unwrap_or(0);
        counts.insert(bucket, count + 1);
    }
    Ok(counts)
}

fn add_to_bucket(groups: &mut Container, bucket: Key, value: &Value) {
    match groups.get_mut(&bucket).and_then(Value::as_container_mut) {
        Some(items) => {
            items.push(value.clone());
        }
        None => {
            groups.insert(bucket, Container::from_values([value.clone()]));
        }
    }
}
