//! Depth-aware operation dispatch.
//!
//! Any operation over a [`Container`] can be applied N levels down instead of
//! at the top level. The dispatcher walks the container, treats every child
//! as a container, descends until the requested depth is reached and applies
//! the operation to each container found there (a *leaf*).
//!
//! - [`apply`] / [`apply_container`] rebuild the walked structure: every
//!   outer key keeps its position and the leaf results are written back under
//!   their keys. At depth 0 the operation's result is returned as is.
//! - [`apply_mut_collecting`] / [`collect_mut`] are for operations that both
//!   shrink their input and return what they extracted (splice, shift, pop).
//!   Leaves are mutated in place and the return values are gathered into one
//!   flat list, depth-first, in key order.
//!
//! A child that is not a container means the depth exceeds the actual
//! nesting; the walk stops with [`CollectionError::NotAContainer`] naming the
//! offending path. The first leaf error aborts the whole walk. In the mutable
//! walk, leaves visited before the failure stay mutated.
//!
//! ```
//! use catena::{container, dispatch, ops};
//!
//! let nested = container! {"a" => container! {"b" => container![1, 2, 3]}};
//! let shifted = dispatch::apply_container(&nested, 2, |leaf| {
//!     Ok(ops::map(leaf, |v, _| v.as_int().unwrap_or(0) + 5))
//! })?;
//! assert_eq!(shifted, container! {"a" => container! {"b" => container![6, 7, 8]}});
//! # Ok::<(), catena::Error>(())
//! ```

use tracing::{debug, trace};

use crate::{
    Result,
    container::{Container, Key, Value},
    errors::CollectionError,
};

/// Applies `op` at `depth` and rebuilds the surrounding structure.
///
/// At depth 0 this is `op(container)` converted into a [`Value`]. Above 0 the
/// result is a [`Value::Container`] shaped like the input down to the leaves.
pub fn apply<R, F>(container: &Container, depth: usize, mut op: F) -> Result<Value>
where
    F: FnMut(&Container) -> Result<R>,
    R: Into<Value>,
{
    debug!(depth, len = container.len(), "Dispatching operation");
    descend(
        container,
        depth,
        &mut Vec::new(),
        &mut |leaf: &Container| -> Result<Value> { op(leaf).map(Into::into) },
        &Value::Container,
    )
}

/// Like [`apply`] for operations that return a container.
///
/// Container results nest without wrapping, so the outcome is a container at
/// every depth.
pub fn apply_container<F>(container: &Container, depth: usize, mut op: F) -> Result<Container>
where
    F: FnMut(&Container) -> Result<Container>,
{
    debug!(depth, len = container.len(), "Dispatching container operation");
    descend(
        container,
        depth,
        &mut Vec::new(),
        &mut op,
        &|rebuilt: Container| rebuilt,
    )
}

/// Applies a mutating `op` to every leaf at `depth`, pushing each leaf's
/// return value onto `accumulator`.
///
/// After a successful walk, `accumulator` grew by exactly the number of
/// leaves visited.
pub fn apply_mut_collecting<R, F>(
    container: &mut Container,
    depth: usize,
    accumulator: &mut Vec<R>,
    mut op: F,
) -> Result<()>
where
    F: FnMut(&mut Container) -> Result<R>,
{
    debug!(depth, len = container.len(), "Dispatching mutating operation");
    descend_mut(container, depth, &mut Vec::new(), accumulator, &mut op)
}

/// Runs [`apply_mut_collecting`] into a fresh list.
pub fn collect_mut<R, F>(container: &mut Container, depth: usize, op: F) -> Result<Vec<R>>
where
    F: FnMut(&mut Container) -> Result<R>,
{
    let mut collected = Vec::new();
    apply_mut_collecting(container, depth, &mut collected, op)?;
    Ok(collected)
}

fn descend<T>(
    container: &Container,
    depth: usize,
    path: &mut Vec<Key>,
    op: &mut dyn FnMut(&Container) -> Result<T>,
    rebuild: &dyn Fn(Container) -> T,
) -> Result<T>
where
    T: Into<Value>,
{
    if depth == 0 {
        trace!(path = %render_path(path), "Applying operation to leaf");
        return op(container);
    }

    let mut rebuilt = Container::with_capacity(container.len());
    for (key, child) in container.iter() {
        path.push(key.clone());
        let leaf = child.as_container().ok_or_else(|| not_a_container(path, child))?;
        let result = descend(leaf, depth - 1, path, op, rebuild)?;
        path.pop();
        rebuilt.insert(key.clone(), result.into());
    }
    Ok(rebuild(rebuilt))
}

fn descend_mut<R>(
    container: &mut Container,
    depth: usize,
    path: &mut Vec<Key>,
    accumulator: &mut Vec<R>,
    op: &mut dyn FnMut(&mut Container) -> Result<R>,
) -> Result<()> {
    if depth == 0 {
        trace!(path = %render_path(path), "Applying mutating operation to leaf");
        accumulator.push(op(container)?);
        return Ok(());
    }

    for (key, child) in container.iter_mut() {
        path.push(key.clone());
        let actual = child.type_name();
        let Some(leaf) = child.as_container_mut() else {
            return Err(CollectionError::NotAContainer {
                path: render_path(path),
                actual: actual.to_string(),
            }
            .into());
        };
        descend_mut(leaf, depth - 1, path, accumulator, op)?;
        path.pop();
    }
    Ok(())
}

fn not_a_container(path: &[Key], child: &Value) -> crate::Error {
    CollectionError::NotAContainer {
        path: render_path(path),
        actual: child.type_name().to_string(),
    }
    .into()
}

/// Dotted form of a key path; the root renders as `.`
fn render_path(path: &[Key]) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    path.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
