//! Provide multi-layer `get` and `set` over a [`Value`].

use dotlens_path::DotPath;
use serde_json::Value;

use crate::error::{InvalidPath, Operation};
use crate::options::AccessOptions;
use crate::step::{MAX_PADDING, can_hold, is_container, lookup, lookup_mut, slot_mut, vivify};

/// Reports an unresolvable segment according to `options.throw_errors`.
fn reject<T>(
    options: &AccessOptions,
    operation: Operation,
    path: &DotPath<'_>,
    position: usize,
) -> Result<Option<T>, InvalidPath> {
    let err = InvalidPath::new(operation, path, position);
    if options.throw_errors {
        Err(err)
    } else {
        log::debug!("{err}");
        Ok(None)
    }
}

/// Finds the segment a write would fail on after creating containers.
///
/// Once the walk leaves the existing tree every remaining segment lands in a
/// fresh container. Fresh mappings hold any key; a fresh sequence only holds
/// indices up to [`MAX_PADDING`].
fn fails_after_vivify(target: &Value, path: &DotPath<'_>) -> Option<usize> {
    let (_, intermediate) = path.split_last();

    let mut it = target;
    for segment in intermediate {
        match lookup(it, segment) {
            Some(value) if is_container(value) => it = value,
            _ if can_hold(it, segment) => {
                return path
                    .segments()
                    .skip(segment.position() + 1)
                    .find(|next| next.index().is_some_and(|index| index > MAX_PADDING))
                    .map(|next| next.position());
            }
            // fails before anything is written
            _ => return None,
        }
    }
    None
}

/// Resolves `path` in `target`.
///
/// Returns `Ok(None)` instead of an error when `options.throw_errors` is
/// off. Reading never modifies `target`.
///
/// # Examples
///
/// ```
/// use dotlens_access::{AccessOptions, get};
/// use serde_json::json;
///
/// let target = json!({ "d": [{ "a": "test" }] });
/// let options = AccessOptions::default();
///
/// assert_eq!(get(&target, "d.0.a", &options).unwrap(), Some(&json!("test")));
/// assert!(get(&target, "d.1.a", &options).is_err());
///
/// let quiet = options.throw_errors(false);
/// assert_eq!(get(&target, "d.1.a", &quiet).unwrap(), None);
/// ```
pub fn get<'v, 'p>(
    target: &'v Value,
    path: impl Into<DotPath<'p>>,
    options: &AccessOptions,
) -> Result<Option<&'v Value>, InvalidPath> {
    let path = path.into();

    let mut it = target;
    for segment in path.segments() {
        it = match lookup(it, segment) {
            Some(value) => value,
            None => return reject(options, Operation::Get, &path, segment.position()),
        };
    }
    Ok(Some(it))
}

/// Assigns `value` at `path` in `target` and returns the stored value.
///
/// Intermediate containers are created when `options.is_expandable` is on:
/// a sequence when the following segment is numeric, a mapping otherwise.
/// Existing containers are traversed as they are. Writing past the end of a
/// sequence pads it with `null`, by at most 4096 elements; a larger index does
/// not resolve.
///
/// With `options.is_immutable` nothing is written and `Ok(None)` is returned.
///
/// Nothing is written when the path fails: containers are only created once
/// the path leaves the existing tree, and a fresh container always fits the
/// segment that follows it.
///
/// # Examples
///
/// ```
/// use dotlens_access::{AccessOptions, set};
/// use serde_json::json;
///
/// let mut target = json!({ "a": 1, "b": 2 });
/// let options = AccessOptions::default();
///
/// set(&mut target, "c.cA", json!(true), &options).unwrap();
/// set(&mut target, "d.0.a", json!("test"), &options).unwrap();
///
/// assert_eq!(
///     target,
///     json!({ "a": 1, "b": 2, "c": { "cA": true }, "d": [{ "a": "test" }] })
/// );
/// ```
pub fn set<'v, 'p>(
    target: &'v mut Value,
    path: impl Into<DotPath<'p>>,
    value: Value,
    options: &AccessOptions,
) -> Result<Option<&'v Value>, InvalidPath> {
    let path = path.into();

    if options.is_immutable {
        log::debug!("skipped write to `{path}`: accessor is immutable");
        return Ok(None);
    }

    if options.vivifies()
        && let Some(position) = fails_after_vivify(&*target, &path)
    {
        return reject(options, Operation::Set, &path, position);
    }

    let (terminal, intermediate) = path.split_last();

    let mut it = target;
    for segment in intermediate {
        if options.vivifies() {
            // `intermediate` stops before `terminal`, so the next segment exists.
            if let Some(next) = path.get(segment.position() + 1) {
                vivify(it, segment, next);
            }
        }
        it = match lookup_mut(it, segment) {
            Some(value) => value,
            None => return reject(options, Operation::Set, &path, segment.position()),
        };
    }

    if !options.is_expandable && lookup(it, terminal).is_none() {
        return reject(options, Operation::Set, &path, terminal.position());
    }

    match slot_mut(it, terminal) {
        Some(slot) => {
            *slot = value;
            Ok(Some(&*slot))
        }
        None => reject(options, Operation::Set, &path, terminal.position()),
    }
}
