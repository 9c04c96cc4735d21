//! Single-layer access on a [`Value`].
//!
//! A mapping is addressed by the segment text, a sequence by the segment
//! index. Every other combination is treated as missing.

use dotlens_path::Segment;
use serde_json::{Map, Value};

use alloc::vec::Vec;

/// Returns `true` for the values a path can descend into.
#[inline]
pub(crate) fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// An empty container suitable for addressing `next`.
#[inline]
fn container_for(next: Segment<'_>) -> Value {
    if next.is_index() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Shared single-layer lookup.
pub(crate) fn lookup<'v>(base: &'v Value, segment: Segment<'_>) -> Option<&'v Value> {
    match base {
        Value::Object(map) => map.get(segment.text()),
        Value::Array(items) => items.get(segment.index()?),
        _ => None,
    }
}

/// Mutable single-layer lookup, never creates anything.
pub(crate) fn lookup_mut<'v>(base: &'v mut Value, segment: Segment<'_>) -> Option<&'v mut Value> {
    match base {
        Value::Object(map) => map.get_mut(segment.text()),
        Value::Array(items) => items.get_mut(segment.index()?),
        _ => None,
    }
}

/// Most `null`s a write may append in front of its index.
pub(crate) const MAX_PADDING: usize = 4096;

/// Returns `true` if [`slot_mut`] finds or creates a slot for `segment`.
///
/// A scalar holds nothing, a sequence holds numeric segments up to
/// [`MAX_PADDING`] elements past its end.
pub(crate) fn can_hold(base: &Value, segment: Segment<'_>) -> bool {
    match base {
        Value::Object(_) => true,
        Value::Array(items) => segment
            .index()
            .is_some_and(|index| index < items.len() || index - items.len() <= MAX_PADDING),
        _ => false,
    }
}

/// Returns the slot for `segment`, creating it as `null` when missing.
///
/// Sequences are padded with `null` up to the index. Returns `None`, with
/// `base` untouched, when `base` cannot hold the segment, see [`can_hold`].
pub(crate) fn slot_mut<'v>(base: &'v mut Value, segment: Segment<'_>) -> Option<&'v mut Value> {
    if !can_hold(base, segment) {
        return None;
    }
    match base {
        Value::Object(map) => Some(map.entry(segment.text()).or_insert(Value::Null)),
        Value::Array(items) => {
            let index = segment.index()?;
            if index >= items.len() {
                items.resize(index.checked_add(1)?, Value::Null);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}

/// Makes sure the slot at `segment` is a container, shaped after `next`.
///
/// Existing containers are kept even when their shape does not match `next`.
pub(crate) fn vivify(base: &mut Value, segment: Segment<'_>, next: Segment<'_>) {
    let Some(slot) = slot_mut(base, segment) else {
        return;
    };
    if !is_container(slot) {
        *slot = container_for(next);
        log::trace!(
            "created {} at segment `{}`",
            if next.is_index() { "sequence" } else { "mapping" },
            segment,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_PADDING, can_hold, lookup, lookup_mut, slot_mut, vivify};
    use alloc::format;
    use dotlens_path::DotPath;
    use serde_json::{Value, json};

    #[test]
    fn lookup_by_kind() {
        let value = json!({ "a": [10, 20], "0": "key" });
        let path = DotPath::parse("a.1.0");
        let [a, one, zero] = [path.first(), path.get(1).unwrap(), path.last()];

        let items = lookup(&value, a).unwrap();
        assert_eq!(lookup(items, one), Some(&json!(20)));
        // numeric segments still address mapping keys
        assert_eq!(lookup(&value, zero), Some(&json!("key")));
        // non-numeric segments never address sequences
        assert_eq!(lookup(items, a), None);
        assert_eq!(lookup(&json!(1), a), None);
    }

    #[test]
    fn lookup_mut_does_not_create() {
        let mut value = json!({});
        let path = DotPath::parse("a");
        assert!(lookup_mut(&mut value, path.first()).is_none());
        assert_eq!(value, json!({}));
    }

    #[test]
    fn slot_pads_sequences() {
        let mut value = json!([1]);
        let path = DotPath::parse("3");
        *slot_mut(&mut value, path.first()).unwrap() = json!(4);
        assert_eq!(value, json!([1, null, null, 4]));
    }

    #[test]
    fn slot_padding_limit() {
        let at_limit = format!("{}", 1 + MAX_PADDING);
        let path = DotPath::parse(&at_limit);
        let mut value = json!([1]);
        assert!(slot_mut(&mut value, path.first()).is_some());
        assert_eq!(value.as_array().map(|items| items.len()), Some(MAX_PADDING + 2));

        let past_limit = format!("{}", 2 + MAX_PADDING);
        let path = DotPath::parse(&past_limit);
        let mut value = json!([1]);
        assert!(slot_mut(&mut value, path.first()).is_none());
        assert_eq!(value, json!([1]));
    }

    #[test]
    fn can_hold_matches_slot() {
        let path = DotPath::parse("x.0.5");
        let [x, zero, five] = [path.first(), path.get(1).unwrap(), path.last()];

        assert!(can_hold(&json!({}), x));
        assert!(can_hold(&json!([]), zero));
        assert!(can_hold(&json!([]), five));
        assert!(!can_hold(&json!([]), x));
        assert!(!can_hold(&json!(true), zero));
        assert!(!can_hold(&Value::Null, x));
    }

    #[test]
    fn slot_index_overflow() {
        let path = DotPath::parse("18446744073709551615");
        let mut value = json!([1, 2, 3]);
        assert!(slot_mut(&mut value, path.first()).is_none());
        assert_eq!(value, json!([1, 2, 3]));

        // `vivify` gives up the same way
        let next = DotPath::parse("a");
        vivify(&mut value, path.first(), next.first());
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn slot_rejects_unaddressable() {
        let path = DotPath::parse("x");
        assert!(slot_mut(&mut json!([]), path.first()).is_none());
        assert!(slot_mut(&mut json!("text"), path.first()).is_none());
        assert!(slot_mut(&mut Value::Null, path.first()).is_none());
    }

    #[test]
    fn vivify_by_next_segment() {
        let path = DotPath::parse("d.0.a");
        let [d, zero, a] = [path.first(), path.get(1).unwrap(), path.last()];

        let mut value = json!({ "keep": { "x": 1 }, "scalar": 5 });
        vivify(&mut value, d, zero);
        assert_eq!(value["d"], json!([]));

        vivify(&mut value["d"], zero, a);
        assert_eq!(value["d"], json!([{}]));

        // existing containers are kept, scalars are replaced
        let keep = DotPath::parse("keep");
        let scalar = DotPath::parse("scalar");
        vivify(&mut value, keep.first(), zero);
        vivify(&mut value, scalar.first(), zero);
        assert_eq!(value["keep"], json!({ "x": 1 }));
        assert_eq!(value["scalar"], json!([]));
    }
}
