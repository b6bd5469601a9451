//! Path-based reads and copy-on-write edits.
//!
//! These functions work on any mix of backings. Existing containers keep
//! their backing when copied; containers synthesized along a new path use
//! the `representation` passed in. Only the spine, the nodes on the path,
//! is copied; every other subtree is shared with the input.

use tracing::{debug, trace};

use crate::{Error, List, Map, Path, Representation, Result, Segment, Value};

/// Read the value at `path`.
///
/// Returns `None` as soon as a node on the way is absent or is a scalar. On
/// a list, a key segment reads the list property of that name.
pub fn get_in<'a>(state: Option<&'a Value>, path: &Path) -> Option<&'a Value> {
    let mut current = state?;
    for segment in path.iter() {
        current = match current {
            Value::Map(map) => map.get(&segment.to_key())?,
            Value::List(list) => match segment {
                Segment::Index(index) => list.get(*index)?,
                Segment::Key(name) => list.prop(name)?,
            },
            _ => return None,
        };
    }
    Some(current)
}

/// Return a copy of `state` with `value` written at `path`.
///
/// Missing or scalar nodes on the way are replaced by fresh containers: a
/// list when the segment addressing into them is an index, a map
/// otherwise. Writing past the end of a list pads it with holes. The root
/// path replaces the whole state.
pub fn set_in(
    representation: Representation,
    state: Option<&Value>,
    path: &Path,
    value: Value,
) -> Value {
    set_at(representation, state, &path.segments, value)
}

fn set_at(
    representation: Representation,
    node: Option<&Value>,
    segments: &[Segment],
    value: Value,
) -> Value {
    let Some((first, rest)) = segments.split_first() else {
        return value;
    };

    match node {
        Some(Value::Map(map)) => {
            let key = first.to_key();
            let child = set_at(representation, map.get(&key), rest, value);
            Value::Map(map.insert(key.into_owned(), child))
        }
        Some(Value::List(list)) => match first {
            Segment::Index(index) => {
                let child = set_at(representation, list.get(*index), rest, value);
                Value::List(list.set(*index, Some(child)))
            }
            Segment::Key(name) => {
                let child = set_at(representation, list.prop(name), rest, value);
                Value::List(list.with_prop(name.as_str(), child))
            }
        },
        _ => {
            let fresh = match first {
                Segment::Index(_) => Value::List(List::new(representation)),
                Segment::Key(_) => Value::Map(Map::new(representation)),
            };
            trace!(
                segment = %first,
                kind = fresh.kind(),
                %representation,
                "synthesizing container"
            );
            set_at(representation, Some(&fresh), segments, value)
        }
    }
}

/// Return a copy of `state` without the value at `path`.
///
/// Deleting a list slot shifts the later slots down; a hole inside the list
/// is a slot too and is removed the same way. When the path runs off the
/// tree (a missing key, an index past the end, a scalar on the way) the
/// input is returned unchanged, preserving its identity. The root path is
/// never deleted.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] when a key segment addresses a list.
pub fn delete_in(state: &Value, path: &Path) -> Result<Value> {
    match delete_at(state, &path.segments, 0)? {
        Some(updated) => Ok(updated),
        None => {
            trace!(%path, "nothing to delete");
            Ok(state.clone())
        }
    }
}

/// `Ok(None)` means the subtree is unchanged.
fn delete_at(node: &Value, segments: &[Segment], position: usize) -> Result<Option<Value>> {
    let Some((first, rest)) = segments.split_first() else {
        return Ok(None);
    };

    match node {
        Value::Map(map) => {
            let key = first.to_key();
            let Some(child) = map.get(&key) else {
                return Ok(None);
            };
            if rest.is_empty() {
                return Ok(Some(Value::Map(map.remove(&key))));
            }
            let updated = delete_at(child, rest, position + 1)?;
            Ok(updated.map(|child| Value::Map(map.insert(key.into_owned(), child))))
        }
        Value::List(list) => {
            let index = match first {
                Segment::Index(index) => *index,
                Segment::Key(name) => {
                    let err = Error::invalid_index(name, position, rest.is_empty());
                    debug!(error = %err, "rejecting delete through list");
                    return Err(err);
                }
            };
            if index >= list.len() {
                return Ok(None);
            }
            if rest.is_empty() {
                return Ok(Some(Value::List(list.remove(index))));
            }
            let Some(child) = list.get(index) else {
                return Ok(None);
            };
            let updated = delete_at(child, rest, position + 1)?;
            Ok(updated.map(|child| Value::List(list.set(index, Some(child)))))
        }
        _ => Ok(None),
    }
}

/// Array splice over an optional list.
///
/// Removes up to `delete_count` slots from `start` and inserts `slots`
/// there. An absent or non-list input counts as an empty list of the given
/// representation. When `start` is at or past the end, a removal is a no-op
/// and an insertion lands at `start` with holes filling the gap. A splice
/// that neither removes nor inserts returns the input unchanged.
pub fn splice(
    representation: Representation,
    list: Option<&Value>,
    start: usize,
    delete_count: usize,
    slots: Vec<Option<Value>>,
) -> Value {
    let list = match list {
        Some(Value::List(list)) => list.clone(),
        _ => List::new(representation),
    };

    if start >= list.len() && delete_count > 0 {
        trace!(start, len = list.len(), "removal past end of list");
        return Value::List(list);
    }
    if delete_count == 0 && slots.is_empty() {
        return Value::List(list);
    }
    Value::List(list.splice(start, delete_count, slots))
}
