//! Ordered list-field operations.
//!
//! Each operation reads the list at `field`, splices it and writes it back,
//! so it works the same through either adapter. An absent state is treated
//! as the adapter's empty map.

use crate::{Path, Structure, Value};

fn list_len(structure: &dyn Structure, list: Option<&Value>) -> usize {
    match list {
        Some(Value::List(_)) => structure.size(list),
        _ => 0,
    }
}

fn unchanged(structure: &dyn Structure, state: Option<&Value>) -> Value {
    state.cloned().unwrap_or_else(|| structure.empty())
}

/// Splice the list at `field` and write it back. A splice that leaves the
/// list untouched returns the state unchanged.
pub fn array_splice(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    start: usize,
    delete_count: usize,
    slots: Vec<Option<Value>>,
) -> Value {
    let list = structure.get_in(state, field);
    let updated = structure.splice(list, start, delete_count, slots);
    if list.is_some_and(|list| updated.ptr_eq(list)) {
        return unchanged(structure, state);
    }
    structure.set_in(state, field, updated)
}

/// Append `value`. `None` appends an empty slot.
pub fn array_push(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    value: Option<Value>,
) -> Value {
    let len = list_len(structure, structure.get_in(state, field));
    array_splice(structure, state, field, len, 0, vec![value])
}

/// Remove the last element. An empty or absent list is left alone.
pub fn array_pop(structure: &dyn Structure, state: Option<&Value>, field: &Path) -> Value {
    let len = list_len(structure, structure.get_in(state, field));
    if len == 0 {
        return unchanged(structure, state);
    }
    array_splice(structure, state, field, len - 1, 1, Vec::new())
}

/// Remove the first element. An empty or absent list is left alone.
pub fn array_shift(structure: &dyn Structure, state: Option<&Value>, field: &Path) -> Value {
    if list_len(structure, structure.get_in(state, field)) == 0 {
        return unchanged(structure, state);
    }
    array_splice(structure, state, field, 0, 1, Vec::new())
}

/// Prepend `value`.
pub fn array_unshift(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    value: Option<Value>,
) -> Value {
    array_splice(structure, state, field, 0, 0, vec![value])
}

/// Insert `value` before position `index`.
pub fn array_insert(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    index: usize,
    value: Option<Value>,
) -> Value {
    array_splice(structure, state, field, index, 0, vec![value])
}

/// Remove the element at `index`.
pub fn array_remove(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    index: usize,
) -> Value {
    array_splice(structure, state, field, index, 1, Vec::new())
}

/// Replace the list with the adapter's empty list.
pub fn array_remove_all(structure: &dyn Structure, state: Option<&Value>, field: &Path) -> Value {
    structure.set_in(state, field, structure.empty_list())
}

/// Exchange the elements at `a` and `b`. Holes move like values.
pub fn array_swap(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    a: usize,
    b: usize,
) -> Value {
    let list = structure.get_in(state, field);
    let len = list_len(structure, list);
    if a == b || a >= len || b >= len {
        return unchanged(structure, state);
    }
    let at = |index: usize| list.and_then(Value::as_list).and_then(|l| l.get(index)).cloned();
    let (value_a, value_b) = (at(a), at(b));
    let swapped = structure.splice(list, a, 1, vec![value_b]);
    let swapped = structure.splice(Some(&swapped), b, 1, vec![value_a]);
    structure.set_in(state, field, swapped)
}

/// Move the element at `from` so that it ends up at position `to`.
pub fn array_move(
    structure: &dyn Structure,
    state: Option<&Value>,
    field: &Path,
    from: usize,
    to: usize,
) -> Value {
    let list = structure.get_in(state, field);
    if from == to || from >= list_len(structure, list) {
        return unchanged(structure, state);
    }
    let value = list.and_then(Value::as_list).and_then(|l| l.get(from)).cloned();
    let moved = structure.splice(list, from, 1, Vec::new());
    let moved = structure.splice(Some(&moved), to, 0, vec![value]);
    structure.set_in(state, field, moved)
}
