//! Structural equality.
//!
//! Two flavours share one comparator:
//!
//! - strict (`PartialEq` on [`Value`], [`Map`], [`List`]): exact structure,
//!   backing ignored;
//! - loose ([`deep_equal`]): absence, `Null`, `""` and `false` are mutually
//!   equal at every level, and list properties other than the sentinels are
//!   ignored.
//!
//! Trees are immutable `Arc` graphs and therefore acyclic; identical
//! subtrees short-circuit on pointer identity.

use crate::list::{ERROR_KEY, WARNING_KEY};
use crate::{List, Map, Value};

/// Form-dirty-checking equality.
///
/// Symmetric. Maps compare over the union of their keys, so an entry that
/// is missing on one side equals a blank entry on the other. Lists must
/// have the same length, pairwise-equal slots and equal `_error` and
/// `_warning` properties.
///
/// ```rust
/// use structedit_core::{deep_equal, Value};
///
/// assert!(deep_equal(None, Some(&Value::from(""))));
/// assert!(deep_equal(Some(&Value::Null), Some(&Value::from(false))));
/// assert!(!deep_equal(Some(&Value::from(0)), Some(&Value::from(false))));
/// ```
pub fn deep_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    slots_equal(a, b, true)
}

fn is_blank(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_blank)
}

fn slots_equal(a: Option<&Value>, b: Option<&Value>, loose: bool) -> bool {
    if loose && is_blank(a) && is_blank(b) {
        return true;
    }
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => values_equal(a, b, loose),
        _ => false,
    }
}

pub(crate) fn values_equal(a: &Value, b: &Value, loose: bool) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => floats_equal(*x, *y),
        (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
            integer_equals_float(*i, *f)
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Map(x), Value::Map(y)) => maps_equal(x, y, loose),
        (Value::List(x), Value::List(y)) => lists_equal(x, y, loose),
        _ => false,
    }
}

/// Exact: the float must be integral and within `i64` range.
fn integer_equals_float(i: i64, f: f64) -> bool {
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (LOWER..UPPER).contains(&f) && f as i64 == i
}

/// `NaN` equals `NaN`.
fn floats_equal(x: f64, y: f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}

pub(crate) fn maps_equal(x: &Map, y: &Map, loose: bool) -> bool {
    if x.ptr_eq(y) {
        return true;
    }
    if !loose && x.len() != y.len() {
        return false;
    }
    for (key, value) in x.iter() {
        if !slots_equal(Some(value), y.get(key), loose) {
            return false;
        }
    }
    if loose {
        // Keys only on the right still have to be blank.
        for (key, value) in y.iter() {
            if !x.contains_key(key) && !slots_equal(None, Some(value), loose) {
                return false;
            }
        }
    }
    true
}

pub(crate) fn lists_equal(x: &List, y: &List, loose: bool) -> bool {
    if x.ptr_eq(y) {
        return true;
    }
    if x.len() != y.len() {
        return false;
    }
    if !x.iter().zip(y.iter()).all(|(a, b)| slots_equal(a, b, loose)) {
        return false;
    }
    if loose {
        slots_equal(x.error(), y.error(), loose) && slots_equal(x.warning(), y.warning(), loose)
    } else {
        let count = |list: &List| list.props().count();
        count(x) == count(y)
            && x
                .props()
                .all(|(name, value)| slots_equal(Some(value), y.prop(name), loose))
    }
}
