//! The `Structure` adapter: one capability interface over both backings.
//!
//! Callers hold a `&dyn Structure` and never need to know which backing it
//! produces. The two implementations differ only in the containers they
//! synthesize ([`Structure::empty`], [`Structure::empty_list`]) and in how
//! they import plain trees ([`Structure::from_plain`]); every edit goes
//! through the same copy-on-write code.

use std::fmt;

use lazy_static::lazy_static;

use crate::edit;
use crate::{List, Map, Path, Representation, Result, Segment, Value};

lazy_static! {
    static ref EMPTY_PLAIN_MAP: Value = Value::Map(Map::new(Representation::Plain));
    static ref EMPTY_PLAIN_LIST: Value = Value::List(List::new(Representation::Plain));
    static ref EMPTY_PERSISTENT_MAP: Value = Value::Map(Map::new(Representation::Persistent));
    static ref EMPTY_PERSISTENT_LIST: Value = Value::List(List::new(Representation::Persistent));
}

/// Path-based editing over one container representation.
///
/// All operations are pure: inputs are never modified and each result is a
/// new tree sharing every untouched subtree with its input.
///
/// # Object Safety
///
/// This trait is object-safe; the adapters are used as `&'static dyn Structure`.
///
/// # Example
///
/// ```rust
/// use structedit_core::{path, Representation, Value};
///
/// let structure = Representation::Persistent.structure();
/// let state = structure.set_in(None, &path!("members[0].name"), Value::from("Ada"));
/// assert_eq!(
///     structure.get_in(Some(&state), &path!("members[0].name")),
///     Some(&Value::from("Ada"))
/// );
/// assert_eq!(structure.size(structure.get_in(Some(&state), &path!("members"))), 1);
/// ```
pub trait Structure: Send + Sync + fmt::Debug {
    /// The backing used for containers this adapter creates.
    fn representation(&self) -> Representation;

    /// Whether list values may carry `_error` / `_warning` properties in
    /// this representation's error trees.
    fn allows_array_errors(&self) -> bool;

    /// Import a tree built from plain containers.
    fn from_plain(&self, value: Value) -> Value;

    /// The canonical empty map.
    fn empty(&self) -> Value;

    /// The canonical empty list.
    fn empty_list(&self) -> Value;

    /// Convert any tree to plain containers.
    fn to_plain(&self, value: &Value) -> Value {
        value.to_representation(Representation::Plain)
    }

    /// Read the value at `path`. See [`crate::get_in`].
    fn get_in<'a>(&self, state: Option<&'a Value>, path: &Path) -> Option<&'a Value> {
        edit::get_in(state, path)
    }

    /// Write `value` at `path`. See [`crate::set_in`].
    fn set_in(&self, state: Option<&Value>, path: &Path, value: Value) -> Value {
        edit::set_in(self.representation(), state, path, value)
    }

    /// Remove the value at `path`. An absent state stays absent.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when a key segment addresses a list.
    fn delete_in(&self, state: Option<&Value>, path: &Path) -> Result<Option<Value>> {
        state.map(|state| edit::delete_in(state, path)).transpose()
    }

    /// Remove the value at `path`, then remove each map ancestor that is
    /// left empty. Climbing stops at the root, at the first ancestor that
    /// still holds something, and at list elements (removing those would
    /// shift their siblings).
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when a key segment addresses a list.
    fn delete_in_with_cleanup(&self, state: Option<&Value>, path: &Path) -> Result<Option<Value>> {
        let Some(mut result) = self.delete_in(state, path)? else {
            return Ok(None);
        };

        let mut current = path.clone();
        loop {
            if matches!(current.last(), Some(Segment::Index(_))) {
                break;
            }
            current = current.parent();
            if current.is_empty() || matches!(current.last(), Some(Segment::Index(_))) {
                break;
            }
            let parent = self.get_in(Some(&result), &current);
            let emptied = matches!(parent, Some(Value::Map(_)))
                && self.deep_equal(parent, Some(&self.empty()));
            if !emptied {
                break;
            }
            result = edit::delete_in(&result, &current)?;
        }
        Ok(Some(result))
    }

    /// Array splice. See [`crate::splice`].
    fn splice(
        &self,
        list: Option<&Value>,
        start: usize,
        delete_count: usize,
        slots: Vec<Option<Value>>,
    ) -> Value {
        edit::splice(self.representation(), list, start, delete_count, slots)
    }

    /// Form-dirty-checking equality. See [`crate::deep_equal`].
    fn deep_equal(&self, a: Option<&Value>, b: Option<&Value>) -> bool {
        crate::deep_equal(a, b)
    }

    /// Whether any element of a container satisfies `predicate`. Map
    /// values and list values (holes skipped) are tested; anything else
    /// yields `false`.
    fn some(&self, state: Option<&Value>, predicate: &mut dyn FnMut(&Value) -> bool) -> bool {
        match state {
            Some(Value::Map(map)) => map.values().any(|value| predicate(value)),
            Some(Value::List(list)) => list.values().any(|value| predicate(value)),
            _ => false,
        }
    }

    /// Number of entries or slots; 0 for absent values and scalars.
    fn size(&self, state: Option<&Value>) -> usize {
        match state {
            Some(Value::Map(map)) => map.len(),
            Some(Value::List(list)) => list.len(),
            _ => 0,
        }
    }

    /// Map keys in sorted order, or list positions as decimal strings.
    fn keys(&self, state: Option<&Value>) -> Vec<String> {
        match state {
            Some(Value::Map(map)) => map.keys(),
            Some(Value::List(list)) => (0..list.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Adapter producing plain containers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

/// Adapter producing persistent containers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Persistent;

/// The plain adapter.
pub static PLAIN: Plain = Plain;

/// The persistent adapter.
pub static PERSISTENT: Persistent = Persistent;

impl Structure for Plain {
    fn representation(&self) -> Representation {
        Representation::Plain
    }

    fn allows_array_errors(&self) -> bool {
        true
    }

    fn from_plain(&self, value: Value) -> Value {
        value
    }

    fn empty(&self) -> Value {
        EMPTY_PLAIN_MAP.clone()
    }

    fn empty_list(&self) -> Value {
        EMPTY_PLAIN_LIST.clone()
    }
}

impl Structure for Persistent {
    fn representation(&self) -> Representation {
        Representation::Persistent
    }

    fn allows_array_errors(&self) -> bool {
        false
    }

    fn from_plain(&self, value: Value) -> Value {
        value.to_representation(Representation::Persistent)
    }

    fn empty(&self) -> Value {
        EMPTY_PERSISTENT_MAP.clone()
    }

    fn empty_list(&self) -> Value {
        EMPTY_PERSISTENT_LIST.clone()
    }
}
