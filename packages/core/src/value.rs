//! The Value type - a tree of scalars, maps and lists.
//!
//! Maps and lists come in two backings (see [`Representation`]). Reads work
//! the same over both; a single tree may even mix them.

use std::collections::BTreeMap;

use crate::{List, Map, Representation};

/// A node in a structured tree.
///
/// There is no "undefined" variant: an absent value is `Option::None`
/// wherever a value may be missing (a lookup result, a list hole).
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Map(Map),
    List(List),
}

impl Value {
    /// Create an empty plain map.
    pub fn map() -> Self {
        Value::Map(Map::new(Representation::Plain))
    }

    /// Create an empty plain list.
    pub fn list() -> Self {
        Value::List(List::new(Representation::Plain))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_container(&self) -> bool {
        self.is_map() || self.is_list()
    }

    /// `Null`, the empty string and `false`: the values that compare equal
    /// to absence under [`crate::deep_equal`].
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null | Value::Bool(false) => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The backing of a container; `None` for scalars.
    pub fn representation(&self) -> Option<Representation> {
        match self {
            Value::Map(map) => Some(map.representation()),
            Value::List(list) => Some(list.representation()),
            _ => None,
        }
    }

    /// Check whether both values are the same container version.
    /// Scalars are never identical in this sense.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Deep-convert every container in this tree to `representation`.
    pub fn to_representation(&self, representation: Representation) -> Value {
        match self {
            Value::Map(map) => Value::Map(map.to_representation(representation)),
            Value::List(list) => Value::List(list.to_representation(representation)),
            scalar => scalar.clone(),
        }
    }

    /// Name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Map(_) => "map",
            Value::List(_) => "list",
        }
    }
}

impl PartialEq for Value {
    /// Strict structural equality, independent of backing. Unlike
    /// [`crate::deep_equal`] there is no blank-equivalence.
    fn eq(&self, other: &Self) -> bool {
        crate::equal::values_equal(self, other, false)
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Value::List(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(Map::from(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(List::from_values(
            Representation::Plain,
            v.into_iter().map(Into::into),
        ))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
