//! Conversions between Value and serde types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use structedit_core::{List, Map, Representation, Value};
use tracing::trace;

use crate::Result;

/// Convert a Value to a Rust type via serde.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(serde_json::from_value(value_to_json(value))?)
}

/// Convert a Rust type to a Value via serde, building containers in
/// `representation`.
pub fn to_value<T: Serialize>(data: &T, representation: Representation) -> Result<Value> {
    let json = serde_json::to_value(data)?;
    Ok(json_to_value(json, representation))
}

/// Convert our Value to serde_json::Value.
///
/// Holes become `null`. List properties (`_error`, `_warning`) have no JSON
/// array counterpart and are dropped. Non-finite floats become `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| {
                trace!(value = %f, "non-finite float written as null");
                serde_json::Value::Null
            }),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(list) => serde_json::Value::Array(
            list.iter()
                .map(|slot| slot.map(value_to_json).unwrap_or(serde_json::Value::Null))
                .collect(),
        ),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert serde_json::Value to our Value.
pub fn json_to_value(json: serde_json::Value, representation: Representation) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::List(List::from_values(
            representation,
            arr.into_iter().map(|item| json_to_value(item, representation)),
        )),
        serde_json::Value::Object(map) => Value::Map(Map::from_entries(
            representation,
            map.into_iter()
                .map(|(k, v)| (k, json_to_value(v, representation))),
        )),
    }
}
