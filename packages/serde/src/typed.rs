//! Typed access extension trait.

use serde::de::DeserializeOwned;
use serde::Serialize;

use structedit_core::{Path, Structure, Value};

use crate::convert::{from_value, json_to_value, to_value, value_to_json};
use crate::Result;

/// Extension trait for typed reads and writes at a path.
///
/// This trait is automatically implemented for every `Structure`, including
/// `dyn Structure`. Written containers use the adapter's representation.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use structedit_core::{path, PERSISTENT};
/// use structedit_serde::TypedAccess;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Member {
///     name: String,
/// }
///
/// let ada = Member { name: "Ada".to_string() };
/// let state = PERSISTENT.set_from(None, &path!("members[0]"), &ada).unwrap();
/// let read: Option<Member> = PERSISTENT.get_as(Some(&state), &path!("members[0]")).unwrap();
/// assert_eq!(read, Some(ada));
/// ```
pub trait TypedAccess: Structure {
    /// Read the value at `path` and deserialize it into a Rust type.
    fn get_as<T: DeserializeOwned>(&self, state: Option<&Value>, path: &Path) -> Result<Option<T>> {
        let Some(value) = self.get_in(state, path) else {
            return Ok(None);
        };
        Ok(Some(from_value(value)?))
    }

    /// Serialize `data` and write it at `path`.
    fn set_from<T: Serialize>(&self, state: Option<&Value>, path: &Path, data: &T) -> Result<Value> {
        let value = to_value(data, self.representation())?;
        Ok(self.set_in(state, path, value))
    }

    /// Read the value at `path` as a Rust type and delete it.
    ///
    /// Returns the new state alongside what was removed. A missing value
    /// leaves the state untouched.
    fn take_as<T: DeserializeOwned>(&self, state: &Value, path: &Path) -> Result<(Value, Option<T>)> {
        let Some(taken) = self.get_as(Some(state), path)? else {
            return Ok((state.clone(), None));
        };
        let remaining = structedit_core::delete_in(state, path)?;
        Ok((remaining, Some(taken)))
    }

    /// Import a JSON document in this adapter's representation.
    fn from_json(&self, json: serde_json::Value) -> Value {
        json_to_value(json, self.representation())
    }

    /// Export a tree as JSON.
    fn to_json(&self, value: &Value) -> serde_json::Value {
        value_to_json(value)
    }
}

// Blanket implementation for all adapters
impl<S: Structure + ?Sized> TypedAccess for S {}
