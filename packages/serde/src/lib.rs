//! Serde Integration for structedit
//!
//! This layer connects structedit trees to serde. It adds:
//! - `TypedAccess`: read and write Rust types at a path through any adapter
//! - Value <-> `serde_json::Value` conversions
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use structedit_core::{path, Representation, Structure};
//! use structedit_serde::TypedAccess;
//!
//! let structure = Representation::Persistent.structure();
//! let state = structure.from_json(json!({"members": ["a", "b"]}));
//! let state = structure.splice(
//!     structure.get_in(Some(&state), &path!("members")),
//!     0,
//!     1,
//!     Vec::new(),
//! );
//! assert_eq!(structure.to_json(&state), json!(["b"]));
//! ```

mod convert;
mod error;
mod typed;

pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use error::{Error, Result};
pub use typed::TypedAccess;

// Re-export core types for convenience
pub use structedit_core::{Path, Representation, Structure, Value};
