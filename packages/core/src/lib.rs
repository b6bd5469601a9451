//! structedit core: path-based structural editing
//!
//! This crate reads and edits nested map/list trees addressed by field
//! paths such as `a.b[0].c`:
//! - `Path`: parsed dotted/bracketed field path
//! - `Value`: scalars, `Map` and `List` containers
//! - `Representation`: plain (copy-on-write std collections) or persistent
//!   (`rpds` tries) container backing
//! - `Structure`: the adapter trait callers program against, with the
//!   `PLAIN` and `PERSISTENT` instances
//!
//! Every edit is pure: it returns a new tree and shares all untouched
//! subtrees with its input.
//!
//! # Example
//!
//! ```rust
//! use structedit_core::{path, Representation, Structure, Value};
//!
//! fn rename_first(structure: &dyn Structure, state: &Value) -> Value {
//!     structure.set_in(Some(state), &path!("members[0].name"), Value::from("Grace"))
//! }
//!
//! let structure = Representation::Plain.structure();
//! let state = structure.set_in(None, &path!("members[0].name"), Value::from("Ada"));
//! let renamed = rename_first(structure, &state);
//! assert!(!structure.deep_equal(Some(&state), Some(&renamed)));
//! ```

mod edit;
mod equal;
mod error;
pub mod field_array;
pub mod list;
mod map;
mod path;
mod representation;
mod structure;
mod value;

pub use edit::{delete_in, get_in, set_in, splice};
pub use equal::deep_equal;
pub use error::{Error, Result};
pub use list::{List, ERROR_KEY, WARNING_KEY};
pub use map::Map;
pub use path::{Path, Segment, MAX_INDEX};
pub use representation::Representation;
pub use structure::{Persistent, Plain, Structure, PERSISTENT, PLAIN};
pub use value::Value;
