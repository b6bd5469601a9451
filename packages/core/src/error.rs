//! Error types for structural edits.

use thiserror::Error;

/// Errors raised by structural edits.
///
/// Absent paths and out-of-range indices are never errors; the only edit
/// that fails is a delete that addresses a list with a non-numeric segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A list was addressed with a segment that is not a list index.
    #[error("invalid index '{segment}' at position {position}: {message}")]
    InvalidIndex {
        segment: String,
        position: usize,
        message: String,
    },

    /// A representation name did not match any known representation.
    #[error("unknown representation '{name}', expected 'plain' or 'persistent'")]
    UnknownRepresentation { name: String },
}

impl Error {
    pub(crate) fn invalid_index(segment: &str, position: usize, terminal: bool) -> Self {
        let message = if terminal {
            format!("cannot delete non-numeric index from a list, given \"{}\"", segment)
        } else {
            format!("list elements must be accessed with a number, not \"{}\"", segment)
        };
        Error::InvalidIndex {
            segment: segment.to_string(),
            position,
            message,
        }
    }
}

/// Result type alias for structural edits.
pub type Result<T> = std::result::Result<T, Error>;
