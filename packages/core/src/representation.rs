//! Backing representations for containers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::structure::{Structure, PERSISTENT, PLAIN};
use crate::Error;

/// Which backing a container uses.
///
/// - `Plain`: copy-on-write `Arc<BTreeMap>` / `Arc<Vec>`. Every edit copies
///   each node on the spine one level deep.
/// - `Persistent`: `rpds` hash trie maps and vectors. Edits share structure
///   inside each node as well as across untouched subtrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    #[default]
    Plain,
    #[serde(alias = "immutable")]
    Persistent,
}

impl Representation {
    /// The adapter bound to this representation.
    pub fn structure(self) -> &'static dyn Structure {
        match self {
            Representation::Plain => &PLAIN,
            Representation::Persistent => &PERSISTENT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Representation::Plain => "plain",
            Representation::Persistent => "persistent",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Representation::Plain),
            "persistent" | "immutable" => Ok(Representation::Persistent),
            _ => Err(Error::UnknownRepresentation {
                name: s.to_string(),
            }),
        }
    }
}
