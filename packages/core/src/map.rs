//! Map containers with a plain or persistent backing.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rpds::HashTrieMapSync;

use crate::{Representation, Value};

/// String-keyed container.
///
/// Every edit returns a new map and leaves `self` untouched. The plain
/// backing copies its entry table on write; the persistent backing shares
/// trie nodes with the previous version. Key order carries no meaning.
#[derive(Clone)]
pub enum Map {
    Plain(Arc<BTreeMap<String, Value>>),
    /// The outer `Arc` gives each version a root identity for [`Map::ptr_eq`].
    Persistent(Arc<HashTrieMapSync<String, Value>>),
}

impl Map {
    /// Create an empty map with the given backing.
    pub fn new(representation: Representation) -> Self {
        match representation {
            Representation::Plain => Map::Plain(Arc::new(BTreeMap::new())),
            Representation::Persistent => Map::Persistent(Arc::new(HashTrieMapSync::new_sync())),
        }
    }

    /// Build a map from entries.
    pub fn from_entries<I>(representation: Representation, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        match representation {
            Representation::Plain => Map::Plain(Arc::new(entries.into_iter().collect())),
            Representation::Persistent => {
                let mut map = HashTrieMapSync::new_sync();
                for (key, value) in entries {
                    map.insert_mut(key, value);
                }
                Map::Persistent(Arc::new(map))
            }
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            Map::Plain(_) => Representation::Plain,
            Map::Persistent(_) => Representation::Persistent,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Map::Plain(entries) => entries.get(key),
            Map::Persistent(entries) => entries.get(key),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        match self {
            Map::Plain(entries) => entries.len(),
            Map::Persistent(entries) => entries.size(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over entries. Plain maps yield keys in sorted order;
    /// persistent maps yield them in hash order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&String, &Value)> + '_> {
        match self {
            Map::Plain(entries) => Box::new(entries.iter()),
            Map::Persistent(entries) => Box::new(entries.iter()),
        }
    }

    /// Keys in sorted order, whatever the backing.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.iter().map(|(key, _)| key.clone()).collect();
        keys.sort();
        keys
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.iter().map(|(_, value)| value)
    }

    /// Return a copy with `key` set to `value`.
    #[must_use]
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Map {
        match self {
            Map::Plain(entries) => {
                let mut entries = Arc::clone(entries);
                Arc::make_mut(&mut entries).insert(key.into(), value);
                Map::Plain(entries)
            }
            Map::Persistent(entries) => Map::Persistent(Arc::new(entries.insert(key.into(), value))),
        }
    }

    /// Return a copy without `key`. An absent key returns `self` unchanged.
    #[must_use]
    pub fn remove(&self, key: &str) -> Map {
        if !self.contains_key(key) {
            return self.clone();
        }
        match self {
            Map::Plain(entries) => {
                let mut entries = Arc::clone(entries);
                Arc::make_mut(&mut entries).remove(key);
                Map::Plain(entries)
            }
            Map::Persistent(entries) => Map::Persistent(Arc::new(entries.remove(key))),
        }
    }

    /// Check whether both maps are the same version.
    pub fn ptr_eq(&self, other: &Map) -> bool {
        match (self, other) {
            (Map::Plain(a), Map::Plain(b)) => Arc::ptr_eq(a, b),
            (Map::Persistent(a), Map::Persistent(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Deep-convert this map and its descendants to `representation`.
    pub fn to_representation(&self, representation: Representation) -> Map {
        Map::from_entries(
            representation,
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_representation(representation))),
        )
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&String, &Value)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_map().entries(entries).finish()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::maps_equal(self, other, false)
    }
}

impl From<BTreeMap<String, Value>> for Map {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Map::Plain(Arc::new(entries))
    }
}
