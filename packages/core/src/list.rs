//! List containers with a plain or persistent backing.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rpds::VectorSync;

use crate::{Representation, Value, MAX_INDEX};

/// Property carrying a list-level error message.
pub const ERROR_KEY: &str = "_error";
/// Property carrying a list-level warning message.
pub const WARNING_KEY: &str = "_warning";

#[derive(Clone)]
enum Items {
    Plain(Arc<Vec<Option<Value>>>),
    Persistent(Arc<VectorSync<Option<Value>>>),
}

/// Dense, ordered sequence of slots.
///
/// A slot is `None` when nothing was ever written there (a hole), which
/// happens when a write lands past the end of the list. Besides its slots a
/// list carries string-keyed properties; [`ERROR_KEY`] and [`WARNING_KEY`]
/// hold validation messages for the list as a whole.
#[derive(Clone)]
pub struct List {
    items: Items,
    props: Option<Arc<BTreeMap<String, Value>>>,
}

impl List {
    /// Create an empty list with the given backing.
    pub fn new(representation: Representation) -> Self {
        let items = match representation {
            Representation::Plain => Items::Plain(Arc::new(Vec::new())),
            Representation::Persistent => Items::Persistent(Arc::new(VectorSync::new_sync())),
        };
        List { items, props: None }
    }

    /// Build a list from slots.
    pub fn from_slots<I>(representation: Representation, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        let items = match representation {
            Representation::Plain => Items::Plain(Arc::new(slots.into_iter().collect())),
            Representation::Persistent => {
                let mut vector = VectorSync::new_sync();
                for slot in slots {
                    vector.push_back_mut(slot);
                }
                Items::Persistent(Arc::new(vector))
            }
        };
        List { items, props: None }
    }

    /// Build a list without holes.
    pub fn from_values<I>(representation: Representation, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_slots(representation, values.into_iter().map(Some))
    }

    pub fn representation(&self) -> Representation {
        match self.items {
            Items::Plain(_) => Representation::Plain,
            Items::Persistent(_) => Representation::Persistent,
        }
    }

    pub fn len(&self) -> usize {
        match &self.items {
            Items::Plain(items) => items.len(),
            Items::Persistent(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at `index`. Holes and out-of-range indices are `None`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match &self.items {
            Items::Plain(items) => items.get(index)?.as_ref(),
            Items::Persistent(items) => items.get(index)?.as_ref(),
        }
    }

    /// Iterate over slots in order, holes included.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Option<&Value>> + '_> {
        match &self.items {
            Items::Plain(items) => Box::new(items.iter().map(Option::as_ref)),
            Items::Persistent(items) => Box::new(items.iter().map(Option::as_ref)),
        }
    }

    /// Iterate over the values, skipping holes.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.iter().flatten()
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.as_ref()?.get(name)
    }

    pub fn props(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.props.iter().flat_map(|props| props.iter())
    }

    pub fn error(&self) -> Option<&Value> {
        self.prop(ERROR_KEY)
    }

    pub fn warning(&self) -> Option<&Value> {
        self.prop(WARNING_KEY)
    }

    /// Return a copy with property `name` set.
    #[must_use]
    pub fn with_prop(&self, name: impl Into<String>, value: Value) -> List {
        let mut props = self.props.clone().unwrap_or_default();
        Arc::make_mut(&mut props).insert(name.into(), value);
        List {
            items: self.items.clone(),
            props: Some(props),
        }
    }

    /// Return a copy with slot `index` replaced, extending with holes when
    /// `index` is past the end. An index at or beyond [`MAX_INDEX`] returns
    /// `self` unchanged.
    #[must_use]
    pub fn set(&self, index: usize, slot: Option<Value>) -> List {
        if index >= MAX_INDEX {
            return self.clone();
        }
        let min_len = index + 1;
        let items = match &self.items {
            Items::Plain(items) => {
                let mut items = Arc::clone(items);
                let slots = Arc::make_mut(&mut items);
                if slots.len() < min_len {
                    slots.resize(min_len, None);
                }
                slots[index] = slot;
                Items::Plain(items)
            }
            Items::Persistent(items) => {
                let mut vector = (**items).clone();
                if index < vector.len() {
                    vector.set_mut(index, slot);
                } else {
                    while vector.len() < index {
                        vector.push_back_mut(None);
                    }
                    vector.push_back_mut(slot);
                }
                Items::Persistent(Arc::new(vector))
            }
        };
        List {
            items,
            props: self.props.clone(),
        }
    }

    /// Return a copy with slot `index` removed and later slots shifted down.
    /// An out-of-range index returns `self` unchanged.
    #[must_use]
    pub fn remove(&self, index: usize) -> List {
        if index >= self.len() {
            return self.clone();
        }
        self.splice(index, 1, Vec::new())
    }

    /// Return a copy with `delete_count` slots starting at `start` replaced
    /// by `slots`. A `start` past the end pads the gap with holes; one past
    /// [`MAX_INDEX`] returns `self` unchanged.
    #[must_use]
    pub fn splice(&self, start: usize, delete_count: usize, slots: Vec<Option<Value>>) -> List {
        if start > MAX_INDEX {
            return self.clone();
        }
        let items = match &self.items {
            Items::Plain(items) => {
                let mut items = Arc::clone(items);
                let current = Arc::make_mut(&mut items);
                if start > current.len() {
                    current.resize(start, None);
                }
                let end = start.saturating_add(delete_count).min(current.len());
                current.splice(start..end, slots);
                Items::Plain(items)
            }
            Items::Persistent(items) => {
                // Keep the shared prefix, rebuild only from `start` onwards.
                let tail: Vec<Option<Value>> = items
                    .iter()
                    .skip(start.saturating_add(delete_count))
                    .cloned()
                    .collect();
                let mut vector = (**items).clone();
                while vector.len() > start {
                    vector.drop_last_mut();
                }
                while vector.len() < start {
                    vector.push_back_mut(None);
                }
                for slot in slots.into_iter().chain(tail) {
                    vector.push_back_mut(slot);
                }
                Items::Persistent(Arc::new(vector))
            }
        };
        List {
            items,
            props: self.props.clone(),
        }
    }

    /// Check whether both lists are the same version.
    pub fn ptr_eq(&self, other: &List) -> bool {
        let same_items = match (&self.items, &other.items) {
            (Items::Plain(a), Items::Plain(b)) => Arc::ptr_eq(a, b),
            (Items::Persistent(a), Items::Persistent(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        let same_props = match (&self.props, &other.props) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_items && same_props
    }

    /// Deep-convert this list and its descendants to `representation`.
    /// Properties are carried over.
    pub fn to_representation(&self, representation: Representation) -> List {
        let mut list = List::from_slots(
            representation,
            self.iter()
                .map(|slot| slot.map(|value| value.to_representation(representation))),
        );
        list.props = self.props.as_ref().map(|props| {
            Arc::new(
                props
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_representation(representation)))
                    .collect(),
            )
        });
        list
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        list.entries(self.iter());
        if let Some(props) = &self.props {
            list.entry(props);
        }
        list.finish()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::lists_equal(self, other, false)
    }
}
