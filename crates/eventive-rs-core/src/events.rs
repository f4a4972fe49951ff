//! Supported-event set owned by each emitter.

use eventive_rs_config::EventNames;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Set of event names an emitter accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSet {
    names: BTreeSet<String>,
}

impl EventSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, returning true if it was not already present.
    ///
    /// The empty name is never a member.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        !name.is_empty() && self.names.insert(name)
    }

    /// Membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Name-to-name view, each name mapped to itself.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.names
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for EventSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut events = Self::new();
        events.extend(iter);
        events
    }
}

impl<S: Into<String>> Extend<S> for EventSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for EventSet {
    fn from(names: [S; N]) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> From<Vec<S>> for EventSet {
    fn from(names: Vec<S>) -> Self {
        names.into_iter().collect()
    }
}

impl<V> From<BTreeMap<String, V>> for EventSet {
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_keys().collect()
    }
}

impl<V> From<HashMap<String, V>> for EventSet {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_keys().collect()
    }
}

impl From<&EventNames> for EventSet {
    fn from(names: &EventNames) -> Self {
        names.names().into_iter().collect()
    }
}
