use std::collections::BTreeMap;

use crate::PropertyStore;

/// In-memory property table ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    props: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the store holds no properties
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or replace a property directly, bypassing override semantics.
    ///
    /// Used when seeding a snapshot; policy code goes through
    /// [`crate::property_override`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.insert(key.into(), value.into());
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.props.get(key).cloned()
    }

    fn update(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.props.get_mut(key) {
            value.clone_into(slot);
        }
    }

    fn add(&mut self, key: &str, value: &str) {
        self.props.insert(key.to_string(), value.to_string());
    }

    fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One property that differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Property key
    pub key: String,
    /// Value in the earlier snapshot, `None` if the key was absent
    pub before: Option<String>,
    /// Value in the later snapshot, `None` if the key was removed
    pub after: Option<String>,
}

/// Every key whose value differs between `before` and `after`, in key order.
pub fn changes(before: &MemoryStore, after: &MemoryStore) -> Vec<Change> {
    let mut keys: Vec<&String> = before.props.keys().chain(after.props.keys()).collect();
    keys.sort();
    keys.dedup();

    keys.into_iter()
        .filter_map(|key| {
            let old = before.props.get(key);
            let new = after.props.get(key);
            (old != new).then(|| Change {
                key: key.clone(),
                before: old.cloned(),
                after: new.cloned(),
            })
        })
        .collect()
}
