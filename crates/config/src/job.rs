use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

/// Immutable, flat string-keyed job configuration.
///
/// Every job-level setting is addressed by a dotted key such as
/// `stores.session-state.factory`. Typed views over key families live in
/// their own modules (see [`crate::StorageConfig`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    entries: HashMap<String, String>,
}

impl JobConfig {
    /// Create a configuration from raw key/value entries
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a raw value, falling back to a default
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all entries
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for JobConfig {
    fn from(entries: HashMap<String, String>) -> Self {
        Self::new(entries)
    }
}

impl<K, V> FromIterator<(K, V)> for JobConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
