//! String metadata attached to graph nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered map of string keys to string values.
///
/// Nodes in a hierarchy usually carry only a handful of entries (an external
/// accession, a display name), so a `BTreeMap` keeps iteration order stable
/// without hashing overhead.
///
/// # Example
///
/// ```
/// use hierograph_core::Metadata;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("accession", "EC 1.-.-.-");
/// metadata.insert("name", "Oxidoreductases");
///
/// assert_eq!(metadata.get("name"), Some("Oxidoreductases"));
/// assert_eq!(metadata.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Create an empty metadata map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or overwrite a value, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
