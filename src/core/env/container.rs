// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Insertion-ordered environment mapping.
//!
//! # Architecture
//!
//! ```text
//! EnvMap
//! entries: Vec<(String, Option<String>)>   insertion order
//! index:   BTreeMap<String, usize>         key -> slot
//! ```
//!
//! A `None` value is a key that is present but not set. Replacing the value of
//! an existing key keeps its original position.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// A mutable, insertion-ordered mapping from variable name to optional value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: Vec<(String, Option<String>)>,
    index: BTreeMap<String, usize>,
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Creates a mapping where every variable is set.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        vars.into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect()
    }

    /// Returns the value of a set variable.
    ///
    /// Returns `None` both for missing keys and for keys that are not set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .and_then(|&i| self.entries[i].1.as_deref())
    }

    /// Returns true if the key is present, whether or not it is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns true if the key is present with a value.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets a variable, returning the previous value if it was set.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.insert(key.into(), Some(value.into())).flatten()
    }

    /// Marks a variable as present but not set.
    pub fn unset(&mut self, key: impl Into<String>) -> &mut Self {
        self.insert(key.into(), None);
        self
    }

    /// Removes a variable entirely, returning its value if it was set.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for i in self.index.values_mut() {
            if *i > slot {
                *i -= 1;
            }
        }
        value
    }

    fn insert(&mut self, key: String, value: Option<String>) -> Option<Option<String>> {
        if let Some(&slot) = self.index.get(&key) {
            Some(std::mem::replace(&mut self.entries[slot].1, value))
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
            None
        }
    }

    /// Returns an iterator over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Returns an iterator over set variables only, in insertion order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Returns an owned copy of all entries, detached from later mutation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Option<String>)> {
        self.entries.clone()
    }

    /// Returns all set variables as a sorted map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.defined()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for EnvMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.insert(key.into(), value.map(Into::into));
        }
        env
    }
}

impl Serialize for EnvMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
