//! Generic load-once keyed resource store.
//!
//! [`ResourceStore`] implements the caching discipline shared by the texture
//! and font caches: load once, reference by key, evict explicitly. The store
//! owns its decoded values; accessors hand out borrows whose lifetime is tied
//! to the store, never independently-owned copies.
//!
//! Decode primitives are supplied per call as closures, so the discipline is
//! testable without a graphics context.

use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::resource::error::ResourceError;

/// Owning map of cache keys to decoded resources.
///
/// Guarantees: keys are unique, at most one decoded value exists per key at
/// any time, and the decode closure runs at most once per key between a load
/// and the next unload.
pub struct ResourceStore<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K, V> Default for ResourceStore<K, V>
where
    K: Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ResourceStore<K, V>
where
    K: Eq + Hash + Display,
{
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Return the cached value for `key`, decoding it first if absent.
    ///
    /// A cached key never re-decodes. On decode failure the store is left
    /// unchanged, so a later call retries.
    pub fn load_with<F>(&mut self, key: K, decode: F) -> Result<&V, ResourceError>
    where
        F: FnOnce() -> Result<V, ResourceError>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let value = decode()?;
                debug!("loaded and cached resource '{}'", entry.key());
                Ok(entry.insert(value))
            }
        }
    }

    /// Fetch-or-load: like [`load_with`](Self::load_with), but a miss is an
    /// observable event logged at warn. This read may perform I/O.
    pub fn get_with<F>(&mut self, key: K, decode: F) -> Result<&V, ResourceError>
    where
        F: FnOnce() -> Result<V, ResourceError>,
    {
        if !self.entries.contains_key(&key) {
            warn!("resource '{}' not in cache, trying to load", key);
        }
        self.load_with(key, decode)
    }

    /// Register an externally created value under `key`, replacing (and
    /// releasing) any previous entry for that key.
    pub fn insert(&mut self, key: K, value: V) {
        if self.entries.contains_key(&key) {
            warn!("replacing cached resource '{}'", key);
        }
        self.entries.insert(key, value);
    }

    /// Whether `key` currently has a decoded value.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove and release one entry. Unloading an absent key is a warning,
    /// never an error.
    pub fn unload(&mut self, key: &K) {
        if self.entries.remove(key).is_some() {
            debug!("unloaded resource '{}'", key);
        } else {
            warn!("attempted to unload non-existent resource '{}'", key);
        }
    }

    /// Release all entries. Safe when empty.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!("clearing all {} cached resources", self.entries.len());
            self.entries.clear();
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_fail() -> Result<u32, ResourceError> {
        Err(ResourceError::DecodeFailed {
            path: "missing.png".to_string(),
            reason: "no such file".to_string(),
        })
    }

    #[test]
    fn test_load_decodes_once() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        let mut calls = 0;
        let value = *store
            .load_with("a.png".to_string(), || {
                calls += 1;
                Ok(7)
            })
            .unwrap();
        assert_eq!(value, 7);
        // Second load must not invoke the decode closure again.
        let value = *store
            .load_with("a.png".to_string(), || {
                calls += 1;
                Ok(99)
            })
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        store.load_with("a.png".to_string(), || Ok(1)).unwrap();
        store.load_with("b.png".to_string(), || Ok(2)).unwrap();
        assert_eq!(store.len(), 2);

        store.unload(&"a.png".to_string());
        assert!(!store.contains(&"a.png".to_string()));
        assert!(store.contains(&"b.png".to_string()));
    }

    #[test]
    fn test_failed_decode_leaves_store_unchanged() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        let result = store.get_with("missing.png".to_string(), decode_fail);
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_later_load_retries_after_failure() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        assert!(store.load_with("a.png".to_string(), decode_fail).is_err());
        let value = *store.load_with("a.png".to_string(), || Ok(42)).unwrap();
        assert_eq!(value, 42);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_falls_back_to_load() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        let value = *store.get_with("a.png".to_string(), || Ok(5)).unwrap();
        assert_eq!(value, 5);
        // Now cached; a panicking decoder proves get does not re-decode.
        let value = *store
            .get_with("a.png".to_string(), || panic!("must not decode"))
            .unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_unload_missing_key_is_not_an_error() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        store.unload(&"nope.png".to_string());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        store.load_with("a.png".to_string(), || Ok(1)).unwrap();
        store.load_with("b.png".to_string(), || Ok(2)).unwrap();
        store.clear();
        assert!(store.is_empty());
        // Clearing an empty store is a no-op.
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_registers_external_value() {
        let mut store: ResourceStore<String, u32> = ResourceStore::new();
        store.insert("gen/level".to_string(), 11);
        let value = *store
            .get_with("gen/level".to_string(), || panic!("must not decode"))
            .unwrap();
        assert_eq!(value, 11);
    }
}
