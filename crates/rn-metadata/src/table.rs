//! Intersection metadata table.
//!
//! # Read-through cache
//!
//! With [`LookupConfig::read_through_cache`] enabled, the first `get` for a
//! key copies the stored record (or the absence of one) into a cache and
//! later reads are served from there.  `put` evicts the key's cache entry,
//! so a read after a write always observes the write.
//!
//! Misses are cached too, one entry per distinct key ever looked up, and
//! nothing ages them out.  Callers that look up arbitrary keys should call
//! `clear_cache` periodically or disable the cache.

use std::hash::Hash;

use log::trace;
use rustc_hash::FxHashMap;

use rn_core::LookupConfig;

/// Counters describing how `get` calls were served.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupStats {
    pub hits:   u64,
    pub misses: u64,
}

/// Key → details map with an optional read-through cache.
///
/// `get` returns `None` as the "no data" sentinel.
#[derive(Clone, Debug)]
pub struct IntersectionTable<K, V> {
    data:   FxHashMap<K, V>,
    /// Cached lookups, including negative ones (`None`).
    cache:  FxHashMap<K, Option<V>>,
    config: LookupConfig,
    stats:  LookupStats,
}

impl<K, V> IntersectionTable<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::with_config(LookupConfig::default())
    }

    pub fn with_config(config: LookupConfig) -> Self {
        Self {
            data:  FxHashMap::default(),
            cache: FxHashMap::default(),
            config,
            stats: LookupStats::default(),
        }
    }

    /// Store or replace the details for `key`.
    pub fn put(&mut self, key: K, details: V) {
        self.cache.remove(&key);
        self.data.insert(key, details);
    }

    /// Details for `key`, or `None` if nothing was stored.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if !self.config.read_through_cache {
            self.stats.misses += 1;
            return self.data.get(key).cloned();
        }
        if let Some(cached) = self.cache.get(key) {
            self.stats.hits += 1;
            trace!("metadata cache hit");
            return cached.clone();
        }
        self.stats.misses += 1;
        let found = self.data.get(key).cloned();
        self.cache.insert(key.clone(), found.clone());
        found
    }

    /// Remove the details for `key`, returning them if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.cache.remove(key);
        self.data.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of cached lookups (positive and negative).
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> LookupStats {
        self.stats
    }
}

impl<K, V> Default for IntersectionTable<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
