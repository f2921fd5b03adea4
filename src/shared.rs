//! Shared Cache Module
//!
//! Thread-safe wrapper serializing every call into one [`LruCache`].

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, EvictionHook, LruCache, Value};

/// Engine and counters guarded together
#[derive(Debug)]
struct Inner<V> {
    lru: LruCache<V>,
    stats: CacheStats,
}

impl<V: Value> Inner<V> {
    /// Runs a mutating call and records how many entries it evicted.
    fn mutate(&mut self, inserting: bool, op: impl FnOnce(&mut LruCache<V>) -> bool) -> bool {
        let before = self.lru.len();
        let applied = op(&mut self.lru);
        let after = self.lru.len();

        let grown = before + usize::from(applied && inserting);
        let evicted = grown.saturating_sub(after);
        if evicted > 0 {
            debug!(evicted, used_bytes = self.lru.used_bytes(), "cache evicted entries");
            self.stats.record_evictions(evicted);
        }
        applied
    }
}

// == Shared Cache ==
/// An [`LruCache`] behind a single mutex, safe to share across threads.
///
/// Every call takes the lock for its whole duration, eviction hook included.
/// Keep hooks short and never call back into the same cache from one.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Mutex<Inner<V>>,
    cache_bytes: usize,
}

impl<V: Value> SharedCache<V> {
    // == Constructor ==
    /// Creates a shared cache with the given byte budget (0 = unbounded).
    pub fn new(cache_bytes: usize) -> Self {
        Self::from_lru(LruCache::new(cache_bytes))
    }

    /// Creates a shared cache that reports evicted entries to `hook`.
    pub fn with_eviction_hook<H>(cache_bytes: usize, hook: H) -> Self
    where
        H: EvictionHook<V> + Send + 'static,
    {
        Self::from_lru(LruCache::with_eviction_hook(cache_bytes, hook))
    }

    fn from_lru(lru: LruCache<V>) -> Self {
        let cache_bytes = lru.max_bytes();
        let stats = CacheStats {
            max_bytes: cache_bytes,
            ..CacheStats::default()
        };
        Self {
            inner: Mutex::new(Inner { lru, stats }),
            cache_bytes,
        }
    }

    // == Add ==
    /// Inserts a new entry. Returns false if the key is already present.
    pub fn add(&self, key: impl Into<String>, value: V) -> bool {
        let mut inner = self.inner.lock();
        inner.mutate(true, |lru| lru.add(key, value))
    }

    // == Update ==
    /// Replaces an existing entry's value. Returns false if the key is absent.
    pub fn update(&self, key: &str, value: V) -> bool {
        let mut inner = self.inner.lock();
        inner.mutate(false, |lru| lru.update(key, value))
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry, if any.
    pub fn remove_oldest(&self) {
        let mut inner = self.inner.lock();
        inner.mutate(false, |lru| {
            lru.remove_oldest();
            true
        });
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.inner.lock().lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().lru.is_empty()
    }

    /// Returns the bytes currently accounted by the engine.
    pub fn used_bytes(&self) -> usize {
        self.inner.lock().lru.used_bytes()
    }

    /// Returns the configured byte budget.
    pub fn cache_bytes(&self) -> usize {
        self.cache_bytes
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.set_usage(inner.lru.len(), inner.lru.used_bytes());
        stats
    }
}

impl<V: Value + Clone> SharedCache<V> {
    // == Get ==
    /// Looks up a key, marks it most recently used, and returns a clone of
    /// its value.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        let value = inner.lru.get(key).cloned();
        match value {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        value
    }
}
