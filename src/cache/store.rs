//! Cache Store Module
//!
//! Byte-budgeted LRU cache engine: recency list, key index, and byte
//! accounting kept in lock-step.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::cache::{Entry, EvictionHook, Handle, RecencyList, Value};

// == LRU Cache ==
/// In-memory cache evicting least recently used entries once the accounted
/// bytes exceed `max_bytes`.
///
/// An entry costs `key.len() + value.len()` bytes. A `max_bytes` of 0 means
/// unbounded.
///
/// The cache has no internal locking. Wrap it (for example in
/// [`SharedCache`](crate::SharedCache)) to share it between threads.
pub struct LruCache<V> {
    /// Byte budget, 0 = unbounded
    max_bytes: usize,
    /// Sum of entry costs over all live entries
    used_bytes: usize,
    /// Entries ordered by recency, owns every entry
    entries: RecencyList<Entry<V>>,
    /// Key to slot lookup, never owns entries
    index: HashMap<String, Handle>,
    /// Optional eviction callback
    on_evicted: Option<Box<dyn EvictionHook<V> + Send>>,
}

impl<V: Value> LruCache<V> {
    // == Constructor ==
    /// Creates a new cache with the given byte budget and no eviction hook.
    ///
    /// # Arguments
    /// * `max_bytes` - Byte budget, 0 for unbounded
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            entries: RecencyList::new(),
            index: HashMap::new(),
            on_evicted: None,
        }
    }

    /// Creates a new cache that reports every evicted entry to `hook`.
    ///
    /// # Arguments
    /// * `max_bytes` - Byte budget, 0 for unbounded
    /// * `hook` - Called once per evicted entry, in eviction order
    pub fn with_eviction_hook<H>(max_bytes: usize, hook: H) -> Self
    where
        H: EvictionHook<V> + Send + 'static,
    {
        Self {
            on_evicted: Some(Box::new(hook)),
            ..Self::new(max_bytes)
        }
    }

    // == Get ==
    /// Looks up a key and marks it most recently used.
    ///
    /// Byte accounting is unchanged and no eviction runs.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let handle = *self.index.get(key)?;
        self.entries.move_to_front(handle);
        self.entries.get(handle).map(|entry| &entry.value)
    }

    // == Add ==
    /// Inserts a new entry at the front and evicts until within budget.
    ///
    /// Returns false without touching the cache if the key is already
    /// present; use [`update`](Self::update) to replace a value.
    pub fn add(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            return false;
        }

        let entry = Entry::new(key.clone(), value);
        let cost = entry.cost();
        let handle = self.entries.push_front(entry);
        self.index.insert(key, handle);
        self.used_bytes += cost;
        trace!(cost, used_bytes = self.used_bytes, "entry added");

        self.check_cache();
        true
    }

    // == Update ==
    /// Replaces the value of an existing entry, marks it most recently used,
    /// and evicts until within budget.
    ///
    /// Returns false without touching the cache if the key is absent.
    pub fn update(&mut self, key: &str, value: V) -> bool {
        let Some(&handle) = self.index.get(key) else {
            return false;
        };

        self.entries.move_to_front(handle);
        if let Some(entry) = self.entries.get_mut(handle) {
            let new_len = value.len();
            let old = entry.replace_value(value);
            self.used_bytes = self.used_bytes - old.len() + new_len;
        }

        self.check_cache();
        true
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry, if any, and passes it to the
    /// eviction hook.
    ///
    /// The entry leaves the list, the index, and the byte total before the
    /// hook runs.
    pub fn remove_oldest(&mut self) {
        let Some(entry) = self.entries.pop_back() else {
            return;
        };

        self.index.remove(&entry.key);
        self.used_bytes -= entry.cost();
        debug!(key = %entry.key, used_bytes = self.used_bytes, "evicted entry");

        if let Some(hook) = self.on_evicted.as_mut() {
            hook.on_evicted(entry.key, entry.value);
        }
    }

    // == Check Cache ==
    /// Evicts from the back while the byte total exceeds a non-zero budget.
    pub fn check_cache(&mut self) {
        while self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            if self.entries.is_empty() {
                break;
            }
            self.remove_oldest();
        }
    }

    // == Contains ==
    /// Checks for a key without changing its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Keys ==
    /// Iterates keys from most to least recently used without changing
    /// recency.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bytes currently accounted.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Returns the byte budget, 0 meaning unbounded.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max_bytes", &self.max_bytes)
            .field("used_bytes", &self.used_bytes)
            .field("len", &self.entries.len())
            .field("has_hook", &self.on_evicted.is_some())
            .finish()
    }
}
