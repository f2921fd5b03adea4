//! Cache Entry Module
//!
//! Defines the record stored in each slot of the recency list.

use crate::cache::Value;

// == Cache Entry ==
/// A single cached record.
///
/// The key is kept alongside the value so that evicting the record from the
/// back of the list can also drop its key from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The key, unique within the cache
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V: Value> Entry<V> {
    // == Constructor ==
    /// Creates a new entry.
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    // == Cost ==
    /// Returns the bytes this entry is charged: key length plus value length.
    pub fn cost(&self) -> usize {
        self.key.len() + self.value.len()
    }

    // == Replace Value ==
    /// Swaps in a new value and returns the old one.
    pub fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
