//! Cache Module
//!
//! Byte-budgeted LRU eviction engine and its building blocks.

mod entry;
mod hook;
mod lru;
mod stats;
mod store;
mod value;


// Re-export public types
pub use entry::Entry;
pub use hook::EvictionHook;
pub use lru::{Handle, Iter, RecencyList};
pub use stats::CacheStats;
pub use store::LruCache;
pub use value::Value;
