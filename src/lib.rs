//! Mini Cache - A byte-budgeted in-memory LRU cache
//!
//! Bounds memory by the summed length of keys and values, evicts in strict
//! least-recently-used order, and reports every evicted entry to an optional
//! hook.

pub mod byteview;
pub mod cache;
pub mod config;
pub mod error;
pub mod shared;

pub use byteview::ByteView;
pub use cache::{CacheStats, EvictionHook, LruCache, Value};
pub use config::Config;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
