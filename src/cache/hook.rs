//! Eviction Hook Module
//!
//! Callback notified each time the cache evicts an entry.

// == Eviction Hook ==
/// Receives every entry the cache evicts, in eviction order.
///
/// The hook runs synchronously inside the call that caused the eviction and
/// takes ownership of the evicted key and value. By the time it runs the
/// entry is already gone from the cache, so a panic in the hook leaves the
/// cache consistent.
///
/// Do not call back into the same cache from inside the hook. When the cache
/// sits behind a lock (see [`SharedCache`](crate::SharedCache)) the hook runs
/// with that lock held and should return quickly.
pub trait EvictionHook<V> {
    /// Called once per evicted entry.
    fn on_evicted(&mut self, key: String, value: V);
}

impl<V, F> EvictionHook<V> for F
where
    F: FnMut(String, V),
{
    fn on_evicted(&mut self, key: String, value: V) {
        self(key, value)
    }
}
