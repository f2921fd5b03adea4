//! Integration Tests for the Public Cache API
//!
//! Exercises the engine and the shared wrapper through the crate's exports.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;

use mini_cache::{ByteView, CacheStats, LruCache, SharedCache, Value};

// == Helper Functions ==

/// Test value charged by its string length
#[derive(Debug, Clone, PartialEq)]
struct Element(&'static str);

impl Value for Element {
    fn len(&self) -> usize {
        self.0.len()
    }
}

type EvictionLog = Arc<Mutex<Vec<(String, Element)>>>;

fn recording_cache(max_bytes: usize) -> (LruCache<Element>, EvictionLog) {
    let log: EvictionLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let cache = LruCache::with_eviction_hook(max_bytes, move |key: String, value: Element| {
        sink.lock().unwrap().push((key, value));
    });
    (cache, log)
}

fn evicted_keys(log: &EvictionLog) -> Vec<String> {
    log.lock().unwrap().iter().map(|(k, _)| k.clone()).collect()
}

fn budget(parts: &[&str]) -> usize {
    parts.iter().map(|p| p.len()).sum()
}

// == Engine Scenarios ==

#[test]
fn test_get() {
    let mut cache = LruCache::new(0);
    cache.add("key1", Element("value1"));

    assert_eq!(cache.get("key1"), Some(&Element("value1")));
    assert_eq!(cache.get("key2"), None);
}

#[test]
fn test_evicts_least_recently_added() {
    let mut cache = LruCache::new(budget(&["key1", "key2", "value1", "value2"]));

    cache.add("key1", Element("value1"));
    cache.add("key2", Element("value2"));
    assert_eq!(cache.used_bytes(), 20);
    assert_eq!(cache.len(), 2);

    cache.add("key3", Element("value3"));

    assert_eq!(cache.len(), 2);
    assert!(cache.get("key1").is_none());
    assert!(cache.get("key2").is_some());
    assert!(cache.get("key3").is_some());
}

#[test]
fn test_on_evicted_order_after_update() {
    let (mut cache, log) = recording_cache(budget(&["key1", "key2", "value1", "value2"]));

    cache.add("key1", Element("value1"));
    cache.add("key2", Element("value2"));
    cache.add("key3", Element("value3"));
    cache.update("key2", Element("val2-2"));
    cache.add("key4", Element("value4"));

    assert_eq!(evicted_keys(&log), vec!["key1", "key3"]);
    assert_eq!(
        log.lock().unwrap()[1],
        ("key3".to_string(), Element("value3"))
    );
}

#[test]
fn test_update_growth_shifts_next_eviction() {
    let (mut cache, log) = recording_cache(30);

    cache.add("key1", Element("value1"));
    cache.add("key2", Element("value2"));
    let before = cache.used_bytes();

    assert!(cache.update("key1", Element("value1-longer")));
    assert_eq!(cache.used_bytes(), before + 7);

    // key1 was refreshed, so key2 is now the oldest
    cache.add("key3", Element("v3"));
    assert_eq!(evicted_keys(&log), vec!["key2"]);
    assert!(cache.contains("key1"));
    assert!(cache.contains("key3"));
}

#[test]
fn test_get_protects_from_eviction() {
    let (mut cache, log) = recording_cache(budget(&["a1", "b1", "c1"]));

    cache.add("a", Element("1"));
    cache.add("b", Element("1"));
    cache.add("c", Element("1"));

    cache.get("a");
    cache.add("d", Element("1"));
    cache.add("e", Element("1"));

    assert_eq!(evicted_keys(&log), vec!["b", "c"]);
    assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["e", "d", "a"]);
}

#[test]
fn test_multiple_evictions_in_lru_order() {
    let (mut cache, log) = recording_cache(24);

    for key in ["a", "b", "c", "d"] {
        cache.add(key, Element("12345"));
    }
    assert_eq!(cache.used_bytes(), 24);

    cache.add("big", Element("0123456789012"));

    assert_eq!(evicted_keys(&log), vec!["a", "b", "c"]);
    assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["big", "d"]);
    assert_eq!(cache.used_bytes(), 22);
}

#[test]
fn test_add_does_not_overwrite() {
    let mut cache = LruCache::new(0);

    assert!(cache.add("key", Element("v1")));
    assert!(!cache.add("key", Element("v2")));

    assert_eq!(cache.get("key"), Some(&Element("v1")));
}

#[test]
fn test_update_missing_is_noop() {
    let (mut cache, log) = recording_cache(10);
    cache.add("key", Element("v"));

    assert!(!cache.update("other", Element("value")));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.used_bytes(), 4);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_remove_oldest_on_empty_cache() {
    let (mut cache, log) = recording_cache(10);

    cache.remove_oldest();
    cache.check_cache();

    assert_eq!(cache.len(), 0);
    assert_eq!(cache.used_bytes(), 0);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_struct_hook() {
    struct Counter(Arc<Mutex<usize>>);

    impl mini_cache::EvictionHook<Element> for Counter {
        fn on_evicted(&mut self, _key: String, _value: Element) {
            *self.0.lock().unwrap() += 1;
        }
    }

    let count = Arc::new(Mutex::new(0));
    let mut cache = LruCache::with_eviction_hook(5, Counter(Arc::clone(&count)));
    cache.add("a", Element("1234"));
    cache.add("b", Element("1234"));
    cache.add("c", Element("1234"));

    assert_eq!(*count.lock().unwrap(), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_panicking_hook_leaves_cache_consistent() {
    let mut cache = LruCache::with_eviction_hook(10, |key: String, _value: Element| {
        panic!("hook failed for {}", key);
    });
    cache.add("a", Element("1234"));
    cache.add("b", Element("1234"));

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        cache.add("c", Element("1234"));
    }));
    assert!(result.is_err());

    // "a" was removed before the hook ran; "c" was admitted first
    assert!(!cache.contains("a"));
    assert!(cache.contains("b"));
    assert!(cache.contains("c"));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.used_bytes(), 10);
}

// == Shared Cache ==

#[test]
fn test_shared_cache_with_byte_views() {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&evicted);
    let cache = SharedCache::with_eviction_hook(20, move |key: String, value: ByteView| {
        sink.lock().unwrap().push((key, value.as_string().into_owned()));
    });

    cache.add("key1", ByteView::from("value1"));
    cache.add("key2", ByteView::from("value2"));
    cache.add("key3", ByteView::from("value3"));

    let value = cache.get("key3").unwrap();
    let mut copy = value.byte_slice();
    copy[0] = b'X';
    assert_eq!(cache.get("key3").unwrap().as_string(), "value3");

    assert_eq!(
        *evicted.lock().unwrap(),
        vec![("key1".to_string(), "value1".to_string())]
    );
}

#[test]
fn test_shared_cache_across_threads() {
    let cache = Arc::new(SharedCache::new(4096));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("t{}-k{}", t, i);
                    cache.add(key.clone(), ByteView::from(vec![0u8; 32]));
                    cache.get(&key);
                    cache.update(&key, ByteView::from(vec![1u8; 16]));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats: CacheStats = cache.stats();
    assert!(stats.used_bytes <= 4096);
    assert_eq!(stats.used_bytes, cache.used_bytes());
    assert_eq!(stats.total_entries, cache.len());
    assert_eq!(stats.hits + stats.misses, 8 * 200);
    assert_eq!(stats.evictions as usize + cache.len(), 8 * 200);
}

#[test]
fn test_shared_stats_serialize() {
    let cache = SharedCache::new(0);
    cache.add("k", ByteView::from("v"));
    cache.get("k");
    cache.get("missing");

    let json = serde_json::to_value(cache.stats()).unwrap();
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["used_bytes"], 2);
    assert_eq!(json["max_bytes"], 0);
}
