//! Bounded LRU Cache Module
//!
//! Generic fixed-capacity key-value cache with least-recently-used
//! eviction, used to memoize search results.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

// == Recency Tracker ==
/// Tracks access order for LRU eviction.
///
/// Keys live in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
struct RecencyTracker<K> {
    order: VecDeque<K>,
}

impl<K: Eq + Clone> RecencyTracker<K> {
    fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Marks a key as most recently used, inserting it if new.
    fn touch(&mut self, key: &K) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.clone());
    }

    fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    /// Returns and removes the least recently used key.
    fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}

// == LRU Cache ==
/// Fixed-capacity key-value cache with strict LRU eviction.
///
/// A `get` hit refreshes the key's recency; a miss has no side effects.
/// Inserting a new key at capacity evicts exactly the least recently
/// used key first.
#[derive(Debug)]
pub struct LruCache<K, V> {
    entries: HashMap<K, V>,
    recency: RecencyTracker<K>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; a zero-capacity cache is a
    /// programmer error, not a runtime condition.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        Self {
            entries: HashMap::new(),
            recency: RecencyTracker::new(),
            capacity,
        }
    }

    // == Get ==
    /// Looks up a key, refreshing its recency on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.recency.touch(key);
        }
        self.entries.get(key)
    }

    // == Insert ==
    /// Stores a key-value pair.
    ///
    /// An existing key is replaced in place and refreshed. A new key at
    /// capacity evicts the least recently used entry before inserting.
    pub fn insert(&mut self, key: K, value: V) {
        let is_replacement = self.entries.contains_key(&key);

        if !is_replacement && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.recency.evict_oldest() {
                self.entries.remove(&evicted);
            }
        }

        self.recency.touch(&key);
        self.entries.insert(key, value);
    }

    // == Clear ==
    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    // == Remove ==
    #[allow(dead_code)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.recency.remove(key);
        self.entries.remove(key)
    }

    // == Length ==
    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    #[allow(dead_code)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Contains ==
    /// Checks for a key without refreshing its recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_new() {
        let cache: LruCache<String, u32> = LruCache::new(4);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_cache_zero_capacity_panics() {
        let _: LruCache<String, u32> = LruCache::new(0);
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = LruCache::new(4);

        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(&1));
        assert_eq!(cache.get(&"missing".to_string()), None);
    }

    #[test]
    fn test_cache_replace_existing_key() {
        let mut cache = LruCache::new(2);

        cache.insert("a".to_string(), 1);
        cache.insert("a".to_string(), 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(&2));
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let mut cache = LruCache::new(3);

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3);

        // Capacity reached: inserting a fourth key evicts "a" (oldest)
        cache.insert("d".to_string(), 4);

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(&"a".to_string()));
        assert!(cache.contains(&"b".to_string()));
        assert!(cache.contains(&"c".to_string()));
        assert!(cache.contains(&"d".to_string()));
    }

    #[test]
    fn test_cache_get_refreshes_recency() {
        let mut cache = LruCache::new(3);

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3);

        // Touch "a" so it survives the next eviction
        cache.get(&"a".to_string());
        cache.insert("d".to_string(), 4);

        assert!(cache.contains(&"a".to_string()));
        assert!(!cache.contains(&"b".to_string()));
    }

    #[test]
    fn test_cache_miss_has_no_side_effects() {
        let mut cache = LruCache::new(2);

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.get(&"missing".to_string());

        // Eviction order is unchanged: "a" is still the oldest
        cache.insert("c".to_string(), 3);
        assert!(!cache.contains(&"a".to_string()));
        assert!(cache.contains(&"b".to_string()));
    }

    #[test]
    fn test_cache_replacement_refreshes_recency() {
        let mut cache = LruCache::new(2);

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        // Rewriting "a" makes "b" the eviction candidate
        cache.insert("a".to_string(), 10);
        cache.insert("c".to_string(), 3);

        assert!(cache.contains(&"a".to_string()));
        assert!(!cache.contains(&"b".to_string()));
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = LruCache::new(2);

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.clear();

        assert!(cache.is_empty());
        // A cleared cache accepts fresh inserts from a clean slate
        cache.insert("c".to_string(), 3);
        cache.insert("d".to_string(), 4);
        cache.insert("e".to_string(), 5);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&"c".to_string()));
    }
}
