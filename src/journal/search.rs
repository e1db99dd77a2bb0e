//! Search Engine Module
//!
//! Tokenized, case-insensitive multi-term AND search over journal
//! entries, memoized through the bounded LRU cache.

use std::sync::Arc;

use crate::journal::cache::LruCache;
use crate::journal::entry::Entry;

// == Search Engine ==
/// Filters entries by query, caching results per normalized query string.
///
/// The engine has no view of store mutations; whoever owns both must call
/// [`SearchEngine::clear_cache`] whenever the underlying entry list
/// changes, or stale results will be served.
#[derive(Debug)]
pub struct SearchEngine {
    /// Normalized query -> matching entries at the time of caching
    cache: LruCache<String, Arc<[Entry]>>,
}

impl SearchEngine {
    // == Constructor ==
    /// Creates a search engine with a result cache of the given capacity.
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: LruCache::new(cache_capacity),
        }
    }

    // == Search ==
    /// Returns the entries matching `query`, most recent first.
    ///
    /// An empty or whitespace-only query clears the cache and passes the
    /// list through unfiltered; caching the identity result would pin a
    /// full-list snapshot under a key that never usefully hits.
    ///
    /// Otherwise the query is trimmed and lower-cased, used whole as the
    /// cache key, and split on whitespace into terms. An entry matches
    /// when every term is a substring of its lower-cased
    /// `topic + " " + content + " " + link` text. The returned snapshot
    /// is shared and immutable; cache hits hand back the same allocation.
    pub fn search(&mut self, query: &str, entries: &[Entry]) -> Arc<[Entry]> {
        let normalized = query.trim().to_lowercase();

        if normalized.is_empty() {
            self.cache.clear();
            return entries.into();
        }

        if let Some(cached) = self.cache.get(&normalized) {
            return Arc::clone(cached);
        }

        let terms: Vec<&str> = normalized.split_whitespace().collect();
        let results: Arc<[Entry]> = entries
            .iter()
            .filter(|entry| {
                let haystack = searchable_text(entry);
                terms.iter().all(|term| haystack.contains(term))
            })
            .cloned()
            .collect();

        self.cache.insert(normalized, Arc::clone(&results));
        results
    }

    // == Clear Cache ==
    /// Drops every memoized result. Must be called on any store mutation.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    // == Cache Length ==
    /// Number of memoized queries, for tests and observability.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// Lower-cased topic/content/link concatenation an entry is matched on.
fn searchable_text(entry: &Entry) -> String {
    format!(
        "{} {} {}",
        entry.topic,
        entry.content,
        entry.link.as_deref().unwrap_or("")
    )
    .to_lowercase()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, topic: &str, content: &str, link: Option<&str>) -> Entry {
        Entry {
            id,
            timestamp: id,
            topic: topic.to_string(),
            content: content.to_string(),
            link: link.map(str::to_string),
            image_url: None,
        }
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            entry(3, "Rust ownership", "Borrow checker notes from today", None),
            entry(
                2,
                "Gardening",
                "Planted tomatoes and basil",
                Some("https://example.com/tomato-guide"),
            ),
            entry(1, "Rust async", "Tokio timers and cancellation", None),
        ]
    }

    #[test]
    fn test_empty_query_is_identity_and_clears_cache() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        engine.search("rust", &entries);
        assert_eq!(engine.cache_len(), 1);

        let results = engine.search("   ", &entries);
        assert_eq!(results.as_ref(), entries.as_slice());
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        let results = engine.search("RUST", &entries);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 3);
        assert_eq!(results[1].id, 1);
    }

    #[test]
    fn test_search_requires_every_term() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        // "rust" alone matches two entries, "rust tokio" only one
        assert_eq!(engine.search("rust", &entries).len(), 2);
        let results = engine.search("rust tokio", &entries);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_search_matches_link_text() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        let results = engine.search("tomato-guide", &entries);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);
    }

    #[test]
    fn test_repeat_query_is_served_from_cache() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        let first = engine.search("rust", &entries);
        assert_eq!(engine.cache_len(), 1);

        let second = engine.search("rust", &entries);
        assert_eq!(engine.cache_len(), 1);
        assert_eq!(first, second);
        // A hit returns the same shared allocation, not a refiltered copy
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_query_normalization_shares_cache_slot() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        engine.search("  Rust  ", &entries);
        let hit = engine.search("rust", &entries);

        assert_eq!(engine.cache_len(), 1);
        assert_eq!(hit.len(), 2);
    }

    #[test]
    fn test_clear_cache_forces_refilter() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        let stale = engine.search("rust", &entries);
        engine.clear_cache();

        let fresh = engine.search("rust", &entries);
        assert!(!Arc::ptr_eq(&stale, &fresh));
        assert_eq!(stale, fresh);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let mut engine = SearchEngine::new(8);
        let entries = sample_entries();

        assert!(engine.search("submarine", &entries).is_empty());
    }
}
