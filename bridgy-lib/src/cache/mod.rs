//! Memoisation of retrieval results
//!
//! Results are keyed on the exact query string and result bound. Entries
//! expire after a fixed time-to-live and the cache holds a bounded number of
//! entries, so a long-running chat session cannot grow it without limit.

use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};

use crate::search::ScoredResult;
use crate::{Error, Result};

/// Sizing and expiry for a [`QueryCache`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of memoised queries
    pub capacity: u64,
    /// Seconds an entry stays valid after insertion
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            ttl_secs: 30 * 60,
        }
    }
}

impl CacheConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidInput("cache capacity must be positive".into()));
        }
        if self.ttl_secs == 0 {
            return Err(Error::InvalidInput("cache ttl must be positive".into()));
        }
        Ok(())
    }
}

/// Bounded, expiring map from `(query, max_results)` to ranked results.
pub struct QueryCache {
    cache: Cache<(String, usize), Vec<ScoredResult>>,
}

impl QueryCache {
    /// Create a cache with the given sizing.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();

        Self { cache }
    }

    /// Cached results for an exact query, if still valid.
    pub fn get(&self, query: &str, max_results: usize) -> Option<Vec<ScoredResult>> {
        self.cache.get(&(query.to_string(), max_results))
    }

    /// Remember the results for an exact query.
    pub fn insert(&self, query: &str, max_results: usize, results: Vec<ScoredResult>) {
        self.cache.insert((query.to_string(), max_results), results);
    }

    /// Number of entries currently in the cache.
    ///
    /// Approximate until pending maintenance has run.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::corpus::Document;

    fn result(score: f32) -> ScoredResult {
        ScoredResult {
            document: Arc::new(Document::new("1", "Doc", "Body.", "misc", &["misc"])),
            score,
            relevant_text: "Body".to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let cache = QueryCache::default();
        cache.insert("what is css", 3, vec![result(2.0)]);

        let hit = cache.get("what is css", 3).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].score, 2.0);
    }

    #[test]
    fn test_key_is_exact() {
        let cache = QueryCache::default();
        cache.insert("what is css", 3, vec![result(2.0)]);

        assert!(cache.get("What is CSS", 3).is_none());
        assert!(cache.get("what is css", 5).is_none());
    }

    #[test]
    fn test_clear() {
        let cache = QueryCache::default();
        cache.insert("a", 3, Vec::new());
        cache.insert("b", 3, Vec::new());
        cache.clear();
        // invalidation may lag in entry_count, but lookups miss immediately
        assert!(cache.get("a", 3).is_none());
        assert!(cache.get("b", 3).is_none());
    }

    #[test]
    fn test_config_validation() {
        assert!(CacheConfig::default().validate().is_ok());
        assert!(CacheConfig { capacity: 0, ..CacheConfig::default() }.validate().is_err());
        assert!(CacheConfig { ttl_secs: 0, ..CacheConfig::default() }.validate().is_err());
    }
}
