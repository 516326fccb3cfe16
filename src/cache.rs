//! In-memory response cache with a time-to-live.
//!
//! Freshness is checked on read: an entry older than the TTL is treated as a
//! miss but stays in the map until it is overwritten or evicted to make room
//! for a new key. The cache is cheap to clone; clones share storage.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// A cached value and the epoch-millisecond time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub data: V,
    pub timestamp: i64,
}

/// Outcome of a cache lookup, reported to clients via `X-Cache`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

/// Key/value cache with read-time TTL checks and a bound on distinct keys.
#[derive(Debug)]
pub struct ResponseCache<V> {
    entries: Arc<Mutex<HashMap<String, CacheEntry<V>>>>,
    ttl: Duration,
    max_entries: usize,
}

impl<V> Clone for ResponseCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
            max_entries: self.max_entries,
        }
    }
}

impl<V: Clone> ResponseCache<V> {
    /// Creates an empty cache. A `max_entries` of zero is treated as one.
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the value for `key` if it was stored less than one TTL ago.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, now_millis())
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.put_at(key, value, now_millis())
    }

    /// [`ResponseCache::get`] evaluated at `now` (epoch milliseconds).
    pub fn get_at(&self, key: &str, now: i64) -> Option<V> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.data.clone())
    }

    /// [`ResponseCache::put`] stamped with `now` (epoch milliseconds).
    pub fn put_at(&self, key: impl Into<String>, value: V, now: i64) {
        let key = key.into();
        let mut entries = self.entries.lock();

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            entries.retain(|_, entry| self.is_fresh(entry, now));

            if entries.len() >= self.max_entries {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.timestamp)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    tracing::debug!(key = %oldest, "Evicting oldest cache entry");
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key,
            CacheEntry {
                data: value,
                timestamp: now,
            },
        );
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_fresh(&self, entry: &CacheEntry<V>, now: i64) -> bool {
        let ttl = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        now.saturating_sub(entry.timestamp) < ttl
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);
    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn test_put_then_get_returns_value() {
        let cache = ResponseCache::new(HOUR, 16);
        cache.put("pokemon-25", "pikachu".to_string());
        assert_eq!(cache.get("pokemon-25").as_deref(), Some("pikachu"));
    }

    #[test]
    fn test_get_unknown_key_misses() {
        let cache: ResponseCache<u32> = ResponseCache::new(HOUR, 16);
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_entry_expires_after_ttl_but_stays_stored() {
        let cache = ResponseCache::new(HOUR, 16);
        cache.put_at("k", 1u32, 1_000);

        assert_eq!(cache.get_at("k", 1_000 + HOUR_MS - 1), Some(1));
        assert_eq!(cache.get_at("k", 1_000 + HOUR_MS), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_overwrites_stale_entry() {
        let cache = ResponseCache::new(HOUR, 16);
        cache.put_at("k", 1u32, 0);
        cache.put_at("k", 2u32, 2 * HOUR_MS);

        assert_eq!(cache.get_at("k", 2 * HOUR_MS + 10), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_full_cache_purges_stale_entries_first() {
        let cache = ResponseCache::new(HOUR, 2);
        cache.put_at("old", 1u32, 0);
        cache.put_at("fresh", 2u32, HOUR_MS);
        cache.put_at("new", 3u32, HOUR_MS + 1);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at("fresh", HOUR_MS + 1), Some(2));
        assert_eq!(cache.get_at("new", HOUR_MS + 1), Some(3));
    }

    #[test]
    fn test_full_cache_evicts_oldest_fresh_entry() {
        let cache = ResponseCache::new(HOUR, 2);
        cache.put_at("a", 1u32, 10);
        cache.put_at("b", 2u32, 20);
        cache.put_at("c", 3u32, 30);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at("a", 30), None);
        assert_eq!(cache.get_at("b", 30), Some(2));
        assert_eq!(cache.get_at("c", 30), Some(3));
    }

    #[test]
    fn test_overwriting_existing_key_does_not_evict() {
        let cache = ResponseCache::new(HOUR, 2);
        cache.put_at("a", 1u32, 10);
        cache.put_at("b", 2u32, 20);
        cache.put_at("a", 10u32, 30);

        assert_eq!(cache.get_at("a", 30), Some(10));
        assert_eq!(cache.get_at("b", 30), Some(2));
    }

    #[test]
    fn test_clones_share_storage() {
        let cache = ResponseCache::new(HOUR, 4);
        let other = cache.clone();
        other.put("k", 7u32);
        assert_eq!(cache.get("k"), Some(7));
    }

    #[test]
    fn test_cache_status_labels() {
        assert_eq!(CacheStatus::Hit.as_str(), "HIT");
        assert_eq!(CacheStatus::Miss.as_str(), "MISS");
    }
}
