//! Time-bounded memoization of catalog fetches.
//!
//! Entries are keyed on (trimmed query, item kind) and expire after a fixed
//! TTL. Expired entries count as misses; they are evicted when looked up and
//! swept on every insert.

use catalog::{ItemKind, RawItem};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub kind: ItemKind,
}

impl CacheKey {
    pub fn new(query: &str, kind: ItemKind) -> Self {
        Self {
            query: query.trim().to_string(),
            kind,
        }
    }
}

/// Source of "now" for expiry decisions
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Store for raw fetch results
pub trait ResultCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Vec<RawItem>>;
    fn put(&self, key: CacheKey, items: Vec<RawItem>);
}

/// In-memory cache with a fixed time-to-live.
pub struct TtlCache<C: Clock = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<CacheKey, (Vec<RawItem>, Instant)>>,
}

impl TtlCache<SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<C: Clock> TtlCache<C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, including ones not yet evicted
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave the map half-written
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, (Vec<RawItem>, Instant)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> ResultCache for TtlCache<C> {
    fn get(&self, key: &CacheKey) -> Option<Vec<RawItem>> {
        let now = self.clock.now();
        let mut entries = self.lock();

        let expired = match entries.get(key) {
            Some((_, stored_at)) => now.saturating_duration_since(*stored_at) >= self.ttl,
            None => return None,
        };
        if expired {
            debug!("Cache entry for {:?} expired", key);
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|(items, _)| items.clone())
    }

    fn put(&self, key: CacheKey, items: Vec<RawItem>) {
        let now = self.clock.now();
        let mut entries = self.lock();

        // Sweep entries that expired without being looked up again
        let before = entries.len();
        entries.retain(|_, (_, stored_at)| now.saturating_duration_since(*stored_at) < self.ttl);
        if entries.len() < before {
            debug!("Evicted {} expired cache entries", before - entries.len());
        }

        entries.insert(key, (items, now));
    }
}

/// Cache that never stores anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl ResultCache for NoopCache {
    fn get(&self, _key: &CacheKey) -> Option<Vec<RawItem>> {
        None
    }

    fn put(&self, _key: CacheKey, _items: Vec<RawItem>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::RawVideo;

    struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                now: Mutex::new(Instant::now()),
            }
        }

        fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }

    fn items(id: &str) -> Vec<RawItem> {
        vec![RawItem::Video(RawVideo {
            id: id.to_string(),
            ..Default::default()
        })]
    }

    #[test]
    fn test_hit_within_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::with_clock(Duration::from_secs(60), clock.clone());
        let key = CacheKey::new("vectors", ItemKind::Video);

        cache.put(key.clone(), items("v1"));
        clock.advance(Duration::from_secs(59));

        assert_eq!(cache.get(&key), Some(items("v1")));
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::with_clock(Duration::from_secs(60), clock.clone());
        let key = CacheKey::new("vectors", ItemKind::Video);

        cache.put(key.clone(), items("v1"));
        clock.advance(Duration::from_secs(60));

        assert_eq!(cache.get(&key), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_sweeps_expired_entries() {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::with_clock(Duration::from_secs(60), clock.clone());

        for i in 0..1000 {
            cache.put(CacheKey::new(&format!("query {}", i), ItemKind::Video), items("v1"));
            clock.advance(Duration::from_secs(120));
        }

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_keeps_live_entries() {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::with_clock(Duration::from_secs(60), clock.clone());

        cache.put(CacheKey::new("old", ItemKind::Video), items("v1"));
        clock.advance(Duration::from_secs(30));
        cache.put(CacheKey::new("newer", ItemKind::Video), items("v2"));
        clock.advance(Duration::from_secs(40));
        cache.put(CacheKey::new("newest", ItemKind::Video), items("v3"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&CacheKey::new("old", ItemKind::Video)).is_none());
        assert!(cache.get(&CacheKey::new("newer", ItemKind::Video)).is_some());
    }

    #[test]
    fn test_key_distinguishes_kind_and_trims_query() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put(CacheKey::new("  calculus ", ItemKind::Video), items("v1"));

        assert!(cache.get(&CacheKey::new("calculus", ItemKind::Video)).is_some());
        assert!(cache.get(&CacheKey::new("calculus", ItemKind::Playlist)).is_none());
    }

    #[test]
    fn test_noop_cache_never_hits() {
        let key = CacheKey::new("calculus", ItemKind::Video);
        NoopCache.put(key.clone(), items("v1"));
        assert!(NoopCache.get(&key).is_none());
    }
}
