use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

struct CachedResponse {
    body: String,
    fetched_at: Instant,
}

/// Thread-safe response cache keyed by endpoint, with a time-to-live
///
/// Entries older than the TTL count as misses and are evicted on lookup.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<Mutex<HashMap<String, CachedResponse>>>,
    ttl: Duration,
    hits: Arc<Mutex<u64>>,
    misses: Arc<Mutex<u64>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            hits: Arc::new(Mutex::new(0)),
            misses: Arc::new(Mutex::new(0)),
        }
    }

    /// Get a fresh response body for `endpoint`
    pub fn get(&self, endpoint: &str) -> Option<String> {
        let mut entries = lock(&self.entries);
        let expired = entries
            .get(endpoint)
            .is_some_and(|entry| entry.fetched_at.elapsed() >= self.ttl);
        if expired {
            entries.remove(endpoint);
            debug!("Cache entry expired for endpoint: {}", endpoint);
        }
        let fresh = entries.get(endpoint).map(|entry| entry.body.clone());
        drop(entries);

        match fresh {
            Some(body) => {
                *lock(&self.hits) += 1;
                debug!("Cache hit for endpoint: {}", endpoint);
                Some(body)
            }
            None => {
                *lock(&self.misses) += 1;
                debug!("Cache miss for endpoint: {}", endpoint);
                None
            }
        }
    }

    /// Store a response body for `endpoint`
    pub fn put(&self, endpoint: &str, body: String) {
        if self.ttl.is_zero() {
            return;
        }
        lock(&self.entries).insert(
            endpoint.to_string(),
            CachedResponse {
                body,
                fetched_at: Instant::now(),
            },
        );
        debug!("Cached response for endpoint: {}", endpoint);
    }

    pub fn get_stats(&self) -> CacheStats {
        CacheStats {
            hits: *lock(&self.hits),
            misses: *lock(&self.misses),
        }
    }

    pub fn size(&self) -> usize {
        lock(&self.entries).len()
    }
}

/// Cache performance statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Calculate the cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            (self.hits as f64 / (self.hits + self.misses) as f64) * 100.0
        }
    }

    /// Get total cache requests
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }
}
