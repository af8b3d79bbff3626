//! Bounded memo in front of a resolver.
//!
//! Successful lookups are kept in an LRU map keyed by the exact query
//! string. The lock is not held across the upstream call, so two threads
//! missing on the same key may both query upstream; both store the same
//! answer.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::GeoError;
use crate::resolver::{GeoPoint, GeoResolver};

/// A [`GeoResolver`] that memoizes another one.
pub struct CachedResolver<R> {
    inner: R,
    cache: Mutex<LruCache<String, GeoPoint>>,
}

impl<R: GeoResolver> CachedResolver<R> {
    /// Wrap `inner`, keeping at most `capacity` entries (at least one).
    pub fn new(inner: R, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of memoized queries.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// The wrapped resolver.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: GeoResolver> GeoResolver for CachedResolver<R> {
    fn resolve(&self, query: &str) -> Result<GeoPoint, GeoError> {
        if let Some(hit) = self.cache.lock().get(query).copied() {
            debug!(query, "geocode cache hit");
            return Ok(hit);
        }
        debug!(query, "geocode cache miss");
        let point = self.inner.resolve(query)?;
        self.cache.lock().put(query.to_string(), point);
        Ok(point)
    }
}
