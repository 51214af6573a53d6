//! Book List Cache
//!
//! Single-slot view over the TTL cache holding the full book list.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, TtlCache};
use crate::config::Config;
use crate::models::Book;

/// Key of the only slot the service populates.
pub const BOOKS_KEY: &str = "books";

// == Book List Cache ==
/// Owned, cloneable handle to the cached book list.
///
/// Every operation runs under one lock, so a reader never observes a
/// half-written slot.
#[derive(Debug, Clone)]
pub struct BookListCache {
    inner: Arc<RwLock<ListSlot>>,
}

#[derive(Debug)]
struct ListSlot {
    cache: TtlCache<Vec<Book>>,
    /// Bumped by every invalidation, whether or not the slot was occupied
    generation: u64,
}

impl BookListCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ListSlot {
                cache: TtlCache::new(max_entries, ttl),
                generation: 0,
            })),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_max_entries, Duration::from_secs(config.cache_ttl))
    }

    // == Get ==
    /// The cached list, if present and not expired.
    pub async fn get(&self) -> Option<Vec<Book>> {
        // Write lock: lookups update LRU order and may drop an expired entry
        let mut slot = self.inner.write().await;
        slot.cache.get(BOOKS_KEY)
    }

    // == Put ==
    /// Overwrites the slot and restarts its expiry clock.
    pub async fn put(&self, books: Vec<Book>) {
        let mut slot = self.inner.write().await;
        slot.cache.insert(BOOKS_KEY, books);
    }

    /// Current invalidation generation.
    ///
    /// Read it before loading a list from the store and hand it back to
    /// [`put_if_generation`](Self::put_if_generation).
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Stores `books` only if no invalidation happened since `generation`
    /// was read. Returns whether the list was stored.
    pub async fn put_if_generation(&self, generation: u64, books: Vec<Book>) -> bool {
        let mut slot = self.inner.write().await;
        if slot.generation != generation {
            debug!("Discarding book list loaded before an invalidation");
            return false;
        }
        slot.cache.insert(BOOKS_KEY, books);
        true
    }

    // == Invalidate ==
    /// Clears the slot. Clearing an empty slot is a no-op apart from
    /// advancing the generation.
    pub async fn invalidate(&self) {
        let mut slot = self.inner.write().await;
        slot.generation += 1;
        if slot.cache.invalidate(BOOKS_KEY) {
            debug!("Book list cache invalidated");
        }
    }

    /// Purges expired entries, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut slot = self.inner.write().await;
        slot.cache.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.cache.stats()
    }

    #[cfg(test)]
    pub(crate) async fn ttl_remaining(&self) -> Option<Duration> {
        self.inner.read().await.cache.ttl_remaining(BOOKS_KEY)
    }
}
