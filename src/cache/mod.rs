//! Cache Module
//!
//! In-memory TTL caching for the book list, with LRU eviction when full.

mod entry;
mod list;
mod lru;
mod stats;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use list::{BookListCache, BOOKS_KEY};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use ttl::TtlCache;
