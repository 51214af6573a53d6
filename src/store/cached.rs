//! Read-through cache decorator for a book repository.

use async_trait::async_trait;
use tracing::info;

use crate::cache::BookListCache;
use crate::error::Result;
use crate::models::{Book, NewBook};
use crate::store::BookRepository;

/// Serves `list_all` from a [`BookListCache`] and invalidates it after every
/// successful mutation of the inner repository.
///
/// Single-book reads pass straight through and never touch the cache.
#[derive(Debug, Clone)]
pub struct CachedBookRepository<R> {
    inner: R,
    cache: BookListCache,
}

impl<R: BookRepository> CachedBookRepository<R> {
    pub fn new(inner: R, cache: BookListCache) -> Self {
        Self { inner, cache }
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &BookListCache {
        &self.cache
    }

    /// The wrapped repository, for writes that must bypass invalidation.
    #[cfg(test)]
    pub(crate) fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: BookRepository> BookRepository for CachedBookRepository<R> {
    async fn list_all(&self) -> Result<Vec<Book>> {
        if let Some(books) = self.cache.get().await {
            info!("Returning books from cache");
            return Ok(books);
        }

        // A mutation committing while the store is read bumps the generation,
        // and the older snapshot is then not cached
        let generation = self.cache.generation().await;
        let books = self.inner.list_all().await?;
        self.cache.put_if_generation(generation, books.clone()).await;

        info!("Returning books from the database");
        Ok(books)
    }

    async fn get(&self, id: i64) -> Result<Book> {
        self.inner.get(id).await
    }

    async fn create(&self, book: NewBook) -> Result<Book> {
        let created = self.inner.create(book).await?;
        self.cache.invalidate().await;
        Ok(created)
    }

    async fn update(&self, id: i64, book: NewBook) -> Result<Book> {
        let updated = self.inner.update(id, book).await?;
        self.cache.invalidate().await;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.inner.delete(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}
