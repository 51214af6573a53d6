//! Record Store Module
//!
//! The `BookRepository` seam and its implementations:
//! - `SqliteBookStore` - the source of truth, a single SQLite table
//! - `CachedBookRepository` - read-through list cache in front of any repository

mod cached;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Book, NewBook};

pub use cached::CachedBookRepository;
pub use sqlite::SqliteBookStore;

/// CRUD over book records.
///
/// Each call is a single-row operation and is atomic on its own.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Book>>;

    /// The record with `id`, or `ApiError::NotFound`.
    async fn get(&self, id: i64) -> Result<Book>;

    /// Persists a new record under a freshly assigned identifier.
    async fn create(&self, book: NewBook) -> Result<Book>;

    /// Overwrites every mutable field of an existing record.
    async fn update(&self, id: i64, book: NewBook) -> Result<Book>;

    /// Removes a record permanently.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Repository handle shared by all handlers.
pub type SharedBookRepository = Arc<dyn BookRepository>;
